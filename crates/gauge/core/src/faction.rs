//! Faction partitioning.
//!
//! Combatants are split into two buckets by token disposition: hostile
//! tokens on one side, everything else (friendly, neutral, secret, or no
//! token at all) on the other. Relative order is preserved in both buckets
//! and no combatant is dropped.

use crate::error::DispositionError;
use crate::state::Combatant;

/// Token disposition as reported by the host.
///
/// The host encodes dispositions as small integers; [`TryFrom<i8>`] accepts
/// those codes directly. Deserialization takes either the code or the name.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "snake_case", try_from = "DispositionRepr")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Disposition {
    Secret,
    Hostile,
    Neutral,
    Friendly,
}

impl Disposition {
    pub const fn code(self) -> i8 {
        match self {
            Self::Secret => -2,
            Self::Hostile => -1,
            Self::Neutral => 0,
            Self::Friendly => 1,
        }
    }

    #[inline]
    pub const fn is_hostile(self) -> bool {
        matches!(self, Self::Hostile)
    }
}

impl TryFrom<i8> for Disposition {
    type Error = DispositionError;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            -2 => Ok(Self::Secret),
            -1 => Ok(Self::Hostile),
            0 => Ok(Self::Neutral),
            1 => Ok(Self::Friendly),
            other => Err(DispositionError::UnknownCode(other.into())),
        }
    }
}

/// Wire form of a disposition: the host's numeric code, its name, or
/// whatever else a host module put in the field.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum DispositionRepr {
    Code(i64),
    Name(String),
    Unknown(serde::de::IgnoredAny),
}

#[cfg(feature = "serde")]
impl TryFrom<DispositionRepr> for Disposition {
    type Error = DispositionError;

    fn try_from(repr: DispositionRepr) -> Result<Self, Self::Error> {
        match repr {
            DispositionRepr::Code(code) => i8::try_from(code)
                .map_err(|_| DispositionError::UnknownCode(code))
                .and_then(Self::try_from),
            DispositionRepr::Name(name) => name
                .parse()
                .map_err(|_| DispositionError::UnknownName(name)),
            DispositionRepr::Unknown(_) => Err(DispositionError::Malformed),
        }
    }
}

/// Reads a combatant's disposition. Values outside the known set read as
/// `None`, so the combatant lands on the friendly side.
#[cfg(feature = "serde")]
pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<Disposition>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let repr = Option::<DispositionRepr>::deserialize(deserializer)?;
    Ok(repr.and_then(|repr| Disposition::try_from(repr).ok()))
}

/// Which half of the gauge a combatant counts towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Friendly,
    Hostile,
}

impl Side {
    /// Hostile iff the disposition is exactly [`Disposition::Hostile`].
    pub fn of(disposition: Option<Disposition>) -> Self {
        match disposition {
            Some(d) if d.is_hostile() => Self::Hostile,
            _ => Self::Friendly,
        }
    }
}

/// Borrowed view of combatants split by side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Factions<'a> {
    pub friendly: Vec<&'a Combatant>,
    pub hostile: Vec<&'a Combatant>,
}

impl<'a> Factions<'a> {
    pub fn side(&self, side: Side) -> &[&'a Combatant] {
        match side {
            Side::Friendly => &self.friendly,
            Side::Hostile => &self.hostile,
        }
    }

    pub fn len(&self) -> usize {
        self.friendly.len() + self.hostile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friendly.is_empty() && self.hostile.is_empty()
    }
}

/// Splits combatants into friendly and hostile buckets, preserving order.
pub fn partition(combatants: &[Combatant]) -> Factions<'_> {
    let mut factions = Factions::default();
    for combatant in combatants {
        match combatant.side() {
            Side::Friendly => factions.friendly.push(combatant),
            Side::Hostile => factions.hostile.push(combatant),
        }
    }
    factions
}
