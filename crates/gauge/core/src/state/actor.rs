//! Actor (character / creature) sheets.

use super::common::{ActorId, ResourceMeter};
use super::resources::ClassResources;
use super::spells::SpellSlots;
use crate::classes::ClassKind;

/// Category of an owned item. Only [`ItemKind::Class`] matters to the gauge.
///
/// Hosts define more item types than are listed here; any unlisted type reads
/// as [`ItemKind::Other`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemKind {
    Class,
    Subclass,
    Feat,
    Spell,
    Weapon,
    Equipment,
    Consumable,
    Loot,
    #[default]
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

/// An item owned by an actor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSheet {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: ItemKind,
}

impl ItemSheet {
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, ItemKind::Class)
    }
}

/// Character or creature sheet as reported by the host.
///
/// `spells` is `None` for actors without a spellcasting block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorSheet {
    pub id: ActorId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hp: ResourceMeter,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spells: Option<SpellSlots>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<ItemSheet>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub resources: ClassResources,
}

impl ActorSheet {
    pub fn new(id: ActorId, name: impl Into<String>, hp: ResourceMeter) -> Self {
        Self {
            id,
            name: name.into(),
            hp,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_spells(mut self, spells: SpellSlots) -> Self {
        self.spells = Some(spells);
        self
    }

    #[must_use]
    pub fn with_item(mut self, item: ItemSheet) -> Self {
        self.items.push(item);
        self
    }

    #[must_use]
    pub fn with_resources(mut self, resources: ClassResources) -> Self {
        self.resources = resources;
        self
    }

    /// Class of the first class item on the sheet.
    ///
    /// Only that item is looked up: a multiclass sheet whose first class is
    /// outside the table has no class at all.
    pub fn class(&self) -> Option<ClassKind> {
        self.items
            .iter()
            .find(|item| item.kind == ItemKind::Class)
            .and_then(|item| ClassKind::from_name(&item.name))
    }

    /// The class-granted pool counted by the gauge, if any.
    ///
    /// `None` when the actor has no recognised class or the sheet does not
    /// carry the pool its class grants.
    pub fn class_resource(&self) -> Option<ResourceMeter> {
        self.class()
            .and_then(|class| self.resources.get(class.resource()))
    }
}
