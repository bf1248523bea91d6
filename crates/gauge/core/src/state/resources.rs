//! Class-granted resource pools.

use super::common::ResourceMeter;
use crate::classes::ResourceKind;

/// Limited-use pools an actor sheet may carry.
///
/// Each pool is a typed field; [`ClassResources::get`] resolves a
/// [`ResourceKind`] to its field directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassResources {
    pub rage: Option<ResourceMeter>,
    pub ki: Option<ResourceMeter>,
    pub second_wind: Option<ResourceMeter>,
    pub channel_divinity: Option<ResourceMeter>,
    pub wild_shape: Option<ResourceMeter>,
    pub lay_on_hands: Option<ResourceMeter>,
}

impl ClassResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: ResourceKind) -> Option<ResourceMeter> {
        match kind {
            ResourceKind::Rage => self.rage,
            ResourceKind::Ki => self.ki,
            ResourceKind::SecondWind => self.second_wind,
            ResourceKind::ChannelDivinity => self.channel_divinity,
            ResourceKind::WildShape => self.wild_shape,
            ResourceKind::LayOnHands => self.lay_on_hands,
        }
    }

    /// Sets one pool (builder pattern).
    #[must_use]
    pub fn with(mut self, kind: ResourceKind, meter: ResourceMeter) -> Self {
        let slot = match kind {
            ResourceKind::Rage => &mut self.rage,
            ResourceKind::Ki => &mut self.ki,
            ResourceKind::SecondWind => &mut self.second_wind,
            ResourceKind::ChannelDivinity => &mut self.channel_divinity,
            ResourceKind::WildShape => &mut self.wild_shape,
            ResourceKind::LayOnHands => &mut self.lay_on_hands,
        };
        *slot = Some(meter);
        self
    }
}
