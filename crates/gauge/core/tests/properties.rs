use gauge_core::{
    ActorId, ActorSheet, ClassKind, ClassResources, Combatant, CombatantId, Disposition,
    ForceTotals, ItemSheet, PowerWeights, ResourceMeter, SpellSlots, Tally, aggregate, partition,
};
use proptest::prelude::*;

fn disposition() -> impl Strategy<Value = Option<Disposition>> {
    prop_oneof![
        Just(None),
        Just(Some(Disposition::Secret)),
        Just(Some(Disposition::Hostile)),
        Just(Some(Disposition::Neutral)),
        Just(Some(Disposition::Friendly)),
    ]
}

fn meter() -> impl Strategy<Value = ResourceMeter> {
    (0u32..500, 0u32..500).prop_map(|(current, maximum)| ResourceMeter::new(current, maximum))
}

fn spell_slots() -> impl Strategy<Value = SpellSlots> {
    prop::collection::vec((1u8..=9, meter()), 0..9).prop_map(|levels| {
        levels
            .into_iter()
            .fold(SpellSlots::new(), |slots, (level, meter)| slots.with_level(level, meter))
    })
}

fn class() -> impl Strategy<Value = ClassKind> {
    prop_oneof![
        Just(ClassKind::Barbarian),
        Just(ClassKind::Monk),
        Just(ClassKind::Fighter),
        Just(ClassKind::Cleric),
        Just(ClassKind::Druid),
        Just(ClassKind::Paladin),
    ]
}

/// Sheets with optional spellcasting and an optional class whose pool is
/// present on the sheet.
fn actor(id: u32) -> impl Strategy<Value = ActorSheet> {
    (
        meter(),
        prop::option::of(spell_slots()),
        prop::option::of((class(), meter())),
    )
        .prop_map(move |(hp, spells, class)| {
            let mut actor = ActorSheet::new(ActorId(id), "actor", hp);
            actor.spells = spells;
            if let Some((class, pool)) = class {
                actor = actor
                    .with_item(ItemSheet::class(class.to_string()))
                    .with_resources(ClassResources::new().with(class.resource(), pool));
            }
            actor
        })
}

fn combatants() -> impl Strategy<Value = Vec<Combatant>> {
    prop::collection::vec(disposition(), 0..24)
        .prop_flat_map(|dispositions| {
            let entries: Vec<_> = dispositions
                .into_iter()
                .enumerate()
                .map(|(index, disposition)| {
                    let id = index as u32;
                    (Just(disposition), prop::option::of(actor(id)))
                })
                .collect();
            entries
        })
        .prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(index, (disposition, actor))| {
                    let id = index as u32;
                    let mut combatant = Combatant::new(CombatantId(id), format!("c{id}"));
                    combatant.disposition = disposition;
                    combatant.actor = actor;
                    combatant
                })
                .collect()
        })
}

fn tally(current: u64, maximum: u64) -> Tally {
    Tally {
        current: current.min(maximum),
        maximum,
    }
}

proptest! {
    #[test]
    fn partition_preserves_order_and_membership(combatants in combatants()) {
        let factions = partition(&combatants);

        prop_assert_eq!(factions.len(), combatants.len());

        // Merging the two buckets back by tracker position reconstructs the
        // input exactly.
        let mut friendly = factions.friendly.iter().peekable();
        let mut hostile = factions.hostile.iter().peekable();
        for original in &combatants {
            let from_friendly = friendly
                .peek()
                .is_some_and(|c| std::ptr::eq(**c, original));
            let next = if from_friendly { friendly.next() } else { hostile.next() };
            let next = next.copied();
            prop_assert!(next.is_some_and(|c| std::ptr::eq(c, original)));
        }

        prop_assert!(factions.hostile.iter().all(|c| c.disposition == Some(Disposition::Hostile)));
        prop_assert!(factions.friendly.iter().all(|c| c.disposition != Some(Disposition::Hostile)));
    }

    #[test]
    fn percentages_stay_in_range(combatants in combatants()) {
        let metrics = aggregate(&combatants);

        let actors = || combatants.iter().filter_map(|c| c.actor.as_ref());
        if actors().all(|a| a.spells.is_none()) {
            prop_assert_eq!(metrics.spell_slots, 0);
        }
        if actors().all(|a| a.class_resource().is_none()) {
            prop_assert_eq!(metrics.resources, 0);
        }

        prop_assert!(metrics.total <= 100);
        prop_assert!(metrics.hp <= 100);
        prop_assert!(metrics.spell_slots <= 100);
        prop_assert!(metrics.resources <= 100);
    }

    #[test]
    fn composite_is_monotonic_in_each_family(
        hp in (0u64..100, 1u64..100),
        spells in (0u64..100, 0u64..100),
        resources in (0u64..100, 0u64..100),
        bump in 1u64..50,
    ) {
        let weights = PowerWeights::STANDARD;
        let base = ForceTotals {
            hp: tally(hp.0, hp.1),
            spell_slots: tally(spells.0, spells.1),
            resources: tally(resources.0, resources.1),
        };
        let score = weights.composite(&base);

        let more_hp = ForceTotals { hp: tally(base.hp.current + bump, base.hp.maximum), ..base };
        let more_spells = ForceTotals {
            spell_slots: tally(base.spell_slots.current + bump, base.spell_slots.maximum),
            ..base
        };
        let more_resources = ForceTotals {
            resources: tally(base.resources.current + bump, base.resources.maximum),
            ..base
        };

        prop_assert!(weights.composite(&more_hp) >= score);
        prop_assert!(weights.composite(&more_spells) >= score);
        prop_assert!(weights.composite(&more_resources) >= score);
    }
}
