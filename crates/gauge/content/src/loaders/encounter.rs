//! Combat snapshot loader.
//!
//! A snapshot is a serialized [`CombatState`]: the started flag, the round
//! and the tracker's combatants in order, each with an optional disposition
//! (name or host code) and an optional actor sheet.

use std::path::Path;

use gauge_core::CombatState;

use crate::loaders::{DataFormat, LoadResult, load_document};

/// Loader for combat snapshots.
pub struct EncounterLoader;

impl EncounterLoader {
    /// Load a combat snapshot from a RON, TOML or JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the snapshot; the extension selects the format
    pub fn load(path: &Path) -> LoadResult<CombatState> {
        load_document(path)
            .map_err(|e| anyhow::anyhow!("Failed to load combat snapshot: {}", e))
    }

    /// Parse a snapshot already held in memory.
    pub fn parse(format: DataFormat, content: &str) -> LoadResult<CombatState> {
        format
            .parse(content)
            .map_err(|e| anyhow::anyhow!("Failed to load combat snapshot: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge_core::{ActorId, ClassKind, Disposition, ItemKind, ResourceMeter, Side, evaluate};

    const SKIRMISH_RON: &str = r#"(
        started: true,
        round: 2,
        combatants: [
            (
                id: 1,
                name: "Brother Ash",
                disposition: Some("friendly"),
                actor: Some((
                    id: 10,
                    name: "Brother Ash",
                    hp: (current: 18, maximum: 24),
                    spells: Some((
                        spell1: Some((current: 2, maximum: 4)),
                        spell2: Some((current: 1, maximum: 2)),
                    )),
                    items: [(name: "Cleric", kind: class)],
                    resources: (channel_divinity: Some((current: 1, maximum: 1))),
                )),
            ),
            (
                id: 2,
                name: "Cultist",
                disposition: Some(-1),
                actor: Some((id: 20, hp: (current: 9, maximum: 9))),
            ),
            (id: 3, name: "Falling rocks"),
        ],
    )"#;

    #[test]
    fn parses_ron_snapshot() {
        let combat = EncounterLoader::parse(DataFormat::Ron, SKIRMISH_RON).unwrap();

        assert!(combat.started);
        assert_eq!(combat.round, 2);
        assert_eq!(combat.combatants.len(), 3);

        let cleric = combat.combatants[0].actor.as_ref().unwrap();
        assert_eq!(cleric.id, ActorId(10));
        assert_eq!(cleric.class(), Some(ClassKind::Cleric));
        assert_eq!(cleric.class_resource(), Some(ResourceMeter::new(1, 1)));

        assert_eq!(combat.combatants[1].disposition, Some(Disposition::Hostile));
        assert_eq!(combat.combatants[2].disposition, None);
        assert!(combat.combatants[2].actor.is_none());
    }

    #[test]
    fn parses_json_with_host_codes() {
        let json = r#"{
            "started": true,
            "round": 1,
            "combatants": [
                {"id": 1, "name": "Wolf", "disposition": -1,
                 "actor": {"id": 5, "hp": {"current": 3, "maximum": 11}}},
                {"id": 2, "name": "Scout", "disposition": 1}
            ]
        }"#;

        let combat = EncounterLoader::parse(DataFormat::Json, json).unwrap();

        assert_eq!(combat.combatants[0].disposition, Some(Disposition::Hostile));
        assert_eq!(combat.combatants[1].disposition, Some(Disposition::Friendly));
    }

    #[test]
    fn unknown_dispositions_count_as_friendly() {
        let json = r#"{"started": true, "combatants": [
            {"id": 1, "disposition": 2},
            {"id": 2, "disposition": "ally"},
            {"id": 3, "disposition": 1.5},
            {"id": 4, "disposition": 300},
            {"id": 5, "disposition": null},
            {"id": 6, "disposition": -1}
        ]}"#;

        let combat = EncounterLoader::parse(DataFormat::Json, json).unwrap();

        let dispositions: Vec<_> = combat.combatants.iter().map(|c| c.disposition).collect();
        assert_eq!(
            dispositions,
            [None, None, None, None, None, Some(Disposition::Hostile)]
        );
        assert_eq!(combat.combatants[0].side(), Side::Friendly);
        assert_eq!(combat.combatants[5].side(), Side::Hostile);
    }

    #[test]
    fn unknown_item_kinds_are_kept_as_other() {
        let json = r#"{"started": true, "combatants": [
            {"id": 1, "disposition": 1, "actor": {
                "id": 7,
                "hp": {"current": 8, "maximum": 8},
                "items": [
                    {"name": "Thieves' Tools", "kind": "tool"},
                    {"name": "Acolyte", "kind": "background"},
                    {"name": "Monk", "kind": "class"}
                ],
                "resources": {"ki": {"current": 1, "maximum": 2}}
            }}
        ]}"#;

        let combat = EncounterLoader::parse(DataFormat::Json, json).unwrap();

        let monk = combat.combatants[0].actor.as_ref().unwrap();
        assert_eq!(monk.items[0].kind, ItemKind::Other);
        assert_eq!(monk.items[1].kind, ItemKind::Other);
        assert_eq!(monk.class(), Some(ClassKind::Monk));
        assert_eq!(evaluate(Some(&combat)).friendly.resources, 50);
    }

    #[test]
    fn unknown_item_kinds_parse_from_ron() {
        let ron = r#"(started: true, combatants: [
            (id: 1, actor: Some((id: 1, items: [(name: "Bag", kind: backpack)]))),
        ])"#;

        let combat = EncounterLoader::parse(DataFormat::Ron, ron).unwrap();

        let actor = combat.combatants[0].actor.as_ref().unwrap();
        assert_eq!(actor.items[0].kind, ItemKind::Other);
    }
}
