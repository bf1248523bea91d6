//! Per-viewer gauge state machine.
//!
//! [`GaugeSession`] owns everything that decides whether and what the gauge
//! shows: settings, viewer, the latest combat snapshot and the frame on
//! screen, if any. It is plain synchronous state; the worker feeds it one
//! event at a time and independent sessions never share anything.
use gauge_core::{CombatState, GaugeConfig, evaluate};
use tracing::{debug, info};

use crate::events::HostEvent;
use crate::view::{GaugeFrame, Viewer};

/// Why an event did not change what is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum IgnoreReason {
    /// The combat exists but has not begun.
    NotStarted,
    /// The gauge is restricted to game masters and the viewer is not one.
    Restricted,
    /// Nothing is on screen to update or close.
    NotOpen,
    /// The updated actor takes no part in the combat.
    UnrelatedActor,
}

/// Result of handling one host event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The gauge was closed and is now shown with this frame.
    Opened(GaugeFrame),
    /// The open gauge was refreshed with this frame.
    Rendered(GaugeFrame),
    /// The gauge was taken off screen.
    Closed,
    Ignored(IgnoreReason),
}

impl SessionOutcome {
    pub fn frame(&self) -> Option<&GaugeFrame> {
        match self {
            Self::Opened(frame) | Self::Rendered(frame) => Some(frame),
            Self::Closed | Self::Ignored(_) => None,
        }
    }
}

pub struct GaugeSession {
    config: GaugeConfig,
    viewer: Viewer,
    combat: Option<CombatState>,
    /// Last frame handed out for rendering; `None` while closed.
    shown: Option<GaugeFrame>,
}

impl GaugeSession {
    pub fn new(config: GaugeConfig, viewer: Viewer) -> Self {
        Self {
            config,
            viewer,
            combat: None,
            shown: None,
        }
    }

    pub fn config(&self) -> &GaugeConfig {
        &self.config
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn combat(&self) -> Option<&CombatState> {
        self.combat.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.shown.is_some()
    }

    /// The frame on screen. Snapshots stored without rendering (an unstarted
    /// combat, an actor update while closed) do not change it.
    pub fn current_frame(&self) -> Option<&GaugeFrame> {
        self.shown.as_ref()
    }

    /// Evaluates the stored snapshot. Reads zero when there is no combat.
    pub fn frame(&self) -> GaugeFrame {
        GaugeFrame::new(&self.viewer, evaluate(self.combat.as_ref()), &self.config)
    }

    pub fn handle(&mut self, event: HostEvent) -> SessionOutcome {
        debug!(event = event.name(), open = self.is_open(), "handling host event");

        match event {
            HostEvent::CombatUpdated(combat) => self.on_combat_updated(combat),
            HostEvent::CombatDeleted => self.on_combat_deleted(),
            HostEvent::ActorUpdated(actor) => {
                let updated = self
                    .combat
                    .as_mut()
                    .map_or(0, |combat| combat.replace_actor(&actor));
                debug!(actor = %actor.id, updated, "actor sheet refreshed");

                if !self.is_open() {
                    SessionOutcome::Ignored(IgnoreReason::NotOpen)
                } else if updated == 0 {
                    SessionOutcome::Ignored(IgnoreReason::UnrelatedActor)
                } else {
                    SessionOutcome::Rendered(self.show())
                }
            }
        }
    }

    fn on_combat_updated(&mut self, combat: CombatState) -> SessionOutcome {
        let started = combat.started;
        self.combat = Some(combat);

        if !started {
            return SessionOutcome::Ignored(IgnoreReason::NotStarted);
        }
        if !self.config.is_visible_to(self.viewer.is_gm) {
            return SessionOutcome::Ignored(IgnoreReason::Restricted);
        }

        if self.is_open() {
            SessionOutcome::Rendered(self.show())
        } else {
            info!(viewer = %self.viewer.name, mode = %self.config.display_mode, "combat gauge opened");
            SessionOutcome::Opened(self.show())
        }
    }

    /// Evaluates the snapshot and records the result as the frame on screen.
    fn show(&mut self) -> GaugeFrame {
        let frame = self.frame();
        self.shown = Some(frame.clone());
        frame
    }

    fn on_combat_deleted(&mut self) -> SessionOutcome {
        self.combat = None;

        if self.shown.take().is_none() {
            return SessionOutcome::Ignored(IgnoreReason::NotOpen);
        }
        info!(viewer = %self.viewer.name, "combat gauge closed");
        SessionOutcome::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge_core::{
        ActorId, ActorSheet, Combatant, CombatantId, Disposition, DisplayMode, ForceMetrics,
        ResourceMeter,
    };

    fn combat(started: bool) -> CombatState {
        let hero = ActorSheet::new(ActorId(1), "Hero", ResourceMeter::new(10, 20));
        let ogre = ActorSheet::new(ActorId(2), "Ogre", ResourceMeter::full(40));
        let combat = CombatState::new(vec![
            Combatant::new(CombatantId(1), "Hero")
                .with_disposition(Disposition::Friendly)
                .with_actor(hero),
            Combatant::new(CombatantId(2), "Ogre")
                .with_disposition(Disposition::Hostile)
                .with_actor(ogre),
        ]);
        if started { combat.started_at(1) } else { combat }
    }

    fn gm_session() -> GaugeSession {
        GaugeSession::new(GaugeConfig::default(), Viewer::gm("Dana"))
    }

    #[test]
    fn first_started_update_opens_then_renders() {
        let mut session = gm_session();

        let first = session.handle(HostEvent::CombatUpdated(combat(true)));
        let SessionOutcome::Opened(frame) = first else {
            panic!("expected the gauge to open, got {first:?}");
        };
        assert!(frame.is_gm);
        assert_eq!(frame.friendly.hp, 50);
        assert_eq!(frame.hostile.hp, 100);
        assert!(session.is_open());

        let second = session.handle(HostEvent::CombatUpdated(combat(true)));
        assert!(matches!(second, SessionOutcome::Rendered(_)));
    }

    #[test]
    fn unrendered_snapshots_leave_current_frame_alone() {
        let mut session = gm_session();
        session.handle(HostEvent::CombatUpdated(combat(true)));
        assert_eq!(session.current_frame().unwrap().friendly.hp, 50);

        let mut paused = combat(false);
        if let Some(hero) = paused.combatants[0].actor.as_mut() {
            hero.hp = ResourceMeter::new(2, 20);
        }
        let outcome = session.handle(HostEvent::CombatUpdated(paused));

        assert_eq!(outcome, SessionOutcome::Ignored(IgnoreReason::NotStarted));
        assert!(session.is_open());
        assert_eq!(session.current_frame().unwrap().friendly.hp, 50);
        assert_eq!(session.frame().friendly.hp, 10);

        session.handle(HostEvent::CombatDeleted);
        assert!(session.current_frame().is_none());
    }

    #[test]
    fn unstarted_combat_is_ignored() {
        let mut session = gm_session();

        let outcome = session.handle(HostEvent::CombatUpdated(combat(false)));

        assert_eq!(outcome, SessionOutcome::Ignored(IgnoreReason::NotStarted));
        assert!(!session.is_open());
        assert!(session.combat().is_some());
    }

    #[test]
    fn restricted_gauge_stays_hidden_from_players() {
        let config = GaugeConfig::new(DisplayMode::Left, true);
        let mut session = GaugeSession::new(config, Viewer::player("Sam"));

        let outcome = session.handle(HostEvent::CombatUpdated(combat(true)));

        assert_eq!(outcome, SessionOutcome::Ignored(IgnoreReason::Restricted));
        assert!(!session.is_open());
    }

    #[test]
    fn players_see_unrestricted_gauge_without_gm_flag() {
        let mut session = GaugeSession::new(GaugeConfig::default(), Viewer::player("Sam"));

        let outcome = session.handle(HostEvent::CombatUpdated(combat(true)));

        let frame = outcome.frame().expect("gauge should open");
        assert!(!frame.is_gm);
    }

    #[test]
    fn deleting_combat_closes_and_zeroes() {
        let mut session = gm_session();
        session.handle(HostEvent::CombatUpdated(combat(true)));

        assert_eq!(session.handle(HostEvent::CombatDeleted), SessionOutcome::Closed);
        assert!(!session.is_open());
        assert!(session.combat().is_none());
        assert_eq!(session.frame().friendly, ForceMetrics::ZERO);
        assert_eq!(session.frame().hostile, ForceMetrics::ZERO);

        assert_eq!(
            session.handle(HostEvent::CombatDeleted),
            SessionOutcome::Ignored(IgnoreReason::NotOpen)
        );
    }

    #[test]
    fn actor_updates_rerender_open_gauge() {
        let mut session = gm_session();
        session.handle(HostEvent::CombatUpdated(combat(true)));

        let healed = ActorSheet::new(ActorId(1), "Hero", ResourceMeter::full(20));
        let outcome = session.handle(HostEvent::ActorUpdated(healed));

        let frame = outcome.frame().expect("open gauge should re-render");
        assert_eq!(frame.friendly.hp, 100);
    }

    #[test]
    fn unrelated_actor_updates_are_ignored() {
        let mut session = gm_session();
        session.handle(HostEvent::CombatUpdated(combat(true)));

        let bystander = ActorSheet::new(ActorId(99), "Bystander", ResourceMeter::full(4));

        assert_eq!(
            session.handle(HostEvent::ActorUpdated(bystander)),
            SessionOutcome::Ignored(IgnoreReason::UnrelatedActor)
        );
    }

    #[test]
    fn actor_updates_refresh_snapshot_while_closed() {
        let mut session = gm_session();
        session.handle(HostEvent::CombatUpdated(combat(false)));

        let healed = ActorSheet::new(ActorId(1), "Hero", ResourceMeter::full(20));
        assert_eq!(
            session.handle(HostEvent::ActorUpdated(healed)),
            SessionOutcome::Ignored(IgnoreReason::NotOpen)
        );

        assert_eq!(session.frame().friendly.hp, 100);
    }

    #[test]
    fn independent_sessions_do_not_interfere() {
        let mut a = gm_session();
        let mut b = gm_session();

        a.handle(HostEvent::CombatUpdated(combat(true)));

        assert!(a.is_open());
        assert!(!b.is_open());
        assert_eq!(
            b.handle(HostEvent::CombatDeleted),
            SessionOutcome::Ignored(IgnoreReason::NotOpen)
        );
    }
}
