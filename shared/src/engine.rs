use std::collections::HashSet;

use rand::Rng;
use serde::Serialize;

use crate::constants::SpinTuning;
use crate::rotation::plan_rotation;
use crate::selector::select_winner;
use crate::session::SpinSession;
use crate::wheel_config::WheelSettings;

/// Presentation stages of one wheel instance.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// At rest, waiting for a spin request.
    Idle,
    /// The rotation animation is running.
    Spinning,
    /// The wheel has stopped; waiting out the celebration cue and the
    /// settle pause before the outcome opens.
    Settling,
    /// The outcome is on screen.
    Displaying,
    /// Every slice has been shown under the no-repeat policy. Terminal
    /// until a restart.
    Completed,
}

/// Why a spin request was refused. All recoverable; the widget simply
/// reflects them as disabled or completed affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinRejection {
    AlreadyActive,
    EmptyWheel,
    NoEligibleSlices,
}

/// Everything the render layer needs to run one spin animation. `seq` tags
/// the spin; completion reports carrying a different tag are discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinPlan {
    pub seq: u64,
    pub winner_index: usize,
    pub start_rotation: f64,
    pub target_rotation: f64,
    pub duration_ms: u32,
}

/// Returned when the rotation animation of the active spin finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct Settled {
    pub seq: u64,
    pub winner_index: usize,
    pub celebration_ms: u32,
    /// Settle delay to schedule now. `None` while the sustained cue is
    /// still playing; its completion report returns the delay instead.
    pub settle_delay_ms: Option<u32>,
}

/// Returned when the settle pause elapses and the outcome opens.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub seq: u64,
    pub winner_index: usize,
    pub global_countdown: Option<u32>,
    pub outcome_countdown: Option<u32>,
}

impl Outcome {
    /// Whether the host needs to drive the once-per-second tick.
    pub fn needs_ticks(&self) -> bool {
        self.global_countdown.unwrap_or(0) > 0 || self.outcome_countdown.unwrap_or(0) > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseAction {
    /// Back to `Idle`; another spin may be requested.
    ReadyForSpin,
    /// Nothing eligible is left; the engine is now `Completed`.
    Completed,
}

/// Notifications for host-page collaborators (analytics, embedding page).
#[derive(Debug, Serialize, Clone, PartialEq)]
pub enum EngineEvent {
    SpinStarted { seq: u64 },
    SpinSettled { winner_index: usize },
    OutcomeClosed,
    ActivityCompleted,
}

/// A once-per-second countdown. Purely informational: it stops at zero and
/// never closes anything on its own. The host supplies the 1 Hz tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    running: bool,
}

impl Countdown {
    pub fn start(&mut self, seconds: u32) {
        self.remaining = seconds;
        self.running = true;
    }

    pub fn cancel(&mut self) {
        self.remaining = 0;
        self.running = false;
    }

    /// Advances one second. Returns true while there is still time left.
    pub fn tick(&mut self) -> bool {
        if self.running && self.remaining > 0 {
            self.remaining -= 1;
        }
        self.is_counting()
    }

    pub fn is_counting(&self) -> bool {
        self.running && self.remaining > 0
    }

    /// Current value, `None` if the countdown was never started (or was
    /// cancelled). A running countdown that reached zero reports `Some(0)`.
    pub fn value(&self) -> Option<u32> {
        if self.running {
            Some(self.remaining)
        } else {
            None
        }
    }
}

/// Read-only view of the engine for the render layer.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct EngineSnapshot {
    pub state: EngineState,
    /// Cumulative rotation the wheel rests at. While `Spinning`, the
    /// renderer interpolates between the active plan's start and target.
    pub rotation_degrees: f64,
    pub winning_index: Option<usize>,
    pub shown_ids: HashSet<String>,
    pub remaining: usize,
    pub global_countdown: Option<u32>,
    pub outcome_countdown: Option<u32>,
    pub can_spin: bool,
}

#[derive(Debug, Clone)]
struct ActiveSpin {
    plan: SpinPlan,
    anim_done: bool,
    cue_done: bool,
}

/// The spin resolution and presentation sequencer. Owns the session state
/// and the countdowns for exactly one wheel instance; single-threaded, and
/// every stage transition is driven by a reported event (spin request,
/// animation completion, cue completion, timer) rather than by waiting.
#[derive(Debug)]
pub struct SpinEngine {
    settings: WheelSettings,
    tuning: SpinTuning,
    session: SpinSession,
    state: EngineState,
    active: Option<ActiveSpin>,
    global_countdown: Countdown,
    outcome_countdown: Countdown,
    next_seq: u64,
    events: Vec<EngineEvent>,
}

impl SpinEngine {
    pub fn new(settings: WheelSettings) -> Self {
        Self::with_tuning(settings, SpinTuning::default())
    }

    pub fn with_tuning(settings: WheelSettings, tuning: SpinTuning) -> Self {
        Self {
            settings,
            tuning,
            session: SpinSession::new(),
            state: EngineState::Idle,
            active: None,
            global_countdown: Countdown::default(),
            outcome_countdown: Countdown::default(),
            next_seq: 0,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn settings(&self) -> &WheelSettings {
        &self.settings
    }

    pub fn tuning(&self) -> &SpinTuning {
        &self.tuning
    }

    /// Replaces the configuration document. Only honored between spins;
    /// mid-spin replacements are dropped so the running spin keeps the
    /// geometry it was planned against.
    pub fn set_settings(&mut self, settings: WheelSettings) -> bool {
        match self.state {
            EngineState::Idle | EngineState::Completed => {
                self.settings = settings;
                true
            }
            _ => {
                log::warn!("ignoring settings replacement while a spin is presented");
                false
            }
        }
    }

    /// Starts a spin: picks the winner, plans the rotation and hands the
    /// animation plan to the caller. A request while any spin is still
    /// being presented is refused, as is a request with nothing to win.
    pub fn request_spin<R: Rng>(&mut self, rng: &mut R) -> Result<SpinPlan, SpinRejection> {
        match self.state {
            EngineState::Idle => {}
            EngineState::Completed => return Err(SpinRejection::NoEligibleSlices),
            _ => return Err(SpinRejection::AlreadyActive),
        }
        if self.settings.slices.is_empty() {
            return Err(SpinRejection::EmptyWheel);
        }
        self.session.prime(&self.settings.slices);

        let winner_index = select_winner(&self.settings, &self.session, rng)
            .ok_or(SpinRejection::NoEligibleSlices)?;

        let seq = self.next_seq;
        self.next_seq += 1;
        let start_rotation = self.session.cumulative_rotation();
        let target_rotation = plan_rotation(
            self.settings.slices.len(),
            winner_index,
            start_rotation,
            &self.tuning,
            rng,
        );
        let plan = SpinPlan {
            seq,
            winner_index,
            start_rotation,
            target_rotation,
            duration_ms: self.tuning.spin_duration_ms,
        };

        log::info!(
            "spin {} started: slice {} of {}, {:.1}° -> {:.1}°",
            seq,
            winner_index,
            self.settings.slices.len(),
            start_rotation,
            target_rotation
        );
        self.active = Some(ActiveSpin {
            plan: plan.clone(),
            anim_done: false,
            cue_done: false,
        });
        self.state = EngineState::Spinning;
        self.events.push(EngineEvent::SpinStarted { seq });
        Ok(plan)
    }

    /// Reports that the rotation animation for spin `seq` reached its
    /// target. Marks the winner shown (only now, so the wheel never looks
    /// pre-grayed while still turning) and moves to `Settling`.
    pub fn animation_complete(&mut self, seq: u64) -> Option<Settled> {
        if self.state != EngineState::Spinning || !self.is_active(seq) {
            log::debug!("dropping stale animation completion for spin {}", seq);
            return None;
        }
        let active = self.active.as_mut()?;
        active.anim_done = true;
        let winner_index = active.plan.winner_index;
        let target = active.plan.target_rotation;
        let cue_done = active.cue_done;

        if let Some(slice) = self.settings.slices.get(winner_index) {
            self.session.mark_shown(&slice.id);
        }
        self.session.advance_rotation(target);
        self.state = EngineState::Settling;
        self.events.push(EngineEvent::SpinSettled { winner_index });
        log::info!("spin {} settled on slice {}", seq, winner_index);

        Some(Settled {
            seq,
            winner_index,
            celebration_ms: self.tuning.celebration_ms,
            settle_delay_ms: cue_done.then_some(self.tuning.settle_delay_ms),
        })
    }

    /// Reports that the sustained cue for spin `seq` finished. An
    /// unavailable audio subsystem must report completion immediately; the
    /// sequencer treats both the same. Returns the settle delay to schedule
    /// once both the cue and the animation are done.
    pub fn cue_complete(&mut self, seq: u64) -> Option<u32> {
        if !self.is_active(seq) {
            log::debug!("dropping stale cue completion for spin {}", seq);
            return None;
        }
        match self.state {
            EngineState::Spinning => {
                if let Some(active) = self.active.as_mut() {
                    active.cue_done = true;
                }
                None
            }
            EngineState::Settling => {
                let active = self.active.as_mut()?;
                if active.cue_done {
                    return None;
                }
                active.cue_done = true;
                Some(self.tuning.settle_delay_ms)
            }
            _ => None,
        }
    }

    /// Reports that the settle pause for spin `seq` elapsed. Opens the
    /// outcome and starts whichever countdowns the document declares.
    pub fn settle_elapsed(&mut self, seq: u64) -> Option<Outcome> {
        if self.state != EngineState::Settling || !self.is_active(seq) {
            log::debug!("dropping stale settle timer for spin {}", seq);
            return None;
        }
        let winner_index = self.active.as_ref()?.plan.winner_index;
        self.state = EngineState::Displaying;

        if self.settings.timer_enabled {
            self.global_countdown.start(self.settings.global_timer_seconds());
        }
        if let Some(seconds) = self
            .settings
            .slices
            .get(winner_index)
            .and_then(|slice| slice.outcome_timer())
        {
            self.outcome_countdown.start(seconds);
        }

        Some(Outcome {
            seq,
            winner_index,
            global_countdown: self.global_countdown.value(),
            outcome_countdown: self.outcome_countdown.value(),
        })
    }

    /// One-second tick for the outcome countdowns. Returns true while
    /// either countdown still has time left, so the host knows when the
    /// tick interval can be dropped.
    pub fn countdown_tick(&mut self) -> bool {
        if self.state != EngineState::Displaying {
            return false;
        }
        let global = self.global_countdown.tick();
        let outcome = self.outcome_countdown.tick();
        global || outcome
    }

    /// Closes the outcome. Loops back to `Idle` while anything is left to
    /// win; otherwise the session is complete.
    pub fn close_outcome(&mut self) -> Option<CloseAction> {
        if self.state != EngineState::Displaying {
            return None;
        }
        self.active = None;
        self.global_countdown.cancel();
        self.outcome_countdown.cancel();
        self.events.push(EngineEvent::OutcomeClosed);

        if self.settings.allow_repeats || self.session.remaining_count() > 0 {
            self.state = EngineState::Idle;
            Some(CloseAction::ReadyForSpin)
        } else {
            self.state = EngineState::Completed;
            self.events.push(EngineEvent::ActivityCompleted);
            log::info!("all slices shown, wheel completed");
            Some(CloseAction::Completed)
        }
    }

    /// Resets the session: clears the shown set, re-freezes the remaining
    /// denominator from the current slice list and returns to `Idle`. Any
    /// in-flight spin is abandoned; its late completion reports no longer
    /// match and fall on the floor.
    pub fn restart(&mut self) {
        self.global_countdown.cancel();
        self.outcome_countdown.cancel();
        self.active = None;
        self.session.restart(&self.settings.slices);
        self.state = EngineState::Idle;
        log::info!("session restarted with {} slices", self.settings.slices.len());
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        let remaining = if self.session.is_primed() {
            self.session.remaining_count()
        } else {
            self.settings.slices.len()
        };
        let can_spin = self.state == EngineState::Idle
            && !self.settings.slices.is_empty()
            && (self.settings.allow_repeats
                || self
                    .settings
                    .slices
                    .iter()
                    .any(|slice| !self.session.is_shown(&slice.id)));

        EngineSnapshot {
            state: self.state,
            rotation_degrees: self.session.cumulative_rotation(),
            winning_index: self.active.as_ref().map(|a| a.plan.winner_index),
            shown_ids: self.session.shown_ids().clone(),
            remaining,
            global_countdown: self.global_countdown.value(),
            outcome_countdown: self.outcome_countdown.value(),
            can_spin,
        }
    }

    /// Drains the queued notifications for host-page collaborators.
    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    fn is_active(&self, seq: u64) -> bool {
        self.active.as_ref().map(|a| a.plan.seq) == Some(seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel_config::default_settings;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn settings_with(labels: &[&str], allow_repeats: bool) -> WheelSettings {
        let mut settings = default_settings(None);
        settings.allow_repeats = allow_repeats;
        settings.slices.truncate(labels.len());
        for (slice, label) in settings.slices.iter_mut().zip(labels) {
            slice.label = label.to_string();
        }
        settings
    }

    /// Drives one spin through animation end, cue end and settle pause.
    fn run_spin(engine: &mut SpinEngine, rng: &mut StdRng) -> Outcome {
        let plan = engine.request_spin(rng).expect("spin should start");
        let settled = engine.animation_complete(plan.seq).expect("not stale");
        assert_eq!(settled.winner_index, plan.winner_index);
        assert_eq!(settled.settle_delay_ms, None);
        let delay = engine.cue_complete(plan.seq).expect("cue completes settle");
        assert_eq!(delay, engine.tuning().settle_delay_ms);
        engine.settle_elapsed(plan.seq).expect("outcome opens")
    }

    #[test]
    fn test_spin_rejected_on_empty_wheel() {
        let mut settings = default_settings(None);
        settings.slices.clear();
        let mut engine = SpinEngine::new(settings);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(engine.request_spin(&mut rng), Err(SpinRejection::EmptyWheel));
        assert_eq!(engine.state(), EngineState::Idle);
        assert!(!engine.snapshot().can_spin);
    }

    #[test]
    fn test_reentrancy_guard() {
        let mut engine = SpinEngine::new(default_settings(None));
        let mut rng = StdRng::seed_from_u64(2);
        let plan = engine.request_spin(&mut rng).unwrap();
        let before = engine.snapshot();

        assert_eq!(engine.request_spin(&mut rng), Err(SpinRejection::AlreadyActive));
        assert_eq!(engine.snapshot(), before);
        assert_eq!(
            engine.take_events(),
            vec![EngineEvent::SpinStarted { seq: plan.seq }]
        );
    }

    #[test]
    fn test_winner_marked_shown_only_after_the_wheel_stops() {
        let mut engine = SpinEngine::new(default_settings(None));
        let mut rng = StdRng::seed_from_u64(3);
        let plan = engine.request_spin(&mut rng).unwrap();

        // Still spinning: nothing may look grayed out yet.
        assert!(engine.snapshot().shown_ids.is_empty());

        engine.animation_complete(plan.seq).unwrap();
        let winner_id = engine.settings().slices[plan.winner_index].id.clone();
        assert!(engine.snapshot().shown_ids.contains(&winner_id));
        assert_eq!(engine.state(), EngineState::Settling);
    }

    #[test]
    fn test_full_spin_flow_and_events() {
        let mut engine = SpinEngine::new(default_settings(None));
        let mut rng = StdRng::seed_from_u64(4);

        let outcome = run_spin(&mut engine, &mut rng);
        assert_eq!(engine.state(), EngineState::Displaying);
        assert_eq!(engine.snapshot().winning_index, Some(outcome.winner_index));

        assert_eq!(engine.close_outcome(), Some(CloseAction::ReadyForSpin));
        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(engine.snapshot().winning_index, None);

        let events = engine.take_events();
        assert_eq!(
            events,
            vec![
                EngineEvent::SpinStarted { seq: 0 },
                EngineEvent::SpinSettled { winner_index: outcome.winner_index },
                EngineEvent::OutcomeClosed,
            ]
        );
    }

    #[test]
    fn test_cue_completion_may_arrive_before_the_animation() {
        let mut engine = SpinEngine::new(default_settings(None));
        let mut rng = StdRng::seed_from_u64(5);
        let plan = engine.request_spin(&mut rng).unwrap();

        // Silent environment: the cue reports done right away.
        assert_eq!(engine.cue_complete(plan.seq), None);
        let settled = engine.animation_complete(plan.seq).unwrap();
        assert_eq!(settled.settle_delay_ms, Some(engine.tuning().settle_delay_ms));
        assert!(engine.settle_elapsed(plan.seq).is_some());
    }

    #[test]
    fn test_stale_events_are_dropped() {
        let mut engine = SpinEngine::new(default_settings(None));
        let mut rng = StdRng::seed_from_u64(6);

        let first = run_spin(&mut engine, &mut rng);
        engine.close_outcome();
        let second = engine.request_spin(&mut rng).unwrap();

        // Late reports from the closed spin must not advance the new one.
        assert_eq!(engine.animation_complete(first.seq), None);
        assert_eq!(engine.cue_complete(first.seq), None);
        assert_eq!(engine.settle_elapsed(first.seq), None);
        assert_eq!(engine.state(), EngineState::Spinning);

        // And an unknown tag is just as dead.
        assert_eq!(engine.animation_complete(second.seq + 100), None);
        assert_eq!(engine.state(), EngineState::Spinning);
    }

    #[test]
    fn test_restart_abandons_the_active_spin() {
        let mut engine = SpinEngine::new(default_settings(None));
        let mut rng = StdRng::seed_from_u64(7);
        let plan = engine.request_spin(&mut rng).unwrap();

        engine.restart();
        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(engine.animation_complete(plan.seq), None);
        assert_eq!(engine.settle_elapsed(plan.seq), None);

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.rotation_degrees, 0.0);
        assert!(snapshot.shown_ids.is_empty());
        assert_eq!(snapshot.global_countdown, None);
    }

    #[test]
    fn test_countdowns_run_and_stop_at_zero() {
        let mut settings = settings_with(&["Only"], true);
        settings.timer_enabled = true;
        settings.timer_seconds = 3;
        settings.slices[0].timer_seconds = Some(2);

        let mut engine = SpinEngine::new(settings);
        let mut rng = StdRng::seed_from_u64(8);
        let outcome = run_spin(&mut engine, &mut rng);
        assert_eq!(outcome.global_countdown, Some(3));
        assert_eq!(outcome.outcome_countdown, Some(2));
        assert!(outcome.needs_ticks());

        assert!(engine.countdown_tick()); // 2 / 1
        assert!(engine.countdown_tick()); // 1 / 0
        assert!(!engine.countdown_tick()); // 0 / 0

        // Zero is informational only: nothing closes, values stay at zero.
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.state, EngineState::Displaying);
        assert_eq!(snapshot.global_countdown, Some(0));
        assert_eq!(snapshot.outcome_countdown, Some(0));

        engine.close_outcome();
        assert_eq!(engine.snapshot().global_countdown, None);
        assert_eq!(engine.snapshot().outcome_countdown, None);
    }

    #[test]
    fn test_countdown_tick_outside_display_is_ignored() {
        let mut engine = SpinEngine::new(default_settings(None));
        assert!(!engine.countdown_tick());
        let mut rng = StdRng::seed_from_u64(9);
        engine.request_spin(&mut rng).unwrap();
        assert!(!engine.countdown_tick());
    }

    #[test]
    fn test_no_repeat_wheel_exhausts_and_completes() {
        let settings = settings_with(&["A", "B", "C", "D"], false);
        let mut engine = SpinEngine::new(settings);
        let mut rng = StdRng::seed_from_u64(10);

        let mut winners = HashSet::new();
        for round in 0..4 {
            let outcome = run_spin(&mut engine, &mut rng);
            assert!(winners.insert(outcome.winner_index), "slice won twice");
            assert_eq!(engine.snapshot().remaining, 3 - round);

            let close = engine.close_outcome().unwrap();
            if round < 3 {
                assert_eq!(close, CloseAction::ReadyForSpin);
            } else {
                assert_eq!(close, CloseAction::Completed);
            }
        }

        assert_eq!(engine.state(), EngineState::Completed);
        assert_eq!(engine.snapshot().remaining, 0);
        assert!(!engine.snapshot().can_spin);
        assert_eq!(
            engine.request_spin(&mut rng),
            Err(SpinRejection::NoEligibleSlices)
        );
        assert!(engine
            .take_events()
            .contains(&EngineEvent::ActivityCompleted));
    }

    #[test]
    fn test_repeats_allowed_never_completes() {
        let settings = settings_with(&["Heads", "Tails"], true);
        let mut engine = SpinEngine::new(settings);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..10 {
            run_spin(&mut engine, &mut rng);
            assert_eq!(engine.close_outcome(), Some(CloseAction::ReadyForSpin));
        }
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[test]
    fn test_restart_recovers_a_completed_wheel() {
        let settings = settings_with(&["A", "B"], false);
        let mut engine = SpinEngine::new(settings);
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..2 {
            run_spin(&mut engine, &mut rng);
            engine.close_outcome();
        }
        assert_eq!(engine.state(), EngineState::Completed);

        engine.restart();
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.state, EngineState::Idle);
        assert_eq!(snapshot.remaining, 2);
        assert!(snapshot.can_spin);
        assert!(engine.request_spin(&mut rng).is_ok());
    }

    #[test]
    fn test_restart_twice_equals_restart_once() {
        let mut engine = SpinEngine::new(default_settings(None));
        let mut rng = StdRng::seed_from_u64(13);
        run_spin(&mut engine, &mut rng);

        engine.restart();
        let once = engine.snapshot();
        engine.restart();
        assert_eq!(engine.snapshot(), once);
    }

    #[test]
    fn test_rotation_only_ever_moves_forward() {
        let mut engine = SpinEngine::new(default_settings(None));
        let mut rng = StdRng::seed_from_u64(14);

        let mut last = 0.0;
        for _ in 0..6 {
            let plan = engine.request_spin(&mut rng).unwrap();
            assert_eq!(plan.start_rotation, last);
            assert!(plan.target_rotation > plan.start_rotation);
            engine.animation_complete(plan.seq).unwrap();
            engine.cue_complete(plan.seq).unwrap();
            engine.settle_elapsed(plan.seq).unwrap();
            engine.close_outcome();

            let rotation = engine.snapshot().rotation_degrees;
            assert!(rotation >= last);
            last = rotation;
        }
    }

    #[test]
    fn test_single_slice_wheel_still_spins_visibly() {
        let settings = settings_with(&["Only"], true);
        let mut engine = SpinEngine::new(settings);
        let mut rng = StdRng::seed_from_u64(15);
        let plan = engine.request_spin(&mut rng).unwrap();
        assert_eq!(plan.winner_index, 0);
        assert!(plan.target_rotation - plan.start_rotation >= 360.0);
    }

    #[test]
    fn test_settings_replacement_only_between_spins() {
        let mut engine = SpinEngine::new(default_settings(None));
        let replacement = settings_with(&["X", "Y", "Z"], true);
        assert!(engine.set_settings(replacement.clone()));

        let mut rng = StdRng::seed_from_u64(16);
        let plan = engine.request_spin(&mut rng).unwrap();
        assert!(!engine.set_settings(default_settings(None)));
        engine.animation_complete(plan.seq).unwrap();
        assert!(!engine.set_settings(default_settings(None)));
        engine.cue_complete(plan.seq).unwrap();
        engine.settle_elapsed(plan.seq).unwrap();
        assert!(!engine.set_settings(default_settings(None)));
        engine.close_outcome();
        assert!(engine.set_settings(default_settings(None)));
    }

    #[test]
    fn test_close_is_a_noop_outside_display() {
        let mut engine = SpinEngine::new(default_settings(None));
        assert_eq!(engine.close_outcome(), None);
        let mut rng = StdRng::seed_from_u64(17);
        engine.request_spin(&mut rng).unwrap();
        assert_eq!(engine.close_outcome(), None);
        assert_eq!(engine.state(), EngineState::Spinning);
    }

    #[test]
    fn test_take_events_drains_the_queue() {
        let mut engine = SpinEngine::new(default_settings(None));
        let mut rng = StdRng::seed_from_u64(18);
        engine.request_spin(&mut rng).unwrap();
        assert!(!engine.take_events().is_empty());
        assert!(engine.take_events().is_empty());
    }
}
