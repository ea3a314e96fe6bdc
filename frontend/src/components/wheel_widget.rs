use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::{Interval, Timeout};
use rand::thread_rng;
use shared::animation::rotation_at;
use shared::constants::COUNTDOWN_INTERVAL_MS;
use shared::cue;
use shared::engine::{EngineEvent, EngineState, SpinEngine, SpinPlan};
use shared::wheel_config::WheelSettings;
use yew::prelude::*;

use crate::audio::CueEmitter;
use crate::components::outcome_modal::OutcomeModal;
use crate::components::wheel_canvas::WheelCanvas;
use crate::styles;

pub enum Msg {
    SpinClicked,
    Frame,
    TickCue,
    CueDone(u64),
    SettleDone(u64),
    CountdownTick,
    CloseOutcome,
    Restart,
}

#[derive(Properties, PartialEq)]
pub struct WheelWidgetProps {
    pub settings: WheelSettings,
    /// Engine notifications for the embedding page (analytics etc.).
    #[prop_or_default]
    pub on_event: Callback<EngineEvent>,
}

/// The playable wheel. Owns the spin engine and every browser-side timer
/// that drives it: the animation frame loop while spinning, the tick-cue
/// interval, the cue and settle timeouts and the once-per-second countdown
/// interval. All of them die with the component, and every completion they
/// report carries the spin's tag so a superseded spin cannot advance a
/// newer one.
pub struct WheelWidget {
    engine: SpinEngine,
    audio: CueEmitter,
    plan: Option<SpinPlan>,
    display_rotation: f64,
    spin_started_at: f64,
    ticks_played: u32,
    _raf: Option<AnimationFrame>,
    tick_interval: Option<Interval>,
    countdown_interval: Option<Interval>,
    _cue_timeout: Option<Timeout>,
    _settle_timeout: Option<Timeout>,
}

impl Component for WheelWidget {
    type Message = Msg;
    type Properties = WheelWidgetProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            engine: SpinEngine::new(ctx.props().settings.clone()),
            audio: CueEmitter::new(),
            plan: None,
            display_rotation: 0.0,
            spin_started_at: 0.0,
            ticks_played: 0,
            _raf: None,
            tick_interval: None,
            countdown_interval: None,
            _cue_timeout: None,
            _settle_timeout: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        // Documents may only swap between spins; the engine refuses the
        // rest and the running spin keeps its geometry.
        self.engine.set_settings(ctx.props().settings.clone());
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let render = match msg {
            Msg::SpinClicked => self.start_spin(ctx),
            Msg::Frame => self.advance_animation(ctx),
            Msg::TickCue => {
                self.play_due_tick();
                false
            }
            Msg::CueDone(seq) => {
                if let Some(delay) = self.engine.cue_complete(seq) {
                    self.schedule_settle(ctx, seq, delay);
                }
                false
            }
            Msg::SettleDone(seq) => match self.engine.settle_elapsed(seq) {
                Some(outcome) => {
                    if outcome.needs_ticks() {
                        let link = ctx.link().clone();
                        self.countdown_interval = Some(Interval::new(
                            COUNTDOWN_INTERVAL_MS,
                            move || link.send_message(Msg::CountdownTick),
                        ));
                    }
                    true
                }
                None => false,
            },
            Msg::CountdownTick => {
                if !self.engine.countdown_tick() {
                    self.countdown_interval = None;
                }
                true
            }
            Msg::CloseOutcome => {
                if self.engine.close_outcome().is_some() {
                    self.countdown_interval = None;
                    self.plan = None;
                    true
                } else {
                    false
                }
            }
            Msg::Restart => {
                self.cancel_timers();
                self.engine.restart();
                self.plan = None;
                self.display_rotation = 0.0;
                true
            }
        };

        for event in self.engine.take_events() {
            ctx.props().on_event.emit(event);
        }
        render
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let snapshot = self.engine.snapshot();
        let settings = self.engine.settings();
        let spinning = snapshot.state == EngineState::Spinning;
        let rotation = if spinning {
            self.display_rotation
        } else {
            snapshot.rotation_degrees
        };

        let winner_slice = snapshot
            .winning_index
            .and_then(|i| settings.slices.get(i).cloned());
        let can_spin_again = settings.allow_repeats || snapshot.remaining > 0;

        html! {
            <div class="relative flex flex-col items-center justify-center">
                <div class="relative flex items-center justify-center">
                    <WheelCanvas
                        slices={settings.slices.clone()}
                        shown_ids={snapshot.shown_ids.clone()}
                        rotation={rotation}
                        spinning={spinning}
                        winner_index={snapshot.winning_index}
                    />

                    if snapshot.state != EngineState::Completed {
                        <button
                            onclick={ctx.link().callback(|_| Msg::SpinClicked)}
                            disabled={!snapshot.can_spin}
                            class={classes!(
                                "absolute", "-right-6", "md:-right-12", "lg:-right-20",
                                "top-1/2", "-translate-y-1/2",
                                if snapshot.can_spin { styles::SPIN_BUTTON } else { styles::SPIN_BUTTON_DISABLED }
                            )}
                            aria-label="Spin" title="Spin"
                        >
                            <div class="text-3xl lg:text-4xl">{ "⟳" }</div>
                            <div>{ if spinning { "..." } else { "SPIN" } }</div>
                        </button>
                    }
                </div>

                if !settings.allow_repeats {
                    <div class={styles::REMAINING_BADGE}>
                        { format!("{} remaining", snapshot.remaining) }
                    </div>
                }

                if snapshot.state == EngineState::Completed {
                    <div class="mt-6 flex flex-col items-center gap-3">
                        <p class={styles::TEXT_H2}>{ "Every slice has been played!" }</p>
                        <button
                            onclick={ctx.link().callback(|_| Msg::Restart)}
                            class={styles::RESTART_BUTTON}
                        >
                            { "Start Over" }
                        </button>
                    </div>
                }

                if snapshot.state == EngineState::Displaying {
                    if let Some(slice) = winner_slice {
                        <OutcomeModal
                            outcome_total={slice.outcome_timer().unwrap_or(0)}
                            slice={slice}
                            global_countdown={snapshot.global_countdown}
                            global_total={settings.global_timer_seconds()}
                            outcome_countdown={snapshot.outcome_countdown}
                            can_spin_again={can_spin_again}
                            on_close={ctx.link().callback(|_| Msg::CloseOutcome)}
                        />
                    }
                }
            </div>
        }
    }
}

impl WheelWidget {
    fn start_spin(&mut self, ctx: &Context<Self>) -> bool {
        let plan = match self.engine.request_spin(&mut thread_rng()) {
            Ok(plan) => plan,
            Err(rejection) => {
                log::debug!("spin request refused: {:?}", rejection);
                return false;
            }
        };

        self.spin_started_at = js_sys::Date::now();
        self.display_rotation = plan.start_rotation;
        self.ticks_played = 0;
        let seq = plan.seq;
        let tuning = self.engine.tuning();

        self.audio.play_sustained(cue::sustained_ms(tuning));
        if self.audio.is_available() {
            let link = ctx.link().clone();
            self._cue_timeout = Some(Timeout::new(cue::sustained_ms(tuning), move || {
                link.send_message(Msg::CueDone(seq))
            }));
        } else {
            // No audio subsystem: the cue counts as instantly complete.
            ctx.link().send_message(Msg::CueDone(seq));
        }

        let link = ctx.link().clone();
        self.tick_interval = Some(Interval::new(tuning.tick_interval_ms, move || {
            link.send_message(Msg::TickCue)
        }));

        self.plan = Some(plan);
        self.schedule_frame(ctx);
        true
    }

    fn advance_animation(&mut self, ctx: &Context<Self>) -> bool {
        let Some(plan) = self.plan.clone() else {
            return false;
        };
        let elapsed = js_sys::Date::now() - self.spin_started_at;
        let duration = f64::from(plan.duration_ms);

        if elapsed < duration {
            self.display_rotation =
                rotation_at(plan.start_rotation, plan.target_rotation, elapsed, duration);
            self.schedule_frame(ctx);
            return true;
        }

        // The animation for this spin is done; stop the frame loop and the
        // tick train before reporting completion.
        self.display_rotation = plan.target_rotation;
        self._raf = None;
        self.tick_interval = None;
        if let Some(settled) = self.engine.animation_complete(plan.seq) {
            self.audio.play_celebration(settled.celebration_ms);
            if let Some(delay) = settled.settle_delay_ms {
                self.schedule_settle(ctx, plan.seq, delay);
            }
        }
        true
    }

    fn play_due_tick(&mut self) {
        let tuning = self.engine.tuning();
        let elapsed = (js_sys::Date::now() - self.spin_started_at).max(0.0) as u32;
        if self.ticks_played < cue::ticks_due(elapsed, tuning) {
            self.audio.play_tick();
            self.ticks_played += 1;
        }
        if self.ticks_played >= tuning.max_ticks {
            self.tick_interval = None;
        }
    }

    fn schedule_frame(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        self._raf = Some(request_animation_frame(move |_| {
            link.send_message(Msg::Frame)
        }));
    }

    fn schedule_settle(&mut self, ctx: &Context<Self>, seq: u64, delay_ms: u32) {
        let link = ctx.link().clone();
        self._settle_timeout = Some(Timeout::new(delay_ms, move || {
            link.send_message(Msg::SettleDone(seq))
        }));
    }

    fn cancel_timers(&mut self) {
        self._raf = None;
        self.tick_interval = None;
        self.countdown_interval = None;
        self._cue_timeout = None;
        self._settle_timeout = None;
    }
}
