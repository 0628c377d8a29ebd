//! Game driver
//!
//! Owns one round of simulation plus everything around it: the frame clock,
//! pending input, settings and the best-time record. Frontends call
//! `handle_input` from their event handlers and `frame` once per display
//! refresh, then draw `view()`.

use crate::best_time::BestTimes;
use crate::platform::{Command, FrameClock, InputEvent, KeyBindings, Storage, translate};
use crate::settings::Settings;
use crate::sim::{DisplayState, GameEvent, GameState, Playfield, TickInput, tick};

pub struct Game<S: Storage> {
    state: GameState,
    clock: FrameClock,
    best_times: BestTimes<S>,
    keys: KeyBindings,
    /// One-shot inputs waiting for the next frame
    input: TickInput,
    /// Rounds started so far, including the current one
    rounds: u32,
}

impl<S: Storage> Game<S> {
    pub fn new(settings: Settings, playfield: Playfield, storage: S, seed: u64, now_ms: f64) -> Self {
        let settings = settings.sanitized();
        let keys = KeyBindings::from_settings(&settings);
        let clock = FrameClock::new(&settings);
        let input = TickInput {
            autopilot: settings.autopilot,
            ..Default::default()
        };
        let state = GameState::new(seed, settings, playfield, now_ms);
        log::info!("Round 1 started (seed {})", seed);

        Self {
            state,
            clock,
            best_times: BestTimes::new(storage),
            keys,
            input,
            rounds: 1,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn best_times(&self) -> &BestTimes<S> {
        &self.best_times
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn autopilot(&self) -> bool {
        self.input.autopilot
    }

    pub fn set_autopilot(&mut self, on: bool) {
        if self.input.autopilot != on {
            log::info!("Autopilot {}", if on { "on" } else { "off" });
        }
        self.input.autopilot = on;
    }

    /// Queue a fire request for the next frame
    pub fn fire(&mut self) {
        self.input.fire = true;
    }

    /// Queue a win-panel dismissal for the next frame
    pub fn request_restart(&mut self) {
        self.input.restart = true;
    }

    /// Translate and queue a raw input event. Returns whether the event was
    /// consumed (frontends suppress the default browser action then).
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match translate(event, &self.keys) {
            Some(Command::Fire) => self.fire(),
            Some(Command::Restart) => self.request_restart(),
            Some(Command::ToggleAutopilot) => self.set_autopilot(!self.input.autopilot),
            None => return false,
        }
        true
    }

    pub fn set_playfield(&mut self, playfield: Playfield) {
        self.state.set_playfield(playfield);
    }

    /// Run one display refresh at clock reading `now_ms`
    pub fn frame(&mut self, now_ms: f64) -> Vec<GameEvent> {
        let frame = self.clock.advance(now_ms);
        // One-shot inputs are consumed; the autopilot toggle persists
        let input = std::mem::take(&mut self.input);
        self.input.autopilot = input.autopilot;

        let events = tick(&mut self.state, &input, &frame);

        for event in &events {
            match *event {
                GameEvent::Fired => log::debug!("Fired"),
                GameEvent::Missed => log::debug!("Missed"),
                GameEvent::Hit { point, score } => log::debug!(
                    "Hit at ({:.1}, {:.1}), score {} ({} to go)",
                    point.x,
                    point.y,
                    score,
                    self.state.scoreboard.remaining()
                ),
                GameEvent::Won { run_time } => {
                    let outcome = self.best_times.record_run(run_time);
                    self.state.record_best_time(outcome.best_time);
                    log::info!(
                        "Round {} won in {:.2}s (best {})",
                        self.rounds,
                        outcome.run_time,
                        crate::sim::format_best(outcome.best_time)
                    );
                }
                GameEvent::CountdownTick { remaining } => log::debug!("Restart in {}", remaining),
                GameEvent::RestartRequested => {}
            }
        }

        if events.contains(&GameEvent::RestartRequested) {
            self.restart(frame.now_ms);
        }

        events
    }

    /// Full reset of the round. The best-time record is kept.
    pub fn restart(&mut self, now_ms: f64) {
        self.state.reset(now_ms);
        let autopilot = self.input.autopilot;
        self.input = TickInput {
            autopilot,
            ..Default::default()
        };
        self.rounds += 1;
        log::info!("Round {} started (seed {})", self.rounds, self.state.seed);
    }

    pub fn view(&self) -> DisplayState {
        DisplayState::from_state(&self.state)
    }
}
