//! Per-frame simulation tick
//!
//! Advances one round by one display refresh. Order within a tick is fixed:
//! pending input, run timer, target, projectile, collision.

use super::autopilot;
use super::collision::projectile_target_collision;
use super::countdown::{Countdown, CountdownStep};
use super::projectile::Flight;
use super::state::{Blast, GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Fire a projectile (click/tap/key)
    pub fire: bool,
    /// Skip the win countdown (click on the win panel)
    pub restart: bool,
    /// Demo mode - the autopilot decides when to fire
    pub autopilot: bool,
}

/// Timing for one frame, as produced by the frame clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Clock reading for this frame (ms)
    pub now_ms: f64,
    /// Wall-clock time since the previous frame (ms, never negative)
    pub delta_ms: f64,
    /// Clamped motion delta in loop units
    pub dt: f32,
}

/// Advance the round by one frame, returning what happened
pub fn tick(state: &mut GameState, input: &TickInput, frame: &FrameTime) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    // Hit flash fades on wall-clock time
    if let Some(blast) = &mut state.blast {
        blast.remaining_ms -= frame.delta_ms;
        if blast.remaining_ms <= 0.0 {
            state.blast = None;
        }
    }

    if let GamePhase::Won { countdown, .. } = &mut state.phase {
        // The target keeps bouncing behind the win panel
        state.target.update(frame.dt, state.playfield.width);

        if input.restart {
            countdown.cancel();
            events.push(GameEvent::RestartRequested);
            return events;
        }

        match countdown.advance(frame.delta_ms) {
            CountdownStep::Idle => {}
            CountdownStep::Ticked(remaining) => {
                events.push(GameEvent::CountdownTick { remaining });
            }
            CountdownStep::Finished => {
                events.push(GameEvent::CountdownTick { remaining: 0 });
                events.push(GameEvent::RestartRequested);
            }
        }
        return events;
    }

    let wants_fire = input.fire || (input.autopilot && autopilot::should_fire(state));
    if wants_fire && state.fire() {
        events.push(GameEvent::Fired);
    }

    // 1. Run timer
    state.run_time = ((frame.now_ms - state.started_at_ms) / 1000.0).max(0.0);

    // 2. Target
    state.target.update(frame.dt, state.playfield.width);

    // 3. Projectile
    let Some(projectile) = &mut state.projectile else {
        return events;
    };
    let flight = projectile.advance(frame.dt, state.settings.projectile_exit_margin);

    // 4. Collision, checked over the whole step before an exit is discarded
    let result = projectile_target_collision(projectile, &state.target.rect);
    if !result.hit {
        if flight == Flight::Exited {
            state.projectile = None;
            events.push(GameEvent::Missed);
        }
        return events;
    }

    state.projectile = None;
    state.blast = Some(Blast {
        point: result.point,
        remaining_ms: state.settings.blast_duration_ms,
    });

    let outcome = state.scoreboard.register_hit();
    events.push(GameEvent::Hit {
        point: result.point,
        score: outcome.score,
    });

    if outcome.won {
        state.phase = GamePhase::Won {
            run_time: state.run_time,
            best_time: None,
            countdown: Countdown::start(state.settings.reload_countdown_secs),
        };
        events.push(GameEvent::Won {
            run_time: state.run_time,
        });
    }

    events
}
