//! Display snapshot
//!
//! The numbers a rendering target needs for one frame. Rendering itself is
//! the frontend's business.

use glam::Vec2;
use serde::Serialize;

use super::playfield::Playfield;
use super::projectile::Projectile;
use super::rect::Rect;
use super::state::{GamePhase, GameState};

/// Placeholder shown when there is no best time yet
pub const NO_BEST_TIME: &str = "—";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WinPanel {
    /// Seconds
    pub run_time: f64,
    /// Seconds, `None` if no record exists
    pub best_time: Option<f64>,
    pub countdown: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayState {
    pub playfield: Playfield,
    pub target: Rect,
    /// The projectile in flight
    pub projectile: Option<Rect>,
    /// Ready-to-fire marker above the player
    pub idle_projectile: Option<Rect>,
    /// Hit flash position while visible
    pub blast: Option<Vec2>,
    pub score: u32,
    /// Seconds since the round began
    pub run_time: f64,
    /// Present once the round is won
    pub win_panel: Option<WinPanel>,
}

impl DisplayState {
    pub fn from_state(state: &GameState) -> Self {
        let win_panel = match state.phase {
            GamePhase::Playing => None,
            GamePhase::Won {
                run_time,
                best_time,
                countdown,
            } => Some(WinPanel {
                run_time,
                best_time,
                countdown: countdown.remaining,
            }),
        };

        let idle_projectile = if state.in_flight() || win_panel.is_some() {
            None
        } else {
            Some(Projectile::spawn(&state.playfield, &state.settings).rect)
        };

        Self {
            playfield: state.playfield,
            target: state.target.rect,
            projectile: state.projectile.as_ref().map(|p| p.rect),
            idle_projectile,
            blast: state.blast.map(|b| b.point),
            score: state.score(),
            run_time: state.run_time,
            win_panel,
        }
    }
}

/// Seconds with two decimals, e.g. `12.34`
pub fn format_secs(secs: f64) -> String {
    format!("{:.2}", secs)
}

/// Best time for the win panel, e.g. `12.34s`, or the placeholder
pub fn format_best(best: Option<f64>) -> String {
    match best {
        Some(secs) => format!("{}s", format_secs(secs)),
        None => NO_BEST_TIME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::countdown::Countdown;

    #[test]
    fn test_playing_snapshot() {
        let state = GameState::new(3, Settings::default(), Playfield::default(), 0.0);
        let view = DisplayState::from_state(&state);
        assert_eq!(view.target, state.target.rect);
        assert!(view.projectile.is_none());
        assert!(view.idle_projectile.is_some());
        assert!(view.win_panel.is_none());
        assert_eq!(view.score, 0);
    }

    #[test]
    fn test_in_flight_hides_idle_marker() {
        let mut state = GameState::new(3, Settings::default(), Playfield::default(), 0.0);
        state.fire();
        let view = DisplayState::from_state(&state);
        assert!(view.projectile.is_some());
        assert!(view.idle_projectile.is_none());
    }

    #[test]
    fn test_won_snapshot() {
        let mut state = GameState::new(3, Settings::default(), Playfield::default(), 0.0);
        state.phase = GamePhase::Won {
            run_time: 12.34,
            best_time: Some(9.87),
            countdown: Countdown::start(5),
        };
        let view = DisplayState::from_state(&state);
        assert_eq!(
            view.win_panel,
            Some(WinPanel {
                run_time: 12.34,
                best_time: Some(9.87),
                countdown: 5,
            })
        );
        assert!(view.idle_projectile.is_none());
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_secs(12.3456), "12.35");
        assert_eq!(format_secs(0.0), "0.00");
        assert_eq!(format_best(Some(9.87)), "9.87s");
        assert_eq!(format_best(None), "—");
    }

    #[test]
    fn test_serializes_to_json() {
        let state = GameState::new(3, Settings::default(), Playfield::default(), 0.0);
        let json = serde_json::to_value(DisplayState::from_state(&state)).unwrap();
        assert_eq!(json["score"], 0);
        assert!(json["win_panel"].is_null());
    }
}
