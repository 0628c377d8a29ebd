//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only arrives through `FrameTime`
//! - Seeded RNG only
//! - No rendering, storage or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod countdown;
pub mod playfield;
pub mod projectile;
pub mod rect;
pub mod score;
pub mod state;
pub mod target;
pub mod tick;
pub mod view;

pub use collision::{CollisionResult, projectile_target_collision};
pub use countdown::{Countdown, CountdownStep};
pub use playfield::Playfield;
pub use projectile::{Flight, Projectile};
pub use rect::Rect;
pub use score::{HitOutcome, Scoreboard};
pub use state::{Blast, GameEvent, GamePhase, GameState};
pub use target::{Direction, Target};
pub use tick::{FrameTime, TickInput, tick};
pub use view::{DisplayState, WinPanel, format_best, format_secs};
