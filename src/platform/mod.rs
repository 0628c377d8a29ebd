//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time/ticks
//! - Input events
//! - Storage (LocalStorage on web, a JSON file natively)

pub mod input;
pub mod storage;
pub mod time;

pub use input::{Command, InputEvent, KeyBindings, translate};
pub use storage::{MemoryStorage, Storage};
pub use time::{FrameClock, now_ms};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
