//! Frame clock
//!
//! Turns the monotonic timestamps handed to each display refresh into frame
//! deltas for the simulation.

use crate::settings::Settings;
use crate::sim::FrameTime;

#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    loop_time_unit_ms: f64,
    max_frame_delta_ms: f64,
}

impl FrameClock {
    pub fn new(settings: &Settings) -> Self {
        Self {
            last_ms: None,
            loop_time_unit_ms: settings.loop_time_unit_ms,
            max_frame_delta_ms: settings.max_frame_delta_ms,
        }
    }

    /// Timing for a frame at `now_ms`. The first frame, a timestamp that goes
    /// backwards and a non-finite timestamp all produce a zero delta; the
    /// reported time never decreases.
    pub fn advance(&mut self, now_ms: f64) -> FrameTime {
        if !now_ms.is_finite() {
            return FrameTime {
                now_ms: self.last_ms.unwrap_or(0.0),
                delta_ms: 0.0,
                dt: 0.0,
            };
        }

        let (now_ms, delta_ms) = match self.last_ms {
            Some(last) if now_ms >= last => (now_ms, now_ms - last),
            Some(last) => (last, 0.0),
            None => (now_ms, 0.0),
        };
        self.last_ms = Some(now_ms);

        let dt = (delta_ms.min(self.max_frame_delta_ms) / self.loop_time_unit_ms) as f32;
        FrameTime {
            now_ms,
            delta_ms,
            dt,
        }
    }
}

/// Milliseconds from a monotonic clock (`performance.now()` in the browser)
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Milliseconds since the first call
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}
