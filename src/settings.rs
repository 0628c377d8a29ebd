//! Game rules and tuning
//!
//! Defaults mirror `crate::consts`. Natively a JSON file can override any
//! subset of fields; missing keys keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable game rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Rules ===
    /// Hits needed to win
    pub win_score: u32,
    /// Seconds shown on the win panel before restart
    pub reload_countdown_secs: u32,

    // === Timing ===
    /// Milliseconds per loop time unit
    pub loop_time_unit_ms: f64,
    /// Largest frame delta fed to motion
    pub max_frame_delta_ms: f64,
    /// Hit flash visibility
    pub blast_duration_ms: f64,

    // === Target ===
    pub target_width: f32,
    pub target_height: f32,
    /// Base speed (pixels per loop unit)
    pub target_speed: f32,
    pub target_speed_min_factor: f32,
    pub target_speed_max_factor: f32,

    // === Projectile ===
    pub projectile_width: f32,
    pub projectile_height: f32,
    /// Upward speed (pixels per loop unit)
    pub projectile_speed: f32,
    pub projectile_exit_margin: f32,

    // === Input ===
    /// `KeyboardEvent.code` that fires
    pub fire_key: String,
    /// `KeyboardEvent.code` that toggles the autopilot
    pub autopilot_key: String,
    /// Let the autopilot play from the start
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            win_score: WIN_SCORE,
            reload_countdown_secs: RELOAD_COUNTDOWN_SECS,

            loop_time_unit_ms: LOOP_TIME_UNIT_MS,
            max_frame_delta_ms: MAX_FRAME_DELTA_MS,
            blast_duration_ms: BLAST_DURATION_MS,

            target_width: TARGET_WIDTH,
            target_height: TARGET_HEIGHT,
            target_speed: TARGET_SPEED,
            target_speed_min_factor: TARGET_SPEED_MIN_FACTOR,
            target_speed_max_factor: TARGET_SPEED_MAX_FACTOR,

            projectile_width: PROJECTILE_WIDTH,
            projectile_height: PROJECTILE_HEIGHT,
            projectile_speed: PROJECTILE_SPEED,
            projectile_exit_margin: PROJECTILE_EXIT_MARGIN,

            fire_key: "Space".to_string(),
            autopilot_key: "KeyA".to_string(),
            autopilot: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, then sanitize
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Load settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings = Self::from_json(&json)
            .with_context(|| format!("parsing settings in {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Replace degenerate values with defaults so the simulation never sees
    /// zero sizes, zero speeds or an empty speed band
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if self.win_score == 0 {
            self.win_score = defaults.win_score;
        }
        fix_positive_f64(&mut self.loop_time_unit_ms, defaults.loop_time_unit_ms);
        fix_positive_f64(&mut self.max_frame_delta_ms, defaults.max_frame_delta_ms);
        fix_non_negative_f64(&mut self.blast_duration_ms, defaults.blast_duration_ms);

        fix_positive(&mut self.target_width, defaults.target_width);
        fix_positive(&mut self.target_height, defaults.target_height);
        fix_positive(&mut self.target_speed, defaults.target_speed);
        fix_positive(&mut self.target_speed_min_factor, defaults.target_speed_min_factor);
        fix_positive(&mut self.target_speed_max_factor, defaults.target_speed_max_factor);
        if self.target_speed_max_factor < self.target_speed_min_factor {
            std::mem::swap(
                &mut self.target_speed_min_factor,
                &mut self.target_speed_max_factor,
            );
        }

        fix_positive(&mut self.projectile_width, defaults.projectile_width);
        fix_positive(&mut self.projectile_height, defaults.projectile_height);
        fix_positive(&mut self.projectile_speed, defaults.projectile_speed);
        fix_non_negative(&mut self.projectile_exit_margin, defaults.projectile_exit_margin);

        if self.fire_key.is_empty() {
            self.fire_key = defaults.fire_key;
        }
        self
    }
}

fn fix_positive(value: &mut f32, fallback: f32) {
    if !value.is_finite() || *value <= 0.0 {
        *value = fallback;
    }
}

fn fix_non_negative(value: &mut f32, fallback: f32) {
    if !value.is_finite() || *value < 0.0 {
        *value = fallback;
    }
}

fn fix_positive_f64(value: &mut f64, fallback: f64) {
    if !value.is_finite() || *value <= 0.0 {
        *value = fallback;
    }
}

fn fix_non_negative_f64(value: &mut f64, fallback: f64) {
    if !value.is_finite() || *value < 0.0 {
        *value = fallback;
    }
}
