//! Fastest-run record
//!
//! One value under one key: the best winning time in seconds, stored as a
//! two-decimal string (e.g. `"12.34"`). Persisted to LocalStorage in the
//! browser. Unreadable records count as "no record yet".

use crate::platform::Storage;
use crate::round_centis;

/// Storage key for the fastest time
pub const STORAGE_KEY: &str = "spaceship_fastest_time";

/// Result of checking a finished run against the record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordOutcome {
    /// The run, rounded to centiseconds
    pub run_time: f64,
    /// Record after this run (`None` only if it could not be established)
    pub best_time: Option<f64>,
    /// The run set a new record
    pub improved: bool,
}

/// Best-time record kept in a key/value store
#[derive(Debug, Clone)]
pub struct BestTimes<S: Storage> {
    storage: S,
}

impl<S: Storage> BestTimes<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current record, if a usable one exists
    pub fn best(&self) -> Option<f64> {
        match self.storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => {
                let parsed = parse_best_time(&raw);
                if parsed.is_none() {
                    log::warn!("Ignoring unusable best time {:?}", raw);
                }
                parsed
            }
            Ok(None) => None,
            Err(e) => {
                log::warn!("Could not read best time: {}", e);
                None
            }
        }
    }

    /// Check a winning run against the record, storing it if strictly faster
    /// (or if there is no record)
    pub fn record_run(&mut self, run_time: f64) -> RecordOutcome {
        let run_time = round_centis(run_time.max(0.0));
        let previous = self.best();

        let improved = previous.is_none_or(|best| run_time < best);
        if !improved {
            return RecordOutcome {
                run_time,
                best_time: previous,
                improved: false,
            };
        }

        match self.storage.set_item(STORAGE_KEY, &format!("{:.2}", run_time)) {
            Ok(()) => log::info!("New fastest time: {:.2}s", run_time),
            Err(e) => log::warn!("Could not save best time: {}", e),
        }

        RecordOutcome {
            run_time,
            best_time: Some(run_time),
            improved: true,
        }
    }
}

/// Parse a stored record. Malformed, non-finite and non-positive values are
/// treated as absent.
pub fn parse_best_time(raw: &str) -> Option<f64> {
    let secs: f64 = raw.trim().parse().ok()?;
    (secs.is_finite() && secs > 0.0).then_some(secs)
}
