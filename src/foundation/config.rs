use crate::foundation::error::{PlaybackMisuse, TraceError, TraceResult};

/// Playback timing configuration for the timeline controller.
///
/// `speed` is an inverse delay: the auto-advance timer fires every
/// `base_interval_ms / speed` milliseconds (never less than 1 ms).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlaybackConfig {
    #[serde(default = "default_base_interval_ms")]
    pub base_interval_ms: u64,
    #[serde(default = "default_speed")]
    pub speed: u32,
}

fn default_base_interval_ms() -> u64 {
    1000
}

fn default_speed() -> u32 {
    2
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            base_interval_ms: default_base_interval_ms(),
            speed: default_speed(),
        }
    }
}

impl PlaybackConfig {
    pub fn new(base_interval_ms: u64, speed: u32) -> TraceResult<Self> {
        let cfg = Self {
            base_interval_ms,
            speed,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> TraceResult<()> {
        if self.speed == 0 {
            return Err(PlaybackMisuse::ZeroSpeed.into());
        }
        if self.base_interval_ms == 0 {
            return Err(TraceError::validation("base_interval_ms must be > 0"));
        }
        Ok(())
    }

    /// Delay between two auto-advance ticks.
    pub fn delay_ms(&self) -> u64 {
        (self.base_interval_ms / u64::from(self.speed.max(1))).max(1)
    }
}

/// Documented input size bounds. Inputs beyond them are malformed.
#[derive(Clone, Copy, Debug)]
pub struct Limits;

impl Limits {
    pub const MAX_ARRAY_LEN: usize = 50;
    pub const MAX_SEARCH_LEN: usize = 100;
    pub const MAX_GRID_SIDE: usize = 16;
    pub const MAX_KNAPSACK_ITEMS: usize = 20;
    pub const MAX_KNAPSACK_CAPACITY: u32 = 100;
    pub const MAX_LCS_LEN: usize = 16;
    pub const MAX_GRAPH_NODES: usize = 26;
    pub const MAX_GRAPH_EDGES: usize = 325;
    pub const MAX_COINS: usize = 20;
    pub const MAX_COIN_AMOUNT: u32 = 100_000;
    pub const MAX_ACTIVITIES: usize = 20;

    pub(crate) fn check_len(what: &str, len: usize, max: usize) -> TraceResult<()> {
        if len > max {
            return Err(TraceError::validation(format!(
                "{what} has {len} elements, at most {max} are supported"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
