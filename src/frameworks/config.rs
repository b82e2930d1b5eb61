use std::{env, time::Duration};

// Runtime/server settings read from the environment (after `.env` is loaded).

pub fn http_port() -> u16 {
    env::var("RPS_HTTP_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3001)
}

pub fn winning_score() -> u32 {
    env::var("RPS_WINNING_SCORE")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|score| *score > 0)
        .unwrap_or(DEFAULT_WINNING_SCORE)
}

pub fn countdown() -> Duration {
    let secs = env::var("RPS_COUNTDOWN_SECS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(3);
    Duration::from_secs(secs)
}

pub fn tick_interval() -> Duration {
    let millis = env::var("RPS_TICK_INTERVAL_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|millis| *millis > 0)
        .unwrap_or(100);
    Duration::from_millis(millis)
}

pub const DEFAULT_WINNING_SCORE: u32 = 3;

/// Settings a server instance is built from.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub winning_score: u32,
    pub countdown: Duration,
    pub tick_interval: Duration,
}

impl ServerSettings {
    pub fn from_env() -> Self {
        Self {
            winning_score: winning_score(),
            countdown: countdown(),
            tick_interval: tick_interval(),
        }
    }
}
