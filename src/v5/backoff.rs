/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use std::time::Duration;

const INITIAL_DELAY_SECS: u64 = 1;
const MAX_DELAY_SECS: u64 = 10;

/// Capped exponential delay used between polls of asynchronous operations.
///
/// Starts at one second and doubles after every wait up to ten seconds.
#[derive(Debug, Clone)]
pub struct Backoff {
    delay_secs: u64,
}

impl Default for Backoff {
    fn default() -> Self {
        Self::new()
    }
}

impl Backoff {
    pub fn new() -> Self {
        Self {
            delay_secs: INITIAL_DELAY_SECS,
        }
    }

    pub fn reset(&mut self) {
        self.delay_secs = INITIAL_DELAY_SECS;
    }

    /// The delay the next wait will use
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }

    /// Human readable form of the next delay
    pub fn delay_text(&self) -> String {
        if self.delay_secs == 1 {
            "a second".to_string()
        } else {
            format!("{} seconds", self.delay_secs)
        }
    }

    /// Sleeps for the current delay, then grows it for the next time
    pub async fn wait(&mut self, message: Option<&str>) {
        if let Some(message) = message {
            log::info!("{} Waiting {}...", message, self.delay_text());
        }
        tokio::time::sleep(self.delay()).await;
        self.advance();
    }

    fn advance(&mut self) {
        self.delay_secs = (self.delay_secs * 2).min(MAX_DELAY_SECS);
    }
}
