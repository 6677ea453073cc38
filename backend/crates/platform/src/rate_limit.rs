//! Rate Limiting Infrastructure
//!
//! Common rate limiting abstractions and a fixed-window in-memory store.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::Mutex;

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests allowed in the window
    pub max_requests: u32,
    /// Time window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 10,
            window: Duration::from_secs(60),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }

    pub fn window_ms(&self) -> i64 {
        self.window.as_millis() as i64
    }
}

/// Rate limit check result
#[derive(Debug, Clone)]
pub struct RateLimitResult {
    pub allowed: bool,
    pub remaining: u32,
    pub reset_at_ms: i64,
}

/// Trait for rate limit storage backends
#[trait_variant::make(RateLimitStore: Send)]
pub trait LocalRateLimitStore {
    /// Check and increment rate limit counter
    async fn check_and_increment(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<RateLimitResult, Box<dyn std::error::Error + Send + Sync>>;
}

/// Fixed-window counter for a single key
#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    started_at_ms: i64,
}

/// In-memory fixed-window rate limit store
///
/// Suitable for single-process deployments; counters are not shared
/// across instances.
#[derive(Clone, Default)]
pub struct MemoryRateLimitStore {
    windows: Arc<Mutex<HashMap<String, Window>>>,
}

impl MemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RateLimitStore for MemoryRateLimitStore {
    async fn check_and_increment(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<RateLimitResult, Box<dyn std::error::Error + Send + Sync>> {
        let now_ms = Utc::now().timestamp_millis();
        let window_ms = config.window_ms();

        let mut windows = self.windows.lock().await;

        // Drop counters whose window has passed so the map stays bounded
        windows.retain(|_, w| now_ms < w.started_at_ms + window_ms);

        let window = windows.entry(key.to_string()).or_insert(Window {
            count: 0,
            started_at_ms: now_ms,
        });

        let reset_at_ms = window.started_at_ms + window_ms;

        if window.count >= config.max_requests {
            return Ok(RateLimitResult {
                allowed: false,
                remaining: 0,
                reset_at_ms,
            });
        }

        window.count += 1;

        Ok(RateLimitResult {
            allowed: true,
            remaining: config.max_requests - window.count,
            reset_at_ms,
        })
    }
}
