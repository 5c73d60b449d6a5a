//! Scoped timing for hot paths.
//!
//! Enable with the `profiling` feature flag:
//! ```toml
//! [dependencies]
//! movable = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn handle_mouse_move() {
//!     profile_scope!("drag_move", 4.0);  // warn if slower than 4ms
//!     // ... work ...
//! }
//! ```

use std::time::Instant;
use tracing::{trace, warn};

/// Profile a scope, warning when it exceeds `threshold_ms`. Zero-cost when
/// profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// RAII timer that reports its scope's duration when dropped
pub struct ScopedTimer {
    name: &'static str,
    threshold_ms: f64,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            threshold_ms,
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            warn!(
                "Slow operation: {} took {:.2}ms (threshold: {:.2}ms)",
                self.name, elapsed_ms, self.threshold_ms
            );
        } else {
            trace!("{}: {:.3}ms", self.name, elapsed_ms);
        }
    }
}
