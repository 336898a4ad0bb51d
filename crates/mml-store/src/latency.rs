//! Artificial latency simulation.
//!
//! The store emulates a remote backend by pausing the calling thread for a
//! fixed duration per operation weight. There is one logical thread of
//! control; a pause cannot be cancelled and there is no timeout on top of it.
//! Tests and library consumers default to `Off`.

use std::thread;
use std::time::Duration;

use tracing::trace;

/// Relative cost class of a store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpWeight {
    /// Session bookkeeping and bookmark flips.
    Light,
    /// Ordinary reads and writes.
    Medium,
    /// Payment-backed mutations and uploads.
    Heavy,
}

impl OpWeight {
    fn duration(self) -> Duration {
        match self {
            OpWeight::Light => Duration::from_millis(200),
            OpWeight::Medium => Duration::from_millis(500),
            OpWeight::Heavy => Duration::from_millis(1000),
        }
    }
}

/// Whether store calls pause to imitate network latency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LatencyProfile {
    /// No pauses; every call returns immediately.
    #[default]
    Off,
    /// Block the calling thread per operation weight.
    Simulated,
}

impl LatencyProfile {
    pub(crate) fn pause(self, weight: OpWeight) {
        if let LatencyProfile::Simulated = self {
            let duration = weight.duration();
            trace!(millis = duration.as_millis() as u64, "simulated latency");
            thread::sleep(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_are_ordered() {
        assert!(OpWeight::Light.duration() < OpWeight::Medium.duration());
        assert!(OpWeight::Medium.duration() < OpWeight::Heavy.duration());
    }

    #[test]
    fn off_profile_does_not_block() {
        let started = std::time::Instant::now();
        LatencyProfile::Off.pause(OpWeight::Heavy);
        assert!(started.elapsed() < Duration::from_millis(50));
    }
}
