//! Time-derived identifier stamps.
//!
//! Ids across the store are synthesized from a millisecond timestamp.
//! Successive calls within the same millisecond still get distinct values.

use chrono::Utc;

/// Source of strictly increasing millisecond stamps.
#[derive(Debug, Default)]
pub(crate) struct StampSource {
    last: u64,
}

impl StampSource {
    pub(crate) fn next(&mut self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.last = now.max(self.last + 1);
        self.last
    }

    /// Last six digits of a stamp, used as consultancy case suffixes.
    pub(crate) fn case_suffix(stamp: u64) -> String {
        format!("{:06}", stamp % 1_000_000)
    }
}
