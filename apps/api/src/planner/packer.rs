//! Semester Packer: greedy, order-preserving bin fill.
//!
//! The ceiling is a soft threshold. The overflow check only closes a bucket that
//! already has content, so an entry heavier than the ceiling lands in the current
//! bucket on its own instead of being split or dropped.

use serde::{Serialize, Serializer};

use crate::planner::template::RequirementEntry;

/// Requirements assigned to one generated semester.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SemesterBucket {
    entries: Vec<RequirementEntry>,
    total_credits: f64,
}

impl SemesterBucket {
    fn push(&mut self, entry: RequirementEntry) {
        self.total_credits += entry.credits;
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[RequirementEntry] {
        &self.entries
    }

    pub fn total_credits(&self) -> f64 {
        self.total_credits
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A bucket serializes as the plain list of its entry records.
impl Serialize for SemesterBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// Partitions `missing` into consecutive semester buckets of at most `ceiling`
/// credits each (see module docs for the oversized-entry case).
pub fn pack(missing: Vec<RequirementEntry>, ceiling: f64) -> Vec<SemesterBucket> {
    debug_assert!(
        missing.windows(2).all(|w| w[0].seq < w[1].seq),
        "packer input must be in template order"
    );

    let mut schedule = Vec::new();
    let mut current = SemesterBucket::default();

    for entry in missing {
        if current.total_credits + entry.credits > ceiling && !current.is_empty() {
            schedule.push(std::mem::take(&mut current));
        }
        current.push(entry);
    }

    if !current.is_empty() {
        schedule.push(current);
    }

    schedule
}
