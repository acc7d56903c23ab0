//! Checkpoint data structures

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ulid::Ulid;

/// A checkpoint is one immutable snapshot of the application document,
/// tagged with a content delta against the previous newest checkpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Unique ID (ULID: timestamp prefix + random suffix)
    pub id: Ulid,
    /// Creation time (Unix milliseconds)
    #[serde(rename = "ts")]
    pub ts_unix_ms: u64,
    /// Human-supplied label
    pub message: String,
    /// Signed count change vs. the previous newest checkpoint
    pub delta: Delta,
    /// Full document copy, owned by the history
    pub data: Value,
}

/// Metadata-only view of a checkpoint, for history listings where the
/// document payload would be dead weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckpointMeta {
    pub id: Ulid,
    #[serde(rename = "ts")]
    pub ts_unix_ms: u64,
    pub message: String,
    pub delta: Delta,
}

/// Per-field signed count difference between two snapshots.
///
/// Negative values mean content was removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delta {
    pub cohorts: i64,
    pub courses: i64,
    pub lessons: i64,
}

impl Checkpoint {
    /// Create a new checkpoint from an owned document, diffing its counts
    /// against `previous` (all-zero counts when there is none).
    pub fn new(message: String, data: Value, previous: Option<&Checkpoint>) -> Self {
        let prev_counts = previous
            .map(|cp| ContentCounts::of(&cp.data))
            .unwrap_or_default();
        let curr_counts = ContentCounts::of(&data);

        Self {
            id: Ulid::new(),
            ts_unix_ms: current_timestamp_ms(),
            message,
            delta: curr_counts.delta_from(prev_counts),
            data,
        }
    }

    /// Metadata-only view of this checkpoint
    pub fn meta(&self) -> CheckpointMeta {
        CheckpointMeta {
            id: self.id,
            ts_unix_ms: self.ts_unix_ms,
            message: self.message.clone(),
            delta: self.delta,
        }
    }
}

/// Cohort/course/lesson counts of a document.
///
/// Counting is total over arbitrarily malformed documents: an absent or
/// non-array field contributes zero at every level, never an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentCounts {
    pub cohorts: usize,
    pub courses: usize,
    pub lessons: usize,
}

impl ContentCounts {
    /// Count cohorts, courses per cohort, and lessons per course.
    pub fn of(data: &Value) -> Self {
        let cohorts = as_array(data.get("cohorts"));
        let mut counts = Self {
            cohorts: cohorts.len(),
            ..Default::default()
        };

        for cohort in cohorts {
            let courses = as_array(cohort.get("courses"));
            counts.courses += courses.len();

            for course in courses {
                counts.lessons += as_array(course.get("lessons")).len();
            }
        }

        counts
    }

    /// Element-wise signed difference: `self - previous`
    pub fn delta_from(self, previous: Self) -> Delta {
        Delta {
            cohorts: self.cohorts as i64 - previous.cohorts as i64,
            courses: self.courses as i64 - previous.courses as i64,
            lessons: self.lessons as i64 - previous.lessons as i64,
        }
    }
}

fn as_array(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Get current timestamp in milliseconds
fn current_timestamp_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("System time before UNIX epoch")
        .as_millis() as u64
}
