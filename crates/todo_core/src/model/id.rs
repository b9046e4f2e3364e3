use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;

/// Identifier of a task, stored as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::invalid_input("id is required"));
        }
        trimmed
            .parse::<i64>()
            .map(TaskId)
            .map_err(|_| AppError::invalid_input(format!("id must be an integer: {trimmed}")))
    }
}

pub trait Clock {
    /// Milliseconds since the unix epoch.
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();
        i64::try_from(nanos / 1_000_000).unwrap_or(i64::MAX)
    }
}

/// Hands out timestamp-flavoured ids that are strictly increasing.
///
/// Two calls within the same millisecond, or a clock that moves backwards,
/// still produce distinct ids because every id is at least `last + 1`.
/// Once `last` sits at `i64::MAX` nothing above it exists, so the generator
/// scans downward for a value `is_taken` rejects.
#[derive(Debug, Clone)]
pub struct IdGenerator<C: Clock> {
    clock: C,
    last: Option<i64>,
}

impl<C: Clock> IdGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, last: None }
    }

    /// Makes sure future ids are greater than `id`.
    pub fn observe(&mut self, id: TaskId) {
        self.last = Some(self.last.map_or(id.0, |last| last.max(id.0)));
    }

    pub fn next_id(&mut self, is_taken: impl Fn(TaskId) -> bool) -> TaskId {
        let now = self.clock.now_millis();
        let next = match self.last {
            Some(last) => last.checked_add(1).map(|floor| now.max(floor)),
            None => Some(now),
        };

        match next {
            Some(id) => {
                self.last = Some(id);
                TaskId(id)
            }
            None => (i64::MIN..i64::MAX)
                .rev()
                .map(TaskId)
                .find(|candidate| !is_taken(*candidate))
                .unwrap_or(TaskId(i64::MIN)),
        }
    }
}
