use chrono::NaiveDate;
use kairos_core::config::{DEFAULT_MAX_INSTANCES, ExpansionConfig};

/// Options for recurrence expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionOptions {
    /// Maximum number of occurrences returned for one series.
    pub max_instances: usize,

    /// Start of date window (inclusive).
    pub range_start: Option<NaiveDate>,

    /// End of date window (exclusive).
    pub range_end: Option<NaiveDate>,
}

impl Default for ExpansionOptions {
    fn default() -> Self {
        Self {
            max_instances: DEFAULT_MAX_INSTANCES,
            range_start: None,
            range_end: None,
        }
    }
}

impl From<&ExpansionConfig> for ExpansionOptions {
    fn from(config: &ExpansionConfig) -> Self {
        Self {
            max_instances: config.max_instances,
            ..Self::default()
        }
    }
}

impl ExpansionOptions {
    /// Creates expansion options with a date window `[start, end)`.
    #[must_use]
    pub fn with_range(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            range_start: Some(start),
            range_end: Some(end),
            ..Self::default()
        }
    }

    /// Sets the maximum number of instances.
    #[must_use]
    pub fn with_max_instances(mut self, max: usize) -> Self {
        self.max_instances = max;
        self
    }

    /// Whether the window is restricted at all.
    #[must_use]
    pub fn has_range(&self) -> bool {
        self.range_start.is_some() || self.range_end.is_some()
    }

    /// Whether `date` falls inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.range_start.is_none_or(|start| date >= start)
            && !self.is_past_range(date)
    }

    /// Whether `date` is at or beyond the exclusive end of the window.
    #[must_use]
    pub fn is_past_range(&self, date: NaiveDate) -> bool {
        self.range_end.is_some_and(|end| date >= end)
    }
}
