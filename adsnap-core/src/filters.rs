use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::ReportError;

/// Inclusive report date range.
///
/// The platform takes date ranges as a single filter value of the form
/// `"{start} to {end}"` with `YYYY-MM-DD` dates; [`DateRange::to_filter_value`]
/// produces exactly that form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range from start and end dates.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ReportError> {
        if start > end {
            return Err(ReportError::invalid_arg(format!(
                "date range start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Range start (inclusive).
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Range end (inclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// The platform's wire form: `"YYYY-MM-DD to YYYY-MM-DD"`.
    #[must_use]
    pub fn to_filter_value(&self) -> String {
        format!(
            "{} to {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// Filter set attached to a snapshot request: campaign scope, date range,
/// and any report-specific predicates.
#[derive(Debug, Clone)]
pub struct SnapshotFilters {
    campaign_id: String,
    range: DateRange,
    extra: Vec<(String, String)>,
}

impl SnapshotFilters {
    /// Filter key carrying the date range.
    pub const EVENT_DATE: &'static str = "event_date";
    /// Filter key scoping the snapshot to one campaign.
    pub const CAMPAIGN_ID: &'static str = "campaign_id";

    /// Build filters scoping a snapshot to one campaign and date range.
    ///
    /// The campaign identifier is passed through as a string regardless of
    /// its numeric form; the platform expects string-cast ids.
    pub fn for_campaign(campaign_id: impl Into<String>, range: DateRange) -> Self {
        Self {
            campaign_id: campaign_id.into(),
            range,
            extra: Vec::new(),
        }
    }

    /// Attach a report-specific predicate.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// The campaign this snapshot is scoped to.
    #[must_use]
    pub fn campaign_id(&self) -> &str {
        &self.campaign_id
    }

    /// The date range this snapshot covers.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        self.range
    }

    /// Serialize into the platform's `filters` object.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            Self::CAMPAIGN_ID.to_string(),
            Value::String(self.campaign_id.clone()),
        );
        map.insert(
            Self::EVENT_DATE.to_string(),
            Value::String(self.range.to_filter_value()),
        );
        for (k, v) in &self.extra {
            map.insert(k.clone(), Value::String(v.clone()));
        }
        Value::Object(map)
    }
}
