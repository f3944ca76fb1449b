use serde::{Deserialize, Serialize};

/// Delivery performance for one geo-fence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoFenceRecord {
    /// Remote geo-fence identifier.
    pub geo_fence_id: String,
    /// Human-readable fence name.
    pub name: String,
    /// Served impressions.
    pub impressions: u64,
    /// Recorded clicks.
    pub clicks: u64,
    /// Click-through rate in percent, 0 when impressions are 0.
    pub ctr: f64,
    /// Spend attributed to this fence.
    pub spend: f64,
}

/// Delivery performance for one geographic location.
///
/// At least one of `city`, `metro`, or `region` is always present; rows with
/// no location dimension at all are dropped during normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// City name, when reported.
    pub city: Option<String>,
    /// Metro / DMA name, when reported.
    pub metro: Option<String>,
    /// Region or state name, when reported.
    pub region: Option<String>,
    /// Served impressions.
    pub impressions: u64,
    /// Recorded clicks.
    pub clicks: u64,
    /// Click-through rate in percent, 0 when impressions are 0.
    pub ctr: f64,
    /// Spend reconstructed from impressions and eCPM; the platform does not
    /// report location spend directly.
    pub spend: f64,
}

/// Campaign-wide conversion totals, aggregated across all raw rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConversionSummary {
    /// All conversions.
    pub total_conversions: u64,
    /// View-through conversions.
    pub view_conversions: u64,
    /// Click-through conversions.
    pub click_conversions: u64,
}

/// Delivery performance for one device type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Device type name (e.g. "Mobile", "Desktop", "CTV").
    pub device_type: String,
    /// Served impressions.
    pub impressions: u64,
    /// Recorded clicks.
    pub clicks: u64,
    /// Click-through rate in percent, 0 when impressions are 0.
    pub ctr: f64,
    /// Spend attributed to this device type.
    pub spend: f64,
}

/// Campaign-wide viewability measurement; the platform returns a single row
/// per query for this template.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewabilitySummary {
    /// Impressions that could be measured for viewability.
    pub measured_impressions: u64,
    /// Measured impressions that were viewable.
    pub viewable_impressions: u64,
    /// Viewable share of measured impressions, in percent.
    pub viewability_rate: f64,
}

/// Delivery performance for one serving domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainRecord {
    /// Serving domain.
    pub domain: String,
    /// Served impressions.
    pub impressions: u64,
    /// Recorded clicks.
    pub clicks: u64,
    /// Click-through rate in percent, 0 when impressions are 0.
    pub ctr: f64,
    /// Spend attributed to this domain.
    pub spend: f64,
}

/// Delivery performance for one matched keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRecord {
    /// Matched keyword text.
    pub keyword: String,
    /// Served impressions.
    pub impressions: u64,
    /// Recorded clicks.
    pub clicks: u64,
    /// Click-through rate in percent, 0 when impressions are 0.
    pub ctr: f64,
    /// Spend reconstructed from impressions and eCPM; the platform does not
    /// report keyword spend directly.
    pub spend: f64,
}

/// Selection of report types to include in a composite fetch.
///
/// Every flag defaults to `true`; disabling a flag skips that report type's
/// entire pipeline (model resolution included), leaving its composite slot
/// `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Fetch geo-fence performance.
    pub geo_fences: bool,
    /// Fetch location performance.
    pub locations: bool,
    /// Fetch conversion totals.
    pub conversions: bool,
    /// Fetch the device breakdown.
    pub devices: bool,
    /// Fetch viewability metrics.
    pub viewability: bool,
    /// Fetch domain performance.
    pub domains: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            geo_fences: true,
            locations: true,
            conversions: true,
            devices: true,
            viewability: true,
            domains: true,
        }
    }
}

/// Composite result of a concurrent multi-report fetch for one campaign.
///
/// Each slot is `None` when that report type was not requested or its
/// retrieval failed; a missing slot never implies anything about its
/// siblings. Callers render `None` as "data unavailable", not as an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignReport {
    /// Geo-fence performance, when requested and retrievable.
    pub geo_fences: Option<Vec<GeoFenceRecord>>,
    /// Location performance, when requested and retrievable.
    pub locations: Option<Vec<LocationRecord>>,
    /// Conversion totals, when requested and retrievable.
    pub conversions: Option<ConversionSummary>,
    /// Device breakdown, when requested and retrievable.
    pub devices: Option<Vec<DeviceRecord>>,
    /// Viewability summary, when requested and retrievable.
    pub viewability: Option<ViewabilitySummary>,
    /// Domain performance, when requested and retrievable.
    pub domains: Option<Vec<DomainRecord>>,
    /// Non-fatal per-type failures encountered while building the report.
    pub warnings: Vec<String>,
}
