use serde::{Deserialize, Serialize};

/// The report types this client can request from the platform's Report
/// Center, one per registered template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Per-geo-fence delivery performance.
    GeoFence,
    /// Delivery performance by city/metro/region.
    Location,
    /// Conversion event counts, aggregated across the campaign.
    Conversions,
    /// Delivery performance by device type.
    Devices,
    /// Viewability measurement summary.
    Viewability,
    /// Delivery performance by serving domain.
    Domains,
    /// Delivery performance by matched keyword.
    Keywords,
}

impl ReportKind {
    /// Every report kind, in a stable order.
    pub const ALL: &'static [Self] = &[
        Self::GeoFence,
        Self::Location,
        Self::Conversions,
        Self::Devices,
        Self::Viewability,
        Self::Domains,
        Self::Keywords,
    ];

    /// The platform-registered template identifier backing this kind.
    ///
    /// These are stable literals matching templates registered on the remote
    /// platform; they must not be renumbered.
    #[must_use]
    pub const fn template_id(self) -> u64 {
        match self {
            Self::GeoFence => 126,
            Self::Location => 133,
            Self::Conversions => 129,
            Self::Devices => 138,
            Self::Viewability => 142,
            Self::Domains => 121,
            Self::Keywords => 147,
        }
    }

    /// Default title used when creating a report model for this kind.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::GeoFence => "Geo-Fence Performance by Campaign",
            Self::Location => "Location Performance by Campaign",
            Self::Conversions => "Conversions by Campaign",
            Self::Devices => "Device Breakdown by Campaign",
            Self::Viewability => "Viewability by Campaign",
            Self::Domains => "Domain Performance by Campaign",
            Self::Keywords => "Keyword Performance by Campaign",
        }
    }

    /// Stable label used in logs and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GeoFence => "geo_fence",
            Self::Location => "location",
            Self::Conversions => "conversions",
            Self::Devices => "devices",
            Self::Viewability => "viewability",
            Self::Domains => "domains",
            Self::Keywords => "keywords",
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
