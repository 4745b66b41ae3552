use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One region's rate for one instance type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingEntry {
    /// Region display name as shown on the pricing page
    pub region: String,
    /// Canonical region code, `"unknown"` when unmapped
    pub region_code: String,
    /// Hourly rate for the whole instance in USD
    pub hourly_rate_usd: f64,
    /// Hourly rate per accelerator in USD; 0.0 when the page lists only an
    /// aggregate rate
    pub accelerator_hourly_rate_usd: f64,
}

/// Full pricing record for one instance type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceTypePricing {
    /// Instance family, e.g. "P5"
    pub instance_family: String,
    /// Accelerator chip, e.g. "H100"
    pub accelerator_type: String,
    /// Accelerators per instance; 0 means unknown
    pub accelerator_count: u32,
    /// One entry per region row encountered, in page order
    pub pricing: Vec<PricingEntry>,
}

/// Provenance for a scraped dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingMetadata {
    /// Retrieval time, ISO-8601 UTC at second precision
    pub last_updated: String,
    pub source_url: String,
    /// Dataset structure version
    pub version: String,
}

/// Root document written to the output file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingData {
    pub metadata: PricingMetadata,
    /// Keyed by instance type id; BTreeMap keeps serialized output sorted
    pub instance_types: BTreeMap<String, InstanceTypePricing>,
}
