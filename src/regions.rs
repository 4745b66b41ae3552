//! Region display name → region code lookup
//!
//! Append-only reference list of display names observed on the pricing page,
//! including alternate spellings and Local Zones. New names found in future
//! page snapshots get new entries; codes are never derived from the name.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Code returned for display names with no table entry
pub const UNKNOWN_REGION: &str = "unknown";

static REGION_NAME_TO_CODE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("US East (N. Virginia)", "us-east-1"),
        ("US East (Ohio)", "us-east-2"),
        ("US West (N. California)", "us-west-1"),
        ("US West (Oregon)", "us-west-2"),
        ("Africa (Cape Town)", "af-south-1"),
        ("Asia Pacific (Hong Kong)", "ap-east-1"),
        ("Asia Pacific (Hyderabad)", "ap-south-2"),
        ("Asia Pacific (Jakarta)", "ap-southeast-3"),
        ("Asia Pacific (Melbourne)", "ap-southeast-4"),
        ("Asia Pacific (Mumbai)", "ap-south-1"),
        ("Asia Pacific (Osaka)", "ap-northeast-3"),
        ("Asia Pacific (Seoul)", "ap-northeast-2"),
        ("Asia Pacific (Singapore)", "ap-southeast-1"),
        ("Asia Pacific (Sydney)", "ap-southeast-2"),
        ("Asia Pacific (Tokyo)", "ap-northeast-1"),
        ("Canada (Central)", "ca-central-1"),
        ("Canada West (Calgary)", "ca-west-1"),
        ("Europe (Frankfurt)", "eu-central-1"),
        ("Europe (Ireland)", "eu-west-1"),
        ("Europe (London)", "eu-west-2"),
        ("Europe (Milan)", "eu-south-1"),
        ("Europe (Paris)", "eu-west-3"),
        ("Europe (Spain)", "eu-south-2"),
        ("Europe (Stockholm)", "eu-north-1"),
        ("Europe (Zurich)", "eu-central-2"),
        ("Israel (Tel Aviv)", "il-central-1"),
        ("Middle East (Bahrain)", "me-south-1"),
        ("Middle East (UAE)", "me-central-1"),
        ("South America (São Paulo)", "sa-east-1"),
        ("South America (Sao Paulo)", "sa-east-1"),
        // Alternate naming conventions
        ("Australia (Sydney)", "ap-southeast-2"),
        ("Australia (Melbourne)", "ap-southeast-4"),
        // Local Zones
        ("US West (Dallas Local Zone)", "us-west-2-dal-1a"),
        ("Dallas Local Zone\n(US East N. Virginia)", "us-east-1-dfw-2a"),
    ])
});

/// Map a region display name to its canonical code.
///
/// Retries with trimmed whitespace before falling back to
/// [`UNKNOWN_REGION`]; callers upstream usually clean the name already, but
/// that is not assumed here.
pub fn region_code(region: &str) -> &'static str {
    if let Some(code) = REGION_NAME_TO_CODE.get(region) {
        return code;
    }

    REGION_NAME_TO_CODE
        .get(region.trim())
        .copied()
        .unwrap_or(UNKNOWN_REGION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_regions() {
        assert_eq!(region_code("US East (N. Virginia)"), "us-east-1");
        assert_eq!(region_code("Europe (Stockholm)"), "eu-north-1");
        assert_eq!(region_code("Asia Pacific (Tokyo)"), "ap-northeast-1");
    }

    #[test]
    fn test_alternate_spellings_share_a_code() {
        assert_eq!(region_code("South America (São Paulo)"), "sa-east-1");
        assert_eq!(region_code("South America (Sao Paulo)"), "sa-east-1");
        assert_eq!(region_code("Australia (Sydney)"), "ap-southeast-2");
    }

    #[test]
    fn test_local_zones() {
        assert_eq!(region_code("US West (Dallas Local Zone)"), "us-west-2-dal-1a");
        assert_eq!(
            region_code("Dallas Local Zone\n(US East N. Virginia)"),
            "us-east-1-dfw-2a"
        );
    }

    #[test]
    fn test_trimmed_retry() {
        assert_eq!(region_code("  Canada (Central)  "), "ca-central-1");
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(region_code("Atlantis (Lost City)"), UNKNOWN_REGION);
        assert_eq!(region_code(""), UNKNOWN_REGION);
    }

    #[test]
    fn test_lookup_is_pure() {
        assert_eq!(region_code("Europe (Paris)"), region_code("Europe (Paris)"));
    }
}
