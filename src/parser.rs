//! Row normalization and aggregation into per-instance-type pricing

use std::collections::BTreeMap;
use tracing::debug;

use crate::extract::RawRow;
use crate::html::clean_html;
use crate::instances::instance_info;
use crate::models::{InstanceTypePricing, PricingEntry};
use crate::price::parse_price_string;
use crate::regions::region_code;

/// Normalize raw table rows and group them by instance type.
///
/// Rows with missing cells or an unparseable price are dropped. A zero
/// per-accelerator rate is kept: some instance types are billed only at an
/// aggregate rate. An empty result map is the caller's signal that nothing
/// on the page was usable.
pub fn parse_pricing_data(rows: &[RawRow]) -> BTreeMap<String, InstanceTypePricing> {
    let mut grouped: BTreeMap<String, Vec<PricingEntry>> = BTreeMap::new();

    for row in rows {
        if row.instance_type.is_empty() {
            continue;
        }

        let region = clean_html(&row.region);
        if region.is_empty() {
            debug!("Dropping {} row: empty region cell", row.instance_type);
            continue;
        }

        if row.price.is_empty() {
            continue;
        }

        let (hourly, per_accelerator) = parse_price_string(&row.price);
        if hourly == 0.0 {
            debug!(
                "Dropping {} row in {}: unusable price {:?}",
                row.instance_type, region, row.price
            );
            continue;
        }

        let region_code = region_code(&region).to_string();

        grouped
            .entry(row.instance_type.clone())
            .or_default()
            .push(PricingEntry {
                region,
                region_code,
                hourly_rate_usd: hourly,
                accelerator_hourly_rate_usd: per_accelerator,
            });
    }

    grouped
        .into_iter()
        .map(|(instance_type, entries)| {
            let info = instance_info(&instance_type);
            let pricing = InstanceTypePricing {
                instance_family: info.family.to_string(),
                accelerator_type: info.accelerator.to_string(),
                accelerator_count: info.count,
                pricing: entries,
            };
            (instance_type, pricing)
        })
        .collect()
}
