//! Embedded JSON extraction from the pricing page HTML
//!
//! The page does not serve pricing through an API. Each rendered table is
//! embedded as double-encoded JSON inside a `<script type="application/json">`
//! tag: the outer envelope carries the inner table document as an escaped
//! string under `data.items[].fields.jsonData`. Both decode passes can fail
//! per item; failures skip that item and never abort the scan.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Script blocks of the JSON content type (compiled once)
static SCRIPT_JSON_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<script type="application/json">(.*?)</script>"#)
        .expect("Hardcoded regex pattern should be valid")
});

/// One pricing table row before normalization
///
/// `region` and `price` may still contain markup; the normalizer cleans them.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub instance_type: String,
    pub region: String,
    pub price: String,
    /// Title of the table the row came from
    pub heading: String,
}

/// Outer envelope around one or more table documents
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: EnvelopeData,
}

#[derive(Debug, Default, Deserialize)]
struct EnvelopeData {
    #[serde(default)]
    items: Vec<EnvelopeItem>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeItem {
    #[serde(default)]
    fields: ItemFields,
}

#[derive(Debug, Default, Deserialize)]
struct ItemFields {
    /// The inner table document, JSON-encoded a second time
    #[serde(rename = "jsonData", default)]
    json_data: String,
}

/// Inner document describing one rendered table
#[derive(Debug, Deserialize)]
struct TableDocument {
    #[serde(default)]
    heading: String,
    #[serde(default)]
    table: TableData,
}

#[derive(Debug, Default, Deserialize)]
struct TableData {
    #[serde(rename = "rowDefinitions", default)]
    row_definitions: Vec<RowDefinition>,
    #[serde(default)]
    items: Vec<serde_json::Map<String, Value>>,
}

/// Maps an internal row id to its label, which is the instance type name
#[derive(Debug, Deserialize)]
struct RowDefinition {
    id: String,
    #[serde(default)]
    label: String,
}

/// Positional column keys baked into the table rendering schema. If the
/// site's renderer shifts columns, this enum is the only place to touch.
#[derive(Debug, Clone, Copy)]
enum Column {
    Region,
    Price,
}

impl Column {
    fn key(self) -> &'static str {
        match self {
            Column::Region => "2",
            Column::Price => "3",
        }
    }
}

fn column_text(item: &serde_json::Map<String, Value>, column: Column) -> &str {
    item.get(column.key())
        .and_then(Value::as_str)
        .unwrap_or_default()
}

/// Collect raw pricing rows from every embedded JSON table in the page.
///
/// Tables whose heading lacks the substring "Pricing" (feature comparisons
/// and the like) are discarded. Malformed scripts, unparseable payloads, and
/// incomplete rows are skipped; the caller decides whether an empty result
/// is an error.
pub fn extract_json_data(html: &str) -> Vec<RawRow> {
    let mut all_rows = Vec::new();

    for caps in SCRIPT_JSON_RE.captures_iter(html) {
        let envelope: Envelope = match serde_json::from_str(&caps[1]) {
            Ok(envelope) => envelope,
            Err(err) => {
                debug!("Skipping script block with non-envelope JSON: {}", err);
                continue;
            }
        };

        for item in envelope.data.items {
            if item.fields.json_data.is_empty() {
                continue;
            }

            let table_doc: TableDocument = match serde_json::from_str(&item.fields.json_data) {
                Ok(table_doc) => table_doc,
                Err(err) => {
                    debug!("Skipping unparseable jsonData payload: {}", err);
                    continue;
                }
            };

            if !table_doc.heading.contains("Pricing") {
                debug!("Skipping non-pricing table: {:?}", table_doc.heading);
                continue;
            }

            let row_labels: HashMap<&str, &str> = table_doc
                .table
                .row_definitions
                .iter()
                .map(|row| (row.id.as_str(), row.label.as_str()))
                .collect();

            for table_item in &table_doc.table.items {
                let row_id = table_item
                    .get("idProperty")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                let instance_type = row_labels.get(row_id).copied().unwrap_or_default();
                let region = column_text(table_item, Column::Region);
                let price = column_text(table_item, Column::Price);

                if !instance_type.is_empty() && !region.is_empty() && !price.is_empty() {
                    all_rows.push(RawRow {
                        instance_type: instance_type.to_string(),
                        region: region.to_string(),
                        price: price.to_string(),
                        heading: table_doc.heading.clone(),
                    });
                }
            }
        }
    }

    all_rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Build a page fragment with one embedded table, double-encoding the
    /// inner document the way the real page does.
    fn page_with_table(heading: &str, rows: &[(&str, &str, &str, &str)]) -> String {
        let row_definitions: Vec<Value> = rows
            .iter()
            .map(|(id, label, _, _)| json!({"id": id, "label": label}))
            .collect();
        let items: Vec<Value> = rows
            .iter()
            .map(|(id, _, region, price)| json!({"idProperty": id, "2": region, "3": price}))
            .collect();

        let table_doc = json!({
            "heading": heading,
            "table": {"rowDefinitions": row_definitions, "items": items},
        });
        let envelope = json!({
            "data": {"items": [{"fields": {"jsonData": table_doc.to_string()}}]},
        });

        format!(
            "<html><body><script type=\"application/json\">{}</script></body></html>",
            envelope
        )
    }

    #[test]
    fn test_extracts_pricing_rows() {
        let html = page_with_table(
            "P5 Instance Pricing",
            &[("r1", "p5.48xlarge", "US East (N. Virginia)", "$31.464 USD ($3.933 USD)")],
        );

        let rows = extract_json_data(&html);
        assert_eq!(
            rows,
            vec![RawRow {
                instance_type: "p5.48xlarge".to_string(),
                region: "US East (N. Virginia)".to_string(),
                price: "$31.464 USD ($3.933 USD)".to_string(),
                heading: "P5 Instance Pricing".to_string(),
            }]
        );
    }

    #[test]
    fn test_rejects_non_pricing_heading() {
        let html = page_with_table(
            "Feature Comparison",
            &[("r1", "p5.48xlarge", "US East (N. Virginia)", "$31.464 USD")],
        );

        assert!(extract_json_data(&html).is_empty());
    }

    #[test]
    fn test_no_script_tags_yields_empty() {
        assert!(extract_json_data("<html><body><p>hello</p></body></html>").is_empty());
    }

    #[test]
    fn test_malformed_script_is_skipped() {
        let good = page_with_table(
            "Trn2 Instance Pricing",
            &[("r1", "trn2.48xlarge", "US West (Oregon)", "$10 USD")],
        );
        let html = format!(
            "<script type=\"application/json\">not json at all</script>{}",
            good
        );

        let rows = extract_json_data(&html);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].instance_type, "trn2.48xlarge");
    }

    #[test]
    fn test_malformed_inner_json_is_skipped() {
        let envelope = json!({
            "data": {"items": [{"fields": {"jsonData": "{ truncated"}}]},
        });
        let html = format!(
            "<script type=\"application/json\">{}</script>",
            envelope
        );

        assert!(extract_json_data(&html).is_empty());
    }

    #[test]
    fn test_missing_json_data_field_is_skipped() {
        let envelope = json!({"data": {"items": [{"fields": {}}]}});
        let html = format!(
            "<script type=\"application/json\">{}</script>",
            envelope
        );

        assert!(extract_json_data(&html).is_empty());
    }

    #[test]
    fn test_row_with_unknown_id_property_is_dropped() {
        let table_doc = json!({
            "heading": "P5 Instance Pricing",
            "table": {
                "rowDefinitions": [{"id": "r1", "label": "p5.48xlarge"}],
                "items": [{"idProperty": "r9", "2": "US East (Ohio)", "3": "$5 USD"}],
            },
        });
        let envelope = json!({
            "data": {"items": [{"fields": {"jsonData": table_doc.to_string()}}]},
        });
        let html = format!(
            "<script type=\"application/json\">{}</script>",
            envelope
        );

        assert!(extract_json_data(&html).is_empty());
    }

    #[test]
    fn test_row_with_missing_column_is_dropped() {
        let table_doc = json!({
            "heading": "P5 Instance Pricing",
            "table": {
                "rowDefinitions": [{"id": "r1", "label": "p5.48xlarge"}],
                "items": [{"idProperty": "r1", "2": "US East (Ohio)"}],
            },
        });
        let envelope = json!({
            "data": {"items": [{"fields": {"jsonData": table_doc.to_string()}}]},
        });
        let html = format!(
            "<script type=\"application/json\">{}</script>",
            envelope
        );

        assert!(extract_json_data(&html).is_empty());
    }

    #[test]
    fn test_multiple_tables_across_scripts() {
        let first = page_with_table(
            "P5 Instance Pricing",
            &[("r1", "p5.48xlarge", "US East (N. Virginia)", "$31.464 USD")],
        );
        let second = page_with_table(
            "Trn1 Instance Pricing",
            &[("r1", "trn1.32xlarge", "US West (Oregon)", "$17.722 USD")],
        );
        let html = format!("{}{}", first, second);

        let rows = extract_json_data(&html);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].heading, "P5 Instance Pricing");
        assert_eq!(rows[1].heading, "Trn1 Instance Pricing");
    }

    #[test]
    fn test_multiline_script_content() {
        let table_doc = json!({
            "heading": "P4d Instance Pricing",
            "table": {
                "rowDefinitions": [{"id": "r1", "label": "p4d.24xlarge"}],
                "items": [{"idProperty": "r1", "2": "Europe (Ireland)", "3": "$24.17 USD"}],
            },
        });
        let envelope = json!({
            "data": {"items": [{"fields": {"jsonData": table_doc.to_string()}}]},
        });
        // Pretty-printed payloads span lines; the scan must cross them
        let html = format!(
            "<script type=\"application/json\">\n{}\n</script>",
            serde_json::to_string_pretty(&envelope).unwrap()
        );

        assert_eq!(extract_json_data(&html).len(), 1);
    }
}
