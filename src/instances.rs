//! Instance type metadata: family, accelerator chip, accelerator count

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Hardware metadata for an instance type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceInfo {
    pub family: &'static str,
    pub accelerator: &'static str,
    pub count: u32,
}

const fn info(family: &'static str, accelerator: &'static str, count: u32) -> InstanceInfo {
    InstanceInfo {
        family,
        accelerator,
        count,
    }
}

static INSTANCE_TYPE_INFO: Lazy<HashMap<&'static str, InstanceInfo>> = Lazy::new(|| {
    HashMap::from([
        // P6e (UltraServer) - GB200
        ("u-p6e-gb200x72", info("P6e", "GB200", 72)),
        ("u-p6e-gb200x36", info("P6e", "GB200", 36)),
        // P6-B300
        ("p6-b300.48xlarge", info("P6-B300", "B300", 8)),
        // P6-B200
        ("p6-b200.48xlarge", info("P6-B200", "B200", 8)),
        // P5
        ("p5.48xlarge", info("P5", "H100", 8)),
        ("p5.4xlarge", info("P5", "H100", 1)),
        // P5e
        ("p5e.48xlarge", info("P5e", "H200", 8)),
        // P5en
        ("p5en.48xlarge", info("P5en", "H200", 8)),
        // P4d
        ("p4d.24xlarge", info("P4d", "A100", 8)),
        ("p4de.24xlarge", info("P4de", "A100", 8)),
        // Trainium
        ("trn1.32xlarge", info("Trn1", "Trainium", 16)),
        ("trn2.3xlarge", info("Trn2", "Trainium2", 1)),
        ("trn2.48xlarge", info("Trn2", "Trainium2", 16)),
    ])
});

/// Resolve metadata for an instance type.
///
/// Exact table lookup first, then prefix inference for types the table does
/// not list yet. Never fails; unrecognized types come back as
/// `("Unknown", "Unknown", 0)`.
pub fn instance_info(instance_type: &str) -> InstanceInfo {
    match INSTANCE_TYPE_INFO.get(instance_type) {
        Some(found) => *found,
        None => infer_instance_info(instance_type),
    }
}

/// Prefix rules, longer variants first so "p5en"/"p5e" never match as "p5"
/// and "p6-b300"/"p6-b200" never match a bare "p6" rule.
fn infer_instance_info(instance_type: &str) -> InstanceInfo {
    if instance_type.starts_with("p5en") {
        info("P5en", "H200", 8)
    } else if instance_type.starts_with("p5e") {
        info("P5e", "H200", 8)
    } else if instance_type.starts_with("p5") {
        let count = if instance_type.contains("48xlarge") { 8 } else { 1 };
        info("P5", "H100", count)
    } else if instance_type.starts_with("p6-b300") {
        info("P6-B300", "B300", 8)
    } else if instance_type.starts_with("p6-b200") {
        info("P6-B200", "B200", 8)
    } else if instance_type.starts_with("u-p6e") {
        if instance_type.contains("x72") {
            info("P6e", "GB200", 72)
        } else if instance_type.contains("x36") {
            info("P6e", "GB200", 36)
        } else {
            info("P6e", "GB200", 0)
        }
    } else if instance_type.starts_with("p4de") {
        info("P4de", "A100", 8)
    } else if instance_type.starts_with("p4d") {
        info("P4d", "A100", 8)
    } else if instance_type.starts_with("trn2") {
        let count = if instance_type.contains("48xlarge") { 16 } else { 1 };
        info("Trn2", "Trainium2", count)
    } else if instance_type.starts_with("trn1") {
        info("Trn1", "Trainium", 16)
    } else {
        info("Unknown", "Unknown", 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_table_lookup() {
        assert_eq!(instance_info("p5.48xlarge"), info("P5", "H100", 8));
        assert_eq!(instance_info("trn2.3xlarge"), info("Trn2", "Trainium2", 1));
        assert_eq!(instance_info("u-p6e-gb200x72"), info("P6e", "GB200", 72));
    }

    #[test]
    fn test_prefix_ordering_p5_variants() {
        // "p5en" and "p5e" must win over the shorter "p5" prefix
        assert_eq!(instance_info("p5en.96xlarge"), info("P5en", "H200", 8));
        assert_eq!(instance_info("p5e.96xlarge"), info("P5e", "H200", 8));
        assert_eq!(instance_info("p5.96xlarge"), info("P5", "H100", 1));
    }

    #[test]
    fn test_p5_count_depends_on_size_suffix() {
        assert_eq!(instance_info("p5.48xlarge2").count, 8);
        assert_eq!(instance_info("p5.8xlarge").count, 1);
    }

    #[test]
    fn test_p6_b300_and_b200_inference() {
        assert_eq!(instance_info("p6-b300.96xlarge"), info("P6-B300", "B300", 8));
        assert_eq!(instance_info("p6-b200.96xlarge"), info("P6-B200", "B200", 8));
    }

    #[test]
    fn test_ultraserver_size_suffixes() {
        assert_eq!(instance_info("u-p6e-gb200x72v2").count, 72);
        assert_eq!(instance_info("u-p6e-gb200x36v2").count, 36);
        assert_eq!(instance_info("u-p6e-gb200"), info("P6e", "GB200", 0));
    }

    #[test]
    fn test_p4de_before_p4d() {
        assert_eq!(instance_info("p4de.48xlarge"), info("P4de", "A100", 8));
        assert_eq!(instance_info("p4d.48xlarge"), info("P4d", "A100", 8));
    }

    #[test]
    fn test_trainium_counts() {
        assert_eq!(instance_info("trn2.48xlarge9"), info("Trn2", "Trainium2", 16));
        assert_eq!(instance_info("trn2.6xlarge"), info("Trn2", "Trainium2", 1));
        assert_eq!(instance_info("trn1.2xlarge"), info("Trn1", "Trainium", 16));
    }

    #[test]
    fn test_unrecognized_type_falls_back() {
        assert_eq!(instance_info("m5.large"), info("Unknown", "Unknown", 0));
        assert_eq!(instance_info(""), info("Unknown", "Unknown", 0));
    }
}
