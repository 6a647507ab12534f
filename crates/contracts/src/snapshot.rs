use crate::domain::a001_sales_order::SalesOrder;
use crate::domain::a002_fabric_order::FabricOrder;
use crate::domain::a003_development::Development;
use serde::{Deserialize, Serialize};

/// The full payload returned by the spreadsheet macro, fetched once per
/// page load and replaced wholesale on every fetch.
///
/// Later sheet revisions renamed `fabric_po` to `fabric`; both spellings
/// are accepted. Any group absent from the payload is an empty collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductionSnapshot {
    #[serde(default)]
    pub sales_po: Vec<SalesOrder>,
    #[serde(default, alias = "fabric")]
    pub fabric_po: Vec<FabricOrder>,
    #[serde(default)]
    pub insert_pattern: Vec<Development>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_groups_default_to_empty() {
        let snap: ProductionSnapshot = serde_json::from_str(r#"{}"#).unwrap();
        assert!(snap.sales_po.is_empty());
        assert!(snap.fabric_po.is_empty());
        assert!(snap.insert_pattern.is_empty());
    }

    #[test]
    fn test_legacy_fabric_alias() {
        let snap: ProductionSnapshot =
            serde_json::from_str(r#"{"fabric": [{"ORDER REF": "PO0001"}]}"#).unwrap();
        assert_eq!(snap.fabric_po.len(), 1);
    }
}
