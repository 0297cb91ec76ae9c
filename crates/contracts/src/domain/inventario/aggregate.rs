use serde::{Deserialize, Serialize};

/// A cached stock record, one per placa, as served by `/inventario/total`
/// and mirrored into the browser-local snapshot.
///
/// Historical payloads spelled the quantity field both `cantidad` and
/// `Cantidad` depending on the producing screen; the alias keeps the old
/// spelling readable while everything written here is lowercase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub placa: String,
    #[serde(alias = "Cantidad")]
    pub cantidad: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_capitalized_quantity_is_accepted() {
        let lower: InventoryEntry =
            serde_json::from_str(r#"{"placa":"PLACA-1","cantidad":10}"#).unwrap();
        let legacy: InventoryEntry =
            serde_json::from_str(r#"{"placa":"PLACA-1","Cantidad":10}"#).unwrap();
        assert_eq!(lower, legacy);
    }

    #[test]
    fn serializes_lowercase_only() {
        let entry = InventoryEntry {
            placa: "PLACA-1".into(),
            cantidad: 4.5,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"placa":"PLACA-1","cantidad":4.5}"#);
    }
}
