use serde::{Deserialize, Deserializer, Serialize};

/// One line of a work item's bill of materials (una placa consumida
/// por unidad producida).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLine {
    /// Material name, used as the inventory lookup key
    #[serde(rename = "DesProd")]
    pub des_prod: String,
    /// Quantity of material per unit produced (non-negative)
    #[serde(rename = "CantMat")]
    pub cant_mat: f64,
}

/// A pending unit of production work for one proceso, as served by
/// `/procesos/pendientes-{proceso}`.
///
/// The backend is inconsistent about `Placas`: some stages return it as a
/// native JSON array, others as a JSON-encoded string. Both shapes
/// deserialize to the same `Vec<MaterialLine>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    #[serde(rename = "ID")]
    pub id: i64,
    /// Nota de venta (sales order number)
    #[serde(rename = "NVNUMERO")]
    pub nv_numero: String,
    /// Client name
    #[serde(rename = "NOMAUX")]
    pub cliente: String,
    #[serde(rename = "FECHA_ENTREGA")]
    pub fecha_entrega: String,
    #[serde(rename = "PROCESO")]
    pub proceso: String,
    /// Product description
    #[serde(rename = "DETPROD")]
    pub producto: String,
    /// Quantity to produce at this stage
    #[serde(rename = "CANT_A_PROD", default)]
    pub cant_a_prod: f64,
    /// Total quantity on the nota de venta
    #[serde(rename = "NVCANT", default)]
    pub nv_cant: f64,
    #[serde(
        rename = "Placas",
        default,
        deserialize_with = "placas_string_or_list"
    )]
    pub placas: Vec<MaterialLine>,
}

/// Accepts `Placas` as a list, a JSON-encoded string of a list, or null.
fn placas_string_or_list<'de, D>(deserializer: D) -> Result<Vec<MaterialLine>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Lista(Vec<MaterialLine>),
        Texto(String),
        Nada(Option<()>),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Lista(lines) => Ok(lines),
        Raw::Texto(encoded) => serde_json::from_str(&encoded).map_err(serde::de::Error::custom),
        Raw::Nada(_) => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_json(placas: &str) -> String {
        format!(
            r#"{{
                "ID": 41,
                "NVNUMERO": "NV-1021",
                "NOMAUX": "Comercial Andina",
                "FECHA_ENTREGA": "2025-06-12",
                "PROCESO": "Encolado",
                "DETPROD": "Caja 40x30",
                "CANT_A_PROD": 120,
                "NVCANT": 500,
                "Placas": {placas}
            }}"#
        )
    }

    #[test]
    fn placas_as_native_array() {
        let item: WorkItem =
            serde_json::from_str(&item_json(r#"[{"DesProd":"PLACA-1","CantMat":2.0}]"#)).unwrap();
        assert_eq!(item.placas.len(), 1);
        assert_eq!(item.placas[0].des_prod, "PLACA-1");
        assert_eq!(item.placas[0].cant_mat, 2.0);
    }

    #[test]
    fn placas_as_encoded_string_matches_native_array() {
        let native: WorkItem =
            serde_json::from_str(&item_json(r#"[{"DesProd":"PLACA-1","CantMat":2.0}]"#)).unwrap();
        let encoded: WorkItem = serde_json::from_str(&item_json(
            r#""[{\"DesProd\":\"PLACA-1\",\"CantMat\":2.0}]""#,
        ))
        .unwrap();
        assert_eq!(native, encoded);
    }

    #[test]
    fn placas_null_or_missing_is_empty() {
        let item: WorkItem = serde_json::from_str(&item_json("null")).unwrap();
        assert!(item.placas.is_empty());

        let without: WorkItem = serde_json::from_str(
            r#"{"ID":1,"NVNUMERO":"NV-1","NOMAUX":"c","FECHA_ENTREGA":"","PROCESO":"Troquelado","DETPROD":"p"}"#,
        )
        .unwrap();
        assert!(without.placas.is_empty());
    }

    #[test]
    fn malformed_placas_string_is_an_error() {
        let result = serde_json::from_str::<WorkItem>(&item_json(r#""not json""#));
        assert!(result.is_err());
    }
}
