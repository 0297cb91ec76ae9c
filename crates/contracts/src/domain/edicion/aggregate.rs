use anyhow::Context;
use serde::{Deserialize, Serialize};

/// A row already queued for a proceso, as returned by `/app/{proceso}`.
///
/// `PLACAS_A_USAR` and `CANTIDAD_PLACAS` are stored by the backend as
/// JSON-encoded arrays inside string columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditRow {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "NVNUMERO")]
    pub nv_numero: String,
    #[serde(rename = "NOMAUX")]
    pub cliente: String,
    #[serde(rename = "FECHA_ENTREGA")]
    pub fecha_entrega: String,
    #[serde(rename = "PROCESO")]
    pub proceso: String,
    #[serde(rename = "DETPROD")]
    pub producto: String,
    #[serde(rename = "CANTPROD", default)]
    pub cant_prod: f64,
    #[serde(rename = "CANT_A_FABRICAR", default)]
    pub cant_a_fabricar: i64,
    #[serde(rename = "PLACAS_A_USAR", default)]
    pub placas_a_usar: Option<String>,
    #[serde(rename = "CANTIDAD_PLACAS", default)]
    pub cantidad_placas: Option<String>,
}

/// Correction posted to `/edits/edit-{proceso}`; the two array columns go
/// back JSON-encoded, matching how the queue screens wrote them.
#[derive(Debug, Clone, Serialize)]
pub struct EditPayload {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "CANT_A_FABRICAR")]
    pub cant_a_fabricar: i64,
    #[serde(rename = "PLACAS_A_USAR")]
    pub placas_a_usar: String,
    #[serde(rename = "CANTIDAD_PLACAS")]
    pub cantidad_placas: String,
}

impl EditPayload {
    pub fn new(id: i64, cant_a_fabricar: i64, placas: &[String], cantidades: &[String]) -> Self {
        Self {
            id,
            cant_a_fabricar,
            placas_a_usar: serde_json::to_string(placas).unwrap_or_else(|_| "[]".to_string()),
            cantidad_placas: serde_json::to_string(cantidades).unwrap_or_else(|_| "[]".to_string()),
        }
    }
}

/// Decode a `PLACAS_A_USAR` column into its material names.
pub fn decode_placas(raw: &str) -> anyhow::Result<Vec<String>> {
    serde_json::from_str(raw).with_context(|| format!("PLACAS_A_USAR no es una lista: {raw}"))
}

/// Decode a `CANTIDAD_PLACAS` column into editable quantity strings.
/// Quantities were written both as numbers and as strings over time.
pub fn decode_cantidades(raw: &str) -> anyhow::Result<Vec<String>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(raw)
        .with_context(|| format!("CANTIDAD_PLACAS no es una lista: {raw}"))?;
    Ok(values
        .into_iter()
        .map(|v| match v {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_mixed_quantity_encodings() {
        assert_eq!(
            decode_cantidades(r#"[8, "12.50", 3]"#).unwrap(),
            vec!["8", "12.50", "3"]
        );
        assert!(decode_cantidades("no json").is_err());
    }

    #[test]
    fn payload_reencodes_columns_as_json_strings() {
        let payload = EditPayload::new(7, 40, &["PLACA-1".into()], &["80".into()]);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["PLACAS_A_USAR"], r#"["PLACA-1"]"#);
        assert_eq!(json["CANTIDAD_PLACAS"], r#"["80"]"#);
    }
}
