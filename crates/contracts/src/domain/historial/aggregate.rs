use serde::{Deserialize, Serialize};

/// One completed process run from `/reportes/historial`.
///
/// The report mixes per-run measurements with a snapshot of the stock at
/// the time of the run; most text columns can come back null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorialRow {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "ID_PROCESO")]
    pub id_proceso: i64,
    #[serde(rename = "NVNUMERO")]
    pub nv_numero: i64,
    #[serde(rename = "NVCANT", default)]
    pub nv_cant: f64,
    #[serde(rename = "CANTIDAD", default)]
    pub cantidad: f64,
    #[serde(rename = "CODPROD")]
    pub cod_prod: Option<String>,
    #[serde(rename = "DETPROD")]
    pub det_prod: Option<String>,
    #[serde(rename = "PROCESO")]
    pub proceso: Option<String>,
    #[serde(rename = "FECHA")]
    pub fecha: Option<String>,
    #[serde(rename = "FECHA_ENTREGA")]
    pub fecha_entrega: String,
    #[serde(rename = "USER")]
    pub usuario: Option<String>,
    #[serde(rename = "NUMERO_PERSONAS", default)]
    pub numero_personas: i64,
    #[serde(rename = "TIEMPO_TOTAL", default)]
    pub tiempo_total: f64,
    #[serde(rename = "PLACA")]
    pub placa: Option<Vec<String>>,
    #[serde(rename = "PLACAS_USADAS")]
    pub placas_usadas: Option<Vec<f64>>,
    #[serde(rename = "PLACAS_BUENAS")]
    pub placas_buenas: Option<Vec<f64>>,
    #[serde(rename = "PLACAS_MALAS")]
    pub placas_malas: Option<Vec<f64>>,
    #[serde(rename = "STOCK")]
    pub stock: Option<String>,
    #[serde(rename = "STOCK_CANT", default)]
    pub stock_cant: f64,
    pub despunte: bool,
}
