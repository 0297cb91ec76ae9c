use serde::{Deserialize, Serialize};

/// Per-stage status of one product line, nested inside a nota de venta
/// row from `/procesos/nv`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcesoEstado {
    #[serde(rename = "PROCESO")]
    pub proceso: String,
    #[serde(default)]
    pub cantidad_producida: f64,
    #[serde(rename = "ESTADO_PROC", default)]
    pub estado: String,
}

/// One nota de venta with the fabrication status of each of its procesos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotaVentaResumen {
    #[serde(rename = "NVNUMERO")]
    pub nv_numero: String,
    #[serde(rename = "DetProd")]
    pub producto: String,
    #[serde(rename = "NOMAUX")]
    pub cliente: String,
    pub procesos: Vec<ProcesoEstado>,
}
