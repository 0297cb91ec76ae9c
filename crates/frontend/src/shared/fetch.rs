//! JSON fetch helpers with the two failure modes the screens distinguish:
//! transport problems and unexpectedly-shaped bodies.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

use crate::shared::api_utils::api_url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport failure or non-2xx status
    Conexion,
    /// Body was not the expected array shape
    Formato,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Conexion => write!(
                f,
                "No se pudo obtener los datos. Revise su conexión o el servidor API."
            ),
            FetchError::Formato => write!(f, "Formato de respuesta inesperado."),
        }
    }
}

/// GET an endpoint that must return a JSON array of `T`.
///
/// A non-array body is a format error, not a connection error, so the
/// screens can tell the operator which of the two went wrong.
pub async fn get_json_array<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, FetchError> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|_| FetchError::Conexion)?;
    if !response.ok() {
        return Err(FetchError::Conexion);
    }

    let body: serde_json::Value = response.json().await.map_err(|_| FetchError::Formato)?;
    if !body.is_array() {
        return Err(FetchError::Formato);
    }
    serde_json::from_value(body).map_err(|_| FetchError::Formato)
}

/// POST a JSON body; only the HTTP status is consumed from the reply.
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }
    Ok(())
}
