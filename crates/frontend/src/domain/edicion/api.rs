use contracts::domain::edicion::{EditPayload, EditRow};

use crate::shared::fetch::{get_json_array, post_json, FetchError};

pub async fn fetch_rows(proceso: &str) -> Result<Vec<EditRow>, FetchError> {
    get_json_array(&format!("/app/{proceso}")).await
}

pub async fn submit_edit(proceso: &str, payload: &EditPayload) -> Result<(), String> {
    post_json(&format!("/edits/edit-{proceso}"), payload).await
}
