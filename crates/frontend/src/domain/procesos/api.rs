use contracts::domain::pendientes::WorkItem;
use contracts::shared::cola::{ColaRow, SelectedItem, UpdateBatch};

use crate::shared::fetch::{get_json_array, post_json, FetchError};

/// Fetch the pending work items of a stage. `Placas` normalization
/// (JSON string vs native array) happens in the `WorkItem` deserializer.
pub async fn fetch_pendientes(path: &str) -> Result<Vec<WorkItem>, FetchError> {
    get_json_array::<WorkItem>(path).await
}

/// Preload the rows already queued for a destination (Encolado keeps its
/// queues server-side between sessions).
pub async fn fetch_cola(path: &str) -> Result<Vec<SelectedItem>, FetchError> {
    let rows = get_json_array::<ColaRow>(path).await?;
    Ok(rows.into_iter().map(SelectedItem::from).collect())
}

/// Submit a queue to its destination's update endpoint.
pub async fn submit_batch(path: &str, batch: &UpdateBatch) -> Result<(), String> {
    post_json(path, batch).await
}
