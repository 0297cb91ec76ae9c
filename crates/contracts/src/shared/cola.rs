//! Per-destination selection queue and its submission payload.
//!
//! Queue order is submission priority order; the operator reorders rows
//! with move up/down and can return a row to the pending list.

use crate::domain::pendientes::WorkItem;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A confirmed work item waiting in a destination queue.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedItem {
    pub item: WorkItem,
    /// Cantidad a fabricar chosen by the operator
    pub cant_a_fabricar: i64,
    /// Material names, aligned with `placas_usadas`; empty when the row
    /// was confirmed sin consumo de placas
    pub transformed_placas: Vec<String>,
    pub placas_usadas: Vec<f64>,
}

/// A queued row as returned by the `/app/encolado` and `/app/encolado2`
/// preload endpoints, where both arrays come back JSON-encoded in string
/// columns.
#[derive(Debug, Clone, Deserialize)]
pub struct ColaRow {
    #[serde(flatten)]
    pub item: WorkItem,
    #[serde(rename = "CANT_A_FABRICAR", default)]
    pub cant_a_fabricar: i64,
    #[serde(rename = "PLACAS_A_USAR", default)]
    pub placas_a_usar: Option<String>,
    #[serde(rename = "CANTIDAD_PLACAS", default)]
    pub cantidad_placas: Option<String>,
}

impl From<ColaRow> for SelectedItem {
    fn from(row: ColaRow) -> Self {
        // An unreadable column degrades to "no consumption recorded",
        // matching how the screens always treated it.
        let transformed_placas = row
            .placas_a_usar
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default();
        let placas_usadas = row
            .cantidad_placas
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default();
        Self {
            item: row.item,
            cant_a_fabricar: row.cant_a_fabricar,
            transformed_placas,
            placas_usadas,
        }
    }
}

/// One row of the `{items: [...]}` body posted to `/app/update-{proceso}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRow {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "CANT_A_FABRICAR")]
    pub cant_a_fabricar: i64,
    #[serde(rename = "transformedPlacas")]
    pub transformed_placas: Vec<String>,
    #[serde(rename = "placasUsadas")]
    pub placas_usadas: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateBatch {
    pub items: Vec<UpdateRow>,
}

/// Submitting an empty queue is refused before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColaVacia;

impl fmt::Display for ColaVacia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No hay elementos seleccionados.")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionQueue {
    entries: Vec<SelectedItem>,
}

impl From<Vec<SelectedItem>> for SelectionQueue {
    fn from(entries: Vec<SelectedItem>) -> Self {
        Self { entries }
    }
}

impl SelectionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[SelectedItem] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: SelectedItem) {
        self.entries.push(entry);
    }

    /// Swap with the previous row; no-op for the first row.
    pub fn move_up(&mut self, index: usize) {
        if index > 0 && index < self.entries.len() {
            self.entries.swap(index - 1, index);
        }
    }

    /// Swap with the next row; no-op for the last row.
    pub fn move_down(&mut self, index: usize) {
        if index + 1 < self.entries.len() {
            self.entries.swap(index, index + 1);
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<SelectedItem> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Serialize the queue in priority order; an empty queue is an error
    /// so the caller can block the submission synchronously.
    pub fn build_payload(&self) -> Result<UpdateBatch, ColaVacia> {
        if self.entries.is_empty() {
            return Err(ColaVacia);
        }
        Ok(UpdateBatch {
            items: self
                .entries
                .iter()
                .map(|entry| UpdateRow {
                    id: entry.item.id,
                    cant_a_fabricar: entry.cant_a_fabricar,
                    transformed_placas: entry.transformed_placas.clone(),
                    placas_usadas: entry.placas_usadas.clone(),
                })
                .collect(),
        })
    }
}

/// Return a removed work item to the pending list.
///
/// The list is re-sorted to the original fetch order (stable by original
/// index; unknown items sort last). Re-inserting an id already present is
/// a no-op.
pub fn restore_pending(pendientes: &mut Vec<WorkItem>, original: &[WorkItem], item: WorkItem) {
    if pendientes.iter().any(|p| p.id == item.id) {
        return;
    }
    pendientes.push(item);
    let position =
        |id: i64| original.iter().position(|o| o.id == id).unwrap_or(usize::MAX);
    pendientes.sort_by_key(|p| position(p.id));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work_item(id: i64) -> WorkItem {
        WorkItem {
            id,
            nv_numero: format!("NV-{id}"),
            cliente: "Comercial Andina".into(),
            fecha_entrega: "2025-06-12".into(),
            proceso: "Encolado".into(),
            producto: format!("Caja {id}"),
            cant_a_prod: 100.0,
            nv_cant: 500.0,
            placas: Vec::new(),
        }
    }

    fn selected(id: i64) -> SelectedItem {
        SelectedItem {
            item: work_item(id),
            cant_a_fabricar: 10,
            transformed_placas: vec!["PLACA-1".into()],
            placas_usadas: vec![20.0],
        }
    }

    fn ids(queue: &SelectionQueue) -> Vec<i64> {
        queue.entries().iter().map(|e| e.item.id).collect()
    }

    #[test]
    fn boundary_moves_are_noops() {
        let mut queue = SelectionQueue::new();
        queue.push(selected(1));
        queue.push(selected(2));
        queue.push(selected(3));

        queue.move_up(0);
        assert_eq!(ids(&queue), vec![1, 2, 3]);
        queue.move_down(2);
        assert_eq!(ids(&queue), vec![1, 2, 3]);

        queue.move_up(2);
        assert_eq!(ids(&queue), vec![1, 3, 2]);
        queue.move_down(0);
        assert_eq!(ids(&queue), vec![3, 1, 2]);
    }

    #[test]
    fn empty_queue_refuses_payload() {
        let queue = SelectionQueue::new();
        assert_eq!(queue.build_payload(), Err(ColaVacia));
    }

    #[test]
    fn payload_uses_wire_field_names_in_queue_order() {
        let mut queue = SelectionQueue::new();
        queue.push(selected(2));
        queue.push(selected(1));

        let batch = queue.build_payload().unwrap();
        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(json["items"][0]["ID"], 2);
        assert_eq!(json["items"][1]["ID"], 1);
        assert_eq!(json["items"][0]["CANT_A_FABRICAR"], 10);
        assert_eq!(json["items"][0]["transformedPlacas"][0], "PLACA-1");
        assert_eq!(json["items"][0]["placasUsadas"][0], 20.0);
    }

    #[test]
    fn removed_item_restores_at_original_position() {
        let original: Vec<WorkItem> = (1..=4).map(work_item).collect();
        // Items 2 and 3 were taken into a queue.
        let mut pendientes = vec![work_item(1), work_item(4)];

        restore_pending(&mut pendientes, &original, work_item(3));
        let ids: Vec<i64> = pendientes.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);

        // A duplicate restore changes nothing.
        restore_pending(&mut pendientes, &original, work_item(3));
        assert_eq!(pendientes.len(), 3);
    }

    #[test]
    fn cola_row_decodes_encoded_columns() {
        let row: ColaRow = serde_json::from_str(
            r#"{
                "ID": 9, "NVNUMERO": "NV-9", "NOMAUX": "c", "FECHA_ENTREGA": "",
                "PROCESO": "Encolado", "DETPROD": "p",
                "CANT_A_FABRICAR": 25,
                "PLACAS_A_USAR": "[\"PLACA-1\"]",
                "CANTIDAD_PLACAS": "[50]"
            }"#,
        )
        .unwrap();
        let entry = SelectedItem::from(row);
        assert_eq!(entry.cant_a_fabricar, 25);
        assert_eq!(entry.transformed_placas, vec!["PLACA-1"]);
        assert_eq!(entry.placas_usadas, vec![50.0]);
    }

    #[test]
    fn cola_row_with_broken_columns_degrades_to_empty() {
        let row: ColaRow = serde_json::from_str(
            r#"{
                "ID": 9, "NVNUMERO": "NV-9", "NOMAUX": "c", "FECHA_ENTREGA": "",
                "PROCESO": "Encolado", "DETPROD": "p",
                "PLACAS_A_USAR": "oops"
            }"#,
        )
        .unwrap();
        let entry = SelectedItem::from(row);
        assert_eq!(entry.cant_a_fabricar, 0);
        assert!(entry.transformed_placas.is_empty());
        assert!(entry.placas_usadas.is_empty());
    }
}
