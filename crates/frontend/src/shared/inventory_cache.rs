//! Browser-local snapshot of the placa inventory.
//!
//! Populated wholesale from `/inventario/total` when the operator lands
//! on the home screen, deducted by every process screen confirmation and
//! always persisted as one write. It is a cache, not the source of truth:
//! the backend reconciles real stock through the normal production
//! updates.

use contracts::domain::inventario::InventoryEntry;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, StorageEvent};

const INVENTORY_KEY: &str = "inventoryData";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read the snapshot; an absent or unreadable cache is an empty one.
pub fn load() -> Vec<InventoryEntry> {
    let raw = match get_local_storage().and_then(|s| s.get_item(INVENTORY_KEY).ok().flatten()) {
        Some(raw) => raw,
        None => return Vec::new(),
    };
    serde_json::from_str(&raw).unwrap_or_default()
}

/// Persist the whole snapshot in a single write.
pub fn store(entries: &[InventoryEntry]) {
    if let (Some(storage), Ok(raw)) = (get_local_storage(), serde_json::to_string(entries)) {
        let _ = storage.set_item(INVENTORY_KEY, &raw);
    }
}

pub fn clear() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(INVENTORY_KEY);
    }
}

/// Run `callback` whenever another tab rewrites the snapshot.
///
/// Storage events only fire for writes made by other tabs, so this is the
/// cross-tab refresh hook; the merge semantics are last-write-wins.
pub fn on_external_change(callback: impl Fn() + 'static) {
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Some(storage_event) = event.dyn_ref::<StorageEvent>() {
            if storage_event.key().as_deref() == Some(INVENTORY_KEY) {
                callback();
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = window() {
        let _ = window.add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
