use contracts::domain::inventario::InventoryEntry;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::components::BackButton;
use crate::shared::fetch::get_json_array;
use crate::shared::inventory_cache;

#[component]
#[allow(non_snake_case)]
pub fn InventarioList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<InventoryEntry>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());

    let fetch = move || {
        spawn_local(async move {
            set_loading.set(true);
            match get_json_array::<InventoryEntry>("/inventario/total").await {
                Ok(entries) => {
                    // Keep the snapshot the process screens deduct from in
                    // step with what the operator just saw.
                    inventory_cache::store(&entries);
                    set_items.set(entries);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        fetch();
        inventory_cache::on_external_change(move || {
            set_items.set(inventory_cache::load());
        });
    });

    let filtrados = Memo::new(move |_| {
        let query = search.get().to_lowercase();
        items
            .get()
            .into_iter()
            .filter(|e| e.placa.to_lowercase().contains(&query))
            .collect::<Vec<_>>()
    });

    view! {
        <div style="padding: 20px; max-width: 800px; margin: 0 auto;">
            <BackButton to="/home" />
            <h1 style="color: #c8a165; margin-bottom: 20px;">"Inventario de Placas"</h1>

            <input
                type="text"
                placeholder="Buscar placa..."
                prop:value=move || search.get()
                on:input=move |ev| set_search.set(event_target_value(&ev))
                style="margin-bottom: 20px; padding: 10px; width: 100%; border: 1px solid #ccc; border-radius: 5px; font-size: 16px; box-sizing: border-box;"
            />

            {move || {
                if loading.get() {
                    view! { <p>"Cargando..."</p> }.into_any()
                } else if let Some(message) = error.get() {
                    view! { <p style="color: red;">{message}</p> }.into_any()
                } else if filtrados.get().is_empty() {
                    view! { <p>"No hay datos disponibles."</p> }.into_any()
                } else {
                    view! {
                        <table style="width: 100%; border-collapse: collapse;">
                            <thead>
                                <tr style="background-color: #c8a165; color: #fff;">
                                    <th style="padding: 10px; border: 1px solid #ddd;">"Placa"</th>
                                    <th style="padding: 10px; border: 1px solid #ddd;">"Cantidad"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {filtrados
                                    .get()
                                    .into_iter()
                                    .map(|entry| {
                                        view! {
                                            <tr>
                                                <td style="padding: 10px; border: 1px solid #ddd;">{entry.placa}</td>
                                                <td style="padding: 10px; border: 1px solid #ddd; text-align: right;">{entry.cantidad}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
