use contracts::domain::historial::HistorialRow;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::components::BackButton;
use crate::shared::fetch::get_json_array;

fn or_dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

fn join_or_dash<T: ToString>(values: &Option<Vec<T>>) -> String {
    match values {
        Some(list) => list
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        None => "-".to_string(),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn HistorialList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<HistorialRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match get_json_array::<HistorialRow>("/reportes/historial").await {
                Ok(rows) => set_items.set(rows),
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_items.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    });

    // The report has no client column of its own; the search matches the
    // product code and description instead.
    let filtrados = Memo::new(move |_| {
        let query = search.get().to_lowercase();
        items
            .get()
            .into_iter()
            .filter(|item| {
                item.cod_prod
                    .as_deref()
                    .map(|v| v.to_lowercase().contains(&query))
                    .unwrap_or(false)
                    || item
                        .det_prod
                        .as_deref()
                        .map(|v| v.to_lowercase().contains(&query))
                        .unwrap_or(false)
            })
            .collect::<Vec<_>>()
    });

    view! {
        <div style="overflow-x: auto; padding: 20px;">
            <BackButton to="/home" />
            <h2>"Historial de Procesos"</h2>
            <input
                type="text"
                placeholder="Buscar cliente..."
                prop:value=move || search.get()
                on:input=move |ev| set_search.set(event_target_value(&ev))
                style="margin-bottom: 16px; padding: 14px; width: 600px; font-size: 20px; border: 1px solid #ccc; border-radius: 6px;"
            />

            {move || {
                if loading.get() {
                    view! { <div>"Cargando..."</div> }.into_any()
                } else if let Some(message) = error.get() {
                    view! { <div style="color: red;">{message}</div> }.into_any()
                } else {
                    view! {
                        <table style="border-collapse: collapse; width: 100%;">
                            <thead>
                                <tr style="background-color: #c8a165; color: #fff;">
                                    <th style="border: 1px solid #ccc; padding: 8px;">"Fecha"</th>
                                    <th style="border: 1px solid #ccc; padding: 8px;">"ID"</th>
                                    <th style="border: 1px solid #ccc; padding: 8px;">"Nota Venta"</th>
                                    <th style="border: 1px solid #ccc; padding: 8px;">"Producto"</th>
                                    <th style="border: 1px solid #ccc; padding: 8px;">"Cliente"</th>
                                    <th style="border: 1px solid #ccc; padding: 8px;">"Proceso"</th>
                                    <th style="border: 1px solid #ccc; padding: 8px;">"Cantidad"</th>
                                    <th style="border: 1px solid #ccc; padding: 8px;">"Placas"</th>
                                    <th style="border: 1px solid #ccc; padding: 8px;">"Placas Usadas"</th>
                                    <th style="border: 1px solid #ccc; padding: 8px;">"Placas Buenas"</th>
                                    <th style="border: 1px solid #ccc; padding: 8px;">"Placas Malas"</th>
                                    <th style="border: 1px solid #ccc; padding: 8px;">"Personas"</th>
                                    <th style="border: 1px solid #ccc; padding: 8px;">"Tiempo Total"</th>
                                    <th style="border: 1px solid #ccc; padding: 8px;">"Stock"</th>
                                    <th style="border: 1px solid #ccc; padding: 8px;">"Stock Cant"</th>
                                    <th style="border: 1px solid #ccc; padding: 8px;">"Despunte"</th>
                                    <th style="border: 1px solid #ccc; padding: 8px;">"Fecha Entrega"</th>
                                    <th style="border: 1px solid #ccc; padding: 8px;">"Usuario"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {filtrados
                                    .get()
                                    .into_iter()
                                    .map(|item| {
                                        view! {
                                            <tr>
                                                <td style="border: 1px solid #ccc; padding: 8px;">{or_dash(&item.fecha)}</td>
                                                <td style="border: 1px solid #ccc; padding: 8px;">{item.id}</td>
                                                <td style="border: 1px solid #ccc; padding: 8px;">{item.nv_numero}</td>
                                                <td style="border: 1px solid #ccc; padding: 8px;">{or_dash(&item.det_prod)}</td>
                                                <td style="border: 1px solid #ccc; padding: 8px;">{or_dash(&item.cod_prod)}</td>
                                                <td style="border: 1px solid #ccc; padding: 8px;">{or_dash(&item.proceso)}</td>
                                                <td style="border: 1px solid #ccc; padding: 8px;">{item.cantidad}</td>
                                                <td style="border: 1px solid #ccc; padding: 8px;">{join_or_dash(&item.placa)}</td>
                                                <td style="border: 1px solid #ccc; padding: 8px;">{join_or_dash(&item.placas_usadas)}</td>
                                                <td style="border: 1px solid #ccc; padding: 8px;">{join_or_dash(&item.placas_buenas)}</td>
                                                <td style="border: 1px solid #ccc; padding: 8px;">{join_or_dash(&item.placas_malas)}</td>
                                                <td style="border: 1px solid #ccc; padding: 8px;">{item.numero_personas}</td>
                                                <td style="border: 1px solid #ccc; padding: 8px;">{item.tiempo_total}</td>
                                                <td style="border: 1px solid #ccc; padding: 8px;">{or_dash(&item.stock)}</td>
                                                <td style="border: 1px solid #ccc; padding: 8px;">{item.stock_cant}</td>
                                                <td style="border: 1px solid #ccc; padding: 8px;">
                                                    {if item.despunte {
                                                        view! { <span style="color: #28a745; font-weight: bold;">"✓ Sí"</span> }.into_any()
                                                    } else {
                                                        view! { <span style="color: #dc3545;">"✗ No"</span> }.into_any()
                                                    }}
                                                </td>
                                                <td style="border: 1px solid #ccc; padding: 8px;">{item.fecha_entrega.clone()}</td>
                                                <td style="border: 1px solid #ccc; padding: 8px;">{or_dash(&item.usuario)}</td>
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
