use contracts::domain::notas_venta::NotaVentaResumen;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::components::BackButton;
use crate::shared::fetch::get_json_array;

/// Per-sales-note process status. Clicking a row expands the processes
/// recorded against that note; clicking again collapses it.
#[component]
#[allow(non_snake_case)]
pub fn NotasVentaList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<NotaVentaResumen>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);
    let (expandida, set_expandida) = signal::<Option<usize>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match get_json_array::<NotaVentaResumen>("/procesos/nv").await {
                Ok(rows) => set_items.set(rows),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div style="padding: 20px;">
            <BackButton to="/home" />
            <h2 style="color: #333;">"Procesos por Nota de Venta"</h2>

            {move || {
                if loading.get() {
                    view! { <p>"Cargando..."</p> }.into_any()
                } else if let Some(message) = error.get() {
                    view! { <p style="color: red;">{message}</p> }.into_any()
                } else {
                    view! {
                        <table style="width: 100%; border-collapse: collapse; margin-top: 20px;">
                            <thead>
                                <tr style="background-color: #c8a165; color: #fff;">
                                    <th style="padding: 10px; border: 1px solid #ddd;">"Nota de venta"</th>
                                    <th style="padding: 10px; border: 1px solid #ddd;">"Producto"</th>
                                    <th style="padding: 10px; border: 1px solid #ddd;">"Cliente"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {items
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, item)| {
                                        let row_style = move || {
                                            if expandida.get() == Some(index) {
                                                "background-color: #f5f5f5; border-bottom: 1px solid #ddd; cursor: pointer;"
                                            } else {
                                                "background-color: #fff; border-bottom: 1px solid #ddd; cursor: pointer;"
                                            }
                                        };
                                        let procesos = item.procesos.clone();
                                        view! {
                                            <tr
                                                style=row_style
                                                on:click=move |_| {
                                                    set_expandida
                                                        .update(|sel| {
                                                            *sel = if *sel == Some(index) { None } else { Some(index) };
                                                        });
                                                }
                                            >
                                                <td style="padding: 10px; border: 1px solid #ddd;">{item.nv_numero.clone()}</td>
                                                <td style="padding: 10px; border: 1px solid #ddd;">{item.producto.clone()}</td>
                                                <td style="padding: 10px; border: 1px solid #ddd;">{item.cliente.clone()}</td>
                                            </tr>
                                            <Show when=move || expandida.get() == Some(index)>
                                                <tr>
                                                    <td colspan="3" style="padding: 10px; border: 1px solid #ddd;">
                                                        <table style="width: 100%; border-collapse: collapse;">
                                                            <tbody>
                                                                {procesos
                                                                    .iter()
                                                                    .map(|proceso| {
                                                                        view! {
                                                                            <tr style="background-color: #fff; border-bottom: 1px solid #ddd;">
                                                                                <td style="padding: 10px; border: 1px solid #ddd;">{proceso.proceso.clone()}</td>
                                                                                <td style="padding: 10px; border: 1px solid #ddd;">{proceso.cantidad_producida}</td>
                                                                                <td style="padding: 10px; border: 1px solid #ddd;">{proceso.estado.clone()}</td>
                                                                            </tr>
                                                                        }
                                                                    })
                                                                    .collect_view()}
                                                            </tbody>
                                                        </table>
                                                    </td>
                                                </tr>
                                            </Show>
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
