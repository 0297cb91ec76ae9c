use contracts::domain::edicion::{decode_cantidades, decode_placas, EditPayload, EditRow};
use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wasm_bindgen_futures::spawn_local;

use crate::domain::edicion::api;
use crate::shared::components::{AlertModal, BackButton};

/// Correction screen for one process queue. The `:proceso` route segment
/// selects which backing table is listed and posted to.
#[component]
#[allow(non_snake_case)]
pub fn EditPage() -> impl IntoView {
    let params = use_params_map();
    let proceso = Memo::new(move |_| params.read().get("proceso").unwrap_or_default());

    let (items, set_items) = signal::<Vec<EditRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    // Edit modal state
    let seleccionada = RwSignal::new(Option::<EditRow>::None);
    let cant_a_fabricar = RwSignal::new(String::new());
    let placa_names = RwSignal::new(Vec::<String>::new());
    let placa_cants = RwSignal::new(Vec::<String>::new());
    let alerta = RwSignal::new(Option::<String>::None);

    let fetch = move || {
        let slug = proceso.get();
        spawn_local(async move {
            set_loading.set(true);
            match api::fetch_rows(&slug).await {
                Ok(rows) => {
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        // Re-runs when the route segment changes.
        let _ = proceso.get();
        fetch();
    });

    let abrir_modal = move |row: EditRow| {
        cant_a_fabricar.set(row.cant_a_fabricar.to_string());
        // Unreadable columns open the modal with no material rows rather
        // than refusing the edit.
        let names = row
            .placas_a_usar
            .as_deref()
            .and_then(|raw| decode_placas(raw).ok())
            .unwrap_or_default();
        let cants = row
            .cantidad_placas
            .as_deref()
            .and_then(|raw| decode_cantidades(raw).ok())
            .unwrap_or_default();
        placa_names.set(names);
        placa_cants.set(cants);
        seleccionada.set(Some(row));
    };

    let cerrar_modal = move || seleccionada.set(None);

    let agregar_placa = move |_| {
        placa_names.update(|v| v.push(String::new()));
        placa_cants.update(|v| v.push(String::new()));
    };

    let eliminar_placa = move |index: usize| {
        placa_names.update(|v| {
            if index < v.len() {
                v.remove(index);
            }
        });
        placa_cants.update(|v| {
            if index < v.len() {
                v.remove(index);
            }
        });
    };

    let guardar = move |_| {
        let Some(row) = seleccionada.get() else { return };
        let Ok(cantidad) = cant_a_fabricar.get().trim().parse::<i64>() else {
            alerta.set(Some("Cantidad a fabricar inválida.".to_string()));
            return;
        };
        let payload = EditPayload::new(row.id, cantidad, &placa_names.get(), &placa_cants.get());
        let slug = proceso.get();
        spawn_local(async move {
            match api::submit_edit(&slug, &payload).await {
                Ok(()) => {
                    seleccionada.set(None);
                    alerta.set(Some("Datos actualizados correctamente.".to_string()));
                    fetch();
                }
                Err(e) => {
                    log!("edit {} failed: {}", slug, e);
                    alerta.set(Some("No se pudo actualizar los datos.".to_string()));
                }
            }
        });
    };

    view! {
        <div style="padding: 20px;">
            <BackButton to="/edicion" />
            <h2 style="color: #333;">{move || format!("Edición - {}", proceso.get())}</h2>

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
                                    <th style="padding: 10px; border: 1px solid #ddd;">"Cliente"</th>
                                    <th style="padding: 10px; border: 1px solid #ddd;">"Fecha Entrega"</th>
                                    <th style="padding: 10px; border: 1px solid #ddd;">"Proceso"</th>
                                    <th style="padding: 10px; border: 1px solid #ddd;">"Producto"</th>
                                    <th style="padding: 10px; border: 1px solid #ddd;">"Cantidad a producir"</th>
                                    <th style="padding: 10px; border: 1px solid #ddd;">"Placas a usar"</th>
                                    <th style="padding: 10px; border: 1px solid #ddd;">"Cantidad de placas"</th>
                                    <th style="padding: 10px; border: 1px solid #ddd;">"Acciones"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {items
                                    .get()
                                    .into_iter()
                                    .map(|row| {
                                        let fila = row.clone();
                                        view! {
                                            <tr style="background-color: #fff; border-bottom: 1px solid #ddd;">
                                                <td style="padding: 10px; border: 1px solid #ddd;">{row.nv_numero.clone()}</td>
                                                <td style="padding: 10px; border: 1px solid #ddd;">{row.cliente.clone()}</td>
                                                <td style="padding: 10px; border: 1px solid #ddd;">{row.fecha_entrega.clone()}</td>
                                                <td style="padding: 10px; border: 1px solid #ddd;">{row.proceso.clone()}</td>
                                                <td style="padding: 10px; border: 1px solid #ddd;">{row.producto.clone()}</td>
                                                <td style="padding: 10px; border: 1px solid #ddd;">{row.cant_a_fabricar}</td>
                                                <td style="padding: 10px; border: 1px solid #ddd;">{row.placas_a_usar.clone().unwrap_or_default()}</td>
                                                <td style="padding: 10px; border: 1px solid #ddd;">{row.cantidad_placas.clone().unwrap_or_default()}</td>
                                                <td style="padding: 10px; border: 1px solid #ddd; text-align: center;">
                                                    <button
                                                        style="padding: 5px 10px; background-color: #c8a165; color: #fff; border: none; border-radius: 5px; cursor: pointer;"
                                                        on:click=move |_| abrir_modal(fila.clone())
                                                    >
                                                        "Editar"
                                                    </button>
                                                </td>
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

            {move || {
                seleccionada
                    .get()
                    .map(|_| {
                        view! {
                            <div style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; background-color: rgba(0, 0, 0, 0.5); display: flex; justify-content: center; align-items: center; z-index: 1000;">
                                <div style="background-color: #fff; padding: 25px; border-radius: 10px; width: 400px; box-shadow: 0 4px 8px rgba(0, 0, 0, 0.2); text-align: center; max-height: 90vh; overflow-y: auto;">
                                    <h3 style="margin-bottom: 20px; color: #333;">"Editar Fila"</h3>

                                    <label style="display: block; margin-bottom: 10px; color: #555;">
                                        "Cantidad a fabricar:"
                                        <input
                                            type="number"
                                            prop:value=move || cant_a_fabricar.get()
                                            on:input=move |ev| cant_a_fabricar.set(event_target_value(&ev))
                                            style="width: 90%; padding: 12px; margin-bottom: 10px; border: 1px solid #ccc; border-radius: 5px; font-size: 16px;"
                                        />
                                    </label>

                                    {move || {
                                        (0..placa_names.get().len())
                                            .map(|i| {
                                                view! {
                                                    <div style="margin-bottom: 15px;">
                                                        <input
                                                            type="text"
                                                            placeholder=format!("Tipo Placa {}", i + 1)
                                                            prop:value=move || {
                                                                placa_names.with(|v| v.get(i).cloned().unwrap_or_default())
                                                            }
                                                            on:input=move |ev| {
                                                                let value = event_target_value(&ev);
                                                                placa_names
                                                                    .update(|v| {
                                                                        if i < v.len() {
                                                                            v[i] = value;
                                                                        }
                                                                    });
                                                            }
                                                            style="width: 90%; padding: 12px; margin-bottom: 10px; border: 1px solid #ccc; border-radius: 5px; font-size: 16px;"
                                                        />
                                                        <input
                                                            type="number"
                                                            placeholder=format!("Placas Usadas {}", i + 1)
                                                            prop:value=move || {
                                                                placa_cants.with(|v| v.get(i).cloned().unwrap_or_default())
                                                            }
                                                            on:input=move |ev| {
                                                                let value = event_target_value(&ev);
                                                                placa_cants
                                                                    .update(|v| {
                                                                        if i < v.len() {
                                                                            v[i] = value;
                                                                        }
                                                                    });
                                                            }
                                                            style="width: 90%; padding: 12px; border: 1px solid #ccc; border-radius: 5px; font-size: 16px;"
                                                        />
                                                        <button
                                                            on:click=move |_| eliminar_placa(i)
                                                            style="padding: 5px 10px; background-color: #ff4c4c; color: #fff; border: none; border-radius: 5px; cursor: pointer; margin-top: 5px;"
                                                        >
                                                            "Eliminar"
                                                        </button>
                                                    </div>
                                                }
                                            })
                                            .collect_view()
                                    }}

                                    <button
                                        on:click=agregar_placa
                                        style="padding: 10px 15px; background-color: #228B22; color: #fff; border: none; border-radius: 5px; cursor: pointer; font-size: 16px; margin-bottom: 15px;"
                                    >
                                        "Agregar Placa"
                                    </button>

                                    <div style="display: flex; justify-content: space-between;">
                                        <button
                                            on:click=guardar
                                            style="padding: 10px 20px; background-color: #c8a165; color: #fff; border: none; border-radius: 5px; cursor: pointer; font-size: 16px;"
                                        >
                                            "Guardar"
                                        </button>
                                        <button
                                            on:click=move |_| cerrar_modal()
                                            style="padding: 10px 20px; background-color: #ff4c4c; color: #fff; border: none; border-radius: 5px; cursor: pointer; font-size: 16px;"
                                        >
                                            "Cancelar"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}

            <Show when=move || alerta.get().is_some()>
                <AlertModal
                    title="Aviso".to_string()
                    message=Signal::derive(move || alerta.get().unwrap_or_default())
                    on_close=Callback::new(move |_| alerta.set(None))
                />
            </Show>
        </div>
    }
}
