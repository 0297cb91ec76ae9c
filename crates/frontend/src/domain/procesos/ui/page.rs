//! The shared process screen.
//!
//! Every stage (Encolado, Trozado, Pegado, Troquelado, ...) renders this
//! one component; the per-stage differences live in [`ProcesoStage`].

use contracts::domain::pendientes::WorkItem;
use contracts::shared::cola::{restore_pending, SelectedItem, SelectionQueue};
use contracts::shared::consumo::{deduct, fill_usage_fields, parse_desired, resolve_usage};
use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::queue_panel::QueuePanel;
use crate::domain::procesos::api;
use crate::domain::procesos::stage::ProcesoStage;
use crate::shared::components::{AlertModal, BackButton};
use crate::shared::date_utils::format_date;
use crate::shared::inventory_cache;

#[component]
pub fn ProcesoPage(stage: ProcesoStage) -> impl IntoView {
    let pendientes = RwSignal::new(Vec::<WorkItem>::new());
    // Fetch-order copy; removals from a queue restore into this order.
    let originales = RwSignal::new(Vec::<WorkItem>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);
    let search = RwSignal::new(String::new());

    // A fixed pair of queues; single-destination stages use only the first.
    let colas: [RwSignal<SelectionQueue>; 2] = [
        RwSignal::new(SelectionQueue::new()),
        RwSignal::new(SelectionQueue::new()),
    ];

    // Selection modal state
    let seleccionado = RwSignal::new(Option::<WorkItem>::None);
    let deseada = RwSignal::new(String::new());
    let placa_names = RwSignal::new(Vec::<String>::new());
    let placa_cants = RwSignal::new(Vec::<String>::new());
    let sin_consumo = RwSignal::new(false);
    let destino_idx = RwSignal::new(0usize);

    let alerta = RwSignal::new(Option::<String>::None);

    let cargar_pendientes = move || {
        spawn_local(async move {
            loading.set(true);
            error.set(None);
            match api::fetch_pendientes(stage.pendientes_path).await {
                Ok(items) => {
                    originales.set(items.clone());
                    pendientes.set(items);
                }
                Err(e) => {
                    log!("fetch pendientes {} failed: {}", stage.slug, e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        cargar_pendientes();
        // Encolado keeps its queues server-side; preload them.
        for (idx, destino) in stage.destinos.iter().enumerate() {
            if let Some(path) = destino.cola_path {
                spawn_local(async move {
                    match api::fetch_cola(path).await {
                        Ok(entries) => colas[idx].set(SelectionQueue::from(entries)),
                        Err(e) => {
                            log!("preload cola {} failed: {}", path, e);
                            error.set(Some(format!(
                                "Error al obtener datos de {}",
                                stage.destinos[idx].nombre
                            )));
                        }
                    }
                });
            }
        }
    });

    let abrir_modal = move |item: WorkItem| {
        deseada.set(String::new());
        placa_names.set(item.placas.iter().map(|p| p.des_prod.clone()).collect());
        placa_cants.set(item.placas.iter().map(|_| String::new()).collect());
        sin_consumo.set(false);
        destino_idx.set(0);
        seleccionado.set(Some(item));
    };

    let cerrar_modal = move || seleccionado.set(None);

    // Recompute untouched usage fields on every quantity edit; rows the
    // operator added past the bill of materials keep their manual values.
    let cambiar_deseada = move |value: String| {
        deseada.set(value.clone());
        if sin_consumo.get() {
            return;
        }
        let Some(item) = seleccionado.get() else { return };
        let Ok(desired) = value.parse::<f64>() else { return };
        placa_cants.update(|cants| {
            let filled = fill_usage_fields(desired, &item.placas, cants, stage.rounding);
            for (i, value) in filled.into_iter().enumerate() {
                if i < cants.len() {
                    cants[i] = value;
                }
            }
        });
    };

    let agregar_placa = move |_| {
        placa_names.update(|v| v.push(String::new()));
        placa_cants.update(|v| v.push(String::new()));
    };

    let cambiar_sin_consumo = move |checked: bool| {
        sin_consumo.set(checked);
        if checked {
            placa_names.set(Vec::new());
            placa_cants.set(Vec::new());
        } else if let Some(item) = seleccionado.get() {
            placa_names.set(item.placas.iter().map(|p| p.des_prod.clone()).collect());
            placa_cants.set(item.placas.iter().map(|_| String::new()).collect());
        }
    };

    let confirmar = move |_| {
        let Some(item) = seleccionado.get() else { return };
        let Some(desired) = parse_desired(&deseada.get()) else { return };

        let skip_consumo = !stage.consume_placas || sin_consumo.get();
        let names = placa_names.get();
        let cants = placa_cants.get();

        let usadas = if skip_consumo {
            Vec::new()
        } else {
            // Rows beyond the bill of materials have no multiplier; their
            // manual value is all there is.
            let lines: Vec<_> = (0..names.len())
                .map(|i| {
                    item.placas.get(i).cloned().unwrap_or_else(|| {
                        contracts::domain::pendientes::MaterialLine {
                            des_prod: names[i].clone(),
                            cant_mat: 0.0,
                        }
                    })
                })
                .collect();
            let usadas = resolve_usage(desired, &lines, &cants, stage.rounding);

            let requirements: Vec<(String, f64)> = names
                .iter()
                .cloned()
                .zip(usadas.iter().copied())
                .collect();
            let mut inventario = inventory_cache::load();
            if let Err(shortage) = deduct(&mut inventario, &requirements) {
                alerta.set(Some(shortage.to_string()));
                return;
            }
            inventory_cache::store(&inventario);
            usadas
        };

        let entry = SelectedItem {
            cant_a_fabricar: desired as i64,
            transformed_placas: if skip_consumo { Vec::new() } else { names },
            placas_usadas: usadas,
            item: item.clone(),
        };

        colas[destino_idx.get()].update(|cola| cola.push(entry));
        pendientes.update(|items| items.retain(|p| p.id != item.id));
        seleccionado.set(None);
        deseada.set(String::new());
    };

    let quitar = move |(idx, index): (usize, usize)| {
        let removed = {
            let mut removed = None;
            colas[idx].update(|cola| removed = cola.remove(index));
            removed
        };
        if let Some(entry) = removed {
            pendientes.update(|items| {
                restore_pending(items, &originales.get(), entry.item);
            });
        }
    };

    let enviar = move |idx: usize| {
        let batch = match colas[idx].get().build_payload() {
            Ok(batch) => batch,
            Err(vacia) => {
                alerta.set(Some(vacia.to_string()));
                return;
            }
        };
        let destino = stage.destinos[idx];
        spawn_local(async move {
            match api::submit_batch(destino.update_path, &batch).await {
                Ok(()) => {
                    colas[idx].update(|cola| cola.clear());
                    alerta.set(Some(format!(
                        "Elementos de {} enviados correctamente.",
                        destino.nombre
                    )));
                    cargar_pendientes();
                }
                Err(e) => {
                    log!("submit {} failed: {}", destino.update_path, e);
                    alerta.set(Some(format!(
                        "No se pudo enviar los elementos de {}.",
                        destino.nombre
                    )));
                }
            }
        });
    };

    let filtrados = Memo::new(move |_| {
        let query = search.get().to_lowercase();
        pendientes
            .get()
            .into_iter()
            .filter(|item| item.cliente.to_lowercase().contains(&query))
            .collect::<Vec<_>>()
    });

    view! {
        <div style="padding: 20px;">
            <BackButton to="/programa-produccion" />
            <input
                type="text"
                placeholder=format!("Buscar cliente en {}...", stage.titulo)
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
                style="margin-bottom: 20px; padding: 10px; width: 100%; border: 1px solid #ccc; border-radius: 5px; font-size: 16px;"
            />

            {stage
                .destinos
                .iter()
                .enumerate()
                .map(|(idx, destino)| {
                    view! {
                        <QueuePanel
                            nombre=destino.nombre
                            cola=Signal::derive(move || colas[idx].get())
                            on_move_up=Callback::new(move |i| colas[idx].update(|c| c.move_up(i)))
                            on_move_down=Callback::new(move |i| colas[idx].update(|c| c.move_down(i)))
                            on_remove=Callback::new(move |i| quitar((idx, i)))
                            on_submit=Callback::new(move |_| enviar(idx))
                        />
                    }
                })
                .collect_view()}

            {move || {
                if loading.get() {
                    view! { <p>"Cargando..."</p> }.into_any()
                } else if let Some(message) = error.get() {
                    view! { <p style="color: red;">{message}</p> }.into_any()
                } else if filtrados.get().is_empty() {
                    view! { <p>"No hay datos disponibles."</p> }.into_any()
                } else {
                    view! {
                        <div style="overflow-x: auto;">
                            <table style="width: 100%; border-collapse: collapse;">
                                <thead>
                                    <tr style="background-color: #c8a165; color: #fff;">
                                        <th style="padding: 10px; border: 1px solid #ddd;">"Seleccionar"</th>
                                        <th style="padding: 10px; border: 1px solid #ddd;">"Nota de venta"</th>
                                        <th style="padding: 10px; border: 1px solid #ddd;">"Cliente"</th>
                                        <th style="padding: 10px; border: 1px solid #ddd;">"Fecha Entrega"</th>
                                        <th style="padding: 10px; border: 1px solid #ddd;">"Proceso"</th>
                                        <th style="padding: 10px; border: 1px solid #ddd;">"Producto"</th>
                                        <th style="padding: 10px; border: 1px solid #ddd;">"Cantidad a producir"</th>
                                        <th style="padding: 10px; border: 1px solid #ddd;">"Cantidad total"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {filtrados
                                        .get()
                                        .into_iter()
                                        .map(|item| {
                                            let fila = item.clone();
                                            view! {
                                                <tr>
                                                    <td style="padding: 10px; border: 1px solid #ddd; text-align: center;">
                                                        <button
                                                            style="padding: 5px 10px; background-color: #c8a165; color: #fff; border: none; border-radius: 5px; cursor: pointer;"
                                                            on:click=move |_| abrir_modal(fila.clone())
                                                        >
                                                            "Select"
                                                        </button>
                                                    </td>
                                                    <td style="padding: 10px; border: 1px solid #ddd;">{item.nv_numero.clone()}</td>
                                                    <td style="padding: 10px; border: 1px solid #ddd;">{item.cliente.clone()}</td>
                                                    <td style="padding: 10px; border: 1px solid #ddd;">{format_date(&item.fecha_entrega)}</td>
                                                    <td style="padding: 10px; border: 1px solid #ddd;">{item.proceso.clone()}</td>
                                                    <td style="padding: 10px; border: 1px solid #ddd;">{item.producto.clone()}</td>
                                                    <td style="padding: 10px; border: 1px solid #ddd;">{item.cant_a_prod}</td>
                                                    <td style="padding: 10px; border: 1px solid #ddd;">{item.nv_cant}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }
                        .into_any()
                }
            }}

            {move || {
                seleccionado
                    .get()
                    .map(|item| {
                        view! {
                            <div style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; background-color: rgba(0, 0, 0, 0.5); display: flex; justify-content: center; align-items: center; z-index: 1000;">
                                <div style="background-color: #fff; padding: 25px; border-radius: 10px; width: 400px; box-shadow: 0 4px 8px rgba(0, 0, 0, 0.2); text-align: center;">
                                    <h3 style="margin-bottom: 20px; color: #333;">"Detalles del Producto"</h3>
                                    <p style="margin-bottom: 15px; font-size: 16px;">
                                        <strong>"Cantidad a producir: "</strong>
                                        {item.cant_a_prod}
                                    </p>
                                    <input
                                        type="number"
                                        placeholder="Cantidad deseada"
                                        prop:value=move || deseada.get()
                                        on:input=move |ev| cambiar_deseada(event_target_value(&ev))
                                        style="width: 90%; padding: 12px; margin-bottom: 15px; border: 1px solid #ccc; border-radius: 5px; font-size: 16px;"
                                    />

                                    <Show when=move || stage.consume_placas && !sin_consumo.get()>
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
                                                                placeholder=format!("Cantidad a usar {}", i + 1)
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
                                    </Show>

                                    <Show when=move || stage.permite_sin_consumo>
                                        <label style="font-size: 16px; color: #333; display: flex; align-items: center; justify-content: center; margin-bottom: 15px;">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || sin_consumo.get()
                                                on:change=move |ev| cambiar_sin_consumo(event_target_checked(&ev))
                                                style="margin-right: 10px;"
                                            />
                                            "Sin consumo de placas"
                                        </label>
                                    </Show>

                                    <Show when=move || stage.dual_destino()>
                                        <select
                                            on:change=move |ev| {
                                                destino_idx
                                                    .set(event_target_value(&ev).parse().unwrap_or(0));
                                            }
                                            style="width: 90%; padding: 12px; margin-bottom: 15px; border: 1px solid #ccc; border-radius: 5px; font-size: 16px;"
                                        >
                                            {stage
                                                .destinos
                                                .iter()
                                                .enumerate()
                                                .map(|(idx, destino)| {
                                                    view! {
                                                        <option value=idx.to_string() selected=move || destino_idx.get() == idx>
                                                            {destino.nombre}
                                                        </option>
                                                    }
                                                })
                                                .collect_view()}
                                        </select>
                                    </Show>

                                    <div style="display: flex; justify-content: space-between;">
                                        <button
                                            on:click=confirmar
                                            style="padding: 10px 20px; background-color: #c8a165; color: #fff; border: none; border-radius: 5px; cursor: pointer; font-size: 16px;"
                                        >
                                            "Añadir"
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
                    title="Alerta".to_string()
                    message=Signal::derive(move || alerta.get().unwrap_or_default())
                    on_close=Callback::new(move |_| alerta.set(None))
                />
            </Show>
        </div>
    }
}
