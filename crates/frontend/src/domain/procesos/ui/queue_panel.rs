use contracts::shared::cola::SelectionQueue;
use leptos::prelude::*;

/// Ordered list of confirmed items for one destination. Row order is the
/// submission priority; the buttons delegate every mutation to the page,
/// which owns the queue and the pending list.
#[component]
pub fn QueuePanel(
    #[prop(into)] nombre: String,
    #[prop(into)] cola: Signal<SelectionQueue>,
    on_move_up: Callback<usize>,
    on_move_down: Callback<usize>,
    on_remove: Callback<usize>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let titulo = format!("Elementos Seleccionados - {}", nombre);
    let submit_label = format!("Subir Seleccionados - {}", nombre);

    view! {
        <div style="margin-bottom: 20px; padding: 15px; border: 1px solid #ddd; border-radius: 5px; background-color: #f9f9f9;">
            <h3 style="margin-bottom: 15px; color: #333;">{titulo}</h3>
            {move || {
                if cola.get().is_empty() {
                    view! { <p style="color: #666;">"Sin elementos en la cola."</p> }.into_any()
                } else {
                    view! {
                        <ul style="list-style-type: none; padding: 0;">
                            {cola
                                .get()
                                .entries()
                                .iter()
                                .enumerate()
                                .map(|(index, entry)| {
                                    let resumen = format!(
                                        "Producto: {} | Cliente: {} | Cantidad: {}",
                                        entry.item.producto, entry.item.cliente, entry.cant_a_fabricar
                                    );
                                    view! {
                                        <li style="display: flex; align-items: center; margin-bottom: 10px; background-color: #fff; padding: 10px; border-radius: 5px; box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);">
                                            <span style="margin-right: 10px; font-size: 14px; font-weight: bold;">
                                                {format!("{}.", index + 1)}
                                            </span>
                                            <span style="flex: 1; font-size: 14px;">{resumen}</span>
                                            <button
                                                style="margin-right: 5px; padding: 5px 10px; background-color: #4caf50; color: #fff; border: none; border-radius: 5px; cursor: pointer;"
                                                on:click=move |_| on_move_up.run(index)
                                            >
                                                "↑"
                                            </button>
                                            <button
                                                style="margin-right: 5px; padding: 5px 10px; background-color: #4caf50; color: #fff; border: none; border-radius: 5px; cursor: pointer;"
                                                on:click=move |_| on_move_down.run(index)
                                            >
                                                "↓"
                                            </button>
                                            <button
                                                style="padding: 5px 10px; background-color: #ff4c4c; color: #fff; border: none; border-radius: 5px; cursor: pointer;"
                                                on:click=move |_| on_remove.run(index)
                                            >
                                                "Quitar"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
            <button
                style="margin-top: 15px; padding: 10px; background-color: #c8a165; color: #fff; border: none; border-radius: 5px; cursor: pointer; width: 100%; font-size: 16px;"
                on:click=move |_| on_submit.run(())
            >
                {submit_label}
            </button>
        </div>
    }
}
