use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::components::BackButton;

struct EdicionEntry {
    titulo: &'static str,
    proceso: &'static str,
}

// One entry per backing queue table, including the split second queues.
const PROCESOS: &[EdicionEntry] = &[
    EdicionEntry { titulo: "Encolado 1", proceso: "encolado" },
    EdicionEntry { titulo: "Encolado 2", proceso: "encolado2" },
    EdicionEntry { titulo: "Multiple 1", proceso: "multiple" },
    EdicionEntry { titulo: "Multiple 2", proceso: "multiple2" },
    EdicionEntry { titulo: "Trozado", proceso: "trozado" },
    EdicionEntry { titulo: "Troquelado Grande", proceso: "troquelado" },
    EdicionEntry { titulo: "Troquelado Chico", proceso: "troquelado2" },
    EdicionEntry { titulo: "Pegado", proceso: "pegado" },
    EdicionEntry { titulo: "Emplacado", proceso: "emplacado" },
    EdicionEntry { titulo: "Calado", proceso: "calado" },
    EdicionEntry { titulo: "Impresión", proceso: "impresion" },
    EdicionEntry { titulo: "Plizado", proceso: "plizado" },
];

/// Menu of editable process queues.
#[component]
#[allow(non_snake_case)]
pub fn EdicionMenu() -> impl IntoView {
    view! {
        <div style="display: flex; flex-direction: column; align-items: center; justify-content: center; background-color: #f5f5f5; min-height: 100vh; padding: 20px;">
            <BackButton to="/home" />
            <h1 style="font-size: 24px; font-weight: bold; color: #c8a165; margin-bottom: 30px;">"Menú de Edición"</h1>
            <div style="display: flex; flex-wrap: wrap; justify-content: center; gap: 10px; margin-bottom: 20px; max-width: 700px;">
                {PROCESOS
                    .iter()
                    .map(|entry| {
                        let navigate = use_navigate();
                        view! {
                            <button
                                on:click=move |_| {
                                    navigate(&format!("/edicion/{}", entry.proceso), Default::default())
                                }
                                style="background-color: #c8a165; padding: 15px 30px; border-radius: 8px; margin: 5px; width: 40%; color: #fff; font-size: 18px; font-weight: bold; border: none; cursor: pointer;"
                            >
                                {entry.titulo}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
