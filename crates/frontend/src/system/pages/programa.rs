use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::components::BackButton;

struct ProcesoEntry {
    titulo: &'static str,
    ruta: &'static str,
}

const PROCESOS: &[ProcesoEntry] = &[
    ProcesoEntry { titulo: "Encolado", ruta: "/encolado" },
    ProcesoEntry { titulo: "Trozado", ruta: "/trozado" },
    ProcesoEntry { titulo: "Pegado", ruta: "/pegado" },
    ProcesoEntry { titulo: "Troquelado", ruta: "/troquelado" },
    ProcesoEntry { titulo: "Múltiple", ruta: "/multiple" },
    ProcesoEntry { titulo: "Emplacado", ruta: "/emplacado" },
    ProcesoEntry { titulo: "Ver Procesos", ruta: "/procesos" },
];

/// Menu of the production stages.
#[component]
pub fn ProgramaPage() -> impl IntoView {
    view! {
        <div style="padding: 40px; max-width: 800px; margin: 0 auto; text-align: center;">
            <BackButton to="/home" />
            <h1 style="color: #c8a165; margin-bottom: 30px;">"Programa de Producción"</h1>

            <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 20px;">
                {PROCESOS
                    .iter()
                    .map(|entry| {
                        let navigate = use_navigate();
                        view! {
                            <button
                                on:click=move |_| navigate(entry.ruta, Default::default())
                                style="padding: 25px; background-color: #c8a165; color: #fff; border: none; border-radius: 10px; cursor: pointer; font-size: 18px;"
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
