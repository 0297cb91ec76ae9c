use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use contracts::domain::inventario::InventoryEntry;

use crate::shared::fetch::get_json_array;
use crate::shared::inventory_cache;
use crate::system::session::storage;

struct MenuEntry {
    titulo: &'static str,
    ruta: &'static str,
}

const MENU: &[MenuEntry] = &[
    MenuEntry { titulo: "Programa de Producción", ruta: "/programa-produccion" },
    MenuEntry { titulo: "Notas de Venta", ruta: "/procesos" },
    MenuEntry { titulo: "Inventario", ruta: "/inventario" },
    MenuEntry { titulo: "Historial", ruta: "/historial" },
    MenuEntry { titulo: "Edición", ruta: "/edicion" },
    MenuEntry { titulo: "Gestión de Usuarios", ruta: "/gestion-usuarios" },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let user = storage::get_user();
    let nombre = user
        .map(|u| format!("{} {}", u.nombre, u.apellido))
        .unwrap_or_default();

    let navigate = use_navigate();

    // Landing here refreshes the local inventory snapshot; the process
    // screens deduct from it without another round-trip.
    Effect::new(move |_| {
        spawn_local(async move {
            match get_json_array::<InventoryEntry>("/inventario/total").await {
                Ok(entries) => inventory_cache::store(&entries),
                Err(e) => log::warn!("inventory preload failed: {}", e),
            }
        });
    });

    let cerrar_sesion = {
        let navigate = navigate.clone();
        move |_| {
            storage::clear_session();
            navigate("/login", Default::default());
        }
    };

    view! {
        <div style="padding: 40px; max-width: 800px; margin: 0 auto; text-align: center;">
            <h1 style="color: #c8a165; margin-bottom: 10px;">"Producción"</h1>
            <p style="color: #333; margin-bottom: 30px; font-size: 18px;">
                {format!("Bienvenido, {}", nombre)}
            </p>

            <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 20px; margin-bottom: 30px;">
                {MENU
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

            <button
                on:click=cerrar_sesion
                style="padding: 12px 30px; background-color: #ff4c4c; color: #fff; border: none; border-radius: 5px; cursor: pointer; font-size: 16px;"
            >
                "Cerrar sesión"
            </button>
        </div>
    }
}
