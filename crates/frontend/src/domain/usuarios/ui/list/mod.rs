use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::components::BackButton;
use crate::shared::fetch::get_json_array;

#[component]
#[allow(non_snake_case)]
pub fn UsuariosList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<UserInfo>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match get_json_array::<UserInfo>("/users/data").await {
                Ok(users) => set_items.set(users),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div style="padding: 20px; max-width: 800px; margin: 0 auto;">
            <BackButton to="/home" />
            <h2 style="margin-bottom: 20px; color: #333;">"Lista de Usuarios"</h2>

            {move || {
                if loading.get() {
                    view! { <p>"Cargando..."</p> }.into_any()
                } else if let Some(message) = error.get() {
                    view! { <p style="color: red;">{message}</p> }.into_any()
                } else {
                    view! {
                        <div style="overflow-x: auto;">
                            <table style="width: 100%; border-collapse: collapse;">
                                <thead>
                                    <tr style="background-color: #c8a165; color: #fff;">
                                        <th style="padding: 10px; border: 1px solid #ddd;">"ID"</th>
                                        <th style="padding: 10px; border: 1px solid #ddd;">"Nombre Completo"</th>
                                        <th style="padding: 10px; border: 1px solid #ddd;">"Username"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {items
                                        .get()
                                        .into_iter()
                                        .map(|user| {
                                            view! {
                                                <tr>
                                                    <td style="padding: 10px; border: 1px solid #ddd; text-align: center;">{user.id}</td>
                                                    <td style="padding: 10px; border: 1px solid #ddd;">
                                                        {format!("{} {}", user.nombre, user.apellido)}
                                                    </td>
                                                    <td style="padding: 10px; border: 1px solid #ddd; text-align: center;">{user.username}</td>
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
        </div>
    }
}
