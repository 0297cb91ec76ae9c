use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::system::session::{api, storage};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();
        let navigate = navigate.clone();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(username_val, password_val).await {
                Ok(response) => {
                    storage::save_user(&response.user);
                    set_is_loading.set(false);
                    navigate("/home", Default::default());
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    set_error_message
                        .set(Some("Usuario o contraseña incorrectos.".to_string()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div style="display: flex; justify-content: center; align-items: center; height: 100vh; background-color: #f4f4f4;">
            <div style="background-color: #fff; padding: 40px; border-radius: 10px; box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1); width: 350px; text-align: center;">
                <h1 style="color: #c8a165; margin-bottom: 10px;">"Producción"</h1>
                <h2 style="color: #333; margin-bottom: 25px; font-size: 18px;">"Iniciar sesión"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div style="color: #ff4c4c; margin-bottom: 15px;">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div style="margin-bottom: 15px; text-align: left;">
                        <label for="username" style="display: block; margin-bottom: 5px; color: #333;">"Usuario"</label>
                        <input
                            type="text"
                            id="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                            style="width: 100%; padding: 10px; border: 1px solid #ccc; border-radius: 5px; font-size: 16px; box-sizing: border-box;"
                        />
                    </div>

                    <div style="margin-bottom: 20px; text-align: left;">
                        <label for="password" style="display: block; margin-bottom: 5px; color: #333;">"Contraseña"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                            style="width: 100%; padding: 10px; border: 1px solid #ccc; border-radius: 5px; font-size: 16px; box-sizing: border-box;"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || is_loading.get()
                        style="width: 100%; padding: 12px; background-color: #c8a165; color: #fff; border: none; border-radius: 5px; cursor: pointer; font-size: 16px;"
                    >
                        {move || if is_loading.get() { "Ingresando..." } else { "Ingresar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
