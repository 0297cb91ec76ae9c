use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// "Volver" button used at the top of every process screen.
#[component]
pub fn BackButton(
    /// Route to navigate back to
    #[prop(into)]
    to: String,
    #[prop(optional, into)] label: String,
) -> impl IntoView {
    let navigate = use_navigate();
    let label = if label.is_empty() {
        "Volver".to_string()
    } else {
        label
    };

    view! {
        <button
            class="boton-volver"
            style="margin-bottom: 10px; padding: 15px 20px; background-color: #c8a165; color: #fff; border: none; border-radius: 5px; cursor: pointer; font-size: 18px;"
            on:click=move |_| navigate(&to, Default::default())
        >
            {label}
        </button>
    }
}
