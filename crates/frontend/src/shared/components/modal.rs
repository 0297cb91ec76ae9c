use leptos::prelude::*;

/// Blocking notice with a single close button (inventory shortages,
/// empty-queue submissions and the like).
#[component]
pub fn AlertModal(
    title: String,
    #[prop(into)] message: Signal<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class="modal-overlay"
            style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; background-color: rgba(0, 0, 0, 0.5); display: flex; justify-content: center; align-items: center; z-index: 1000;"
        >
            <div
                class="modal"
                style="background-color: #fff; padding: 20px; border-radius: 10px; width: 400px; text-align: center; box-shadow: 0 4px 8px rgba(0, 0, 0, 0.2);"
            >
                <h3 style="margin-bottom: 15px; color: #333;">{title}</h3>
                <p style="margin-bottom: 20px; font-size: 16px;">{move || message.get()}</p>
                <button
                    style="padding: 10px 20px; background-color: #c8a165; color: #fff; border: none; border-radius: 5px; cursor: pointer; font-size: 16px;"
                    on:click=move |_| on_close.run(())
                >
                    "Cerrar"
                </button>
            </div>
        </div>
    }
}
