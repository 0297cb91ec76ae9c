use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::storage;

/// Route guard: renders its children only with a stored session,
/// otherwise redirects to the login page.
#[component]
pub fn RequireSesion(children: ChildrenFn) -> impl IntoView {
    let has_session = storage::get_user().is_some();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !has_session {
            navigate("/login", Default::default());
        }
    });

    view! {
        <Show when=move || has_session fallback=|| view! { <div></div> }>
            {children()}
        </Show>
    }
}
