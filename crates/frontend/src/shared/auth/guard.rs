use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

/// Wraps admin routes. Redirects to the login page when no access token is
/// stored; this is a UI switch only, the backend enforces authorization.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}
