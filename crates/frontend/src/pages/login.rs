use leptos::prelude::*;
use leptos_router::components::Redirect;
use wasm_bindgen_futures::spawn_local;

use crate::shared::auth::api::login;
use crate::shared::auth::context::{complete_login, use_auth};

/// Admin login form. A successful login stores the token pair and moves to
/// the dashboard; any failure shows the same invalid-credentials message.
#[component]
pub fn LoginPage() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);

        let user = username.get_untracked();
        let pass = password.get_untracked();
        spawn_local(async move {
            match login(user, pass).await {
                Ok(pair) => {
                    complete_login(set_auth_state, &pair.access, &pair.refresh);
                }
                Err(e) => {
                    log::warn!("Login failed: {}", e.message());
                    error.set(Some("Invalid username or password.".to_string()));
                }
            }
            busy.set(false);
        });
    };

    view! {
        // Already (or newly) authenticated sessions go straight to the dashboard.
        <Show
            when=move || !auth_state.get().is_authenticated()
            fallback=|| view! { <Redirect path="/dashboard" /> }
        >
            <div class="login-page">
                <div class="login-card">
                    <h2>"Admin Login"</h2>
                    <form on:submit=handle_submit>
                        <div class="input-group">
                            <input
                                type="text"
                                placeholder="Username"
                                required
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="input-group">
                            <input
                                type="password"
                                placeholder="Password"
                                required
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </div>
                        {move || {
                            error
                                .get()
                                .map(|msg| view! { <div class="form-error">{msg}</div> })
                        }}
                        <button type="submit" class="btn-login" disabled=move || busy.get()>
                            {move || if busy.get() { "Signing in..." } else { "Login" }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
