use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::{api, storage};

/// Client-side auth state. Holding an access token is what flips the UI into
/// admin mode; it is a presence check, not a security boundary.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Auth context provider component. Restores the session synchronously from
/// localStorage so guarded routes render correctly on first paint, then
/// renews the stored access token once in the background.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        access_token: storage::get_access_token(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    // A stale access token would fail every admin request with 401, so swap
    // it for a fresh one on startup. A failed refresh means the session is
    // gone; drop back to the public UI.
    Effect::new(move |_| {
        let Some(refresh_token) = storage::get_refresh_token() else {
            return;
        };
        spawn_local(async move {
            match api::refresh(refresh_token).await {
                Ok(resp) => {
                    storage::save_access_token(&resp.access);
                    set_auth_state.set(AuthState {
                        access_token: Some(resp.access),
                    });
                }
                Err(e) => {
                    log::warn!("Session refresh failed: {}", e.message());
                    storage::clear_tokens();
                    set_auth_state.set(AuthState::default());
                }
            }
        });
    });

    children()
}

/// Hook to access auth state.
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Store the token pair and flip the UI into admin mode. Takes the write
/// signal explicitly because event handlers run outside the reactive owner.
pub fn complete_login(set_auth_state: WriteSignal<AuthState>, access: &str, refresh: &str) {
    storage::save_tokens(access, refresh);
    set_auth_state.set(AuthState {
        access_token: Some(access.to_string()),
    });
}

/// Clear tokens and drop back to the public UI.
pub fn logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}
