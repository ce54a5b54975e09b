use leptos::prelude::*;

use crate::domain::booking::LastSubmission;
use crate::routes::AppRoutes;
use crate::shared::auth::context::AuthProvider;
use crate::shared::modal::ModalService;

#[component]
pub fn App() -> impl IntoView {
    // Holds the booking returned by a successful form POST so the success
    // page can render it. In-memory only: a refresh loses it.
    provide_context(LastSubmission::new());

    // Centralized modal management (expense form).
    provide_context(ModalService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
