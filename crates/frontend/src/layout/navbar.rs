use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::auth::context::{logout, use_auth};

/// Top navigation. The link set switches between public and admin mode based
/// on whether an access token is present.
#[component]
pub fn Navbar() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let handle_logout = move |_| {
        logout(set_auth_state);
        navigate("/", Default::default());
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">
                "Sri Lakshmi Gardens"
            </A>
            <div class="navbar__links">
                <Show
                    when=move || auth_state.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <A href="/">"Home"</A>
                            <A href="/gallery">"Gallery"</A>
                            <A href="/pricing">"Pricing"</A>
                            <A href="/facilities">"Facilities"</A>
                            <A href="/book-now" attr:class="navbar__cta">
                                "Book Now"
                            </A>
                        }
                    }
                >
                    <A href="/dashboard">"Dashboard"</A>
                    <A href="/bookings">"Bookings"</A>
                    <A href="/availability">"Availability"</A>
                    <A href="/expenses">"Expenses"</A>
                    <button class="navbar__logout" on:click=handle_logout.clone()>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
