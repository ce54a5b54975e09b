use contracts::domain::booking::BookingStatus;
use leptos::prelude::*;

/// Colored pill showing a booking status.
#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<BookingStatus>) -> impl IntoView {
    view! {
        <span class=move || status.get().badge_class()>
            {move || status.get().label()}
        </span>
    }
}
