use contracts::domain::booking::Booking;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wasm_bindgen_futures::spawn_local;

use crate::domain::booking::api::fetch_booking;
use crate::shared::components::StatusBadge;
use crate::shared::date_utils::{format_date, format_time};
use crate::shared::receipt::download_receipt;

/// Booking detail view with a client-generated PDF receipt download.
#[component]
pub fn BookingDetailPage() -> impl IntoView {
    let params = use_params_map();

    let booking = RwSignal::new(None::<Booking>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let id = params.with(|p| p.get("id").and_then(|v| v.parse::<i64>().ok()));
        let Some(id) = id else {
            loading.set(false);
            error.set(Some("Invalid booking id.".to_string()));
            return;
        };

        loading.set(true);
        spawn_local(async move {
            match fetch_booking(id).await {
                Ok(b) => {
                    booking.set(Some(b));
                    error.set(None);
                }
                Err(e) => {
                    log::warn!("Failed to load booking {}: {}", id, e.message());
                    error.set(Some("Failed to load booking details.".to_string()));
                }
            }
            loading.set(false);
        });
    });

    let handle_download = move |_| {
        if let Some(b) = booking.get_untracked() {
            if let Err(e) = download_receipt(&b) {
                log::error!("Receipt download failed: {e}");
            }
        }
    };

    view! {
        <div class="page-container">
            <Show when=move || !loading.get() fallback=|| view! { <div>"Loading booking details..."</div> }>
                {move || {
                    if let Some(msg) = error.get() {
                        return view! { <div class="error-box">{msg}</div> }.into_any();
                    }
                    match booking.get() {
                        Some(b) => {
                            let timing = match (b.start_time, b.end_time) {
                                (Some(start), Some(end)) => {
                                    format!("{} - {}", format_time(start), format_time(end))
                                }
                                _ => "Not specified".to_string(),
                            };
                            view! {
                                <div class="form-container">
                                    <p>
                                        <strong>"Client Name: "</strong>
                                        {b.name.clone()}
                                    </p>
                                    <p>
                                        <strong>"Phone: "</strong>
                                        {b.phone.clone()}
                                    </p>
                                    <p>
                                        <strong>"Email: "</strong>
                                        {b.email.clone()}
                                    </p>
                                    <p>
                                        <strong>"Event Type: "</strong>
                                        {b.event_type.label()}
                                    </p>
                                    <p>
                                        <strong>"Event Date: "</strong>
                                        {format!(
                                            "{} - {}",
                                            format_date(b.from_date),
                                            format_date(b.to_date),
                                        )}
                                    </p>
                                    <p>
                                        <strong>"Timing: "</strong>
                                        {timing}
                                    </p>
                                    <p>
                                        <strong>"Status: "</strong>
                                        <StatusBadge status=Signal::derive(move || {
                                            booking.get().map(|b| b.status).unwrap_or_default()
                                        }) />
                                    </p>
                                    <p>
                                        <strong>"Message: "</strong>
                                        {b.message
                                            .clone()
                                            .filter(|m| !m.is_empty())
                                            .unwrap_or_else(|| "No message provided".to_string())}
                                    </p>
                                    <button class="btn-primary" on:click=handle_download>
                                        "Download Receipt (PDF)"
                                    </button>
                                </div>
                            }
                                .into_any()
                        }
                        None => view! { <div>"Booking not found."</div> }.into_any(),
                    }
                }}
            </Show>
        </div>
    }
}
