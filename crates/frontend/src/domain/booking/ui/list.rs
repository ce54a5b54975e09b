use std::cmp::Ordering;

use chrono::Local;
use contracts::domain::booking::{Booking, BookingStatus};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::booking::api::{export_csv, fetch_bookings, receipt_url, update_status};
use crate::shared::components::StatusBadge;
use crate::shared::date_utils::{format_date, format_time};
use crate::shared::export::download_csv;
use crate::shared::list_utils::{
    create_sort_toggle, filter_list, get_sort_indicator, sort_list, Searchable, Sortable,
};

impl Searchable for Booking {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.name.to_lowercase().contains(&filter)
            || self.phone.contains(&filter)
            || self.email.to_lowercase().contains(&filter)
    }
}

impl Sortable for Booking {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "event" => self.event_type.as_str().cmp(other.event_type.as_str()),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            "date" => self.from_date.cmp(&other.from_date),
            _ => self.id.cmp(&other.id),
        }
    }
}

/// Admin bookings table: sortable columns, approve/reject with a blocking
/// confirmation, CSV export and server-rendered receipts.
#[component]
pub fn BookingsPage() -> impl IntoView {
    let bookings = RwSignal::new(Vec::<Booking>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let (sort_field, set_sort_field) = signal("id".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);
    let filter = RwSignal::new(String::new());

    let load = move || {
        spawn_local(async move {
            match fetch_bookings().await {
                Ok(list) => {
                    bookings.set(list);
                    error.set(None);
                }
                Err(e) => {
                    log::warn!("Failed to load bookings: {}", e.message());
                    error.set(Some(e.message()));
                }
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let confirm = |message: &str| {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    };

    let change_status = move |id: i64, status: BookingStatus| {
        spawn_local(async move {
            match update_status(id, status).await {
                Ok(_) => load(),
                Err(e) => {
                    log::warn!("Status update failed for booking {}: {}", id, e.message());
                    error.set(Some(e.message()));
                }
            }
        });
    };

    let handle_export = move |_| {
        spawn_local(async move {
            match export_csv().await {
                Ok(csv) => {
                    let filename =
                        format!("bookings_{}.csv", Local::now().format("%Y-%m-%d"));
                    if let Err(e) = download_csv(&csv, &filename) {
                        log::error!("CSV download failed: {e}");
                    }
                }
                Err(e) => {
                    log::warn!("CSV export failed: {}", e.message());
                    error.set(Some(e.message()));
                }
            }
        });
    };

    let sorted = move || {
        let mut items = filter_list(bookings.get(), &filter.get());
        sort_list(&mut items, &sort_field.get(), sort_ascending.get());
        items
    };

    let header = move |field: &'static str, title: &'static str| {
        let on_click = create_sort_toggle(field, sort_field.into(), set_sort_field, set_sort_ascending);
        view! {
            <th class="sortable" on:click=on_click>
                {title}
                {move || get_sort_indicator(&sort_field.get(), field, sort_ascending.get())}
            </th>
        }
    };

    view! {
        <div class="page-container">
            {move || {
                error.get().map(|msg| view! { <div class="error-box">{msg}</div> })
            }}

            <h2 class="page-title">"Bookings"</h2>

            <div class="page-actions">
                <input
                    type="search"
                    class="list-search"
                    placeholder="Search name, phone or email..."
                    prop:value=move || filter.get()
                    on:input=move |ev| filter.set(event_target_value(&ev))
                />
                <button class="btn-csv" on:click=handle_export>
                    "Download CSV"
                </button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div>"Loading bookings..."</div> }
            >
                <div class="table-wrapper">
                    <table class="styled-table">
                        <thead>
                            <tr>
                                {header("id", "ID")}
                                {header("name", "Name")}
                                {header("event", "Event")}
                                {header("status", "Status")}
                                {header("date", "Event Date")}
                                <th>"Event Time"</th>
                                <th>"Actions"</th>
                                <th>"Receipt"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=sorted key=|b| (b.id, b.status) let:booking>
                                {
                                    let id = booking.id;
                                    let status = booking.status;
                                    let timing = match (booking.start_time, booking.end_time) {
                                        (Some(start), Some(end)) => {
                                            format!("{} → {}", format_time(start), format_time(end))
                                        }
                                        _ => "—".to_string(),
                                    };
                                    view! {
                                        <tr>
                                            <td>{id}</td>
                                            <td>{booking.name.clone()}</td>
                                            <td>{booking.event_type.label()}</td>
                                            <td>
                                                <StatusBadge status=Signal::derive(move || status) />
                                            </td>
                                            <td>
                                                {format!(
                                                    "{} → {}",
                                                    format_date(booking.from_date),
                                                    format_date(booking.to_date),
                                                )}
                                            </td>
                                            <td>{timing}</td>
                                            <td>
                                                <button
                                                    class="booking-btn btn-approve"
                                                    disabled={status == BookingStatus::Approved}
                                                    on:click=move |_| {
                                                        if confirm("Approve this booking?") {
                                                            change_status(id, BookingStatus::Approved);
                                                        }
                                                    }
                                                >
                                                    "Approve"
                                                </button>
                                                <button
                                                    class="booking-btn btn-reject"
                                                    disabled={status == BookingStatus::Rejected}
                                                    on:click=move |_| {
                                                        if confirm("Reject this booking?") {
                                                            change_status(id, BookingStatus::Rejected);
                                                        }
                                                    }
                                                >
                                                    "Reject"
                                                </button>
                                            </td>
                                            <td>
                                                <button
                                                    class="btn-view"
                                                    on:click=move |_| {
                                                        if let Some(window) = web_sys::window() {
                                                            let _ = window
                                                                .open_with_url_and_target(
                                                                    &receipt_url(id),
                                                                    "_blank",
                                                                );
                                                        }
                                                    }
                                                >
                                                    "View Receipt"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            </For>
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
