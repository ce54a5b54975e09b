pub mod grid;

use chrono::{Datelike, Local};
use contracts::calendar::CalendarEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::booking::api::fetch_dates;
use crate::shared::date_utils::month_name;
use grid::{is_weekend, month_cells, next_month, prev_month, DayCell};

const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Month-view availability calendar. Days are colored by the status of the
/// bookings covering them; weekends are shaded.
#[component]
pub fn AvailabilityPage() -> impl IntoView {
    let events = RwSignal::new(Vec::<CalendarEvent>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let month = RwSignal::new(Local::now().date_naive());

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_dates().await {
                Ok(list) => {
                    events.set(list);
                    error.set(None);
                }
                Err(e) => {
                    log::warn!("Failed to load calendar data: {}", e.message());
                    error.set(Some("Failed to load calendar data.".to_string()));
                }
            }
            loading.set(false);
        });
    });

    let cells = move || month_cells(month.get(), &events.get());
    let month_title =
        move || format!("{} {}", month_name(month.get().month()), month.get().year());

    let cell_view = |cell: DayCell| {
        let mut classes = vec!["calendar-day"];
        if !cell.in_month {
            classes.push("calendar-day--outside");
        }
        if is_weekend(cell.date) {
            classes.push("calendar-day--weekend");
        }
        if let Some(status) = cell.status {
            classes.push(status.css_class());
        }
        let title = cell.titles.join(", ");

        view! {
            <div class=classes.join(" ") title=title>
                <span class="calendar-day__number">{cell.date.day()}</span>
            </div>
        }
    };

    view! {
        <div class="availability-page">
            <h2 class="page-title">"Availability Calendar"</h2>

            <div class="legend">
                <span class="legend-item">
                    <span class="legend-color legend-color--booked"></span>
                    " Booked"
                </span>
                <span class="legend-item">
                    <span class="legend-color legend-color--pending"></span>
                    " Pending"
                </span>
                <span class="legend-item">
                    <span class="legend-color legend-color--available"></span>
                    " Available"
                </span>
            </div>

            {move || {
                error.get().map(|msg| view! { <div class="error-box">{msg}</div> })
            }}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading-message">"Loading calendar..."</div> }
            >
                <div class="calendar-wrapper">
                    <div class="calendar-header">
                        <button
                            class="calendar-nav"
                            on:click=move |_| month.update(|m| *m = prev_month(*m))
                        >
                            "❮"
                        </button>
                        <span class="calendar-title">{month_title}</span>
                        <button
                            class="calendar-nav"
                            on:click=move |_| month.update(|m| *m = next_month(*m))
                        >
                            "❯"
                        </button>
                    </div>

                    <div class="calendar-grid">
                        {WEEKDAY_HEADERS
                            .iter()
                            .map(|day| view! { <div class="calendar-weekday">{*day}</div> })
                            .collect_view()}
                        {move || cells().into_iter().map(cell_view).collect_view()}
                    </div>
                </div>
            </Show>
        </div>
    }
}
