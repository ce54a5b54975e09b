pub mod api;

use contracts::dashboard::{DashboardStats, EventTypeCount, MonthlyCount};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::components::{LineChart, PieChart, StatCard};
use crate::shared::date_utils::month_abbrev;

/// Month axis labels for the bookings-per-month chart.
fn monthly_labels(series: &[MonthlyCount]) -> Vec<String> {
    series.iter().map(|m| month_abbrev(m.month)).collect()
}

fn monthly_values(series: &[MonthlyCount]) -> Vec<i64> {
    series.iter().map(|m| m.count as i64).collect()
}

fn distribution_data(series: &[EventTypeCount]) -> Vec<(String, i64)> {
    series
        .iter()
        .map(|e| (e.event_type.clone(), e.count as i64))
        .collect()
}

/// Admin dashboard: three stat cards plus the two aggregate charts.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let stats = RwSignal::new(None::<DashboardStats>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_stats().await {
                Ok(s) => stats.set(Some(s)),
                Err(e) => {
                    log::warn!("Failed to load dashboard stats: {}", e.message());
                    error.set(Some("Failed to load dashboard statistics.".to_string()));
                }
            }
        });
    });

    let card_value = move |pick: fn(&DashboardStats) -> u64| {
        Signal::derive(move || stats.get().map(|s| pick(&s) as i64))
    };

    let labels = Signal::derive(move || {
        stats
            .get()
            .map(|s| monthly_labels(&s.bookings_per_month))
            .unwrap_or_default()
    });
    let values = Signal::derive(move || {
        stats
            .get()
            .map(|s| monthly_values(&s.bookings_per_month))
            .unwrap_or_default()
    });
    let distribution = Signal::derive(move || {
        stats
            .get()
            .map(|s| distribution_data(&s.event_type_distribution))
            .unwrap_or_default()
    });

    view! {
        <div class="page-container">
            <h2 class="page-title">"Admin Dashboard"</h2>

            {move || {
                error.get().map(|msg| view! { <div class="error-box">{msg}</div> })
            }}

            <Show
                when=move || stats.get().is_some() || error.get().is_some()
                fallback=|| view! { <div>"Loading dashboard..."</div> }
            >
                <div class="dashboard-cards">
                    <StatCard
                        label="Total Bookings".to_string()
                        value=card_value(|s| s.total_bookings)
                    />
                    <StatCard
                        label="Unread Inquiries".to_string()
                        value=card_value(|s| s.unread_inquiries)
                    />
                    <StatCard
                        label="Upcoming Events".to_string()
                        value=card_value(|s| s.upcoming_events)
                    />
                </div>

                <div class="chart-container">
                    <h3>"Bookings Per Month"</h3>
                    <LineChart labels=labels values=values />
                </div>

                <div class="chart-container">
                    <h3>"Event Type Distribution"</h3>
                    <PieChart data=distribution />
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_numbers_become_axis_labels() {
        let series = vec![
            MonthlyCount { month: 1, count: 4 },
            MonthlyCount { month: 6, count: 11 },
            MonthlyCount { month: 12, count: 2 },
        ];
        assert_eq!(monthly_labels(&series), vec!["Jan", "Jun", "Dec"]);
        assert_eq!(monthly_values(&series), vec![4, 11, 2]);
    }

    #[test]
    fn distribution_maps_to_label_count_pairs() {
        let series = vec![EventTypeCount {
            event_type: "Wedding".to_string(),
            count: 30,
        }];
        assert_eq!(
            distribution_data(&series),
            vec![("Wedding".to_string(), 30)]
        );
    }
}
