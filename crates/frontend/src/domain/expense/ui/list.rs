use std::cmp::Ordering;

use chrono::Local;
use contracts::domain::expense::Expense;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::expense::api::{delete_expense, export_csv, fetch_expenses};
use crate::domain::expense::form_state::ExpenseForm;
use crate::domain::expense::ui::form::ExpenseFormModal;
use crate::shared::date_utils::format_date;
use crate::shared::export::download_csv;
use crate::shared::list_utils::{create_sort_toggle, get_sort_indicator, sort_list, Sortable};
use crate::shared::modal::ModalService;

impl Sortable for Expense {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "advance" => self.advance.total_cmp(&other.advance),
            "balance" => self.balance.total_cmp(&other.balance),
            "total" => self.total.total_cmp(&other.total),
            _ => self.function_date.cmp(&other.function_date),
        }
    }
}

/// Admin expense sheets: one row per function date, modal create/edit,
/// delete with confirmation, CSV export.
#[component]
pub fn ExpensesPage() -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    let expenses = RwSignal::new(Vec::<Expense>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let (sort_field, set_sort_field) = signal("date".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    let load = move || {
        spawn_local(async move {
            match fetch_expenses().await {
                Ok(list) => {
                    expenses.set(list);
                    error.set(None);
                }
                Err(e) => {
                    log::warn!("Failed to load expenses: {}", e.message());
                    error.set(Some(e.message()));
                }
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let on_saved = Callback::new(move |_| load());

    let open_form = move |initial: ExpenseForm| {
        modal.open(move |handle| {
            view! {
                <ExpenseFormModal initial=initial.clone() on_saved=on_saved handle=handle />
            }
            .into_any()
        });
    };

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this expense record?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match delete_expense(id).await {
                Ok(()) => load(),
                Err(e) => {
                    log::warn!("Failed to delete expense {}: {}", id, e.message());
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
                        format!("expenses_{}.csv", Local::now().format("%Y-%m-%d"));
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
        let mut items = expenses.get();
        sort_list(&mut items, &sort_field.get(), sort_ascending.get());
        items
    };

    let header = move |field: &'static str, title: &'static str| {
        let on_click =
            create_sort_toggle(field, sort_field.into(), set_sort_field, set_sort_ascending);
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

            <h2 class="page-title">"Expenses"</h2>

            <div class="page-actions">
                <button
                    class="btn-primary"
                    on:click=move |_| open_form(ExpenseForm::default())
                >
                    "Add Expense"
                </button>
                <button class="btn-csv" on:click=handle_export>
                    "Export CSV"
                </button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div>"Loading expenses..."</div> }
            >
                <div class="table-wrapper">
                    <table class="styled-table">
                        <thead>
                            <tr>
                                {header("date", "Date")}
                                {header("advance", "Advance")}
                                {header("balance", "Balance")}
                                {header("total", "Total")}
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            // Key on the displayed fields so an in-place edit re-renders the row.
                            <For
                                each=sorted
                                key=|e| {
                                    (
                                        e.id,
                                        e.function_date,
                                        e.advance.to_bits(),
                                        e.balance.to_bits(),
                                        e.total.to_bits(),
                                    )
                                }
                                let:expense
                            >
                                {
                                    let id = expense.id;
                                    let form = ExpenseForm::from_expense(&expense);
                                    view! {
                                        <tr>
                                            <td>{format_date(expense.function_date)}</td>
                                            <td>{format!("₹ {:.2}", expense.advance)}</td>
                                            <td>{format!("₹ {:.2}", expense.balance)}</td>
                                            <td>{format!("₹ {:.2}", expense.total)}</td>
                                            <td>
                                                <button
                                                    class="booking-btn"
                                                    on:click=move |_| open_form(form.clone())
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="booking-btn btn-reject"
                                                    on:click=move |_| handle_delete(id)
                                                >
                                                    "Delete"
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
