use contracts::domain::booking::FieldErrors;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::expense::api::{create_expense, update_expense};
use crate::domain::expense::form_state::{ExpenseForm, MONEY_FIELDS};
use crate::shared::modal::ModalHandle;

/// Modal form for adding or editing one expense sheet. The total is shown
/// live from the cost columns and never edited directly.
#[component]
pub fn ExpenseFormModal(
    /// Pre-filled state; `id: None` means create.
    initial: ExpenseForm,
    /// Invoked after a successful save so the list can refetch.
    on_saved: Callback<()>,
    handle: ModalHandle,
) -> impl IntoView {
    let editing = initial.id.is_some();
    let form = RwSignal::new(initial);
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let field_error = move |field: &'static str| {
        errors.with(|e| {
            e.get(field)
                .map(|msg| view! { <span class="error-text">{msg.clone()}</span> })
        })
    };

    let live_total = move || form.with(|f| f.cost_total());

    let handle_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let dto = match form.get_untracked().to_dto() {
            Ok(dto) => dto,
            Err(local_errors) => {
                errors.set(local_errors);
                return;
            }
        };

        busy.set(true);
        errors.set(FieldErrors::new());

        spawn_local(async move {
            let result = match dto.id {
                Some(id) => update_expense(id, &dto).await,
                None => create_expense(&dto).await,
            };
            match result {
                Ok(_) => {
                    on_saved.run(());
                    handle.close();
                }
                Err(e) => {
                    log::warn!("Expense save failed: {}", e.message());
                    errors.set(e.payload.field_errors());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="expense-form">
            <h3>{if editing { "Edit Expense" } else { "Add Expense" }}</h3>

            {move || {
                errors
                    .with(|e| e.get("non_field_errors").cloned())
                    .map(|msg| view! { <div class="error-box">{msg}</div> })
            }}

            <form on:submit=handle_save>
                <label>
                    "Function Date"
                    <input
                        type="date"
                        required
                        prop:value=move || form.with(|f| f.function_date.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.function_date = value);
                            errors.update(|e| {
                                e.remove("function_date");
                            });
                        }
                    />
                </label>
                {move || field_error("function_date")}

                <div class="expense-form__grid">
                    {MONEY_FIELDS
                        .iter()
                        .map(|&(field, label)| {
                            view! {
                                <label>
                                    {label}
                                    <input
                                        type="number"
                                        min="0"
                                        step="0.01"
                                        placeholder="0"
                                        prop:value=move || form.with(|f| f.get(field))
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            form.update(|f| f.set(field, value));
                                            errors.update(|e| {
                                                e.remove(field);
                                            });
                                        }
                                    />
                                    {move || field_error(field)}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="expense-form__total">
                    <strong>"Total: "</strong>
                    {move || format!("₹ {:.2}", live_total())}
                </div>

                <div class="expense-form__actions">
                    <button type="submit" class="btn-primary" disabled=move || busy.get()>
                        {move || {
                            if busy.get() {
                                "Saving..."
                            } else if editing {
                                "Update"
                            } else {
                                "Add"
                            }
                        }}
                    </button>
                    <button
                        type="button"
                        class="btn-secondary"
                        on:click=move |_| handle.close()
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
