use contracts::domain::booking::{BookingDraft, EventType, FieldErrors, FoodPreference};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use wasm_bindgen_futures::spawn_local;

use crate::domain::booking::api::create_booking;
use crate::domain::booking::LastSubmission;

/// Public booking form. Validates required fields and date ordering locally,
/// POSTs once, and renders the backend's field-keyed errors in place when the
/// submit is rejected.
#[component]
pub fn BookingFormPage() -> impl IntoView {
    let last_submission =
        use_context::<LastSubmission>().expect("LastSubmission not provided in context");
    let navigate = use_navigate();

    let draft = RwSignal::new(BookingDraft::default());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let field_error = move |field: &'static str| {
        errors.with(|e| {
            e.get(field)
                .map(|msg| view! { <span class="error-text">{msg.clone()}</span> })
        })
    };

    // Editing a field clears its error until the next submit.
    let set_field = move |apply: fn(&mut BookingDraft, String), field: &'static str| {
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            draft.update(|d| apply(d, value));
            errors.update(|e| {
                e.remove(field);
            });
        }
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let current = draft.get_untracked();
        if let Err(local_errors) = current.validate() {
            errors.set(local_errors);
            return;
        }

        busy.set(true);
        errors.set(FieldErrors::new());

        let navigate = navigate.clone();
        spawn_local(async move {
            match create_booking(&current).await {
                Ok(booking) => {
                    last_submission.set(booking);
                    // replace: true keeps Back from returning to the filled form
                    navigate(
                        "/booking-success",
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Err(e) => {
                    log::warn!("Booking submit failed: {}", e.message());
                    errors.set(e.payload.field_errors());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="form-container">
            <h2>"Book Your Event"</h2>

            {move || {
                errors
                    .with(|e| e.get("non_field_errors").cloned())
                    .map(|msg| view! { <div class="error-box">{msg}</div> })
            }}

            <form on:submit=handle_submit>
                <input
                    type="text"
                    placeholder="Full Name"
                    class="full-width"
                    required
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=set_field(|d, v| d.name = v, "name")
                />
                {move || field_error("name")}

                <input
                    type="tel"
                    placeholder="Phone Number"
                    required
                    prop:value=move || draft.with(|d| d.phone.clone())
                    on:input=set_field(|d, v| d.phone = v, "phone")
                />
                {move || field_error("phone")}

                <input
                    type="tel"
                    placeholder="Alternate Contact"
                    prop:value=move || draft.with(|d| d.alternate_phone.clone())
                    on:input=set_field(|d, v| d.alternate_phone = v, "alternate_phone")
                />

                <input
                    type="email"
                    placeholder="Email Address"
                    required
                    prop:value=move || draft.with(|d| d.email.clone())
                    on:input=set_field(|d, v| d.email = v, "email")
                />
                {move || field_error("email")}

                <input
                    type="text"
                    placeholder="Street / Address Line"
                    class="full-width"
                    prop:value=move || draft.with(|d| d.address_line.clone())
                    on:input=set_field(|d, v| d.address_line = v, "address_line")
                />

                <input
                    type="text"
                    placeholder="State"
                    prop:value=move || draft.with(|d| d.state.clone())
                    on:input=set_field(|d, v| d.state = v, "state")
                />

                <input
                    type="text"
                    placeholder="City"
                    prop:value=move || draft.with(|d| d.city.clone())
                    on:input=set_field(|d, v| d.city = v, "city")
                />

                <input
                    type="text"
                    placeholder="Pincode"
                    prop:value=move || draft.with(|d| d.pincode.clone())
                    on:input=set_field(|d, v| d.pincode = v, "pincode")
                />

                <div class="three-row">
                    <select
                        required
                        prop:value=move || draft.with(|d| d.event_type.clone())
                        on:change=set_field(|d, v| d.event_type = v, "event_type")
                    >
                        <option value="">"Select Event Type"</option>
                        {EventType::ALL
                            .iter()
                            .map(|et| {
                                view! { <option value=et.as_str()>{et.label()}</option> }
                            })
                            .collect_view()}
                    </select>
                    {move || field_error("event_type")}

                    <input
                        type="number"
                        placeholder="Estimated Guests"
                        prop:value=move || draft.with(|d| d.estimated_guests.clone())
                        on:input=set_field(|d, v| d.estimated_guests = v, "estimated_guests")
                    />
                    {move || field_error("estimated_guests")}

                    <select
                        prop:value=move || draft.with(|d| d.food_preference.clone())
                        on:change=set_field(|d, v| d.food_preference = v, "food_preference")
                    >
                        <option value="">"Food Preference"</option>
                        {FoodPreference::ALL
                            .iter()
                            .map(|fp| {
                                view! { <option value=fp.as_str()>{fp.as_str()}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="time-row">
                    <input
                        type="date"
                        required
                        prop:value=move || draft.with(|d| d.from_date.clone())
                        on:input=set_field(|d, v| d.from_date = v, "from_date")
                    />
                    {move || field_error("from_date")}

                    <input
                        type="date"
                        required
                        prop:value=move || draft.with(|d| d.to_date.clone())
                        on:input=set_field(|d, v| d.to_date = v, "to_date")
                    />
                    {move || field_error("to_date")}

                    <input
                        type="time"
                        prop:value=move || draft.with(|d| d.start_time.clone())
                        on:input=set_field(|d, v| d.start_time = v, "start_time")
                    />

                    <input
                        type="time"
                        prop:value=move || draft.with(|d| d.end_time.clone())
                        on:input=set_field(|d, v| d.end_time = v, "end_time")
                    />
                    {move || field_error("end_time")}
                </div>

                <textarea
                    placeholder="Additional Message"
                    class="full-width"
                    rows=4
                    prop:value=move || draft.with(|d| d.message.clone())
                    on:input=set_field(|d, v| d.message = v, "message")
                ></textarea>

                <button class="btn-primary full-width" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Submit Booking" }}
                </button>
            </form>
        </div>
    }
}
