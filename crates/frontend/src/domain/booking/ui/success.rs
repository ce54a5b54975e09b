use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::booking::LastSubmission;
use crate::shared::date_utils::format_date;

/// Shown right after a successful form submit. The booking comes from the
/// in-memory submission slot, so refreshing this page drops the details.
#[component]
pub fn BookingSuccessPage() -> impl IntoView {
    let last_submission =
        use_context::<LastSubmission>().expect("LastSubmission not provided in context");

    view! {
        <div class="form-container">
            <h2>"Booking Confirmed!"</h2>

            {move || match last_submission.get() {
                Some(booking) => {
                    view! {
                        <div class="success-badge">"Successfully Submitted"</div>
                        <p>"Thank you, " <strong>{booking.name.clone()}</strong> "."</p>
                        <p>
                            "Your booking for "
                            <strong>{booking.event_type.label()}</strong>
                            " has been received."
                        </p>
                        <p>
                            <strong>"Date: "</strong>
                            {format!(
                                "{} - {}",
                                format_date(booking.from_date),
                                format_date(booking.to_date),
                            )}
                        </p>
                        <p>"We will contact you shortly with further details."</p>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <p>
                            "We couldn't load your booking details. If you recently submitted \
                             a booking, please check your email or contact us."
                        </p>
                    }
                        .into_any()
                }
            }}

            <A href="/" attr:class="success-btn">
                "Go Back to Home"
            </A>
        </div>
    }
}
