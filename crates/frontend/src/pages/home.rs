use leptos::prelude::*;
use leptos_router::components::A;

struct HostedEvent {
    title: &'static str,
    image: &'static str,
}

const HOSTED_EVENTS: [HostedEvent; 6] = [
    HostedEvent {
        title: "Wedding",
        image: "static/events/wedding.png",
    },
    HostedEvent {
        title: "Engagement",
        image: "static/events/engagement.png",
    },
    HostedEvent {
        title: "Reception",
        image: "static/events/reception.png",
    },
    HostedEvent {
        title: "Birthday Party",
        image: "static/events/birthday.png",
    },
    HostedEvent {
        title: "Corporate Event",
        image: "static/events/corporate.png",
    },
    HostedEvent {
        title: "Other Events",
        image: "static/events/other.png",
    },
];

/// Landing page: welcome banner, contact details and the event-type cards.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-container">
            <div class="home-content">
                <h1>
                    "Welcome to " <span class="highlight">"Sri Lakshmi Gardens"</span>
                </h1>
                <p>"Your perfect destination for weddings, events, and celebrations."</p>

                <div class="contact-block">
                    <div class="contact-info">
                        <h2>"Contact Us"</h2>
                        <p>
                            <strong>"Address:"</strong>
                            <br />
                            "Sri Lakshmi Gardens A/C - Grand Marriage & Party Hall,"
                            <br />
                            "Temple Street, Gandhi Nagar,"
                            <br />
                            "Kanchipuram, Tamil Nadu - 631551"
                        </p>
                        <p>
                            <strong>"Phone: "</strong>
                            <a href="tel:+919843186231">"98431 86231"</a>
                        </p>
                        <p>
                            <strong>"Email: "</strong>
                            <a href="mailto:bookings@srilakshmigardens.in">
                                "bookings@srilakshmigardens.in"
                            </a>
                        </p>
                    </div>
                </div>
            </div>

            <section class="events-section">
                <h2 class="events-title">"Events We Host"</h2>
                <div class="events-grid">
                    {HOSTED_EVENTS
                        .iter()
                        .map(|ev| {
                            view! {
                                <A href="/pricing">
                                    <div class="event-card">
                                        <div class="event-image">
                                            <img src=ev.image alt=ev.title />
                                        </div>
                                        <h3>{ev.title}</h3>
                                    </div>
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
