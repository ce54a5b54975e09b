use leptos::prelude::*;

struct Package {
    title: &'static str,
    price: &'static str,
    features: &'static [&'static str],
}

const PACKAGES: [Package; 3] = [
    Package {
        title: "Marriage Hall (24 hrs)",
        price: "₹ 1,25,000",
        features: &[
            "Full-day booking",
            "Stage & seating",
            "Basic decoration",
            "Lighting setup",
            "Catering (Veg and Non-Veg)",
            "DJ",
        ],
    },
    Package {
        title: "Marriage Hall (12 hrs)",
        price: "₹ 60,000",
        features: &[
            "Half-day booking",
            "Stage & seating",
            "Basic decoration",
            "Lighting setup",
            "Catering (Veg and Non-Veg)",
            "DJ",
        ],
    },
    Package {
        title: "Party Hall (12 hrs)",
        price: "₹ 30,000",
        features: &[
            "Half-day booking",
            "Stage & seating",
            "Basic decoration",
            "Lighting setup",
            "Catering (Veg and Non-Veg)",
            "DJ",
        ],
    },
];

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <div class="pricing-container">
            <h2 class="pricing-title">"Pricing & Packages"</h2>
            <div class="pricing-grid">
                {PACKAGES
                    .iter()
                    .map(|pkg| {
                        view! {
                            <div class="pricing-card">
                                <div class="pricing-card__header">
                                    <h3>{pkg.title}</h3>
                                </div>
                                <div class="pricing-card__body">
                                    <p class="pricing-card__price">{pkg.price}</p>
                                    <ul>
                                        {pkg.features
                                            .iter()
                                            .map(|f| view! { <li>{*f}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
