use leptos::prelude::*;

struct Facility {
    title: &'static str,
    description: &'static str,
}

const FACILITIES: [Facility; 8] = [
    Facility {
        title: "Spacious AC Halls",
        description: "Fully air-conditioned marriage and party halls with elegant interiors \
                      and comfortable seating for large gatherings.",
    },
    Facility {
        title: "Decor & Lighting",
        description: "Premium stage decoration, mood lighting, floral arrangements and \
                      custom theme options available.",
    },
    Facility {
        title: "Catering Services",
        description: "Veg and Non-Veg catering with multiple menu choices, hygienic kitchen, \
                      and professional serving staff.",
    },
    Facility {
        title: "Parking Area",
        description: "Large parking space with security assistance to ensure convenience \
                      for your guests.",
    },
    Facility {
        title: "Generator Backup",
        description: "Full power backup to ensure uninterrupted events without any \
                      disturbance.",
    },
    Facility {
        title: "Rooms & Changing Area (AC)",
        description: "Twelve guest rooms plus separate dedicated bride and groom suites \
                      with mirrors, comfortable seating, and private washrooms.",
    },
    Facility {
        title: "Temple",
        description: "A peaceful shrine inside the premises for pooja and muhurtham \
                      rituals before the ceremony.",
    },
    Facility {
        title: "24x7 CCTV Surveillance",
        description: "High-definition CCTV coverage across the premises for guest safety \
                      and quick incident tracking.",
    },
];

#[component]
pub fn FacilitiesPage() -> impl IntoView {
    view! {
        <div class="facilities-container">
            <h2 class="facilities-title">"Facilities Available"</h2>
            <div class="facilities-grid">
                {FACILITIES
                    .iter()
                    .map(|facility| {
                        view! {
                            <div class="facility-card">
                                <h3>{facility.title}</h3>
                                <p>{facility.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
