use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::availability::AvailabilityPage;
use crate::dashboards::overview::DashboardPage;
use crate::domain::booking::ui::detail::BookingDetailPage;
use crate::domain::booking::ui::form::BookingFormPage;
use crate::domain::booking::ui::list::BookingsPage;
use crate::domain::booking::ui::success::BookingSuccessPage;
use crate::domain::expense::ui::list::ExpensesPage;
use crate::layout::navbar::Navbar;
use crate::pages::facilities::FacilitiesPage;
use crate::pages::gallery::GalleryPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::pricing::PricingPage;
use crate::shared::auth::guard::RequireAuth;
use crate::shared::modal::ModalHost;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <ModalHost />
            <main>
                <Routes fallback=|| view! { <div class="page-container">"Page not found."</div> }>
                    // Public routes
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/gallery") view=GalleryPage />
                    <Route path=path!("/pricing") view=PricingPage />
                    <Route path=path!("/facilities") view=FacilitiesPage />
                    <Route path=path!("/book-now") view=BookingFormPage />
                    <Route path=path!("/booking-success") view=BookingSuccessPage />
                    <Route path=path!("/bookings/:id") view=BookingDetailPage />
                    <Route path=path!("/login") view=LoginPage />

                    // Admin routes (token presence check only)
                    <Route path=path!("/dashboard") view=|| view! {
                        <RequireAuth><DashboardPage /></RequireAuth>
                    } />
                    <Route path=path!("/bookings") view=|| view! {
                        <RequireAuth><BookingsPage /></RequireAuth>
                    } />
                    <Route path=path!("/availability") view=|| view! {
                        <RequireAuth><AvailabilityPage /></RequireAuth>
                    } />
                    <Route path=path!("/expenses") view=|| view! {
                        <RequireAuth><ExpensesPage /></RequireAuth>
                    } />
                </Routes>
            </main>
        </Router>
    }
}
