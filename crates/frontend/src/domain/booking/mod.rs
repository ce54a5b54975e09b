pub mod api;
pub mod ui;

use contracts::domain::booking::Booking;
use leptos::prelude::*;

/// App-level slot for the booking returned by the last successful form POST.
/// The success page reads it; a page refresh loses it by design.
#[derive(Clone, Copy)]
pub struct LastSubmission(RwSignal<Option<Booking>>);

impl LastSubmission {
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }

    pub fn set(&self, booking: Booking) {
        self.0.set(Some(booking));
    }

    pub fn get(&self) -> Option<Booking> {
        self.0.get()
    }
}

impl Default for LastSubmission {
    fn default() -> Self {
        Self::new()
    }
}
