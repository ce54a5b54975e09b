pub mod api;
pub mod form_state;
pub mod ui;
