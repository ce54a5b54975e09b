pub mod booking;
pub mod expense;
