pub mod auth;
pub mod calendar;
pub mod dashboard;
pub mod domain;
pub mod shared;
