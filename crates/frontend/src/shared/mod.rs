pub mod api;
pub mod auth;
pub mod components;
pub mod date_utils;
pub mod export;
pub mod list_utils;
pub mod modal;
pub mod receipt;
