pub mod facilities;
pub mod gallery;
pub mod home;
pub mod login;
pub mod pricing;
