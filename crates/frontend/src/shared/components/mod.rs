pub mod charts;
pub mod stat_card;
pub mod status_badge;

pub use charts::{LineChart, PieChart};
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
