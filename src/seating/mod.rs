pub mod types;
pub mod grouping;
pub mod tables;
pub mod planner;

pub use types::SeatingPlan;
pub use grouping::{group_guests, order_by_size, GuestGroup};
pub use planner::{generate_seating, SeatingPlanner};
