pub mod guest;
pub mod venue;

pub use guest::Guest;
pub use venue::Venue;
