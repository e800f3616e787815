//! Table seating for events: guests sharing a group tag are kept together
//! while every table stays within its seat capacity.

pub mod error;
pub mod model;
pub mod seating;
pub mod roster;
pub mod parser;
pub mod display;
pub mod web;

pub use error::{GuestError, LoadError, SeatingError};
pub use model::{Guest, Venue};
pub use roster::GuestRoster;
pub use seating::{generate_seating, SeatingPlan, SeatingPlanner};
