use serde::{Deserialize, Serialize};

use crate::error::SeatingError;

/// Venue description. Only `tables` and `seats_per_table` drive seating,
/// the rest is informational.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub capacity: u32,
    pub tables: u32,
    pub seats_per_table: u32,
}

impl Venue {
    pub fn new(name: impl Into<String>, cost: f64, capacity: u32, tables: u32, seats_per_table: u32) -> Self {
        Self {
            name: name.into(),
            cost,
            capacity,
            tables,
            seats_per_table,
        }
    }

    /// Unnamed venue with just the seating layout
    pub fn with_tables(tables: u32, seats_per_table: u32) -> Self {
        Self::new("", 0.0, tables.saturating_mul(seats_per_table), tables, seats_per_table)
    }

    /// Total number of seats across all tables
    pub fn total_seats(&self) -> usize {
        self.tables as usize * self.seats_per_table as usize
    }

    /// Checks the seating layout is usable
    pub fn validate(&self) -> Result<(), SeatingError> {
        if self.tables == 0 || self.seats_per_table == 0 {
            return Err(SeatingError::InvalidConfiguration {
                tables: self.tables,
                seats_per_table: self.seats_per_table,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_seats() {
        let venue = Venue::new("Test Hall", 1000.0, 100, 10, 10);
        assert_eq!(venue.total_seats(), 100);
    }

    #[test]
    fn test_validate_rejects_zero_tables() {
        let venue = Venue::with_tables(0, 10);
        assert_eq!(
            venue.validate(),
            Err(SeatingError::InvalidConfiguration { tables: 0, seats_per_table: 10 })
        );
    }

    #[test]
    fn test_validate_rejects_zero_seats() {
        assert!(Venue::with_tables(5, 0).validate().is_err());
    }

    #[test]
    fn test_validate_accepts_positive_layout() {
        assert!(Venue::with_tables(1, 1).validate().is_ok());
    }
}
