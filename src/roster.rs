//! Ordered guest list with lookup by name

use std::collections::HashMap;

use crate::model::Guest;

/// Guests in insertion order plus a name index
///
/// Duplicate names are allowed. Name lookups resolve to the most recently
/// added guest with that name.
#[derive(Debug, Clone, Default)]
pub struct GuestRoster {
    guests: Vec<Guest>,
    by_name: HashMap<String, Vec<usize>>, // name -> positions in `guests`, oldest first
}

impl GuestRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, guest: Guest) {
        self.by_name
            .entry(guest.name().to_string())
            .or_default()
            .push(self.guests.len());
        self.guests.push(guest);
    }

    /// Removes the guest `find(name)` would return
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(position) = self.position_of(name) else {
            return false;
        };
        self.guests.remove(position);
        self.reindex();
        true
    }

    pub fn find(&self, name: &str) -> Option<&Guest> {
        self.position_of(name).map(|position| &self.guests[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn count(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    /// All guests in insertion order
    pub fn all_guests(&self) -> &[Guest] {
        &self.guests
    }

    pub fn clear(&mut self) {
        self.guests.clear();
        self.by_name.clear();
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).and_then(|positions| positions.last().copied())
    }

    // Positions after a removal have shifted, rebuild from scratch
    fn reindex(&mut self) {
        self.by_name.clear();
        for (position, guest) in self.guests.iter().enumerate() {
            self.by_name.entry(guest.name().to_string()).or_default().push(position);
        }
    }
}

impl FromIterator<Guest> for GuestRoster {
    fn from_iter<I: IntoIterator<Item = Guest>>(iter: I) -> Self {
        let mut roster = GuestRoster::new();
        for guest in iter {
            roster.add(guest);
        }
        roster
    }
}
