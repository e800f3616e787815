use tracing::{debug, info, warn};

use crate::error::SeatingError;
use crate::model::{Guest, Venue};
use super::grouping::{group_guests, order_by_size};
use super::tables::TableLayout;
use super::types::SeatingPlan;

/// Seats guests at a venue, keeping group tags together where capacity allows
#[derive(Debug, Clone)]
pub struct SeatingPlanner {
    venue: Venue,
}

impl SeatingPlanner {
    /// Fails with `InvalidConfiguration` when the venue has no tables or no seats
    pub fn new(venue: Venue) -> Result<Self, SeatingError> {
        venue.validate()?;
        Ok(Self { venue })
    }

    pub fn venue(&self) -> &Venue {
        &self.venue
    }

    /// Group-first bin packing over the venue's tables
    ///
    /// Groups are placed largest first. A group sits at the first table that
    /// holds all of it. Otherwise it fills the earliest run of adjacent open
    /// tables that holds it, and only when no such run exists does it spread
    /// beyond the roomiest run. Whoever is left once every seat is taken ends
    /// up in `unseated`.
    pub fn generate_seating(&self, guests: &[Guest]) -> SeatingPlan {
        let mut groups = group_guests(guests);
        order_by_size(&mut groups);

        let mut layout = TableLayout::new(self.venue.tables as usize, self.venue.seats_per_table as usize);
        let mut plan = SeatingPlan::default();

        for group in &groups {
            if !layout.has_free_seats() {
                plan.unseated.extend(group.members.iter().map(|g| (*g).clone()));
                continue;
            }

            let mut remaining: &[&Guest] = &group.members;
            let mut span: Option<(usize, usize)> = None; // first and last table used by this group

            while !remaining.is_empty() {
                let next = match span {
                    None => layout.starting_table(remaining.len()),
                    Some((first, last)) => layout.next_open_beside(first, last),
                };
                let Some(table) = next else {
                    break;
                };

                let taken = layout.take(table, remaining.len());
                let (placed, rest) = remaining.split_at(taken);
                debug!(
                    group = group.tag,
                    table,
                    placed = taken,
                    free_left = layout.free_seats(table),
                    "placed group members"
                );

                plan.tables
                    .entry(table)
                    .or_default()
                    .extend(placed.iter().map(|g| (*g).clone()));
                remaining = rest;
                span = Some(match span {
                    None => (table, table),
                    Some((first, last)) => (first.min(table), last.max(table)),
                });
            }

            plan.unseated.extend(remaining.iter().map(|g| (*g).clone()));
        }

        if !plan.unseated.is_empty() {
            warn!(
                unseated = plan.unseated.len(),
                total_seats = self.venue.total_seats(),
                "not enough seats for every guest"
            );
        }
        info!(
            guests = guests.len(),
            seated = plan.seated_count(),
            tables_used = plan.tables_used(),
            "seating generated"
        );

        plan
    }
}

/// One-shot planner run for callers that do not keep a planner around
pub fn generate_seating(guests: &[Guest], venue: &Venue) -> Result<SeatingPlan, SeatingError> {
    Ok(SeatingPlanner::new(venue.clone())?.generate_seating(guests))
}
