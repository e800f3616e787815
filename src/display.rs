use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::model::{Guest, Venue};
use crate::seating::SeatingPlan;

/// Formats a guest name with group tag
pub fn format_guest_name(group_tag: &str, name: &str) -> String {
    let tag = group_tag.trim();
    if tag.is_empty() {
        name.to_string()
    } else {
        format!("[{}] {}", tag, name)
    }
}

fn format_guest(guest: &Guest) -> String {
    format_guest_name(guest.group_tag(), guest.name())
}

/// Renders a seating plan as text, one block per occupied table
/// Table labels are 1-based
pub fn render_seating(venue: &Venue, plan: &SeatingPlan) -> String {
    let title = if venue.name.is_empty() { "Seating Plan" } else { venue.name.as_str() };

    let mut lines = vec![
        format!("=== {} ===", title),
        format!(
            "Tables used: {}/{} | Seated: {} | Unseated: {}",
            plan.tables_used(),
            venue.tables,
            plan.seated_count(),
            plan.unseated_count()
        ),
    ];

    for (index, guests) in &plan.tables {
        lines.push(String::new());
        lines.push(format!("Table {} ({}/{})", index + 1, guests.len(), venue.seats_per_table));
        lines.extend(guests.iter().map(|guest| format!("  - {}", format_guest(guest))));
    }

    if !plan.unseated.is_empty() {
        lines.push(String::new());
        lines.push(format!("Unseated guests ({}):", plan.unseated.len()));
        lines.extend(plan.unseated.iter().map(|guest| format!("  - {}", format_guest(guest))));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Prints a seating plan in a readable format
pub fn print_seating(venue: &Venue, plan: &SeatingPlan) {
    print!("{}", render_seating(venue, plan));
}

/// Writes a seating plan to a text file, stamped with the generation time
pub fn write_seating_to_file<P: AsRef<Path>>(
    venue: &Venue,
    plan: &SeatingPlan,
    path: P,
) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Generated {}", chrono::Local::now().format("%Y-%m-%d %H:%M"))?;
    file.write_all(render_seating(venue, plan).as_bytes())?;
    Ok(())
}
