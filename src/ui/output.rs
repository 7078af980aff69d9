use colored::*;

use crate::conversation::Marker;
use crate::models::PlaceList;

/// Shown while a turn is in flight; the read-loop never accepts a second
/// submission before the current turn resolves.
pub fn display_thinking() {
    println!("{}", "Thinking...".dimmed());
}

/// Tool activity line. Search results get one summary line per place
/// instead of raw JSON; anything else is printed as-is.
pub fn display_tool_result(name: &str, payload: &str) {
    if let Ok(list) = serde_json::from_str::<PlaceList>(payload) {
        println!(
            "{}",
            format!("[{}] {} place(s)", name, list.places.len()).dimmed()
        );
        for place in &list.places {
            println!("{}", format!("  {}", place.summary()).dimmed());
        }
        if let Some(note) = &list.note {
            println!("{}", format!("  {}", note).dimmed());
        }
        return;
    }
    println!("{}", format!("[{}] {}", name, payload).dimmed());
}

pub fn display_tool_error(name: &str, error: &str) {
    eprintln!("{}", format!("[{}] {}", name, error).yellow());
}

pub fn display_answer(text: &str) {
    println!("{} {}", "Bot:".green().bold(), text);
}

/// The terminal stand-in for the map pane: one line per marker from the
/// latest search results.
pub fn display_markers(markers: &[Marker]) {
    if markers.is_empty() {
        return;
    }
    println!("{}", "On the map:".cyan());
    for marker in markers {
        println!(
            "{}",
            format!(
                "  • {} ({:.6}, {:.6})",
                marker.title, marker.position.latitude, marker.position.longitude
            )
            .cyan()
        );
    }
}
