//! Terminal rendering for occurrences.

use owo_colors::OwoColorize;
use recur_core::Occurrence;

/// Marker shown next to occurrences that still belong to a series.
const REPEAT_MARKER: &str = "↻";

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Occurrence {
    fn render(&self) -> String {
        let time = format!(
            "{}-{}",
            self.details.start_time.format("%H:%M"),
            self.details.end_time.format("%H:%M")
        );
        let marker = if self.is_recurring() {
            REPEAT_MARKER.cyan().to_string()
        } else {
            " ".to_string()
        };

        let mut line = format!("  {} {} {}", time, marker, self.details.title);
        if !self.details.location.is_empty() {
            line.push_str(&format!(" @ {}", self.details.location).dimmed().to_string());
        }
        line.push_str(&format!("  [{}]", self.id).dimmed().to_string());
        line
    }
}

/// Occurrences grouped under a bold date heading per day, in the order given.
pub fn render_listing(occurrences: &[&Occurrence]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_date = None;

    for occurrence in occurrences {
        if current_date != Some(occurrence.date) {
            if current_date.is_some() {
                lines.push(String::new());
            }
            lines.push(occurrence.date.format("%a %Y-%m-%d").bold().to_string());
            current_date = Some(occurrence.date);
        }
        lines.push(occurrence.render());
    }

    lines
}
