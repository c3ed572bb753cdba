use std::path::Path;

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;
use recur_core::{EventChanges, OccurrenceId, Scope, parse_date, parse_time, update};

use crate::collection;
use crate::config::Config;

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Occurrence collection (JSON file, or - for stdin)
    #[arg(short, long)]
    pub input: String,

    /// Id of the occurrence to edit
    #[arg(long)]
    pub id: String,

    /// single: this occurrence only (leaves its series). all: the whole series
    #[arg(long)]
    pub scope: Option<Scope>,

    #[arg(long)]
    pub title: Option<String>,

    /// New date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// New start time (HH:MM)
    #[arg(long)]
    pub start: Option<String>,

    /// New end time (HH:MM)
    #[arg(long)]
    pub end: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    /// Reminder lead time in minutes
    #[arg(long)]
    pub notify: Option<u32>,
}

pub fn run(args: EditArgs, config: &Config, output: Option<&Path>) -> Result<()> {
    let changes = build_changes(&args)?;
    if changes.is_empty() {
        anyhow::bail!(
            "Nothing to change. Pass at least one of --title, --date, --start, --end, --description, --location, --category, --notify"
        );
    }

    let occurrences = collection::read(&args.input)?;
    let target = OccurrenceId(args.id.clone());
    let scope = args.scope.unwrap_or(config.default_scope);

    if !occurrences.iter().any(|o| o.id == target) {
        eprintln!("{}", format!("No occurrence with id '{}'; nothing changed", target).yellow());
    }

    let updated = update(&occurrences, &target, &changes, scope);
    collection::write(&updated, output)
}

fn build_changes(args: &EditArgs) -> Result<EventChanges> {
    Ok(EventChanges {
        title: args.title.clone(),
        date: args.date.as_deref().map(parse_date).transpose()?,
        start_time: args.start.as_deref().map(parse_time).transpose()?,
        end_time: args.end.as_deref().map(parse_time).transpose()?,
        description: args.description.clone(),
        location: args.location.clone(),
        category: args.category.clone(),
        notification_time: args.notify,
    })
}
