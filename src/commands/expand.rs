use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveTime};
use clap::Args;
use owo_colors::OwoColorize;
use recur_core::{EventDefinition, Frequency, Repeat, expand, parse_date, parse_time};

use crate::collection;
use crate::config::Config;

#[derive(Args, Debug)]
pub struct ExpandArgs {
    /// Event title
    pub title: String,

    /// Anchor date (YYYY-MM-DD); the first occurrence
    #[arg(short, long)]
    pub date: String,

    /// Start time (HH:MM)
    #[arg(short, long)]
    pub start: String,

    /// End time (HH:MM). Defaults to start + default_duration_minutes
    #[arg(short, long)]
    pub end: Option<String>,

    /// Repeat type: daily, weekly, monthly or yearly
    #[arg(short, long, requires = "until")]
    pub repeat: Option<Frequency>,

    /// Last date a repeating event may fall on (YYYY-MM-DD, inclusive)
    #[arg(short, long)]
    pub until: Option<String>,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long, default_value = "")]
    pub location: String,

    #[arg(long, default_value = "")]
    pub category: String,

    /// Reminder lead time in minutes
    #[arg(long)]
    pub notify: Option<u32>,

    /// Existing occurrences to append to (JSON file, or - for stdin)
    #[arg(short, long)]
    pub input: Option<String>,
}

pub fn run(args: ExpandArgs, config: &Config, output: Option<&Path>) -> Result<()> {
    let def = build_definition(&args, config)?;
    def.validate()?;

    let mut occurrences = match &args.input {
        Some(input) => collection::read(input)?,
        None => Vec::new(),
    };

    let created = expand(&def);

    if created.is_empty() {
        eprintln!("{}", "Nothing to create: repeat end date is before the event date".yellow());
    } else {
        tracing::info!(count = created.len(), title = %def.details.title, "created occurrences");
    }

    occurrences.extend(created);
    collection::write(&occurrences, output)
}

fn build_definition(args: &ExpandArgs, config: &Config) -> Result<EventDefinition> {
    let date = parse_date(&args.date)?;
    let start = parse_time(&args.start)?;
    let end = match &args.end {
        Some(end) => parse_time(end)?,
        None => default_end(start, config.default_duration_minutes)?,
    };

    let repeat = match args.repeat {
        Some(frequency) => {
            let until = args
                .until
                .as_deref()
                .map(parse_date)
                .transpose()?
                .context("--until is required for repeating events")?;
            Repeat::every(frequency, Some(until))
        }
        None => Repeat::None,
    };

    Ok(EventDefinition::new(args.title.clone(), date, start, end)
        .with_description(args.description.clone())
        .with_location(args.location.clone())
        .with_category(args.category.clone())
        .with_notification_time(args.notify.unwrap_or(config.notification_minutes))
        .with_repeat(repeat))
}

/// `start` plus `minutes`, refusing to wrap past midnight.
fn default_end(start: NaiveTime, minutes: u32) -> Result<NaiveTime> {
    let (end, wrapped) = start.overflowing_add_signed(Duration::minutes(i64::from(minutes)));
    if wrapped != 0 {
        anyhow::bail!(
            "Default duration of {} minutes runs past midnight; pass --end",
            minutes
        );
    }
    Ok(end)
}
