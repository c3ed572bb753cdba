use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;
use recur_core::{DateRange, parse_date};

use crate::collection;
use crate::render::render_listing;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Occurrence collection (JSON file, or - for stdin)
    #[arg(short, long)]
    pub input: String,

    /// Show occurrences from this date (YYYY-MM-DD)
    #[arg(long, conflicts_with_all = ["week", "month"])]
    pub from: Option<String>,

    /// Show occurrences until this date (YYYY-MM-DD)
    #[arg(long, conflicts_with_all = ["week", "month"])]
    pub to: Option<String>,

    /// Show the Sunday-to-Saturday week containing this date
    #[arg(long, conflicts_with = "month")]
    pub week: Option<String>,

    /// Show the month containing this date
    #[arg(long)]
    pub month: Option<String>,
}

pub fn run(args: ListArgs) -> Result<()> {
    let occurrences = collection::read(&args.input)?;
    let range = resolve_range(&args)?;

    let visible = range.filter(&occurrences);
    if visible.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for line in render_listing(&visible) {
        println!("{}", line);
    }

    Ok(())
}

fn resolve_range(args: &ListArgs) -> Result<DateRange> {
    if let Some(week) = &args.week {
        return Ok(DateRange::week_of(parse_date(week)?));
    }
    if let Some(month) = &args.month {
        return Ok(DateRange::month_of(parse_date(month)?));
    }
    Ok(DateRange::from_args(args.from.as_deref(), args.to.as_deref())?)
}
