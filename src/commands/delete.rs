use std::path::Path;

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;
use recur_core::{OccurrenceId, Scope, remove};

use crate::collection;
use crate::config::Config;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Occurrence collection (JSON file, or - for stdin)
    #[arg(short, long)]
    pub input: String,

    /// Id of the occurrence to delete
    #[arg(long)]
    pub id: String,

    /// single: this occurrence only. all: the whole series
    #[arg(long)]
    pub scope: Option<Scope>,
}

pub fn run(args: DeleteArgs, config: &Config, output: Option<&Path>) -> Result<()> {
    let occurrences = collection::read(&args.input)?;
    let target = OccurrenceId(args.id);
    let scope = args.scope.unwrap_or(config.default_scope);

    let remaining = remove(&occurrences, &target, scope);

    if remaining.len() == occurrences.len() {
        eprintln!("{}", format!("No occurrence with id '{}'; nothing deleted", target).yellow());
    } else {
        eprintln!(
            "{}",
            format!("Deleted {} occurrence(s)", occurrences.len() - remaining.len()).red()
        );
    }

    collection::write(&remaining, output)
}
