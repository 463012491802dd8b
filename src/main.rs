use anyhow::Result;
use clap::Parser;

mod args;
mod collaborator;
mod converter;
mod document;
mod emitter;
mod error;
mod loader;
mod outcome;

use converter::Converter;
use outcome::{OutcomeKind, Summary};

fn main() -> Result<()> {
    let args = args::Args::parse();

    env_logger::builder()
        .format_timestamp(None)
        .filter_module("collabs_to_yaml", args.log_level)
        .init();

    log::debug!(
        "Converting {} into {}",
        args.input_dir.display(),
        args.output_dir.display()
    );
    let outcomes = Converter::from(&args).run()?;
    if outcomes.is_empty() {
        log::warn!("No JSON file found in {}", args.input_dir.display());
    }
    for outcome in &outcomes {
        let source = outcome.source.display();
        match &outcome.kind {
            OutcomeKind::Written(yaml) => log::debug!("{source} -> {}", yaml.display()),
            OutcomeKind::Faked(yaml) => log::debug!("{source} -> {} (dry run)", yaml.display()),
            OutcomeKind::Empty => log::debug!("{source} -> nothing to write"),
            OutcomeKind::Error(err) => log::warn!("{source} failed: {err}"),
        }
    }
    // per-file failures have been logged already, and do not change the exit status
    log::info!("Done: {}", outcomes.iter().collect::<Summary>());

    Ok(())
}
