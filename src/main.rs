use anyhow::{Context, Result};
use clap::Parser;
use notification_patcher::{logging, report, PatchOutcome, DEDUPLICATION};
use std::io;

#[derive(Parser)]
#[command(name = "notification-patcher")]
#[command(
    about = "Count failed notifications as duplicates in server/services/notificationService.ts",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Show unified diff of the change after patching
    #[arg(short, long)]
    diff: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let patch = &DEDUPLICATION;

    let outcome = patch
        .apply(".")
        .with_context(|| format!("failed to patch {}", patch.target))?;

    report::print_outcome(patch, &outcome, &mut io::stdout())?;

    if let (
        true,
        PatchOutcome::Applied {
            file,
            original,
            patched,
            ..
        },
    ) = (cli.diff, &outcome)
    {
        print!("{}", report::render_diff(file, original, patched));
    }

    Ok(())
}
