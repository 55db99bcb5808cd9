//! Console messages for a patch run.

use crate::patch::{PatchOutcome, TextPatch};
use colored::Colorize;
use similar::{ChangeTag, TextDiff};
use std::io::{self, Write};
use std::path::Path;

pub const NO_CHANGES: &str = "❌ No changes made - pattern not found or already patched";

/// Success line followed by one bullet per summary entry.
pub fn success_lines(patch: &TextPatch) -> Vec<String> {
    std::iter::once(format!("✅ {}", patch.headline))
        .chain(patch.summary.iter().map(|line| format!("   - {line}")))
        .collect()
}

/// Print the success block, or the single no-op line.
pub fn print_outcome(
    patch: &TextPatch,
    outcome: &PatchOutcome,
    out: &mut impl Write,
) -> io::Result<()> {
    if outcome.is_applied() {
        for line in success_lines(patch) {
            writeln!(out, "{line}")?;
        }
    } else {
        writeln!(out, "{NO_CHANGES}")?;
    }
    Ok(())
}

/// Unified line diff between the file before and after patching.
pub fn render_diff(file: &Path, original: &str, modified: &str) -> String {
    let mut rendered = format!(
        "{}\n{}\n",
        format!("--- {} (original)", file.display()).dimmed(),
        format!("+++ {} (patched)", file.display()).dimmed()
    );

    let diff = TextDiff::from_lines(original, modified);
    for change in diff.iter_all_changes() {
        let line = match change.tag() {
            ChangeTag::Delete => format!("-{change}").red(),
            ChangeTag::Insert => format!("+{change}").green(),
            ChangeTag::Equal => format!(" {change}").normal(),
        };
        rendered.push_str(&line.to_string());
    }
    rendered
}
