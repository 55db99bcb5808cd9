//! Notification Patcher: one-shot fix for the duplicate-notification check
//!
//! Rewrites `checkDuplicateNotification` in `server/services/notificationService.ts` so that
//! `failed` queue rows count as duplicates alongside `pending` ones, and logs the status of
//! the row that blocked the new notification.
//!
//! # Behaviour
//!
//! - The search block is matched as literal text, byte for byte
//! - Only the matched span changes; everything around it is preserved
//! - Every occurrence is rewritten in one pass: one read, at most one write
//! - A file without the search block is left alone and reported as a no-op
//! - Running twice is a no-op the second time
//!
//! # Example
//!
//! ```no_run
//! use notification_patcher::{PatchOutcome, DEDUPLICATION};
//!
//! match DEDUPLICATION.apply(".") {
//!     Ok(PatchOutcome::Applied { file, .. }) => println!("patched {}", file.display()),
//!     Ok(other) => println!("{other}"),
//!     Err(e) => eprintln!("patch failed: {e}"),
//! }
//! ```

pub mod dedup;
pub mod edit;
pub mod logging;
pub mod patch;
pub mod report;

// Re-exports
pub use dedup::DEDUPLICATION;
pub use edit::{Edit, EditError};
pub use patch::{PatchError, PatchOutcome, TextPatch};
