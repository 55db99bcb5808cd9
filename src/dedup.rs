//! The duplicate-notification check in `notificationService.ts`.
//!
//! Before this patch the check only looked at `pending` queue rows. A row that failed and is
//! waiting for retry did not count, so the next trigger queued a second copy of the same
//! notification.
//!
//! Both blocks start at `private async` so the match does not depend on how deeply the
//! class body is indented. Every occurrence in the file is rewritten in a single run.

use crate::patch::TextPatch;

pub const TARGET: &str = "server/services/notificationService.ts";

const SEARCH: &str = r#"private async checkDuplicateNotification(userId: number, appointmentId: number | undefined, triggerCode: TriggerCode): Promise<boolean> {
    const thirtyMinutesAgo = subMinutes(new Date(), 30);

    // Check notification queue for duplicate notifications
    const [existing] = await db
      .select({
        id: notificationQueue.id
      })
      .from(notificationQueue)
      .where(and(
        eq(notificationQueue.userId, userId),
        eq(notificationQueue.triggerCode, triggerCode),
        gte(notificationQueue.createdAt, thirtyMinutesAgo),
        eq(notificationQueue.status, 'pending')
      ));

    return !!existing;
  }"#;

const REPLACEMENT: &str = r#"private async checkDuplicateNotification(userId: number, appointmentId: number | undefined, triggerCode: TriggerCode): Promise<boolean> {
    const thirtyMinutesAgo = subMinutes(new Date(), 30);

    // Check notification queue for duplicate notifications
    // Include both 'pending' and 'failed' to prevent creating duplicates
    // while failed notifications are being retried
    const [existing] = await db
      .select({
        id: notificationQueue.id,
        status: notificationQueue.status
      })
      .from(notificationQueue)
      .where(and(
        eq(notificationQueue.userId, userId),
        eq(notificationQueue.triggerCode, triggerCode),
        gte(notificationQueue.createdAt, thirtyMinutesAgo),
        or(
          eq(notificationQueue.status, 'pending'),
          eq(notificationQueue.status, 'failed')
        )
      ));

    if (existing) {
      console.log(`🔁 Found existing ${existing.status} notification within 30 minutes - preventing duplicate`);
    }

    return !!existing;
  }"#;

/// Count `failed` rows as duplicates too, and log the status of whatever was found.
pub const DEDUPLICATION: TextPatch = TextPatch {
    id: "notification-dedup-failed-status",
    target: TARGET,
    search: SEARCH,
    replacement: REPLACEMENT,
    headline: "Successfully fixed deduplication logic",
    summary: &[
        "Now includes both pending and failed status in duplicate check",
        "Prevents creating duplicates while failed notifications are being retried",
        "Added logging to track when duplicates are prevented",
    ],
};
