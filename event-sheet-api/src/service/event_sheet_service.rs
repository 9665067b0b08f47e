use async_trait::async_trait;

use crate::domain::{AddedNote, AuditEntry, ChangeContext, EventSheet, EventSheetInput, Note};
use crate::error::ApiResult;

/// Record operations exposed to the HTTP layer.
///
/// Keys may carry a leading `:` which is stripped before lookup. Every operation that
/// addresses an existing event re-resolves its row on each call; row numbers are never
/// cached because the sheet can be edited out-of-band between calls.
///
/// # Consistency
/// The backing sheet has no transactions and no locks:
/// - Two concurrent updates of the same key both read the old row and the later write wins
///   per written range. Callers needing stronger guarantees must serialize by key.
/// - A mutation issues several range writes. If a later write fails the earlier ones stay
///   in place; nothing is rolled back and the error is returned as `OperationFailed`.
/// - Audit rows are appended only after the data writes succeed, so a failure in between
///   leaves the data changed without its audit entries.
#[async_trait]
pub trait EventSheetService: Send + Sync {
    /// All event rows in sheet order.
    async fn list(&self) -> ApiResult<Vec<EventSheet>>;

    /// The event whose id column equals `key`.
    async fn get(&self, key: &str) -> ApiResult<EventSheet>;

    /// Append a new row. The id, status and derived columns are left for the sheet to fill.
    async fn create(&self, input: EventSheetInput, ctx: &ChangeContext) -> ApiResult<EventSheet>;

    /// Merge `input` over the stored row and write the writable ranges back.
    ///
    /// `rejection_reason`, when given, is written to its own column.
    async fn update(
        &self,
        key: &str,
        input: EventSheetInput,
        rejection_reason: Option<String>,
        ctx: &ChangeContext,
    ) -> ApiResult<EventSheet>;

    /// Filled note slots, most recent first.
    async fn list_notes(&self, key: &str) -> ApiResult<Vec<Note>>;

    /// Store `text` in the first empty note slot.
    async fn add_note(&self, key: &str, text: &str, ctx: &ChangeContext) -> ApiResult<AddedNote>;

    /// Audit history of one event, most recent first.
    async fn list_audit(&self, key: &str) -> ApiResult<Vec<AuditEntry>>;
}
