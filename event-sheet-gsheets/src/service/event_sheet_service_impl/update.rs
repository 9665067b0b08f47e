use event_sheet_api::{normalize_key, ApiError, ApiResult, ChangeContext, EventSheet, EventSheetInput, MAX_CELL_CHARS};
use event_sheet_db::models::audit::audit_log::AuditLogModel;
use event_sheet_db::models::event::diff::diff_writable;
use event_sheet_db::models::event::event::field_names;
use event_sheet_db::models::schema::REJECTION_REASON_COLUMN;
use event_sheet_db::repository::append_audits::AppendAudits;
use event_sheet_db::repository::update::Update;
use event_sheet_db::utils::timestamp::now_local;
use tracing::{debug, info, warn};
use validator::Validate;

use super::service_impl::{failed, EventSheetServiceImpl};

impl EventSheetServiceImpl {
    /// Resolve, merge, stamp, diff, write, then audit.
    ///
    /// Nothing is written when neither the writable fields nor the rejection reason change.
    pub(super) async fn update_impl(
        &self,
        key: &str,
        input: EventSheetInput,
        rejection_reason: Option<String>,
        ctx: &ChangeContext,
    ) -> ApiResult<EventSheet> {
        normalize_key(key)?;
        input.validate()?;
        let rejection_reason = rejection_reason.map(|reason| reason.trim().to_string());
        if rejection_reason.as_ref().is_some_and(|reason| reason.chars().count() > MAX_CELL_CHARS) {
            return Err(ApiError::ValidationError("rejection reason is too long".to_string()));
        }

        let (key, row) = self.locate(key).await?;
        let current = self.load_row(&key, row).await?;

        let mut merged = current.clone();
        let ignored = merged.apply_input(&input);
        if !ignored.is_empty() {
            warn!(key = %key, fields = ?field_names(&ignored), "update ignores fields this service does not write");
        }

        let now = now_local();
        let stamped = merged.stamp_first_time_fields(&current, &now);
        if !stamped.is_empty() {
            debug!(key = %key, fields = ?field_names(&stamped), "stamped first-time fields");
        }

        let changes = diff_writable(&current, &merged);
        if !changes.is_empty() {
            self.event_repository
                .update(row, &merged)
                .await
                .map_err(failed("write event row"))?;
        }

        let mut entries: Vec<AuditLogModel> = changes
            .iter()
            .map(|change| AuditLogModel::from_change(&now, &key, row, change, ctx))
            .collect();

        if let Some(reason) = rejection_reason.filter(|reason| *reason != current.motivo_rechazo) {
            self.event_repository
                .write_rejection_reason(row, &reason)
                .await
                .map_err(failed("write rejection reason"))?;
            entries.push(AuditLogModel::new(
                &now,
                &key,
                row,
                REJECTION_REASON_COLUMN.header,
                &current.motivo_rechazo,
                &reason,
                ctx,
            ));
            merged.motivo_rechazo = reason;
        }

        self.audit_log_repository
            .append_audits(&entries)
            .await
            .map_err(failed("append audit entries"))?;

        info!(key = %key, row, changes = entries.len(), actor = %ctx.actor, "event updated");
        Ok(merged.into())
    }
}
