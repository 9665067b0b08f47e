use async_trait::async_trait;

/// Repository trait for loading the audit history of a record
///
/// # Example
/// ```ignore
/// let history = audit_repo.load_audits("7").await?;
/// for entry in history {
///     println!("{} {}: {} -> {}", entry.timestamp, entry.field, entry.before, entry.after);
/// }
/// ```
#[async_trait]
pub trait LoadAudits<T>: Send + Sync {
    /// Load every audit entry recorded for `key`
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The entries, most recent first
    /// * `Err` - An error if the audit surface could not be read
    async fn load_audits(&self, key: &str) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
