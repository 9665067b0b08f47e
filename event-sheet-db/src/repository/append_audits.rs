use async_trait::async_trait;

/// Repository trait for appending audit entries
///
/// Implementations own the audit surface: they create it, with its header row, on first use.
#[async_trait]
pub trait AppendAudits<T>: Send + Sync {
    /// Append one row per entry, in the given order
    async fn append_audits(&self, items: &[T]) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
