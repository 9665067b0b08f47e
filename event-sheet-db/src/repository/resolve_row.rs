use async_trait::async_trait;

/// Repository trait for locating the physical row of a record by its external key
///
/// The lookup is a fresh scan on every call. Implementations must not cache row numbers:
/// rows move when the sheet is edited by hand or by other processes.
///
/// # Example
/// ```ignore
/// match repo.resolve_row(":7").await? {
///     Some(row) => println!("event 7 lives in row {row}"),
///     None => println!("no such event"),
/// }
/// ```
#[async_trait]
pub trait ResolveRow: Send + Sync {
    /// Find the row whose key column equals `key`
    ///
    /// # Arguments
    /// * `key` - The external key, optionally prefixed with `:`
    ///
    /// # Returns
    /// * `Ok(Some(row))` - The 1-based physical row of the first exact match
    /// * `Ok(None)` - If no row carries that key (an empty key never matches)
    /// * `Err` - An error if the key column could not be read
    async fn resolve_row(&self, key: &str) -> Result<Option<usize>, Box<dyn std::error::Error + Send + Sync>>;
}
