use async_trait::async_trait;

/// Generic repository trait for appending a new record
///
/// # Type Parameters
/// * `T` - The record type
#[async_trait]
pub trait Create<T>: Send + Sync {
    /// Append `item` as a new row
    ///
    /// # Returns
    /// * `Ok(row)` - The physical row the record landed in
    /// * `Err` - An error if any of the writes failed. Writes already applied are not undone.
    async fn create(&self, item: &T) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
