use async_trait::async_trait;

/// Generic repository trait for overwriting the writable columns of an existing record
///
/// # Type Parameters
/// * `T` - The record type
#[async_trait]
pub trait Update<T>: Send + Sync {
    /// Write `item` into `row`
    ///
    /// # Arguments
    /// * `row` - The physical row, resolved in the same request
    /// * `item` - The full merged record; only its writable columns are written
    ///
    /// # Returns
    /// * `Ok(())` - All range writes succeeded
    /// * `Err` - An error if a write failed. Writes already applied are not undone.
    async fn update(&self, row: usize, item: &T) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
