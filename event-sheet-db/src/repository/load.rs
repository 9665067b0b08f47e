use async_trait::async_trait;

/// Generic repository trait for loading a single record by its physical row
///
/// # Type Parameters
/// * `T` - The decoded record type
#[async_trait]
pub trait Load<T>: Send + Sync {
    /// Load the record stored in `row`
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The decoded record
    /// * `Ok(None)` - If the row is past the end of the data
    /// * `Err` - An error if the row could not be read
    async fn load(&self, row: usize) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
