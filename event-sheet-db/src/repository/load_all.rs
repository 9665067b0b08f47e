use async_trait::async_trait;

/// Generic repository trait for loading every record of a sheet in one read
///
/// Rows are decoded independently and returned in sheet order.
#[async_trait]
pub trait LoadAll<T>: Send + Sync {
    async fn load_all(&self) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
