pub mod memory;

pub use memory::MemoryPostStore;

use app_models::post::Post;

/// Storage seam for posts. Operations are synchronous and total.
pub trait PostStore: Send + Sync {
    /// Stored text for `id`, if it was ever upserted
    fn get(&self, id: &str) -> Option<String>;

    /// All posts in insertion order
    fn list(&self) -> Vec<Post>;

    /// Insert or overwrite the text for `id` and return the stored record
    fn upsert(&self, id: &str, text: &str) -> Post;
}
