use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

use app_models::post::Post;

use crate::PostStore;

#[derive(Debug, Default)]
struct Entries {
    // id -> position in `order`
    index: HashMap<String, usize>,
    order: Vec<(String, String)>,
}

/// Process-local post store. Contents live as long as the value does.
#[derive(Debug, Default)]
pub struct MemoryPostStore {
    entries: RwLock<Entries>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .order
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PostStore for MemoryPostStore {
    fn get(&self, id: &str) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .index
            .get(id)
            .map(|&position| entries.order[position].1.clone())
    }

    fn list(&self) -> Vec<Post> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .order
            .iter()
            .map(|(id, text)| Post::new(id.as_str(), text.as_str()))
            .collect()
    }

    fn upsert(&self, id: &str, text: &str) -> Post {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        match entries.index.get(id).copied() {
            Some(position) => {
                entries.order[position].1 = text.to_string();
                debug!(post_id = %id, "Post overwritten");
            }
            None => {
                let position = entries.order.len();
                entries.order.push((id.to_string(), text.to_string()));
                entries.index.insert(id.to_string(), position);
                debug!(post_id = %id, "Post created");
            }
        }

        Post::new(id, text)
    }
}
