use async_graphql::{Context, FieldError, Object, Result};
use tracing::info;

use app_models::post::{Post, PostInput};

use crate::schema::post_store;

pub struct PostMutation;

#[Object]
impl PostMutation {
    // Insert or overwrite a post, echoing the stored record back
    async fn upsert_post(&self, ctx: &Context<'_>, post: PostInput) -> Result<Post, FieldError> {
        let store = post_store(ctx)?;

        let stored = store.upsert(post.id.as_str(), &post.text);
        info!(post_id = %stored.id.as_str(), "Post upserted");

        Ok(stored)
    }
}
