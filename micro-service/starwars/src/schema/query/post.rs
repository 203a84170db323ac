use async_graphql::{Context, FieldError, ID, Object, Result};

use app_models::post::Post;

use crate::schema::post_store;

pub struct PostQuery;

#[Object]
impl PostQuery {
    // An unknown id answers with the id and a null text, not an error
    async fn post(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Post>, FieldError> {
        let store = post_store(ctx)?;

        let post = match store.get(id.as_str()) {
            Some(text) => Post::new(id.as_str(), text),
            None => Post::missing(id.as_str()),
        };

        Ok(Some(post))
    }

    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>, FieldError> {
        let store = post_store(ctx)?;
        Ok(store.list())
    }
}
