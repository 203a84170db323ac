pub mod mutation;
pub mod query;
pub mod types;

use async_graphql::{Context, EmptySubscription, FieldError, Schema};
use std::sync::Arc;

use app_error::{AppError, AppResult};
use app_store::PostStore;
use app_utils::SwapiClient;
use mutation::{Mutation, create_mutation};
use query::{Query, create_query};

// Type alias for our GraphQL schema
pub type ApiSchema = Schema<Query, Mutation, EmptySubscription>;

/// Build the schema. The store and the dataset client are schema data, so
/// every schema instance (and every test) owns its own posts.
pub fn create_schema(store: Arc<dyn PostStore>, swapi: SwapiClient) -> ApiSchema {
    Schema::build(create_query(), create_mutation(), EmptySubscription)
        .data(store)
        .data(swapi)
        .finish()
}

/// GraphQL SDL of the public API
pub fn export_sdl() -> String {
    Schema::build(create_query(), create_mutation(), EmptySubscription)
        .finish()
        .sdl()
}

pub(crate) fn post_store<'ctx>(ctx: &Context<'ctx>) -> Result<&'ctx Arc<dyn PostStore>, FieldError> {
    ctx.data::<Arc<dyn PostStore>>().map_err(|_| {
        AppError::ServerError(anyhow::anyhow!(
            "Internal configuration error: Post store not available"
        ))
        .to_field_error()
    })
}

pub(crate) fn swapi_client<'ctx>(ctx: &Context<'ctx>) -> Result<&'ctx SwapiClient, FieldError> {
    ctx.data::<SwapiClient>().map_err(|_| {
        AppError::ServerError(anyhow::anyhow!(
            "Internal configuration error: SWAPI client not available"
        ))
        .to_field_error()
    })
}

/// Unwraps a remote result for a nullable field. A failure is recorded in
/// `errors` under the field's path and the field itself resolves to null.
pub(crate) fn null_on_error<T>(ctx: &Context<'_>, result: AppResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            let error = err.to_field_error().into_server_error(ctx.item.pos);
            ctx.add_error(ctx.set_error_path(error));
            None
        }
    }
}
