use async_graphql::{Context, FieldError, Object, Result};
use tracing::debug;

use crate::schema::{null_on_error, swapi_client, types::Person};

pub struct PeopleQuery;

#[Object]
impl PeopleQuery {
    // Name matching is done by the dataset; an absent name searches with ""
    async fn people(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
    ) -> Result<Option<Vec<Person>>, FieldError> {
        let client = swapi_client(ctx)?;
        let search = name.as_deref().unwrap_or_default();
        debug!(search = %search, "Resolving people");

        let people = null_on_error(ctx, client.search_people(search).await);

        Ok(people.map(|people| people.into_iter().map(Person::from).collect()))
    }
}
