pub mod people;
pub mod post;

use async_graphql::MergedObject;

#[derive(MergedObject)]
pub struct Query(people::PeopleQuery, post::PostQuery);

pub fn create_query() -> Query {
    Query(people::PeopleQuery, post::PostQuery)
}
