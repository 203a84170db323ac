pub mod post;

use async_graphql::MergedObject;

#[derive(MergedObject)]
pub struct Mutation(post::PostMutation);

pub fn create_mutation() -> Mutation {
    Mutation(post::PostMutation)
}
