pub mod post;
pub mod starwars;

pub use post::{Post, PostInput};
pub use starwars::{PeopleSearchResponse, RawPerson, RawVehicle};
