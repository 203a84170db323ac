use async_graphql::{Context, FieldError, Object, Result};

use app_models::starwars::RawPerson;

use super::vehicle::Vehicle;
use crate::schema::{null_on_error, swapi_client};

pub struct Person(RawPerson);

impl From<RawPerson> for Person {
    fn from(raw: RawPerson) -> Self {
        Self(raw)
    }
}

/// Data about a particular person
#[Object]
impl Person {
    async fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    /// The person's birth year
    async fn birth_year(&self) -> Option<&str> {
        self.0.birth_year()
    }

    /// ISO 8601 date format of the creation time for this person
    async fn created(&self) -> Option<&str> {
        self.0.created.as_deref()
    }

    /// ISO 8601 date format of the last edit time for this person
    async fn edited(&self) -> Option<&str> {
        self.0.edited.as_deref()
    }

    /// The person's eye color
    async fn eye_color(&self) -> Option<&str> {
        self.0.eye_color()
    }

    /// The person's hair color
    async fn hair_color(&self) -> Option<&str> {
        self.0.hair_color()
    }

    /// The person's skin color
    async fn skin_color(&self) -> Option<&str> {
        self.0.skin_color()
    }

    /// The person's height in centimeters
    async fn height(&self) -> Option<i32> {
        self.0.height_cm()
    }

    /// The person's mass in kilograms
    async fn mass(&self) -> Option<i32> {
        self.0.mass_kg()
    }

    /// Vehicles the person has piloted
    async fn vehicles(&self, ctx: &Context<'_>) -> Result<Option<Vec<Vehicle>>, FieldError> {
        let client = swapi_client(ctx)?;

        let vehicles = null_on_error(ctx, client.fetch_vehicles(self.0.vehicle_urls()).await);

        Ok(vehicles.map(|vehicles| vehicles.into_iter().map(Vehicle::from).collect()))
    }
}
