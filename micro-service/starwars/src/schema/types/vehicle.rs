use async_graphql::Object;

use app_models::starwars::RawVehicle;

pub struct Vehicle(RawVehicle);

impl From<RawVehicle> for Vehicle {
    fn from(raw: RawVehicle) -> Self {
        Self(raw)
    }
}

/// A single transport craft that does not have hyperdrive capability
#[Object]
impl Vehicle {
    /// The common name of the vehicle
    async fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    /// The official name of the vehicle
    async fn model(&self) -> Option<&str> {
        self.0.model.as_deref()
    }

    /// The type of vehicle
    async fn vehicle_class(&self) -> Option<&str> {
        self.0.vehicle_class()
    }

    /// Max transport weight in kilograms
    async fn cargo_capacity(&self) -> Option<i32> {
        self.0.cargo_capacity()
    }

    /// Maximum duration vehicle can provide consumables before resupply
    async fn consumables_duration(&self) -> Option<&str> {
        self.0.consumables_duration()
    }

    /// Cost of the vehicle new in galactic credits
    async fn cost_in_credits(&self) -> Option<i32> {
        self.0.cost_in_credits()
    }

    /// The required number of personnel to operate the vehicle
    async fn crew(&self) -> Option<&str> {
        self.0.crew.as_deref()
    }

    /// Length of the vehicle in meters
    async fn length(&self) -> Option<f64> {
        self.0.length_m()
    }

    /// Manufacturers of the vehicle
    async fn manufacturers(&self) -> Option<Vec<String>> {
        self.0.manufacturers()
    }

    /// Max speed of the vehicle in atmosphere
    async fn max_atmosphering_speed(&self) -> Option<i32> {
        self.0.max_atmosphering_speed()
    }

    /// Maximum number of non-essential personnel the vehicle can transport
    async fn max_passengers(&self) -> Option<i32> {
        self.0.max_passengers()
    }
}
