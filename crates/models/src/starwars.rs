//! Records as returned by the Star Wars dataset (SWAPI) and the projections
//! from their raw field names onto the public schema.
//!
//! Raw records are never stored. They are decoded per request, every field is
//! optional, and numbers arrive as strings (`"172"`, `"unknown"`, `"1,358"`).

use serde::{Deserialize, Serialize};

/// Envelope of the `people/?search=` endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PeopleSearchResponse {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<RawPerson>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RawPerson {
    pub name: Option<String>,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub created: Option<String>,
    pub edited: Option<String>,
    pub vehicles: Vec<String>,
    pub url: Option<String>,
}

impl RawPerson {
    pub fn birth_year(&self) -> Option<&str> {
        self.birth_year.as_deref()
    }

    pub fn eye_color(&self) -> Option<&str> {
        self.eye_color.as_deref()
    }

    pub fn hair_color(&self) -> Option<&str> {
        self.hair_color.as_deref()
    }

    pub fn skin_color(&self) -> Option<&str> {
        self.skin_color.as_deref()
    }

    /// Height in centimeters
    pub fn height_cm(&self) -> Option<i32> {
        to_int(self.height.as_deref())
    }

    /// Mass in kilograms
    pub fn mass_kg(&self) -> Option<i32> {
        to_int(self.mass.as_deref())
    }

    pub fn vehicle_urls(&self) -> &[String] {
        &self.vehicles
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RawVehicle {
    pub name: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<String>,
    pub length: Option<String>,
    pub max_atmosphering_speed: Option<String>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub cargo_capacity: Option<String>,
    pub consumables: Option<String>,
    pub vehicle_class: Option<String>,
    pub url: Option<String>,
}

impl RawVehicle {
    pub fn vehicle_class(&self) -> Option<&str> {
        self.vehicle_class.as_deref()
    }

    /// Max transport weight in kilograms
    pub fn cargo_capacity(&self) -> Option<i32> {
        to_int(self.cargo_capacity.as_deref())
    }

    pub fn consumables_duration(&self) -> Option<&str> {
        self.consumables.as_deref()
    }

    pub fn cost_in_credits(&self) -> Option<i32> {
        to_int(self.cost_in_credits.as_deref())
    }

    /// Length in meters
    pub fn length_m(&self) -> Option<f64> {
        to_float(self.length.as_deref())
    }

    /// The dataset joins several manufacturers with commas. Pieces are not
    /// trimmed, so `"A, B"` yields `["A", " B"]`.
    pub fn manufacturers(&self) -> Option<Vec<String>> {
        self.manufacturer
            .as_deref()
            .map(|raw| raw.split(',').map(str::to_string).collect())
    }

    pub fn max_atmosphering_speed(&self) -> Option<i32> {
        to_int(self.max_atmosphering_speed.as_deref())
    }

    pub fn max_passengers(&self) -> Option<i32> {
        to_int(self.passengers.as_deref())
    }
}

/// Numeric coercion of a raw field. `None` is the not-a-number sentinel:
/// missing, empty and malformed values never fail the request.
pub fn to_float(raw: Option<&str>) -> Option<f64> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Like [`to_float`], additionally rejecting fractional and out of range
/// values since GraphQL `Int` is a signed 32-bit integer.
pub fn to_int(raw: Option<&str>) -> Option<i32> {
    let value = to_float(raw)?;
    if value.fract() != 0.0 || value < i32::MIN as f64 || value > i32::MAX as f64 {
        return None;
    }

    Some(value as i32)
}
