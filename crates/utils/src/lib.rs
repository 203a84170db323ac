pub mod swapi;

pub use swapi::SwapiClient;
