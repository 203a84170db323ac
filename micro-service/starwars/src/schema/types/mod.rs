pub mod person;
pub mod vehicle;

pub use person::Person;
pub use vehicle::Vehicle;
