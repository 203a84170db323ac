pub mod handlers;
pub mod routes;
pub mod schema;

#[cfg(test)]
mod tests;
