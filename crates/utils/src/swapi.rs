use app_error::{AppError, AppErrorExt, AppResult, with_context};
use app_models::starwars::{PeopleSearchResponse, RawPerson, RawVehicle};
use futures::future::try_join_all;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info};

/// Client for the Star Wars dataset (SWAPI)
#[derive(Clone, Debug)]
pub struct SwapiClient {
    client: Client,
    base_url: String,
    format: String,
}

impl SwapiClient {
    /// Create a client whose every request is bounded by `timeout`
    pub fn new(base_url: &str, format: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder().timeout(timeout).build().config_err()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            format: format.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search people by name. The dataset decides how `name` matches.
    pub async fn search_people(&self, name: &str) -> AppResult<Vec<RawPerson>> {
        let url = format!("{}/people/", self.base_url);
        debug!(search = %name, "Searching SWAPI people");

        let response: PeopleSearchResponse = self
            .get_json(&url, &[("search", name), ("format", self.format.as_str())])
            .await?;

        info!(
            search = %name,
            results = response.results.len(),
            "SWAPI people search completed"
        );
        Ok(response.results)
    }

    /// Fetch every vehicle concurrently. Results keep the order of `urls`;
    /// the first failure aborts the whole expansion.
    pub async fn fetch_vehicles(&self, urls: &[String]) -> AppResult<Vec<RawVehicle>> {
        if urls.is_empty() {
            return Ok(Vec::new());
        }

        let fetches = urls.iter().map(|url| self.fetch_vehicle(url));
        let vehicles = try_join_all(fetches).await?;

        debug!(count = vehicles.len(), "Vehicles expanded");
        Ok(vehicles)
    }

    pub async fn fetch_vehicle(&self, url: &str) -> AppResult<RawVehicle> {
        self.get_json(url, &[("format", self.format.as_str())]).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> AppResult<T> {
        let response = with_context!(
            self.client.get(url).query(query).send().await,
            NetworkError,
            format!("Failed to reach SWAPI at {}", url)
        )?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!("SWAPI request to {} failed with status {}: {}", url, status, text);
            return Err(AppError::upstream(status.as_u16(), url));
        }

        with_context!(
            response.json::<T>().await,
            DecodeError,
            format!("Invalid SWAPI response from {}", url)
        )
    }
}
