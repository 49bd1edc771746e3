// FishBase species directory client
use crate::application::species_directory::{CollaboratorError, SpeciesDirectory};
use crate::domain::fish::Ecosystem;
use crate::domain::species::{HeartbeatStatus, SpeciesDetails};
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;

pub const DEFAULT_BASE_URL: &str = "https://fishbase.ropensci.org/";

#[derive(Debug, Clone)]
pub struct FishbaseClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct DataResponse<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SpeciesRecord {
    spec_code: i64,
    #[serde(default)]
    genus: String,
    #[serde(default)]
    species: String,
    #[serde(default)]
    subfamily: Option<String>,
    #[serde(default)]
    dangerous: Option<String>,
    #[serde(default)]
    image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EcosystemRecord {
    #[serde(rename = "EcosystemName", default)]
    name: Option<String>,
    #[serde(rename = "EcosystemType", default)]
    ecosystem_type: Option<String>,
    #[serde(rename = "Location", default)]
    location: Option<String>,
    #[serde(rename = "Salinity", default)]
    salinity: Option<String>,
    #[serde(rename = "Climate", default)]
    climate: Option<String>,
}

impl FishbaseClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        let base_url = format!("{}/", base_url.trim_end_matches('/'));
        Self { client, base_url }
    }

    fn build_url(&self, resource: &str, params: &[(&str, &str)]) -> String {
        let query: Vec<String> = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect();

        if query.is_empty() {
            format!("{}{}", self.base_url, resource)
        } else {
            format!("{}{}?{}", self.base_url, resource, query.join("&"))
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, CollaboratorError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| CollaboratorError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CollaboratorError::Request(format!(
                "{} returned status {}",
                url,
                response.status()
            )));
        }

        let body = response
            .json::<DataResponse<T>>()
            .await
            .map_err(|e| CollaboratorError::Decode(e.to_string()))?;

        Ok(body.data)
    }
}

#[async_trait]
impl SpeciesDirectory for FishbaseClient {
    async fn get_heartbeat(&self) -> Result<HeartbeatStatus, CollaboratorError> {
        let response = self
            .client
            .get(self.build_url("heartbeat", &[]))
            .send()
            .await
            .map_err(|e| CollaboratorError::Request(e.to_string()))?;

        Ok(HeartbeatStatus::from_status_code(response.status().as_u16()))
    }

    async fn get_details(&self, genus: &str, species: &str) -> Result<SpeciesDetails, CollaboratorError> {
        let url = self.build_url("species", &[("limit", "1"), ("Genus", genus), ("Species", species)]);
        let record = self
            .fetch::<SpeciesRecord>(&url)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                CollaboratorError::NotFound(format!(
                    "Genus '{}' and Species '{}' returned no results",
                    genus, species
                ))
            })?;

        let spec_code = record.spec_code.to_string();
        let url = self.build_url("ecosystem", &[("limit", "1"), ("SpecCode", spec_code.as_str())]);
        let ecosystem = self
            .fetch::<EcosystemRecord>(&url)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                CollaboratorError::NotFound(format!("SpecCode '{}' returned no results", spec_code))
            })?;

        tracing::debug!(spec_code = record.spec_code, genus, species, "Fetched species details");

        Ok(SpeciesDetails {
            spec_code: record.spec_code,
            genus: record.genus,
            species: record.species,
            subfamily: record.subfamily.unwrap_or_default(),
            dangerous: record.dangerous.unwrap_or_default(),
            image: record.image.unwrap_or_default(),
            ecosystem: Ecosystem {
                name: ecosystem.name.unwrap_or_default(),
                ecosystem_type: ecosystem.ecosystem_type.unwrap_or_default(),
                location: ecosystem.location.unwrap_or_default(),
                salinity: ecosystem.salinity.unwrap_or_default(),
                climate: ecosystem.climate.unwrap_or_default(),
            },
        })
    }
}
