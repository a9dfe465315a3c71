//! Public location hierarchy endpoints (the cascade's data source).

use async_trait::async_trait;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{City, County, District, LocationNode, Region, School, State, Tier};

use crate::http::Http;

/// Source of child options for a location tier.
///
/// The cascade resolver depends on this seam rather than on the concrete
/// HTTP client, so tests can drive it with a mock.
#[async_trait]
pub trait LocationSource: Send + Sync {
    /// Option list for `tier`, filtered by the selected parent.
    ///
    /// The root tier takes no parent; every other tier requires one.
    async fn children(&self, tier: Tier, parent_id: Option<Uuid>) -> AppResult<Vec<LocationNode>>;
}

/// Client for the `/locations` endpoint group.
pub struct LocationsClient {
    http: Http,
}

impl LocationsClient {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    pub async fn states(&self) -> AppResult<Vec<State>> {
        self.http.get("/locations/states").await
    }

    pub async fn cities(&self, state_id: Uuid) -> AppResult<Vec<City>> {
        self.filtered("/locations/cities", "state_id", state_id).await
    }

    pub async fn counties(&self, city_id: Uuid) -> AppResult<Vec<County>> {
        self.filtered("/locations/counties", "city_id", city_id).await
    }

    pub async fn regions(&self, county_id: Uuid) -> AppResult<Vec<Region>> {
        self.filtered("/locations/regions", "county_id", county_id)
            .await
    }

    pub async fn districts(&self, region_id: Uuid) -> AppResult<Vec<District>> {
        self.filtered("/locations/districts", "region_id", region_id)
            .await
    }

    pub async fn schools(&self, district_id: Uuid) -> AppResult<Vec<School>> {
        self.filtered("/locations/schools", "district_id", district_id)
            .await
    }

    async fn filtered<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        param: &str,
        parent_id: Uuid,
    ) -> AppResult<Vec<T>> {
        self.http
            .get_query(path, &[(param, parent_id.to_string())])
            .await
    }
}

#[async_trait]
impl LocationSource for LocationsClient {
    async fn children(&self, tier: Tier, parent_id: Option<Uuid>) -> AppResult<Vec<LocationNode>> {
        let nodes = match (tier, parent_id) {
            (Tier::State, _) => into_nodes(self.states().await?),
            (Tier::City, Some(id)) => into_nodes(self.cities(id).await?),
            (Tier::County, Some(id)) => into_nodes(self.counties(id).await?),
            (Tier::Region, Some(id)) => into_nodes(self.regions(id).await?),
            (Tier::District, Some(id)) => into_nodes(self.districts(id).await?),
            (Tier::School, Some(id)) => into_nodes(self.schools(id).await?),
            (tier, None) => {
                return Err(AppError::validation(format!(
                    "Fetching {} requires a {}",
                    tier,
                    tier.parent_param().unwrap_or("parent"),
                )));
            }
        };

        Ok(nodes)
    }
}

fn into_nodes<T: Into<LocationNode>>(items: Vec<T>) -> Vec<LocationNode> {
    items.into_iter().map(Into::into).collect()
}
