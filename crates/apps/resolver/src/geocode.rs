//! Address geocoding (Google Geocoding API) and the per-run lookup cache.

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use reqwest::Client;
use roster::Location;
use serde::Deserialize;
use tracing::{debug, trace};

use crate::error::ResolveError;
use crate::http::send_json;

/// Turns a normalized address into a location.
///
/// `Ok(None)` means the geocoder knows no such place; that is not an error.
pub trait Geocoder: Send + Sync {
    fn geocode<'a>(
        &'a self,
        address: &'a str,
    ) -> BoxFuture<'a, Result<Option<Location>, ResolveError>>;
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl GeocodeResponse {
    /// Map the API status onto the resolver's outcome. The first result wins.
    pub fn into_location(self) -> Result<Option<Location>, ResolveError> {
        if self.status == "ZERO_RESULTS" {
            return Ok(None);
        }
        if self.status != "OK" {
            return Err(ResolveError::Geocode {
                status: self.status,
                message: self.error_message,
            });
        }

        match self.results.into_iter().next() {
            Some(result) => Ok(Some(Location::new(
                result.formatted_address,
                result.geometry.location.lat,
                result.geometry.location.lng,
            ))),
            None => Err(ResolveError::Geocode {
                status: self.status,
                message: Some("response carried no results".to_string()),
            }),
        }
    }
}

pub struct GoogleGeocoder {
    client: Client,
    url: String,
    key: String,
}

impl GoogleGeocoder {
    pub fn new(client: Client, url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            key: key.into(),
        }
    }
}

impl Geocoder for GoogleGeocoder {
    fn geocode<'a>(
        &'a self,
        address: &'a str,
    ) -> BoxFuture<'a, Result<Option<Location>, ResolveError>> {
        Box::pin(async move {
            let request = self
                .client
                .get(&self.url)
                .query(&[("address", address), ("key", self.key.as_str())]);
            let resp: GeocodeResponse = send_json(request, &self.url).await?;
            resp.into_location()
        })
    }
}

type Lookup = Shared<BoxFuture<'static, Result<Option<Location>, ResolveError>>>;

/// Memoizes geocoder lookups for one resolver run.
///
/// The first lookup of an address stores its in-flight future; later lookups
/// of the same address await that future instead of issuing another request.
/// Failures are memoized too.
pub struct GeocodeCache {
    geocoder: Arc<dyn Geocoder>,
    entries: Mutex<HashMap<String, Lookup>>,
}

impl GeocodeCache {
    pub fn new(geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            geocoder,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub async fn lookup(&self, address: &str) -> Result<Option<Location>, ResolveError> {
        let lookup = {
            let mut entries = self.entries.lock();
            match entries.get(address) {
                Some(existing) => {
                    trace!(address, "geocode cache hit");
                    existing.clone()
                }
                None => {
                    let geocoder = Arc::clone(&self.geocoder);
                    let owned = address.to_string();
                    let lookup = async move {
                        debug!(address = %owned, "geocoding");
                        geocoder.geocode(&owned).await
                    }
                    .boxed()
                    .shared();
                    entries.insert(address.to_string(), lookup.clone());
                    lookup
                }
            }
        };
        lookup.await
    }

    /// Distinct addresses looked up so far.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
