//! Free-text location resolution via the Nominatim search API.

use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;
use web_sys::AbortSignal;

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
const USER_AGENT: &str = "FamilyOrganiser/1.0";

#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The service answered but had no match for the query. Kept distinct
    /// from transport failure so the UI can suggest a more specific address.
    #[error("location not found")]
    NoMatch,

    #[error("geocoding request failed: {0}")]
    Network(String),

    #[error("unexpected geocoding response: {0}")]
    Decode(String),
}

/// Best-match coordinates for a free-text location.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

/// One result row in Nominatim's JSON format; coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}

/// Resolve `location` to its single best match.
///
/// The caller owns the abort signal; aborting it while the request is in
/// flight surfaces as a network error, so a closed view never applies a
/// stale result.
pub async fn resolve(
    location: &str,
    signal: Option<&AbortSignal>,
) -> Result<ResolvedLocation, GeocodeError> {
    let response = Request::get(NOMINATIM_URL)
        .query([("format", "json"), ("q", location), ("limit", "1")])
        .header("User-Agent", USER_AGENT)
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| GeocodeError::Network(format!("{:?}", e)))?;

    if !response.ok() {
        return Err(GeocodeError::Network(format!("HTTP {}", response.status())));
    }

    let places: Vec<NominatimPlace> = response
        .json()
        .await
        .map_err(|e| GeocodeError::Decode(format!("{:?}", e)))?;

    let Some(place) = places.into_iter().next() else {
        return Err(GeocodeError::NoMatch);
    };

    let latitude = place
        .lat
        .parse()
        .map_err(|_| GeocodeError::Decode(format!("bad latitude: {}", place.lat)))?;
    let longitude = place
        .lon
        .parse()
        .map_err(|_| GeocodeError::Decode(format!("bad longitude: {}", place.lon)))?;

    Ok(ResolvedLocation {
        latitude,
        longitude,
        display_name: place.display_name,
    })
}

/// Embed URL for an OpenStreetMap view centered on a single marker.
///
/// Rebuilt on every open, so closing and reopening the view can never stack
/// stale overlays.
pub fn osm_embed_url(latitude: f64, longitude: f64) -> String {
    let west = longitude - 0.005;
    let east = longitude + 0.005;
    let south = latitude - 0.003;
    let north = latitude + 0.003;
    format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={west:.5}%2C{south:.5}%2C{east:.5}%2C{north:.5}&layer=mapnik&marker={latitude:.5}%2C{longitude:.5}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_url_centers_the_marker() {
        let url = osm_embed_url(51.50100, -0.12400);
        assert!(url.contains("marker=51.50100%2C-0.12400"));
        assert!(url.contains("bbox=-0.12900%2C51.49800%2C-0.11900%2C51.50400"));
    }
}
