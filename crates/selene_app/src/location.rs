//! Observer locations.
//!
//! Users pick from a fixed catalog of cities. The lunar engine does not
//! consume coordinates yet; rise/set times stay location-independent.

use tracing::warn;

use crate::error::StoreError;
use crate::store::KeyValueStore;

/// Store key holding the selected location id.
pub const LOCATION_KEY: &str = "selene.location";

/// A selectable city.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub id: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    /// IANA timezone name.
    pub timezone: &'static str,
    /// Degrees, north positive.
    pub latitude: f64,
    /// Degrees, east positive.
    pub longitude: f64,
}

impl Location {
    const fn new(
        id: &'static str,
        city: &'static str,
        country: &'static str,
        timezone: &'static str,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id,
            city,
            country,
            timezone,
            latitude,
            longitude,
        }
    }

    /// `"City, Country"`.
    pub fn label(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

/// The location catalog, in picker order. The first entry is the default.
pub const AVAILABLE_LOCATIONS: [Location; 15] = [
    Location::new("1", "New York", "USA", "America/New_York", 40.7128, -74.0060),
    Location::new("2", "Los Angeles", "USA", "America/Los_Angeles", 34.0522, -118.2437),
    Location::new("3", "Chicago", "USA", "America/Chicago", 41.8781, -87.6298),
    Location::new("4", "London", "UK", "Europe/London", 51.5074, -0.1278),
    Location::new("5", "Paris", "France", "Europe/Paris", 48.8566, 2.3522),
    Location::new("6", "Tokyo", "Japan", "Asia/Tokyo", 35.6762, 139.6503),
    Location::new("7", "Sydney", "Australia", "Australia/Sydney", -33.8688, 151.2093),
    Location::new("8", "Dubai", "UAE", "Asia/Dubai", 25.2048, 55.2708),
    Location::new("9", "Singapore", "Singapore", "Asia/Singapore", 1.3521, 103.8198),
    Location::new("10", "Mumbai", "India", "Asia/Kolkata", 19.0760, 72.8777),
    Location::new("11", "Toronto", "Canada", "America/Toronto", 43.6532, -79.3832),
    Location::new("12", "Berlin", "Germany", "Europe/Berlin", 52.5200, 13.4050),
    Location::new("13", "Rome", "Italy", "Europe/Rome", 41.9028, 12.4964),
    Location::new("14", "Madrid", "Spain", "Europe/Madrid", 40.4168, -3.7038),
    Location::new("15", "Mexico City", "Mexico", "America/Mexico_City", 19.4326, -99.1332),
];

/// New York.
pub fn default_location() -> &'static Location {
    &AVAILABLE_LOCATIONS[0]
}

pub fn find_location(id: &str) -> Option<&'static Location> {
    AVAILABLE_LOCATIONS.iter().find(|l| l.id == id)
}

/// Catalog entries whose city or country contains `query`, ignoring case.
///
/// An empty query matches everything.
pub fn search_locations(query: &str) -> Vec<&'static Location> {
    let needle = query.trim().to_lowercase();
    AVAILABLE_LOCATIONS
        .iter()
        .filter(|l| {
            l.city.to_lowercase().contains(&needle) || l.country.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Persist the selected location.
pub fn save_location<S: KeyValueStore>(store: &mut S, location: &Location) -> Result<(), StoreError> {
    store.set(LOCATION_KEY, location.id)
}

/// Selected location, or the default when nothing valid is stored.
pub fn load_location<S: KeyValueStore>(store: &S) -> &'static Location {
    match store.get(LOCATION_KEY) {
        Ok(Some(id)) => find_location(&id).unwrap_or_else(|| {
            warn!(%id, "stored location not in catalog, using default");
            default_location()
        }),
        Ok(None) => default_location(),
        Err(e) => {
            warn!(error = %e, "failed to load location, using default");
            default_location()
        }
    }
}
