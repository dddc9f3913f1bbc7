use std::collections::HashMap;

use super::planet::Planet;
use super::route::{Route, RouteError};

/// The galaxy map: every known planet keyed by name.
///
/// Built fresh from a flat route collection on every mission load and
/// replaced wholesale, never patched in place.
#[derive(Debug, Clone, Default)]
pub struct Galaxy {
    planets: HashMap<String, Planet>,
}

impl Galaxy {
    /// Builds the map from raw `(origin, destination, travel_time)` records.
    /// A single malformed record invalidates the whole load.
    pub fn from_records<I>(records: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = (String, String, i64)>,
    {
        let mut routes = Vec::new();
        for (origin, destination, travel_time) in records {
            routes.push(Route::new(origin, destination, travel_time)?);
        }
        Ok(Self::from_routes(&routes))
    }

    /// Builds the map from already-validated routes. Every endpoint named
    /// by any route becomes a planet, pure destinations included.
    pub fn from_routes(routes: &[Route]) -> Self {
        let mut names: Vec<&str> = routes
            .iter()
            .flat_map(|r| [r.origin(), r.destination()])
            .collect();
        names.sort_unstable();
        names.dedup();

        let planets = names
            .into_iter()
            .map(|name| (name.to_string(), Planet::new(name, routes)))
            .collect();

        Self { planets }
    }

    pub fn get(&self, name: &str) -> Option<&Planet> {
        self.planets.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.planets.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// Merges bounty-hunter sightings into the map: grouped by planet,
    /// negative days dropped, re-merging idempotent. Planets this map does
    /// not know are ignored — empire intelligence may reference a galaxy
    /// revision the current route data does not cover.
    pub fn merge_sightings<'a, I>(&mut self, sightings: I)
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        let mut by_planet: HashMap<&str, Vec<i64>> = HashMap::new();
        for (planet, day) in sightings {
            by_planet.entry(planet).or_default().push(day);
        }

        for (name, days) in by_planet {
            if let Some(planet) = self.planets.get_mut(name) {
                planet.update_bounty_hunter_presence(days);
            }
        }
    }
}
