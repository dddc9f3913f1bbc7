use std::collections::{BTreeSet, HashSet};

use super::route::Route;

/// A planet on the galaxy map: the routes leaving it, cheapest first, and
/// the days on which bounty hunters are known to be present.
#[derive(Debug, Clone)]
pub struct Planet {
    name: String,
    reachable: Vec<Route>,
    bounty_hunter_days: BTreeSet<u32>,
}

impl Planet {
    /// Builds a planet from the full route collection, keeping only the
    /// routes that leave it. Duplicate origin/destination pairs are map-data
    /// redundancy, not an error: the fastest route per destination wins,
    /// earlier entries breaking ties.
    pub fn new(name: impl Into<String>, routes: &[Route]) -> Self {
        let name = name.into();

        let mut outbound: Vec<Route> = routes
            .iter()
            .filter(|r| r.origin() == name)
            .cloned()
            .collect();
        // Stable sort, so ties keep discovery order.
        outbound.sort_by_key(Route::travel_time);

        let mut seen: HashSet<String> = HashSet::new();
        let reachable = outbound
            .into_iter()
            .filter(|r| seen.insert(r.destination().to_string()))
            .collect();

        Self {
            name,
            reachable,
            bounty_hunter_days: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Routes leaving this planet, sorted ascending by travel time, at most
    /// one per destination.
    pub fn reachable(&self) -> &[Route] {
        &self.reachable
    }

    pub fn has_bounty_hunter(&self, day: u32) -> bool {
        self.bounty_hunter_days.contains(&day)
    }

    /// Records bounty-hunter presence days. Negative days are dropped;
    /// re-adding a known day is a no-op.
    pub fn update_bounty_hunter_presence(&mut self, days: impl IntoIterator<Item = i64>) {
        for day in days {
            if let Ok(day) = u32::try_from(day) {
                self.bounty_hunter_days.insert(day);
            }
        }
    }

    pub fn bounty_hunter_days(&self) -> &BTreeSet<u32> {
        &self.bounty_hunter_days
    }
}
