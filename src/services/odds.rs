//! The odds engine: explores every itinerary the countdown allows and keeps
//! the one with the lowest odds of capture.

use crate::models::Galaxy;

/// Search inputs that stay fixed for a whole computation.
struct Search<'a> {
    galaxy: &'a Galaxy,
    autonomy: u32,
    arrival: &'a str,
    countdown: u32,
}

/// Per-branch search state, copied into every recursive call so sibling
/// branches never observe each other's bookkeeping.
#[derive(Debug, Clone, Copy)]
struct Leg {
    fuel: u32,
    day: u32,
    encounters: u32,
    capture_probability: f64,
}

/// Success odds, in percent, of reaching `arrival` from `departure` before
/// the countdown expires.
///
/// Returns 0 outright when either endpoint is unknown to the map or the
/// countdown is already spent; otherwise explores every feasible itinerary
/// and reports `(1 - minimal capture probability) * 100`.
pub fn compute_success_odds(
    galaxy: &Galaxy,
    autonomy: u32,
    departure: &str,
    arrival: &str,
    countdown: u32,
) -> f64 {
    if countdown == 0 || !galaxy.contains(departure) || !galaxy.contains(arrival) {
        return 0.0;
    }

    let search = Search {
        galaxy,
        autonomy,
        arrival,
        countdown,
    };
    let start = Leg {
        fuel: autonomy,
        day: 0,
        encounters: 0,
        capture_probability: 0.0,
    };

    let minimal = search.explore(departure, start).unwrap_or(1.0);
    (1.0 - minimal) * 100.0
}

/// Marginal capture probability added by encounter number `encounters`
/// (numbered from zero): `9^k / 10^(k+1)`. Evading one more bounty hunter,
/// having evaded all previous ones, succeeds 9 times out of 10.
fn capture_increment(encounters: u32) -> f64 {
    9f64.powi(encounters as i32) / 10f64.powi(encounters as i32 + 1)
}

impl Search<'_> {
    /// Depth-first walk from `location`. Returns the lowest capture
    /// probability among itineraries below this point that reach the
    /// arrival planet in time, or `None` when none does.
    ///
    /// Planets may be revisited freely; the walk terminates because every
    /// route costs at least one day and days never decrease.
    fn explore(&self, location: &str, mut leg: Leg) -> Option<f64> {
        let planet = self.galaxy.get(location)?;

        if planet.has_bounty_hunter(leg.day) {
            leg.capture_probability += capture_increment(leg.encounters);
            leg.encounters += 1;
        }
        if leg.day > self.countdown || leg.capture_probability >= 1.0 {
            return None;
        }
        if location == self.arrival {
            return Some(leg.capture_probability);
        }

        let mut best: Option<f64> = None;
        // The ship may idle on the pad before departing, any number of days
        // the countdown still allows. Idle days are not re-checked against
        // the sighting schedule; only a refuel day is.
        for departure_day in leg.day..self.countdown {
            for route in planet.reachable() {
                // Routes longer than a full tank can never be flown.
                if route.travel_time() > self.autonomy {
                    continue;
                }

                let mut branch = leg;
                branch.day = departure_day;
                if route.travel_time() > branch.fuel {
                    // Refuelling costs a full day on the pad.
                    branch.fuel = self.autonomy;
                    if planet.has_bounty_hunter(departure_day) {
                        branch.capture_probability += capture_increment(branch.encounters);
                        branch.encounters += 1;
                    }
                    branch.day += 1;
                }
                branch.fuel -= route.travel_time();
                branch.day += route.travel_time();

                best = fold_min(best, self.explore(route.destination(), branch));
            }
        }
        best
    }
}

fn fold_min(best: Option<f64>, outcome: Option<f64>) -> Option<f64> {
    match (best, outcome) {
        (Some(b), Some(o)) => Some(b.min(o)),
        (b, o) => b.or(o),
    }
}
