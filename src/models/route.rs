use thiserror::Error;

/// A directed hyperspace route between two planets.
///
/// Immutable once constructed: `new` enforces the route invariants, so any
/// `Route` held by the galaxy map can be trusted downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    origin: String,
    destination: String,
    travel_time: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route endpoint cannot be empty")]
    EmptyEndpoint,

    #[error("route from {0} loops back to itself")]
    SelfLoop(String),

    #[error("travel time from {origin} to {destination} must be a positive day count, got {travel_time}")]
    InvalidTravelTime {
        origin: String,
        destination: String,
        travel_time: i64,
    },
}

impl Route {
    /// Validates and builds a route. Travel times arrive as raw `i64`
    /// (the database column type) so out-of-range values can be rejected
    /// instead of wrapping.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        travel_time: i64,
    ) -> Result<Self, RouteError> {
        let origin = origin.into();
        let destination = destination.into();

        if origin.is_empty() || destination.is_empty() {
            return Err(RouteError::EmptyEndpoint);
        }
        if origin == destination {
            return Err(RouteError::SelfLoop(origin));
        }
        let travel_time = match u32::try_from(travel_time) {
            Ok(t) if t > 0 => t,
            _ => {
                return Err(RouteError::InvalidTravelTime {
                    origin,
                    destination,
                    travel_time,
                })
            }
        };

        Ok(Self {
            origin,
            destination,
            travel_time,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Travel time in days; also the fuel the hop consumes.
    pub fn travel_time(&self) -> u32 {
        self.travel_time
    }
}
