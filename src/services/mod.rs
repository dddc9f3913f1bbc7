pub mod odds;
pub mod onboard_computer;

use tokio::sync::RwLock;

use crate::repository::SqliteRouteSource;

pub use odds::compute_success_odds;
pub use onboard_computer::{MissionParameters, OnboardComputer};

/// Shared application state: the onboard computer behind a lock that
/// serializes loads against odds queries.
pub struct AppState {
    pub computer: RwLock<OnboardComputer<SqliteRouteSource>>,
}

impl AppState {
    pub fn new(computer: OnboardComputer<SqliteRouteSource>) -> Self {
        Self {
            computer: RwLock::new(computer),
        }
    }
}
