//! Session-scoped orchestration of the onboard computer use cases: load
//! mission data, load empire intelligence, answer the odds query.

use std::path::Path;

use crate::config::{EmpireConfig, MillenniumFalconConfig};
use crate::error::LoadError;
use crate::models::Galaxy;
use crate::repository::RouteSource;
use crate::services::odds;

/// Mission parameters fixed by a successful millennium-falcon load.
#[derive(Debug, Clone)]
pub struct MissionParameters {
    pub autonomy: u32,
    pub departure: String,
    pub arrival: String,
}

/// The onboard computer: owns the galaxy map, the mission parameters and
/// the Empire's countdown.
///
/// One caller at a time; shared use goes through a lock held by the caller.
pub struct OnboardComputer<R> {
    routes: R,
    galaxy: Galaxy,
    mission: Option<MissionParameters>,
    countdown: u32,
}

impl<R: RouteSource> OnboardComputer<R> {
    pub fn new(routes: R) -> Self {
        Self {
            routes,
            galaxy: Galaxy::default(),
            mission: None,
            countdown: 0,
        }
    }

    /// Loads a `millennium-falcon.json` config: reads and validates it,
    /// pulls the route collection from the referenced database and rebuilds
    /// the galaxy map. Any failure leaves the computer with no mission
    /// loaded rather than a half-updated one.
    pub async fn load_millennium_falcon(&mut self, path: &Path) -> Result<(), LoadError> {
        // Discard the previous mission before anything can fail.
        self.galaxy = Galaxy::default();
        self.mission = None;

        let config = MillenniumFalconConfig::from_file(path)?;

        let autonomy = u32::try_from(config.autonomy)
            .ok()
            .filter(|a| *a > 0)
            .ok_or_else(|| {
                LoadError::InvalidMissionConfig(format!(
                    "autonomy must be positive, got {}",
                    config.autonomy
                ))
            })?;
        if config.departure.is_empty() {
            return Err(LoadError::InvalidMissionConfig(
                "departure planet cannot be empty".into(),
            ));
        }
        if config.arrival.is_empty() {
            return Err(LoadError::InvalidMissionConfig(
                "arrival planet cannot be empty".into(),
            ));
        }
        if config.routes_db.is_empty() {
            return Err(LoadError::InvalidMissionConfig(
                "routes database reference cannot be empty".into(),
            ));
        }

        let db_path = config.resolve_routes_db(path);
        let records = self.routes.load_routes(&db_path).await?;
        self.galaxy = Galaxy::from_records(
            records
                .into_iter()
                .map(|r| (r.origin, r.destination, r.travel_time)),
        )?;

        tracing::info!(
            planets = self.galaxy.len(),
            autonomy,
            departure = %config.departure,
            arrival = %config.arrival,
            "mission data loaded"
        );
        self.mission = Some(MissionParameters {
            autonomy,
            departure: config.departure,
            arrival: config.arrival,
        });
        Ok(())
    }

    /// Loads empire intelligence: sets the countdown and merges bounty
    /// hunter sightings into the current galaxy map. Rejected data mutates
    /// nothing.
    pub fn load_empire(&mut self, data: &EmpireConfig) -> Result<(), LoadError> {
        let countdown = u32::try_from(data.countdown)
            .ok()
            .filter(|c| *c > 0)
            .ok_or(LoadError::InvalidCountdown(data.countdown))?;

        self.countdown = countdown;
        self.galaxy.merge_sightings(
            data.bounty_hunters
                .iter()
                .map(|s| (s.planet.as_str(), s.day)),
        );

        tracing::info!(
            countdown,
            sightings = data.bounty_hunters.len(),
            "empire data loaded"
        );
        Ok(())
    }

    /// Loads empire intelligence from an `empire.json` file.
    pub fn load_empire_file(&mut self, path: &Path) -> Result<(), LoadError> {
        let data = EmpireConfig::from_file(path)?;
        self.load_empire(&data)
    }

    /// Current success odds, in percent. Pure with respect to the loaded
    /// state; safe to call any number of times.
    pub fn compute_odds(&self) -> f64 {
        let Some(mission) = &self.mission else {
            return 0.0;
        };
        odds::compute_success_odds(
            &self.galaxy,
            mission.autonomy,
            &mission.departure,
            &mission.arrival,
            self.countdown,
        )
    }

    pub fn galaxy(&self) -> &Galaxy {
        &self.galaxy
    }

    pub fn mission(&self) -> Option<&MissionParameters> {
        self.mission.as_ref()
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }
}
