use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use super::error::{ElevatorError, Result};
use super::request::{Floor, MIN_FLOOR};

const CONFIG_FILE: &str = "config.json";
const FALLBACK_CONFIG_FILE: &str = "_config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] ElevatorError),
}

#[derive(Debug, Parser)]
#[command(name = "elevator-sim", about = "Single car elevator dispatch simulation")]
pub struct Args {
    /// Path to a JSON configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub max_floor: Option<Floor>,

    #[arg(long)]
    pub capacity: Option<u8>,

    /// Seconds between two ticks of the dispatch loop
    #[arg(long)]
    pub tick_rate: Option<f64>,

    /// Upper bound on the number of generated passengers
    #[arg(long)]
    pub passengers: Option<u8>,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Redraw a status table in the terminal instead of logging every tick
    #[arg(long, default_value_t = false)]
    pub dashboard: bool,

    /// One of off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElevatorSettings {
    pub max_floor: Floor,
    pub capacity: u8,
    #[serde(default = "default_tick_rate")]
    pub tick_rate: f64,
}

fn default_tick_rate() -> f64 {
    0.01
}

impl ElevatorSettings {
    pub fn new(max_floor: Floor, capacity: u8) -> Self {
        ElevatorSettings {
            max_floor: max_floor,
            capacity: capacity,
            tick_rate: default_tick_rate(),
        }
    }

    pub fn min_floor(&self) -> Floor {
        MIN_FLOOR
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_floor < MIN_FLOOR {
            return Err(ElevatorError::InvalidConfiguration {
                message: format!("max_floor must be at least {}, got {}", MIN_FLOOR, self.max_floor),
            });
        }
        if self.capacity < 1 {
            return Err(ElevatorError::InvalidConfiguration {
                message: String::from("capacity must be at least 1"),
            });
        }
        if !self.tick_rate.is_finite() || self.tick_rate < 0.0 {
            return Err(ElevatorError::InvalidConfiguration {
                message: format!("tick_rate must be a non-negative number of seconds, got {}", self.tick_rate),
            });
        }
        Ok(())
    }

    /// Callers must [`validate`](Self::validate) first.
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs_f64(self.tick_rate)
    }
}

impl Default for ElevatorSettings {
    fn default() -> Self {
        ElevatorSettings::new(10, 4)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSettings {
    pub max_passengers: u8,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        SimulationSettings { max_passengers: 10, seed: None }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub elevator: ElevatorSettings,
    #[serde(default)]
    pub simulation: SimulationSettings,
}

impl Config {
    pub fn get(args: &Args) -> std::result::Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::from_default_files()?,
        };
        config.apply_args(args);
        config.elevator.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> std::result::Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source: source,
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> std::result::Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    fn from_default_files() -> std::result::Result<Self, ConfigError> {
        for file_path in [CONFIG_FILE, FALLBACK_CONFIG_FILE] {
            let path = Path::new(file_path);
            if path.exists() {
                log::info!("Reading configuration from {}", file_path);
                return Self::from_file(path);
            }
        }
        log::info!("No configuration file provided, using default settings...");
        Ok(Config::default())
    }

    fn apply_args(&mut self, args: &Args) {
        if let Some(max_floor) = args.max_floor {
            self.elevator.max_floor = max_floor;
        }
        if let Some(capacity) = args.capacity {
            self.elevator.capacity = capacity;
        }
        if let Some(tick_rate) = args.tick_rate {
            self.elevator.tick_rate = tick_rate;
        }
        if let Some(passengers) = args.passengers {
            self.simulation.max_passengers = passengers;
        }
        if args.seed.is_some() {
            self.simulation.seed = args.seed;
        }
    }
}
