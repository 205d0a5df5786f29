//! Simulation driver configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

/// Bundled content shipped with the workspace.
const DEFAULT_DATA_DIR: &str = "crates/game/content/data";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub scenario: String,
    pub turns: u32,
    pub log_dir: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            scenario: "skirmish".to_string(),
            turns: 10,
            log_dir: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `UNIT_SIM_DATA_DIR` - Content data directory (default: `crates/game/content/data`)
    /// - `UNIT_SIM_SCENARIO` - Scenario file name without extension (default: `skirmish`)
    /// - `UNIT_SIM_TURNS` - Rounds to play (default: 10, minimum 1)
    /// - `UNIT_SIM_LOG_DIR` - Log directory (default: platform cache dir)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("UNIT_SIM_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(scenario) = lookup("UNIT_SIM_SCENARIO").filter(|name| !name.is_empty()) {
            config.scenario = scenario;
        }
        if let Some(turns) = parse::<u32>(lookup("UNIT_SIM_TURNS")) {
            config.turns = turns.max(1);
        }
        config.log_dir = lookup("UNIT_SIM_LOG_DIR").map(PathBuf::from);

        config
    }

    /// Directory the log file is written to.
    pub fn resolve_log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from("", "", "unit-sim")
                .map(|dirs| dirs.cache_dir().join("logs"))
                .unwrap_or_else(|| PathBuf::from("/tmp/unit-sim/logs"))
        })
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}
