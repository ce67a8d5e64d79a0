//! Configuration loading and typed config structures for Solarwatch.
//!
//! The canonical configuration lives in `solarwatch-config.yaml` at the
//! project root. Every field has a serde default equal to the engine's
//! built-in constant, so an empty file (or no file) reproduces the
//! reference scoring exactly.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use solarwatch_types::{FlareClass, FlareLetter};

use crate::tiers::{Tier, TierTable};
use crate::trend::{KP_DEAD_BAND, WIND_DEAD_BAND};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but violates an engine constraint.
    #[error("invalid config: {message}")]
    Invalid {
        /// Which constraint was violated.
        message: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
///
/// Mirrors the structure of `solarwatch-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WatchConfig {
    /// Analysis windows, thresholds and scoring tables.
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Report synthesis settings.
    #[serde(default)]
    pub report: ReportConfig,

    /// Host polling loop settings.
    #[serde(default)]
    pub polling: PollingConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl WatchConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override the polling paths:
    /// - `SOLARWATCH_SNAPSHOT` overrides `polling.snapshot_path`
    /// - `SOLARWATCH_OUTPUT` overrides `polling.output_path`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a table or window is malformed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.polling.apply_env_overrides();
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a table or window is malformed.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.analysis.validate()?;
        Ok(config)
    }
}

/// Analysis settings consumed by the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisConfig {
    /// Trailing window lengths, in samples.
    #[serde(default)]
    pub windows: WindowConfig,

    /// Classification thresholds.
    #[serde(default)]
    pub thresholds: ThresholdConfig,

    /// Danger score tables and label cutoffs.
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl AnalysisConfig {
    /// Check the constraints serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let windows = [
            ("windows.kp_trend", self.windows.kp_trend),
            ("windows.wind", self.windows.wind),
            ("windows.flare", self.windows.flare),
        ];
        for (name, len) in windows {
            if len == 0 {
                return Err(invalid(format!("{name} must be at least 1 sample")));
            }
        }

        if !self.scoring.kp.is_well_ordered() {
            return Err(invalid("scoring.kp must list thresholds highest first"));
        }
        if !self.scoring.wind.is_well_ordered() {
            return Err(invalid("scoring.wind must list thresholds highest first"));
        }
        if !self.scoring.flare.is_well_ordered() {
            return Err(invalid("scoring.flare must list classes highest first"));
        }
        if self.scoring.moderate_at > self.scoring.high_at {
            return Err(invalid("scoring.moderate_at must not exceed scoring.high_at"));
        }

        let t = &self.thresholds;
        if t.kp_trend_dead_band < 0.0 || t.wind_trend_dead_band < 0.0 {
            return Err(invalid("trend dead-bands must be non-negative"));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        message: message.into(),
    }
}

/// Trailing window lengths.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WindowConfig {
    /// Kp samples per trend window (1 compares the latest reading with
    /// the one before it).
    #[serde(default = "default_kp_trend_window")]
    pub kp_trend: usize,

    /// Wind samples averaged for speed, density, trend and attribution.
    #[serde(default = "default_wind_window")]
    pub wind: usize,

    /// X-ray samples averaged for the scoring flare class.
    #[serde(default = "default_flare_window")]
    pub flare: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            kp_trend: default_kp_trend_window(),
            wind: default_wind_window(),
            flare: default_flare_window(),
        }
    }
}

/// Classification thresholds.
///
/// The Kp and wind trend dead-bands are deliberately separate settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThresholdConfig {
    /// X-ray flux a peak must exceed to count at all (W/m^2).
    #[serde(default = "default_flare_noise_floor")]
    pub flare_noise_floor: f64,

    /// X-ray flux at or above which a peak is significant (W/m^2).
    #[serde(default = "default_flare_significance")]
    pub flare_significance: f64,

    /// Average wind speed above which wind is "high" (km/s, exclusive).
    #[serde(default = "default_high_wind_speed")]
    pub high_wind_speed: f64,

    /// Proton flux at or above which a radiation storm is in progress (pfu).
    #[serde(default = "default_proton_storm_flux")]
    pub proton_storm_flux: f64,

    /// Kp trend dead-band.
    #[serde(default = "default_kp_trend_dead_band")]
    pub kp_trend_dead_band: f64,

    /// Wind-speed trend dead-band (km/s).
    #[serde(default = "default_wind_trend_dead_band")]
    pub wind_trend_dead_band: f64,

    /// Minimum current Kp for a lower forecast to read as a decline.
    #[serde(default = "default_forecast_decline_kp")]
    pub forecast_decline_kp: f64,

    /// Kp below which fast wind is reported as magnetically shielded.
    #[serde(default = "default_shielded_kp_ceiling")]
    pub shielded_kp_ceiling: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            flare_noise_floor: default_flare_noise_floor(),
            flare_significance: default_flare_significance(),
            high_wind_speed: default_high_wind_speed(),
            proton_storm_flux: default_proton_storm_flux(),
            kp_trend_dead_band: default_kp_trend_dead_band(),
            wind_trend_dead_band: default_wind_trend_dead_band(),
            forecast_decline_kp: default_forecast_decline_kp(),
            shielded_kp_ceiling: default_shielded_kp_ceiling(),
        }
    }
}

/// Danger score tables and label cutoffs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScoringConfig {
    /// Points by latest Kp.
    #[serde(default = "default_kp_table")]
    pub kp: TierTable<f64>,

    /// Points by trailing average wind speed (km/s).
    #[serde(default = "default_wind_table")]
    pub wind: TierTable<f64>,

    /// Points by trailing average flare class.
    #[serde(default = "default_flare_table")]
    pub flare: TierTable<FlareClass>,

    /// Lowest score labelled MODERATE.
    #[serde(default = "default_moderate_at")]
    pub moderate_at: u8,

    /// Lowest score labelled HIGH.
    #[serde(default = "default_high_at")]
    pub high_at: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            kp: default_kp_table(),
            wind: default_wind_table(),
            flare: default_flare_table(),
            moderate_at: default_moderate_at(),
            high_at: default_high_at(),
        }
    }
}

impl ScoringConfig {
    /// The highest composite score these tables can award.
    pub fn max_score(&self) -> u8 {
        self.kp
            .max_points()
            .saturating_add(self.wind.max_points())
            .saturating_add(self.flare.max_points())
    }
}

/// Report synthesis settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    /// Seed for phrase selection. Unset draws from OS entropy each run.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Directory with `status.j2`, `dynamics.j2`, `forecast.j2` and
    /// `physics.j2` overriding the built-in section templates.
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,
}

/// Where the prior window for trend deltas comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendBaseline {
    /// The samples immediately preceding the current window in the same
    /// snapshot.
    #[default]
    PrecedingWindow,
    /// The trailing window of the snapshot retained from the previous cycle.
    PreviousCycle,
}

/// Host polling loop settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PollingConfig {
    /// Seconds between analysis cycles.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// JSON snapshot published by the telemetry collaborator. Unset runs
    /// on demo data.
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,

    /// Where to write each cycle's output. Unset prints to stdout.
    #[serde(default)]
    pub output_path: Option<PathBuf>,

    /// Run a single cycle and exit.
    #[serde(default)]
    pub run_once: bool,

    /// Seed for demo telemetry. Unset draws from OS entropy.
    #[serde(default)]
    pub demo_seed: Option<u64>,

    /// Prior-window source for trend deltas.
    #[serde(default)]
    pub trend_baseline: TrendBaseline,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            snapshot_path: None,
            output_path: None,
            run_once: false,
            demo_seed: None,
            trend_baseline: TrendBaseline::default(),
        }
    }
}

impl PollingConfig {
    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("SOLARWATCH_SNAPSHOT") {
            self.snapshot_path = Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var("SOLARWATCH_OUTPUT") {
            self.output_path = Some(PathBuf::from(path));
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON log lines instead of the human-readable format.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

const fn default_kp_trend_window() -> usize {
    1
}

const fn default_wind_window() -> usize {
    6
}

const fn default_flare_window() -> usize {
    12
}

const fn default_flare_noise_floor() -> f64 {
    1e-8
}

const fn default_flare_significance() -> f64 {
    1e-6
}

const fn default_high_wind_speed() -> f64 {
    500.0
}

const fn default_proton_storm_flux() -> f64 {
    10.0
}

const fn default_kp_trend_dead_band() -> f64 {
    KP_DEAD_BAND
}

const fn default_wind_trend_dead_band() -> f64 {
    WIND_DEAD_BAND
}

const fn default_forecast_decline_kp() -> f64 {
    4.0
}

const fn default_shielded_kp_ceiling() -> f64 {
    4.0
}

fn default_kp_table() -> TierTable<f64> {
    TierTable::new(vec![
        Tier::new(7.0, 4),
        Tier::new(5.0, 3),
        Tier::new(4.0, 2),
        Tier::new(3.0, 1),
    ])
}

fn default_wind_table() -> TierTable<f64> {
    TierTable::new(vec![
        Tier::new(700.0, 3),
        Tier::new(500.0, 2),
        Tier::new(400.0, 1),
    ])
}

fn default_flare_table() -> TierTable<FlareClass> {
    TierTable::new(vec![
        Tier::new(FlareClass::new(FlareLetter::X, 0.0), 3),
        Tier::new(FlareClass::new(FlareLetter::M, 5.0), 2),
        Tier::new(FlareClass::new(FlareLetter::M, 0.0), 1),
    ])
}

const fn default_moderate_at() -> u8 {
    3
}

const fn default_high_at() -> u8 {
    5
}

const fn default_interval_secs() -> u64 {
    60
}

fn default_log_level() -> String {
    String::from("info")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let config = WatchConfig::default();
        assert_eq!(config.analysis.windows.kp_trend, 1);
        assert_eq!(config.analysis.windows.wind, 6);
        assert_eq!(config.analysis.windows.flare, 12);
        assert_eq!(config.analysis.scoring.moderate_at, 3);
        assert_eq!(config.analysis.scoring.high_at, 5);
        assert_eq!(config.polling.interval_secs, 60);
        assert_eq!(config.polling.trend_baseline, TrendBaseline::PrecedingWindow);
        assert_eq!(config.logging.level, "info");
        assert!(config.analysis.validate().is_ok());
    }

    #[test]
    fn dead_bands_are_independent() {
        let t = ThresholdConfig::default();
        assert!(t.kp_trend_dead_band.abs() < f64::EPSILON);
        assert!((t.wind_trend_dead_band - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_yaml_yields_defaults() {
        let config = WatchConfig::parse("{}").unwrap();
        assert_eq!(config, WatchConfig::default());
    }

    #[test]
    fn parse_partial_yaml() {
        let yaml = r#"
analysis:
  windows:
    wind: 10
  thresholds:
    wind_trend_dead_band: 25.0
  scoring:
    flare:
      - { at: "X0.0", points: 4 }
      - { at: "M1.0", points: 1 }
report:
  seed: 7
polling:
  interval_secs: 30
  run_once: true
  trend_baseline: previous_cycle
logging:
  level: debug
"#;
        let config = WatchConfig::parse(yaml).unwrap();
        assert_eq!(config.analysis.windows.wind, 10);
        assert_eq!(config.analysis.windows.flare, 12);
        assert!((config.analysis.thresholds.wind_trend_dead_band - 25.0).abs() < f64::EPSILON);
        assert_eq!(config.analysis.scoring.flare.tiers().len(), 2);
        assert_eq!(
            config.analysis.scoring.flare.points(&FlareClass::new(FlareLetter::X, 3.0)),
            4
        );
        assert_eq!(config.analysis.scoring.kp.tiers().len(), 4);
        assert_eq!(config.report.seed, Some(7));
        assert_eq!(config.polling.interval_secs, 30);
        assert!(config.polling.run_once);
        assert_eq!(config.polling.trend_baseline, TrendBaseline::PreviousCycle);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.analysis.scoring.max_score(), 4 + 3 + 4);
    }

    #[test]
    fn default_max_score_is_ten() {
        assert_eq!(ScoringConfig::default().max_score(), 10);
    }

    #[test]
    fn rejects_ascending_table() {
        let yaml = r"
analysis:
  scoring:
    wind:
      - { at: 400.0, points: 1 }
      - { at: 700.0, points: 3 }
";
        assert!(matches!(
            WatchConfig::parse(yaml),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn rejects_zero_window() {
        let yaml = "analysis:\n  windows:\n    flare: 0\n";
        assert!(matches!(
            WatchConfig::parse(yaml),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn rejects_inverted_label_cutoffs() {
        let yaml = "analysis:\n  scoring:\n    moderate_at: 6\n    high_at: 5\n";
        assert!(matches!(
            WatchConfig::parse(yaml),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn invalid_yaml_is_reported() {
        assert!(matches!(
            WatchConfig::parse("analysis: [unclosed"),
            Err(ConfigError::Yaml { .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = WatchConfig::from_file(Path::new("/nonexistent/solarwatch-config.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
