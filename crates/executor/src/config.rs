use config::{Config as ConfigLoader, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::Error;
use allpaths_core::MAX_VERTICES;

/// Built-in defaults, overridden by the user file and the environment.
const DEFAULT_CONFIG: &str = include_str!("../Config.toml");

#[derive(Debug, Deserialize, Clone)]
pub struct TraceConfig {
    pub graphs_dir: PathBuf,
    pub output_file: PathBuf,
    pub channel_capacity: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimulatorConfig {
    pub total_graphs: usize,
    pub num_vertices: usize,
    pub edge_probability: f64,
    pub min_weight: i64,
    pub max_weight: i64,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub filter: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub trace: TraceConfig,
    pub simulator: SimulatorConfig,
    pub logging: LoggingConfig,
}

/// Loads configuration from the embedded defaults, an optional file and
/// `ALLPATHS__SECTION__KEY` environment variables, in that order.
pub fn load_config(config_file: Option<&Path>) -> Result<Config, Error> {
    let mut builder =
        ConfigLoader::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    if let Some(path) = config_file {
        if !path.exists() {
            return Err(Error::ConfigLoadError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        builder = builder.add_source(File::from(path).required(true));
    }

    let s = builder
        .add_source(
            Environment::with_prefix("ALLPATHS")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    validate(&app_config)?;
    Ok(app_config)
}

fn validate(config: &Config) -> Result<(), Error> {
    let sim = &config.simulator;
    if sim.min_weight > sim.max_weight {
        return Err(Error::ConfigLoadError(format!(
            "simulator.min_weight ({}) exceeds simulator.max_weight ({})",
            sim.min_weight, sim.max_weight
        )));
    }
    if sim.num_vertices > MAX_VERTICES {
        return Err(Error::ConfigLoadError(format!(
            "simulator.num_vertices ({}) exceeds the maximum of {}",
            sim.num_vertices, MAX_VERTICES
        )));
    }
    if !(0.0..=1.0).contains(&sim.edge_probability) {
        return Err(Error::ConfigLoadError(format!(
            "simulator.edge_probability must lie in [0, 1], got {}",
            sim.edge_probability
        )));
    }
    if config.trace.channel_capacity == 0 {
        return Err(Error::ConfigLoadError(
            "trace.channel_capacity must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_temp_file() -> NamedTempFile {
        tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("Failed to create temp file")
    }

    #[test]
    fn defaults_load_without_a_file() {
        let config = load_config(None).expect("embedded defaults are valid");

        assert_eq!(config.trace.graphs_dir, PathBuf::from("graphs"));
        assert_eq!(config.trace.output_file, PathBuf::from("trace_execution.txt"));
        assert_eq!(config.simulator.num_vertices, 5);
        assert!(config.simulator.seed.is_none());
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn user_file_overrides_defaults() {
        let mut temp_file = toml_temp_file();
        temp_file
            .write_all(b"[simulator]\nnum_vertices = 8\nseed = 7\n")
            .expect("Failed to write config");

        let config = load_config(Some(temp_file.path())).expect("override should load");

        assert_eq!(config.simulator.num_vertices, 8);
        assert_eq!(config.simulator.seed, Some(7));
        assert_eq!(config.simulator.total_graphs, 3);
    }

    #[test]
    fn missing_user_file_is_an_error() {
        let result = load_config(Some(Path::new("no_such_config.toml")));
        assert!(matches!(result, Err(Error::ConfigLoadError(_))));
    }

    #[test]
    fn inverted_weight_range_is_rejected() {
        let mut temp_file = toml_temp_file();
        temp_file
            .write_all(b"[simulator]\nmin_weight = 5\nmax_weight = 1\n")
            .expect("Failed to write config");

        let result = load_config(Some(temp_file.path()));
        assert!(matches!(result, Err(Error::ConfigLoadError(_))));
    }

    #[test]
    fn oversized_simulated_graph_is_rejected() {
        let mut temp_file = toml_temp_file();
        temp_file
            .write_all(b"[simulator]\nnum_vertices = 5000000000\n")
            .expect("Failed to write config");

        let result = load_config(Some(temp_file.path()));
        assert!(matches!(result, Err(Error::ConfigLoadError(_))));
    }
}
