//! Command line interface for the pendulum simulation

use clap::Parser;
use std::fmt;
use std::path::Path;

use crate::config::{ConfigError, SimulationConfig};
use crate::physics::Scalar;

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be loaded
    ConfigLoad(ConfigError),
    /// The configuration, after overrides, describes an unusable simulation
    InvalidConfig(ConfigError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigLoad(err) => write!(f, "Failed to load configuration: {err}"),
            CliError::InvalidConfig(err) => write!(f, "Invalid configuration: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigLoad(err) | CliError::InvalidConfig(err) => Some(err),
        }
    }
}

/// Pendulum - real-time double pendulum simulation
#[derive(Parser, Debug)]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"),
    about,
    long_about = None
)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Gravitational acceleration (overrides config file)
    #[arg(short = 'g', long, value_name = "VALUE")]
    pub gravity: Option<Scalar>,

    /// Integration time step in seconds (overrides config file)
    #[arg(short = 't', long, value_name = "SECONDS")]
    pub time_step: Option<Scalar>,

    /// Integration steps per rendered frame (overrides config file)
    #[arg(long, value_name = "COUNT")]
    pub steps_per_frame: Option<usize>,

    /// Start paused
    #[arg(short = 'p', long)]
    pub paused: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

/// Per-user configuration, or defaults together with the reason they were used
///
/// Runs before any logger is installed, so the caller reports the reason.
pub fn user_config_or_default(path: Option<&Path>) -> (SimulationConfig, Option<String>) {
    let Some(path) = path else {
        return (
            SimulationConfig::default(),
            Some("No user configuration directory available. Using defaults.".into()),
        );
    };
    if !path.exists() {
        return (SimulationConfig::default(), None);
    }

    match SimulationConfig::load(path) {
        Ok(config) => (config, None),
        Err(e) => (
            SimulationConfig::default(),
            Some(format!(
                "Failed to parse config file {}: {e}. Using defaults.",
                path.display()
            )),
        ),
    }
}

/// Loads configuration from file or defaults, then applies command-line overrides
///
/// An explicitly requested file must load; the per-user file falls back to
/// defaults when missing or malformed.
pub fn load_and_apply_config(args: &Args) -> Result<SimulationConfig, CliError> {
    load_and_apply_config_from(args, SimulationConfig::user_config_path().as_deref())
}

fn load_and_apply_config_from(
    args: &Args,
    user_config_path: Option<&Path>,
) -> Result<SimulationConfig, CliError> {
    let mut config = if let Some(config_path) = &args.config {
        println!("Loading configuration from: {config_path}");
        SimulationConfig::load(config_path).map_err(CliError::ConfigLoad)?
    } else {
        let (config, fallback) = user_config_or_default(user_config_path);
        if let Some(reason) = fallback {
            eprintln!("Warning: {reason}");
        }
        config
    };

    if let Some(gravity) = args.gravity {
        println!("Overriding gravity to: {gravity}");
        config.physics.gravity = gravity;
    }

    if let Some(time_step) = args.time_step {
        println!("Overriding time step to: {time_step}");
        config.physics.time_step = time_step;
    }

    if let Some(steps_per_frame) = args.steps_per_frame {
        println!("Overriding steps per frame to: {steps_per_frame}");
        config.physics.steps_per_frame = steps_per_frame;
    }

    if args.paused {
        config.physics.start_paused = true;
    }

    config.validate().map_err(CliError::InvalidConfig)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        let args = Args::try_parse_from(["pendulum"]).unwrap();

        assert!(args.config.is_none());
        assert!(args.gravity.is_none());
        assert!(!args.paused);
        assert!(!args.verbose);
        assert!(!args.print_config);
    }

    #[test]
    fn test_overrides_are_applied() {
        let path = std::env::temp_dir().join(format!(
            "pendulum-cli-overrides-{}.toml",
            std::process::id()
        ));
        SimulationConfig::default().save(&path).unwrap();
        let path_arg = path.to_string_lossy().into_owned();

        let args = Args::try_parse_from([
            "pendulum",
            "--config",
            &path_arg,
            "-g",
            "1.62",
            "--time-step",
            "0.0005",
            "--steps-per-frame",
            "8",
            "--paused",
        ])
        .unwrap();
        let config = load_and_apply_config(&args);
        std::fs::remove_file(&path).ok();
        let config = config.unwrap();

        assert_eq!(config.physics.gravity, 1.62);
        assert_eq!(config.physics.time_step, 0.0005);
        assert_eq!(config.physics.steps_per_frame, 8);
        assert!(config.physics.start_paused);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let path = std::env::temp_dir().join(format!(
            "pendulum-cli-invalid-{}.toml",
            std::process::id()
        ));
        SimulationConfig::default().save(&path).unwrap();
        let path_arg = path.to_string_lossy().into_owned();

        let args =
            Args::try_parse_from(["pendulum", "-c", &path_arg, "--time-step", "0"]).unwrap();
        let result = load_and_apply_config(&args);
        std::fs::remove_file(&path).ok();

        assert!(matches!(
            result,
            Err(CliError::InvalidConfig(ConfigError::InvalidTimeStep(_)))
        ));
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let args = Args::try_parse_from([
            "pendulum",
            "--config",
            "/nonexistent/pendulum/config.toml",
        ])
        .unwrap();

        assert!(matches!(
            load_and_apply_config(&args),
            Err(CliError::ConfigLoad(_))
        ));
    }

    #[test]
    fn test_malformed_user_config_falls_back_with_reason() {
        let path = std::env::temp_dir().join(format!(
            "pendulum-cli-malformed-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[physics\ntime_step = \n").unwrap();

        let (config, fallback) = user_config_or_default(Some(&path));
        let args = Args::try_parse_from(["pendulum", "-g", "3.7"]).unwrap();
        let applied = load_and_apply_config_from(&args, Some(&path));
        std::fs::remove_file(&path).ok();

        assert_eq!(config, SimulationConfig::default());
        let reason = fallback.expect("falling back should be reported");
        assert!(reason.contains("Failed to parse config file"));
        assert!(reason.contains("pendulum-cli-malformed"));

        let applied = applied.unwrap();
        assert_eq!(applied.physics.gravity, 3.7);
        assert_eq!(applied.physics.time_step, SimulationConfig::default().physics.time_step);
    }

    #[test]
    fn test_missing_user_config_uses_defaults_quietly() {
        let path = std::env::temp_dir().join("pendulum-cli-no-such-user-config.toml");
        let (config, fallback) = user_config_or_default(Some(&path));

        assert_eq!(config, SimulationConfig::default());
        assert!(fallback.is_none());
    }

    #[test]
    fn test_valid_user_config_is_used() {
        let path = std::env::temp_dir().join(format!(
            "pendulum-cli-user-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[physics]\nsteps_per_frame = 3\n").unwrap();

        let (config, fallback) = user_config_or_default(Some(&path));
        std::fs::remove_file(&path).ok();

        assert!(fallback.is_none());
        assert_eq!(config.physics.steps_per_frame, 3);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["pendulum", "--speed", "3"]).is_err());
    }
}
