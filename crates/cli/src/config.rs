//! Run configuration.
//!
//! Values are resolved with the precedence: command-line flags, then the
//! optional TOML file, then the built-in defaults below.
//!
//! ```toml
//! [parameters]
//! a = 0.8
//! b = 0.004
//! c = 0.002
//! d = 0.3
//!
//! [initial]
//! x0 = 200.0
//! y0 = 80.0
//!
//! [run]
//! dt = 0.001
//! steps = 1000
//! output = "results.txt"
//! ```

use std::{
    fs,
    num::ParseIntError,
    path::{Path, PathBuf},
};

use lotka_core::Parameters;
use serde::Deserialize;
use thiserror::Error;

use crate::args::Args;

pub const DEFAULT_PARAMETERS: Parameters = Parameters::new(0.8, 0.004, 0.002, 0.3);
pub const DEFAULT_X0: f64 = 200.0;
pub const DEFAULT_Y0: f64 = 80.0;
pub const DEFAULT_DT: f64 = 0.001;
pub const DEFAULT_OUTPUT: &str = "results.txt";

/// Errors raised while collecting or validating run settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("`{name}` must be a finite number greater than zero, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("step count must be a positive integer")]
    ZeroSteps,

    #[error("invalid step count {input:?}")]
    InvalidSteps {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("no step count provided")]
    MissingSteps,

    #[error("failed to prompt for step count")]
    Prompt(#[source] std::io::Error),
}

/// Contents of a TOML configuration file. Every entry is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub parameters: FileParameters,
    pub initial: FileInitial,
    pub run: FileRun,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileParameters {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
    pub d: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileInitial {
    pub x0: Option<f64>,
    pub y0: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileRun {
    pub dt: Option<f64>,
    pub steps: Option<usize>,
    pub output: Option<PathBuf>,
}

impl FileConfig {
    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid config TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Fully resolved settings for one run.
///
/// `steps` stays `None` until it is supplied by a flag, the config file, or
/// the interactive prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub params: Parameters,
    pub x0: f64,
    pub y0: f64,
    pub dt: f64,
    pub steps: Option<usize>,
    pub output: PathBuf,
}

impl Settings {
    /// Merges command-line flags over file values over defaults.
    pub fn resolve(args: &Args, file: FileConfig) -> Self {
        let FileConfig {
            parameters,
            initial,
            run,
        } = file;

        Self {
            params: Parameters {
                a: args
                    .prey_growth
                    .or(parameters.a)
                    .unwrap_or(DEFAULT_PARAMETERS.a),
                b: args
                    .prey_death
                    .or(parameters.b)
                    .unwrap_or(DEFAULT_PARAMETERS.b),
                c: args
                    .predator_growth
                    .or(parameters.c)
                    .unwrap_or(DEFAULT_PARAMETERS.c),
                d: args
                    .predator_death
                    .or(parameters.d)
                    .unwrap_or(DEFAULT_PARAMETERS.d),
            },
            x0: args.x0.or(initial.x0).unwrap_or(DEFAULT_X0),
            y0: args.y0.or(initial.y0).unwrap_or(DEFAULT_Y0),
            dt: args.dt.or(run.dt).unwrap_or(DEFAULT_DT),
            steps: args.steps.or(run.steps),
            output: args
                .output
                .clone()
                .or(run.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        }
    }

    /// Checks every real value and the step count, if known.
    ///
    /// # Errors
    ///
    /// Returns the first value that is not finite and strictly positive, or
    /// [`ConfigError::ZeroSteps`] for a step count of zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Parameters { a, b, c, d } = self.params;
        let reals = [
            ("a", a),
            ("b", b),
            ("c", c),
            ("d", d),
            ("x0", self.x0),
            ("y0", self.y0),
            ("dt", self.dt),
        ];
        for (name, value) in reals {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        if self.steps == Some(0) {
            return Err(ConfigError::ZeroSteps);
        }
        Ok(())
    }
}
