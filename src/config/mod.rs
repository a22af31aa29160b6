use config::{Config, Environment, File};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod schema;
pub mod validator;

pub use schema::{load_schema, load_schemas_from_dir, NamedSchema};

use crate::adapters::fake_provider::FakeValueProvider;
use crate::application::evaluator::{Evaluator, DEFAULT_MAX_DEPTH};
use crate::cli::Cli;

/// Default settings file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "fixturegen.toml";

/// Prefix for environment overrides, e.g. `FIXTUREGEN__GENERATOR__SEED=7`.
pub const ENV_PREFIX: &str = "FIXTUREGEN";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GeneratorSettings {
    /// Fixed seed for reproducible documents; random when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Reject duplicate field names instead of letting the last one win
    #[serde(default)]
    pub strict_names: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            seed: None,
            max_depth: default_max_depth(),
            strict_names: false,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            generator: GeneratorSettings::default(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load from an optional settings file plus `FIXTUREGEN__*` environment
    /// variables, then validate.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let settings = Self::load(path.as_ref())?;
        settings.validate()?;
        Ok(settings)
    }

    /// Create settings from CLI arguments (config file, env vars, then CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = Self::load(&cli.config)?;
        settings.apply_cli_overrides(cli);
        settings.validate()?;
        Ok(settings)
    }

    fn load(path: &Path) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("log_level", default_log_level())?
            .set_default("generator.max_depth", default_max_depth() as u64)?
            .set_default("generator.strict_names", false)?
            .build()?;

        Ok(s.try_deserialize()?)
    }

    /// Apply CLI argument overrides to settings
    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(seed) = cli.seed {
            self.generator.seed = Some(seed);
        }
        if let Some(max_depth) = cli.max_depth {
            self.generator.max_depth = max_depth;
        }
        if cli.strict {
            self.generator.strict_names = true;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }

    /// Evaluator configured from these settings.
    ///
    /// With a seed the generated documents are reproducible across runs.
    pub fn evaluator(&self) -> Evaluator<FakeValueProvider<StdRng>> {
        let provider = match self.generator.seed {
            Some(seed) => FakeValueProvider::seeded(seed),
            None => FakeValueProvider::new(StdRng::from_entropy()),
        };

        Evaluator::new(provider)
            .with_max_depth(self.generator.max_depth)
            .with_strict_names(self.generator.strict_names)
    }
}
