mod profile;

pub use profile::{MAX_PROFILE_LEN, Profile, ProfileError};

use ::config::{Config, Environment, File, FileFormat, Map};
use greeter_domain::config::{ApiConfig, ApiConfigInner};
use greeter_domain::overrides::ConfigOverrides;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory searched for configuration files when none is given.
pub const DEFAULT_CONFIG_DIR: &str = "config";
/// Stem of the base file and prefix of profile files (`application-<profile>.toml`).
pub const BASE_FILE_STEM: &str = "application";
/// Environment overrides look like `GREETER__APP__GREETING__PREFIX`.
pub const ENV_PREFIX: &str = "GREETER";
pub const ENV_SEPARATOR: &str = "__";

#[greeter_derive::greeter_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: ::config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Profile error{}: {source}", format_context(.context))]
    Profile { source: ProfileError, context: Option<Cow<'static, str>> },
}

/// Layered configuration loader.
///
/// Layers, lowest to highest precedence:
/// 1. built-in defaults,
/// 2. `<dir>/application.toml` (optional),
/// 3. `<dir>/application-<profile>.toml` (required once a profile is selected),
/// 4. `GREETER__*` environment variables.
///
/// Each layer is read into [`ConfigOverrides`] and stacked; the result is applied to the
/// defaults in one step, so a failing layer never leaves a half-overridden configuration.
/// A profile layer that does not name an environment reports the profile name as `app.environment`.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    dir: PathBuf,
    profile: Option<Profile>,
    env: Option<Map<String, String>>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_DIR)
    }
}

impl ConfigLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), profile: None, env: None }
    }

    #[must_use]
    pub fn profile(mut self, profile: Option<Profile>) -> Self {
        self.profile = profile;
        self
    }

    /// Replaces the process environment with an explicit set of variables.
    #[must_use]
    pub fn env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    #[must_use]
    pub fn base_file(&self) -> PathBuf {
        self.dir.join(format!("{BASE_FILE_STEM}.toml"))
    }

    #[must_use]
    pub fn profile_file(&self, profile: &Profile) -> PathBuf {
        self.dir.join(format!("{BASE_FILE_STEM}-{profile}.toml"))
    }

    /// Resolves the configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::Config`] if the selected profile file is missing, any layer is
    /// malformed, contains unknown keys, or holds values of the wrong type.
    pub fn load(&self) -> Result<ApiConfig, ConfigError> {
        let base_path = self.base_file();
        debug!(path = %base_path.display(), "Reading base configuration");
        let mut overrides = read_file(&base_path, false)?;

        if let Some(profile) = &self.profile {
            let path = self.profile_file(profile);
            info!(profile = %profile, path = %path.display(), "Loading profile configuration");

            let mut layer = read_file(&path, true)?;
            if layer.app.environment.is_none() {
                layer.app.environment = Some(profile.to_string());
            }
            overrides = overrides.layer(layer);
        }

        overrides = overrides.layer(self.read_env()?);

        let config = ApiConfig::resolve(ApiConfigInner::default(), overrides);
        info!(
            profile = self.profile.as_ref().map_or("none", Profile::as_str),
            environment = %config.app.environment,
            feature_enabled = config.app.feature.enabled,
            "Configuration resolved"
        );

        Ok(config)
    }

    fn read_env(&self) -> Result<ConfigOverrides, ConfigError> {
        let source = Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .source(self.env.clone());

        Config::builder()
            .add_source(source)
            .build()
            .context("Failed to read environment overrides")?
            .try_deserialize::<ConfigOverrides>()
            .context("Invalid environment overrides")
    }
}

fn read_file(path: &Path, required: bool) -> Result<ConfigOverrides, ConfigError> {
    let context = || format!("Failed to load {}", path.display());

    Config::builder()
        .add_source(File::from(path).format(FileFormat::Toml).required(required))
        .build()
        .context(context())?
        .try_deserialize::<ConfigOverrides>()
        .context(context())
}

/// Resolves the configuration from `dir` with an optional profile selection.
///
/// A blank selection means no profile. Environment overrides come from the process.
///
/// # Errors
/// Returns [`ConfigError::Profile`] for an invalid profile name and
/// [`ConfigError::Config`] for any layer failure (see [`ConfigLoader::load`]).
///
/// # Example
/// ```rust,no_run
/// use greeter_kernel::config::load_config;
///
/// let cfg = load_config("config", Some("dev4")).unwrap();
/// assert_eq!(cfg.app.environment, "dev4");
/// ```
pub fn load_config(dir: impl AsRef<Path>, profile: Option<&str>) -> Result<ApiConfig, ConfigError> {
    let profile = Profile::from_selection(profile).context("Invalid profile selection")?;
    ConfigLoader::new(dir.as_ref()).profile(profile).load()
}
