use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Environment name reported when no profile is active.
pub const DEFAULT_ENVIRONMENT: &str = "default";
pub const DEFAULT_GREETING_PREFIX: &str = "Hello";
pub const DEFAULT_GREETING_SUFFIX: &str = "!";
pub const DEFAULT_PORT: u16 = 8080;

/// Top-level configuration shared across the service.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub app: AppConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into handlers.
///
/// Mutation through [`DerefMut`] is copy-on-write: clones handed out earlier
/// keep the snapshot they were created with.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl ApiConfig {
    #[must_use]
    pub fn new(server: ServerConfig, app: AppConfig) -> Self {
        Self { inner: Arc::new(ApiConfigInner { server, app }) }
    }
}

impl From<AppConfig> for ApiConfig {
    fn from(app: AppConfig) -> Self {
        Self::new(ServerConfig::default(), app)
    }
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
}

/// Application settings bound from the `app.*` keys.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub environment: String,
    pub greeting: GreetingConfig,
    pub feature: FeatureConfig,
}

/// Greeting template parts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    pub prefix: String,
    pub suffix: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    pub enabled: bool,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: DEFAULT_PORT }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_owned(),
            greeting: GreetingConfig::default(),
            feature: FeatureConfig::default(),
        }
    }
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_GREETING_PREFIX.to_owned(),
            suffix: DEFAULT_GREETING_SUFFIX.to_owned(),
        }
    }
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
