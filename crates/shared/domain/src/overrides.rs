//! Partial configuration layers.
//!
//! Every source (base file, profile file, environment) is read into a
//! [`ConfigOverrides`] where each leaf is optional. Layers are stacked with
//! [`ConfigOverrides::layer`] and applied to the defaults with
//! [`ApiConfig::resolve`]. Unknown keys are rejected so a typo in a profile
//! never silently falls back to a default.

use crate::config::{
    ApiConfig, ApiConfigInner, AppConfig, FeatureConfig, GreetingConfig, ServerConfig,
};
use serde::Deserialize;
use std::net::IpAddr;

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub server: ServerOverrides,
    pub app: AppOverrides,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerOverrides {
    pub address: Option<IpAddr>,
    pub port: Option<u16>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppOverrides {
    pub environment: Option<String>,
    pub greeting: GreetingOverrides,
    pub feature: FeatureOverrides,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GreetingOverrides {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeatureOverrides {
    pub enabled: Option<bool>,
}

impl ConfigOverrides {
    /// Stacks `higher` on top of `self`; any value set in `higher` wins.
    #[must_use]
    pub fn layer(self, higher: Self) -> Self {
        Self { server: self.server.layer(higher.server), app: self.app.layer(higher.app) }
    }
}

impl ServerOverrides {
    #[must_use]
    pub fn layer(self, higher: Self) -> Self {
        Self { address: higher.address.or(self.address), port: higher.port.or(self.port) }
    }
}

impl AppOverrides {
    #[must_use]
    pub fn layer(self, higher: Self) -> Self {
        Self {
            environment: higher.environment.or(self.environment),
            greeting: GreetingOverrides {
                prefix: higher.greeting.prefix.or(self.greeting.prefix),
                suffix: higher.greeting.suffix.or(self.greeting.suffix),
            },
            feature: FeatureOverrides { enabled: higher.feature.enabled.or(self.feature.enabled) },
        }
    }
}

impl ApiConfig {
    /// Applies a fully stacked override layer to `defaults`.
    #[must_use]
    pub fn resolve(defaults: ApiConfigInner, overrides: ConfigOverrides) -> Self {
        Self::new(
            ServerConfig::resolve(defaults.server, overrides.server),
            AppConfig::resolve(defaults.app, overrides.app),
        )
    }
}

impl ServerConfig {
    #[must_use]
    pub fn resolve(defaults: Self, overrides: ServerOverrides) -> Self {
        Self {
            address: overrides.address.unwrap_or(defaults.address),
            port: overrides.port.unwrap_or(defaults.port),
        }
    }
}

impl AppConfig {
    /// Replaces every default leaf the overrides set and keeps the rest.
    #[must_use]
    pub fn resolve(defaults: Self, overrides: AppOverrides) -> Self {
        Self {
            environment: overrides.environment.unwrap_or(defaults.environment),
            greeting: GreetingConfig {
                prefix: overrides.greeting.prefix.unwrap_or(defaults.greeting.prefix),
                suffix: overrides.greeting.suffix.unwrap_or(defaults.greeting.suffix),
            },
            feature: FeatureConfig {
                enabled: overrides.feature.enabled.unwrap_or(defaults.feature.enabled),
            },
        }
    }
}
