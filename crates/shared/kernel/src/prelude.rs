pub use crate::config::{ConfigError, ConfigLoader, Profile, ProfileError, load_config};
pub use crate::domain::config::{ApiConfig, AppConfig, FeatureConfig, GreetingConfig, ServerConfig};
pub use crate::greeting::{GreetingService, is_blank};
#[cfg(feature = "server")]
pub use crate::server::{ApiState, ApiStateError};
