//! Kernel of the greeting service.
//!
//! * [`config`]: profile-aware layered configuration loading.
//! * [`greeting`]: the greeting computation and its environment/feature accessors.
//! * `server` (feature `server`): application state, handlers and routers.
//!
//! ```rust
//! use greeter_kernel::prelude::*;
//!
//! let service = GreetingService::new(ApiConfig::default());
//! assert_eq!(service.greet(Some("John")), "Hello, John!");
//! assert_eq!(service.greet(None), "Hello, World!");
//! assert_eq!(service.environment(), "default");
//! ```
pub mod config;
pub mod greeting;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use greeter_domain as domain;
