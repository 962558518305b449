//! # Domain Module
//!
//! Pure connectivity-check logic: no sockets, no timers.

pub mod catalog;
pub mod config;
pub mod endpoint;
pub mod errors;
pub mod locale;
pub mod policy;
pub mod status;

pub use catalog::*;
pub use config::*;
pub use endpoint::*;
pub use errors::*;
pub use locale::*;
pub use policy::*;
pub use status::*;
