//! kakeibo-core
//!
//! Cash-flow projection and the services around it.
//! Depends on kakeibo-domain. No CLI, no terminal I/O, no direct storage interactions.

pub mod catalogue_service;
pub mod error;
pub mod projection_service;
pub mod scenario_service;
pub mod summary_service;
pub mod time;

pub use catalogue_service::*;
pub use error::{CoreError, ProjectionError};
pub use projection_service::*;
pub use scenario_service::*;
pub use summary_service::*;
pub use time::{Clock, FixedClock};
