//! Scenario use-case services.
//!
//! # Responsibility
//! - Compose repositories, indexes and persistence into scenario APIs.
//! - Log every accepted mutation at `debug` and every rejection at `warn`.
//!
//! # Invariants
//! - Services never bypass repository validation.

use log::{debug, warn};
use std::fmt::Display;

pub mod finance_service;
pub mod grading_service;
pub mod inventory_log_service;
pub mod pharmacy_service;
pub mod warehouse_service;

/// Logs `result` as `event=<event> module=<module>` and passes it through.
pub(crate) fn logged<T, E: Display>(
    module: &'static str,
    event: &'static str,
    key: impl Display,
    result: Result<T, E>,
) -> Result<T, E> {
    match &result {
        Ok(_) => debug!("event={event} module={module} status=ok key={key}"),
        Err(err) => warn!("event={event} module={module} status=rejected key={key} error={err}"),
    }
    result
}
