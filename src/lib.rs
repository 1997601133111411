//! Static JSON responders for the inventory, order and user sample services.
//!
//! Each binary under `src/bin/` picks one [`models::Catalog`] and hands it to
//! [`server::run`]; everything else is shared.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod server;
pub mod telemetry;

pub use error::{ServiceError, ServiceResult};
pub use models::{Catalog, Inventory, Orders, StatusPayload, Users};
