//! AWS Network Inventory
//!
//! Fetches a tenant's EC2 networking and compute inventory with credentials
//! looked up per request from the membership service, and joins the flat
//! describe results into cross-referenced summaries.
//!
//! # Modules
//! - [`membership`] - Credential lookup
//! - [`aws`] - EC2 client construction and describe calls
//! - [`models`] - Flat and composite DTOs
//! - [`processing`] - Join logic
//! - [`inventory`] - Per-request operations
//! - [`output`] - JSON and terminal output
//! - [`config`] - Runtime configuration
//! - [`error`] - Error types

pub mod aws;
pub mod config;
pub mod error;
pub mod inventory;
pub mod membership;
pub mod models;
pub mod output;
pub mod processing;

pub use config::InventoryConfig;
pub use error::{InventoryError, Result};
pub use inventory::{InventoryService, InventorySnapshot};
pub use membership::Caller;
