//! NetSight: a terminal workbench for wireless link budgets.
//!
//! The link model itself lives in `netsight_core`; this crate adds the
//! command line, the ratatui dashboard, configuration, reports and the bridge
//! to an external suggestion command.

pub mod app;
pub mod commands;
pub mod components;
pub mod config;
pub mod data;
pub mod logging;
pub mod provider;
pub mod state;
pub mod util;
pub mod worker;

pub use app::App;
pub use config::{AppConfig, default_data_dir};
pub use logging::init_logging;
