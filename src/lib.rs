pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, ZoneSettings};
pub use core::zonefile::{render_zone_file, ZoneFileGenerator};
pub use domain::model::ZoneRequest;
pub use utils::error::{Result, ZoneError};
