pub mod zonefile;

pub use crate::domain::model::ZoneRequest;
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
