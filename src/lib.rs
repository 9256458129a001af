pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::WsTransport;
pub use crate::config::TomlConfig;
pub use crate::core::admin::AdminClient;
pub use crate::core::backoff::ReconnectPolicy;
pub use crate::core::compatibility::{asymmetric_pairs, check_compatibility, compatibility};
pub use crate::core::context::AppContext;
pub use crate::core::monitor::{MonitorClient, MonitorHandle};
pub use crate::core::signs::{find_sign, sign, signs};
pub use crate::core::zodiac::{calculate_zodiac, calculate_zodiac_from_birth, calculate_zodiac_from_date};
pub use crate::domain::model::{Compatibility, ConnectionState, Element, MonitorMessage, ZodiacId, ZodiacSign};
pub use crate::utils::error::{Result, SajuError};
