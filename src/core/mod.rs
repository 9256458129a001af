pub mod admin;
pub mod backoff;
pub mod compatibility;
pub mod context;
pub mod monitor;
pub mod signs;
pub mod zodiac;

pub use crate::domain::model::{Compatibility, ConnectionState, MonitorMessage, ZodiacId, ZodiacSign};
pub use crate::domain::ports::{ConfigProvider, FrameSource, MonitorTransport};
pub use crate::utils::error::Result;
