use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn ws_url(&self) -> &str;
    fn max_reconnect_attempts(&self) -> u32;
    fn reconnect_base_delay(&self) -> Duration;
    fn channel_capacity(&self) -> usize;
}

/// One open monitor connection.
#[async_trait]
pub trait FrameSource: Send {
    /// Next text frame; `None` once the peer has closed.
    async fn next_text(&mut self) -> Option<Result<String>>;
}

#[async_trait]
pub trait MonitorTransport: Send + Sync {
    async fn connect(&self, url: &str) -> Result<Box<dyn FrameSource>>;
}
