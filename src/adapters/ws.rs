use crate::domain::ports::{FrameSource, MonitorTransport};
use crate::utils::error::{Result, SajuError};
use async_trait::async_trait;
use futures_util::StreamExt;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

/// Production transport for `/ws/monitor` over tokio-tungstenite.
#[derive(Debug, Clone)]
pub struct WsTransport {
    connect_timeout: Duration,
}

impl WsTransport {
    pub fn new(connect_timeout: Duration) -> Self {
        Self { connect_timeout }
    }
}

impl Default for WsTransport {
    fn default() -> Self {
        Self::new(Duration::from_secs(10))
    }
}

#[async_trait]
impl MonitorTransport for WsTransport {
    async fn connect(&self, url: &str) -> Result<Box<dyn FrameSource>> {
        tracing::debug!("Opening WebSocket to {}", url);
        let (stream, response) = tokio::time::timeout(self.connect_timeout, connect_async(url))
            .await
            .map_err(|_| {
                SajuError::IoError(std::io::Error::new(
                    std::io::ErrorKind::TimedOut,
                    format!("WebSocket handshake with {} timed out", url),
                ))
            })??;
        tracing::debug!("WebSocket handshake status: {}", response.status());

        Ok(Box::new(WsFrames { stream }))
    }
}

struct WsFrames {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

#[async_trait]
impl FrameSource for WsFrames {
    async fn next_text(&mut self) -> Option<Result<String>> {
        while let Some(message) = self.stream.next().await {
            match message {
                Ok(Message::Text(text)) => return Some(Ok(text.as_str().to_owned())),
                Ok(Message::Close(frame)) => {
                    tracing::debug!("WebSocket close frame: {:?}", frame);
                    return None;
                }
                // ping/pong are answered by tungstenite; binary frames are not part of the protocol
                Ok(_) => continue,
                Err(e) => return Some(Err(e.into())),
            }
        }
        None
    }
}
