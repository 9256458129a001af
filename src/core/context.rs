use crate::adapters::WsTransport;
use crate::core::admin::AdminClient;
use crate::core::monitor::{MonitorClient, MonitorHandle};
use crate::domain::ports::{ConfigProvider, MonitorTransport};
use crate::utils::error::Result;
use reqwest::Client;
use std::sync::Arc;

/// Everything a front end needs, built once from configuration and passed
/// down explicitly.
pub struct AppContext<T: MonitorTransport = WsTransport> {
    pub admin: AdminClient,
    pub monitor: Arc<MonitorClient<T>>,
    channel_capacity: usize,
}

impl AppContext<WsTransport> {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let transport = WsTransport::new(config.request_timeout());
        Self::with_transport(config, transport)
    }
}

impl<T: MonitorTransport + 'static> AppContext<T> {
    pub fn with_transport<C: ConfigProvider>(config: &C, transport: T) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("saju-core/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            admin: AdminClient::from_config(client, config),
            monitor: Arc::new(MonitorClient::from_config(transport, config)),
            channel_capacity: config.channel_capacity(),
        })
    }

    pub fn start_monitor(&self) -> MonitorHandle {
        Arc::clone(&self.monitor).spawn(self.channel_capacity)
    }
}
