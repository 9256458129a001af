use crate::core::backoff::ReconnectPolicy;
use crate::domain::model::{ConnectionState, MonitorMessage};
use crate::domain::ports::{ConfigProvider, FrameSource, MonitorTransport};
use crate::utils::error::{Result, SajuError};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

enum Pump {
    Closed,
    Stopped,
}

/// Keeps one monitor connection alive, reconnecting with doubling backoff.
pub struct MonitorClient<T: MonitorTransport> {
    transport: T,
    url: String,
    policy: ReconnectPolicy,
    state: watch::Sender<ConnectionState>,
}

impl<T: MonitorTransport> MonitorClient<T> {
    pub fn new(transport: T, url: impl Into<String>, policy: ReconnectPolicy) -> Self {
        let (state, _) = watch::channel(ConnectionState::Disconnected);
        Self {
            transport,
            url: url.into(),
            policy,
            state,
        }
    }

    pub fn from_config<C: ConfigProvider>(transport: T, config: &C) -> Self {
        let policy = ReconnectPolicy::new(
            config.max_reconnect_attempts(),
            config.reconnect_base_delay(),
        );
        Self::new(transport, config.ws_url(), policy)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn policy(&self) -> ReconnectPolicy {
        self.policy
    }

    pub fn state(&self) -> ConnectionState {
        *self.state.borrow()
    }

    pub fn subscribe_state(&self) -> watch::Receiver<ConnectionState> {
        self.state.subscribe()
    }

    fn set_state(&self, state: ConnectionState) {
        let previous = self.state.send_replace(state);
        if previous != state {
            tracing::debug!("Monitor state {:?} -> {:?}", previous, state);
        }
    }

    /// Runs until `shutdown` turns true (or its sender is dropped), the
    /// message receiver is dropped, or reconnects are exhausted.
    pub async fn run(
        &self,
        messages: mpsc::Sender<MonitorMessage>,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<()> {
        let mut attempts: u32 = 0;

        loop {
            if *shutdown.borrow() || messages.is_closed() {
                self.set_state(ConnectionState::Disconnected);
                return Ok(());
            }

            self.set_state(ConnectionState::Connecting);
            let connected = tokio::select! {
                biased;
                _ = shutdown_requested(&mut shutdown) => {
                    self.set_state(ConnectionState::Disconnected);
                    return Ok(());
                }
                result = self.transport.connect(&self.url) => result,
            };

            match connected {
                Ok(mut source) => {
                    attempts = 0;
                    self.set_state(ConnectionState::Connected);
                    tracing::info!("Monitor connected to {}", self.url);

                    match pump(source.as_mut(), &messages, &mut shutdown).await {
                        Pump::Closed => tracing::info!("Monitor connection closed"),
                        Pump::Stopped => {
                            self.set_state(ConnectionState::Disconnected);
                            return Ok(());
                        }
                    }
                }
                Err(e) => tracing::warn!("Monitor connect failed: {}", e),
            }

            self.set_state(ConnectionState::Disconnected);

            if attempts >= self.policy.max_attempts {
                tracing::error!("Monitor giving up after {} reconnect attempts", attempts);
                return Err(SajuError::ReconnectExhausted { attempts });
            }
            attempts += 1;
            let Some(delay) = self.policy.delay_for(attempts) else {
                return Err(SajuError::ReconnectExhausted { attempts });
            };

            tracing::info!(
                "Reconnecting in {:?} (attempt {}/{})",
                delay,
                attempts,
                self.policy.max_attempts
            );
            tokio::select! {
                biased;
                _ = shutdown_requested(&mut shutdown) => {
                    self.set_state(ConnectionState::Disconnected);
                    return Ok(());
                }
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }
}

impl<T: MonitorTransport + 'static> MonitorClient<T> {
    /// Starts `run` on its own task. Dropping the handle stops the loop.
    pub fn spawn(self: Arc<Self>, capacity: usize) -> MonitorHandle {
        let (tx, messages) = mpsc::channel(capacity.max(1));
        let (shutdown, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(async move { self.run(tx, shutdown_rx).await });

        MonitorHandle {
            messages,
            shutdown,
            task,
        }
    }
}

pub struct MonitorHandle {
    pub messages: mpsc::Receiver<MonitorMessage>,
    shutdown: watch::Sender<bool>,
    task: JoinHandle<Result<()>>,
}

impl MonitorHandle {
    pub async fn recv(&mut self) -> Option<MonitorMessage> {
        self.messages.recv().await
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Signals shutdown and waits for the loop to finish.
    pub async fn shutdown(self) -> Result<()> {
        let MonitorHandle {
            messages,
            shutdown,
            task,
        } = self;
        // unblocks a pending send on a full channel
        drop(messages);
        let _ = shutdown.send(true);
        task.await?
    }

    /// Waits for the loop to finish on its own.
    pub async fn join(self) -> Result<()> {
        self.task.await?
    }
}

async fn pump(
    source: &mut dyn FrameSource,
    messages: &mpsc::Sender<MonitorMessage>,
    shutdown: &mut watch::Receiver<bool>,
) -> Pump {
    loop {
        let frame = tokio::select! {
            biased;
            _ = shutdown_requested(shutdown) => return Pump::Stopped,
            frame = source.next_text() => frame,
        };

        let text = match frame {
            None => return Pump::Closed,
            Some(Err(e)) => {
                tracing::warn!("Monitor read failed: {}", e);
                return Pump::Closed;
            }
            Some(Ok(text)) => text,
        };

        match serde_json::from_str::<MonitorMessage>(&text) {
            Ok(message) => {
                tracing::debug!("Monitor message: {}", message.kind);
                // a full channel must not hold off shutdown
                tokio::select! {
                    biased;
                    _ = shutdown_requested(shutdown) => return Pump::Stopped,
                    sent = messages.send(message) => {
                        if sent.is_err() {
                            return Pump::Stopped;
                        }
                    }
                }
            }
            Err(e) => tracing::warn!("Skipping malformed monitor frame: {}", e),
        }
    }
}

/// Resolves once shutdown is requested or its sender is gone.
async fn shutdown_requested(shutdown: &mut watch::Receiver<bool>) {
    loop {
        if *shutdown.borrow_and_update() {
            return;
        }
        if shutdown.changed().await.is_err() {
            return;
        }
    }
}
