// Adapters layer: concrete implementations of the domain ports.

pub mod ws;

pub use ws::WsTransport;
