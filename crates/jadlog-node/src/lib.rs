//! Jadlog workflow node — host adapter, stdio transport and configuration
//! around the `jadlog-tracking` library.

pub mod config;
pub mod node;
pub mod transport;
pub mod types;

pub use config::resolve_fetcher_config;
pub use node::JadlogNode;
pub use transport::StdioTransport;
