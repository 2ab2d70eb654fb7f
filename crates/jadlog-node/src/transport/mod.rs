//! Transport layer between the host and the node.

pub mod framing;
pub mod stdio;

pub use stdio::StdioTransport;
