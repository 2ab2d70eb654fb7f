//! Node implementations exposed to the host.

pub mod jadlog;

pub use jadlog::{JadlogNode, NODE_NAME, TRACK_NUMBER_PARAM};
