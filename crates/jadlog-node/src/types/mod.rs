//! Data types shared between the node, the transport and the CLI.

pub mod description;
pub mod error;
pub mod execution;

pub use description::*;
pub use error::*;
pub use execution::*;
