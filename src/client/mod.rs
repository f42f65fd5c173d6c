//! # Upload Client Module
//!
//! The client side of the store: reads a local file, wraps it in the
//! upload payload, and pushes it to a server.

pub mod errors;
pub mod uploader;

pub use errors::{ClientError, ClientResult};
pub use uploader::{ArtifactClient, PushRequest};
