//! depot - A minimal, self-hostable, content-addressed artifact store
//!
//! Files are pushed over HTTP together with a descriptive metadata record,
//! stored under the SHA-256 digest of their bytes next to a JSON sidecar,
//! and listed back as an HTML table that links each original file name to
//! its stored payload.

pub mod cli;
pub mod client;
pub mod http_server;
pub mod store;
