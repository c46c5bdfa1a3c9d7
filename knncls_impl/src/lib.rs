//! Do not use this crate directly.
//!
//! This is the implementation crate for the `knncls` binaries (`server`,
//! `client` and `standalone`).

#![deny(missing_debug_implementations)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
extern crate log;

mod algo;
mod conn;
mod data;
mod io;
mod knn_error;
mod protocol;
mod server;
mod session;

pub use crate::algo::{classify, quickselect, Neighbor};
pub use crate::conn::{Listener, Transport};
pub use crate::data::{DataPoint, DataSet, DistanceMetric};
pub use crate::io::{client, IoEndpoint, LocalIoEndpoint, RemoteIoEndpoint};
pub use crate::knn_error::{KnnError, KnnResult};
pub use crate::protocol::{wire, Frame, FrameKind};
pub use crate::server::{serve, Job, ThreadPool};
pub use crate::session::{ConfusionMatrix, MenuChoice, MenuCommand, Session, Settings};

/// Default number of neighbors consulted by a fresh session.
pub const DEFAULT_K: usize = 5;

/// Largest admissible number of neighbors.
pub const MAX_K: usize = 10;

/// Number of session workers started by the server.
pub const DEFAULT_POOL_SIZE: usize = 50;

/// How long the server waits for a connection before it shuts down cleanly.
pub const ACCEPT_DEADLINE: std::time::Duration = std::time::Duration::from_secs(300);
