//! A client/server k-nearest-neighbor classification service.
//!
//! The server holds an immutable training set in memory and drives every
//! connected client through a menu-driven session: upload data, adjust the
//! algorithm parameters, classify, retrieve or download predictions, and
//! render a confusion matrix. All file and terminal I/O of a session is
//! remoted to the client through a typed little-endian frame protocol, so
//! the server operates as though it were reading and writing files local to
//! the user.
//!
//! Three binaries are built from this crate:
//!
//! * `server <bind-ip> <bind-port> <classified.csv>` — accepts connections
//!   and runs each session on a pooled worker thread;
//! * `client <bind-ip> <server-ip> <server-port>` — executes the server's
//!   framed requests against the local terminal and filesystem;
//! * `standalone <classified.csv>` — the same session machine bound
//!   directly to the terminal, no network involved.

#![deny(missing_debug_implementations)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

pub use knncls_impl::{
    classify, quickselect, ConfusionMatrix, DataPoint, DataSet, DistanceMetric, Frame, FrameKind,
    IoEndpoint, KnnError, KnnResult, Listener, LocalIoEndpoint, MenuChoice, MenuCommand, Neighbor,
    RemoteIoEndpoint, Session, Settings, ThreadPool, Transport,
};

/// The worker pool and the accept loop of the server binary.
pub use knncls_impl::{serve, Job};

/// The client-side dispatcher of the framed dialogue.
pub use knncls_impl::client;

/// The low-level typed wire codec.
pub use knncls_impl::wire;

pub use knncls_impl::{ACCEPT_DEADLINE, DEFAULT_K, DEFAULT_POOL_SIZE, MAX_K};
