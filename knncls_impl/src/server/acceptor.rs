use crate::{
    conn::{Listener, Transport},
    data::DataSet,
    io::RemoteIoEndpoint,
    server::ThreadPool,
    session::Session,
    KnnError, KnnResult,
};
use std::{sync::Arc, time::Duration};

/// The accept loop: every connection becomes one pooled session job.
///
/// The shared training set is published once and read-only thereafter, no
/// synchronization is needed beyond the `Arc`. When `accept_deadline`
/// elapses without a connection, the pool is drained and the server returns
/// cleanly.
pub fn serve(
    listener: &Listener,
    training: &Arc<DataSet>,
    pool_size: usize,
    accept_deadline: Duration,
) -> KnnResult<()> {
    let pool = ThreadPool::new(pool_size);

    loop {
        match listener.accept_with_deadline(accept_deadline) {
            Ok((transport, peer)) => {
                info!("{peer} connected.");
                let training = Arc::clone(training);
                pool.submit(Box::new(move || run_session(transport, &training)))?;
            }
            Err(KnnError::AcceptTimeout) => {
                info!(
                    "No connection within {}s; shutting down.",
                    accept_deadline.as_secs()
                );
                break;
            }
            Err(error) => {
                error!("Accept failed: {error}");
                pool.shutdown()?;
                return Err(error);
            }
        }
    }

    pool.shutdown()
}

// Whatever happens inside the session is converted to "session ended" so
// the worker returns to the pool.
fn run_session(transport: Transport, training: &DataSet) {
    let peer = transport.peer_addr();
    let endpoint = RemoteIoEndpoint::new(transport);
    let mut session = Session::new(endpoint, training);

    match session.run() {
        Ok(()) => debug!("Session with {peer} finished cleanly"),
        Err(error) => debug!("Session with {peer} aborted: {error}"),
    }

    session.into_io().close();
    info!("Session with {peer} has ended.");
}
