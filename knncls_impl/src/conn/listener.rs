use crate::{conn::Transport, KnnError, KnnResult};
use socket2::{Domain, Protocol, Socket, Type};
use std::{
    net::{SocketAddr, TcpListener},
    time::{Duration, Instant},
};

const BACKLOG: i32 = 10;
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Listening socket with deadline-bounded accept.
#[derive(Debug)]
pub struct Listener {
    inner: TcpListener,
    local: SocketAddr,
}

impl Listener {
    /// Binds with `SO_REUSEADDR` and starts listening.
    pub fn bind(addr: SocketAddr) -> KnnResult<Self> {
        let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;
        socket.set_reuse_address(true)?;
        socket.bind(&addr.into())?;
        socket.listen(BACKLOG)?;

        let inner: TcpListener = socket.into();
        // accept is polled, the deadline is enforced in userland
        inner.set_nonblocking(true)?;
        let local = inner.local_addr()?;
        debug!("Listening on {local}");
        Ok(Self { inner, local })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local
    }

    /// Waits up to `deadline` for an incoming connection.
    ///
    /// Returns [`KnnError::AcceptTimeout`] when the deadline elapses; the
    /// listener stays open and usable.
    pub fn accept_with_deadline(&self, deadline: Duration) -> KnnResult<(Transport, SocketAddr)> {
        let until = Instant::now() + deadline;
        loop {
            match self.inner.accept() {
                Ok((stream, peer)) => {
                    stream.set_nonblocking(false)?;
                    return Ok((Transport::try_new(stream)?, peer));
                }
                Err(error) if error.kind() == std::io::ErrorKind::WouldBlock => {
                    if Instant::now() >= until {
                        return Err(KnnError::AcceptTimeout);
                    }
                    std::thread::sleep(POLL_INTERVAL);
                }
                Err(error) => return Err(error.into()),
            }
        }
    }
}
