use crate::KnnResult;
use socket2::{Domain, Protocol, Socket, Type};
use std::{
    io::{BufReader, BufWriter, Read, Write},
    net::{IpAddr, Shutdown, SocketAddr, TcpStream},
};

// A buffered blocking tcp connection; both halves of one stream.
#[derive(Debug)]
pub struct Transport {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
    peer: SocketAddr,
    open: bool,
}

impl Transport {
    pub(crate) fn try_new(stream: TcpStream) -> KnnResult<Self> {
        let peer = stream.peer_addr()?;
        let writer = BufWriter::new(stream.try_clone()?);
        trace!("Transport to {peer} established");
        Ok(Self {
            reader: BufReader::new(stream),
            writer,
            peer,
            open: true,
        })
    }

    /// Connects to `server`, binding the local end of the socket to
    /// `local_ip` first.
    pub fn connect(local_ip: IpAddr, server: SocketAddr) -> KnnResult<Self> {
        let socket = Socket::new(
            Domain::for_address(server),
            Type::STREAM,
            Some(Protocol::TCP),
        )?;
        socket.set_reuse_address(true)?;
        socket.bind(&SocketAddr::new(local_ip, 0).into())?;
        socket.connect(&server.into())?;
        Self::try_new(socket.into())
    }

    /// Address of the remote end.
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer
    }

    /// Writes all of `bytes` and flushes.
    pub fn send_exact(&mut self, bytes: &[u8]) -> KnnResult<()> {
        self.writer.write_all(bytes)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Reads exactly `n` bytes.
    ///
    /// A short read caused by an orderly peer close surfaces as
    /// [`KnnError::PeerClosed`](crate::KnnError::PeerClosed).
    pub fn receive_exact(&mut self, n: usize) -> KnnResult<Vec<u8>> {
        let mut buf = vec![0_u8; n];
        self.reader.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Single opportunistic read of at most `n` bytes.
    pub fn receive_up_to(&mut self, n: usize) -> KnnResult<Vec<u8>> {
        let mut buf = vec![0_u8; n];
        let count = self.reader.read(&mut buf)?;
        buf.truncate(count);
        Ok(buf)
    }

    pub fn is_alive(&self) -> bool {
        self.open
    }

    /// Idempotent; failures on an already closed socket are ignored.
    pub fn close(&mut self) {
        if self.open {
            self.open = false;
            let _ = self.writer.flush();
            let _ = self.reader.get_ref().shutdown(Shutdown::Both);
            trace!("Transport to {} closed", self.peer);
        }
    }
}

impl Read for Transport {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.reader.read(buf)
    }
}

impl Write for Transport {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

impl Drop for Transport {
    fn drop(&mut self) {
        self.close();
    }
}
