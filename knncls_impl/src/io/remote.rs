use crate::{
    conn::Transport,
    io::IoEndpoint,
    protocol::{Frame, FrameKind},
    KnnError, KnnResult,
};
use std::{io::Write, net::SocketAddr};

/// The server-side endpoint of the framed dialogue.
///
/// Every operation emits one frame; where the dialogue expects a reply,
/// exactly one frame is read back and its tag is checked.
#[derive(Debug)]
pub struct RemoteIoEndpoint {
    transport: Transport,
}

impl RemoteIoEndpoint {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub fn peer_addr(&self) -> SocketAddr {
        self.transport.peer_addr()
    }

    pub fn close(&mut self) {
        self.transport.close();
    }

    fn send(&mut self, frame: &Frame) -> KnnResult<()> {
        trace!("S->C {:?}", frame.kind());
        frame.sync_emit(&mut self.transport)?;
        self.transport.flush()?;
        Ok(())
    }

    fn expect_reply(&mut self, expected: FrameKind) -> KnnResult<String> {
        let frame = Frame::parse_sync(&mut self.transport)?;
        trace!("C->S {:?}", frame.kind());
        match frame {
            Frame::PromptReply(s) if expected == FrameKind::PromptReply => Ok(s),
            Frame::ReadReply(s) if expected == FrameKind::ReadReply => Ok(s),
            other => Err(KnnError::Protocol(format!(
                "expected {expected:?}, got {:?}",
                other.kind()
            ))),
        }
    }
}

impl IoEndpoint for RemoteIoEndpoint {
    fn display(&mut self, text: &str) -> KnnResult<()> {
        self.send(&Frame::Display(text.to_string()))
    }

    fn prompt(&mut self) -> KnnResult<String> {
        self.send(&Frame::Prompt)?;
        self.expect_reply(FrameKind::PromptReply)
    }

    fn open_read(&mut self, path: &str) -> KnnResult<()> {
        self.send(&Frame::OpenRead(path.to_string()))
    }

    fn read_line(&mut self) -> KnnResult<Option<String>> {
        self.send(&Frame::ReadLine)?;
        let line = self.expect_reply(FrameKind::ReadReply)?;
        // the empty reply is the EOF signal
        Ok(if line.is_empty() { None } else { Some(line) })
    }

    fn close_read(&mut self) -> KnnResult<()> {
        self.send(&Frame::CloseRead)
    }

    fn open_write(&mut self, path: &str) -> KnnResult<()> {
        self.send(&Frame::OpenWrite(path.to_string()))
    }

    fn write_line(&mut self, line: &str) -> KnnResult<()> {
        self.send(&Frame::WriteLine(line.to_string()))
    }

    fn close_write(&mut self) -> KnnResult<()> {
        self.send(&Frame::CloseWrite)
    }

    fn terminate(&mut self) -> KnnResult<()> {
        self.send(&Frame::Terminate)
    }
}
