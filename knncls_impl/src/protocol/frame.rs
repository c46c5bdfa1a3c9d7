use crate::{
    protocol::{wire, FrameKind},
    KnnResult,
};

/// One tagged message of the remote-IO dialogue.
///
/// Within one session all frames are strictly ordered by issuance; every
/// request that expects a reply (`Prompt`, `ReadLine`) is answered by exactly
/// one matching reply frame before the server issues the next frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Display(String),
    Prompt,
    PromptReply(String),
    OpenRead(String),
    ReadLine,
    ReadReply(String),
    CloseRead,
    OpenWrite(String),
    WriteLine(String),
    CloseWrite,
    Terminate,
}

impl Frame {
    pub fn kind(&self) -> FrameKind {
        match self {
            Self::Display(_) => FrameKind::Display,
            Self::Prompt => FrameKind::Prompt,
            Self::PromptReply(_) => FrameKind::PromptReply,
            Self::OpenRead(_) => FrameKind::OpenRead,
            Self::ReadLine => FrameKind::ReadLine,
            Self::ReadReply(_) => FrameKind::ReadReply,
            Self::CloseRead => FrameKind::CloseRead,
            Self::OpenWrite(_) => FrameKind::OpenWrite,
            Self::WriteLine(_) => FrameKind::WriteLine,
            Self::CloseWrite => FrameKind::CloseWrite,
            Self::Terminate => FrameKind::Terminate,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn sync_emit(&self, w: &mut dyn std::io::Write) -> KnnResult<()> {
        wire::emit_u8(self.kind() as u8, w)?; // U1 tag
        match self {
            Self::Display(s)
            | Self::PromptReply(s)
            | Self::OpenRead(s)
            | Self::ReadReply(s)
            | Self::OpenWrite(s)
            | Self::WriteLine(s) => wire::emit_string(s, w)?, // U8 length + B
            Self::Prompt
            | Self::ReadLine
            | Self::CloseRead
            | Self::CloseWrite
            | Self::Terminate => {}
        }
        Ok(())
    }

    pub fn parse_sync(rdr: &mut dyn std::io::Read) -> KnnResult<Self> {
        let kind = FrameKind::from_u8(wire::parse_u8(rdr)?)?;
        Ok(match kind {
            FrameKind::Display => Self::Display(wire::parse_string(rdr)?),
            FrameKind::Prompt => Self::Prompt,
            FrameKind::PromptReply => Self::PromptReply(wire::parse_string(rdr)?),
            FrameKind::OpenRead => Self::OpenRead(wire::parse_string(rdr)?),
            FrameKind::ReadLine => Self::ReadLine,
            FrameKind::ReadReply => Self::ReadReply(wire::parse_string(rdr)?),
            FrameKind::CloseRead => Self::CloseRead,
            FrameKind::OpenWrite => Self::OpenWrite(wire::parse_string(rdr)?),
            FrameKind::WriteLine => Self::WriteLine(wire::parse_string(rdr)?),
            FrameKind::CloseWrite => Self::CloseWrite,
            FrameKind::Terminate => Self::Terminate,
        })
    }
}
