use crate::{KnnError, KnnResult};

// The closed set of frame tags of the remote-IO dialogue. One byte on the
// wire, ahead of the typed payload fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Display = 1,     // S->C  string: append to the client terminal verbatim
    Prompt = 2,      // S->C  request one whitespace-delimited stdin token
    PromptReply = 3, // C->S  string: reply to Prompt
    OpenRead = 4,    // S->C  string: open a client-side file for reading
    ReadLine = 5,    // S->C  request one line; "" signals EOF
    ReadReply = 6,   // C->S  string: reply to ReadLine
    CloseRead = 7,   // S->C  close the read file
    OpenWrite = 8,   // S->C  string: open a client-side file for writing
    WriteLine = 9,   // S->C  string: append verbatim to the write file
    CloseWrite = 10, // S->C  close the write file
    Terminate = 11,  // S->C  end of session
}

impl FrameKind {
    pub fn from_u8(val: u8) -> KnnResult<Self> {
        match val {
            1 => Ok(Self::Display),
            2 => Ok(Self::Prompt),
            3 => Ok(Self::PromptReply),
            4 => Ok(Self::OpenRead),
            5 => Ok(Self::ReadLine),
            6 => Ok(Self::ReadReply),
            7 => Ok(Self::CloseRead),
            8 => Ok(Self::OpenWrite),
            9 => Ok(Self::WriteLine),
            10 => Ok(Self::CloseWrite),
            11 => Ok(Self::Terminate),
            _ => Err(KnnError::Protocol(format!("unknown frame tag {val}"))),
        }
    }
}
