pub mod client;
mod endpoint;
mod local;
mod remote;

pub use endpoint::IoEndpoint;
pub use local::LocalIoEndpoint;
pub use remote::RemoteIoEndpoint;

use crate::KnnResult;
use std::collections::VecDeque;

// One whitespace-delimited token from stdin; the rest of the line is kept
// for later calls. Stdin EOF ends the session.
pub(crate) fn next_stdin_token(pending: &mut VecDeque<String>) -> KnnResult<String> {
    loop {
        if let Some(token) = pending.pop_front() {
            return Ok(token);
        }
        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            return Err(crate::KnnError::PeerClosed);
        }
        pending.extend(line.split_whitespace().map(String::from));
    }
}

// Strips one trailing newline, CRLF included.
pub(crate) fn trim_newline(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
