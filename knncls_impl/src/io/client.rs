//! The client-side half of the framed dialogue.
//!
//! A small dispatcher reads tagged frames from the server and executes each
//! one against the local terminal and filesystem, until the server
//! terminates the session or closes the connection.

use crate::{
    conn::Transport,
    io::{next_stdin_token, trim_newline},
    protocol::Frame,
    KnnError, KnnResult,
};
use std::{
    collections::VecDeque,
    fs::File,
    io::{BufRead, BufReader, Write},
};

/// Serves the server's requests until `Terminate` or peer close.
pub fn serve(transport: &mut Transport) -> KnnResult<()> {
    let mut input: Option<BufReader<File>> = None;
    let mut output: Option<File> = None;
    let mut pending_tokens = VecDeque::new();

    loop {
        let frame = match Frame::parse_sync(transport) {
            Ok(frame) => frame,
            Err(KnnError::PeerClosed) => {
                debug!("Server closed the connection");
                return Ok(());
            }
            Err(error) => return Err(error),
        };
        trace!("S->C {:?}", frame.kind());

        match frame {
            Frame::Display(text) => {
                let mut stdout = std::io::stdout();
                stdout.write_all(text.as_bytes())?;
                stdout.flush()?;
            }
            Frame::Prompt => {
                let token = next_stdin_token(&mut pending_tokens)?;
                reply(transport, &Frame::PromptReply(token))?;
            }
            Frame::OpenRead(path) => {
                // A bad path degrades to an empty file so the dialogue
                // cannot deadlock; the server sees plain EOF.
                input = match File::open(&path) {
                    Ok(file) => Some(BufReader::new(file)),
                    Err(error) => {
                        warn!("Cannot open {path} for reading: {error}");
                        None
                    }
                };
            }
            Frame::ReadLine => {
                let line = next_file_line(input.as_mut())?;
                reply(transport, &Frame::ReadReply(line))?;
            }
            Frame::CloseRead => input = None,
            Frame::OpenWrite(path) => {
                output = match File::create(&path) {
                    Ok(file) => Some(file),
                    Err(error) => {
                        warn!("Cannot open {path} for writing: {error}");
                        None
                    }
                };
            }
            Frame::WriteLine(line) => {
                if let Some(file) = output.as_mut() {
                    file.write_all(line.as_bytes())?;
                }
            }
            Frame::CloseWrite => output = None,
            Frame::Terminate => {
                debug!("Session terminated by the server");
                transport.close();
                return Ok(());
            }
            Frame::PromptReply(_) | Frame::ReadReply(_) => {
                return Err(KnnError::Protocol(format!(
                    "reply frame {:?} from the server",
                    frame.kind()
                )));
            }
        }
    }
}

fn reply(transport: &mut Transport, frame: &Frame) -> KnnResult<()> {
    frame.sync_emit(transport)?;
    transport.flush()?;
    Ok(())
}

// The empty string is the EOF signal of the dialogue.
fn next_file_line(input: Option<&mut BufReader<File>>) -> KnnResult<String> {
    match input {
        Some(rdr) => {
            let mut line = String::new();
            if rdr.read_line(&mut line)? == 0 {
                Ok(String::new())
            } else {
                Ok(trim_newline(line))
            }
        }
        None => Ok(String::new()),
    }
}
