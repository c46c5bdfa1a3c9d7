use crate::{
    io::{next_stdin_token, trim_newline, IoEndpoint},
    KnnResult,
};
use std::{
    collections::VecDeque,
    fs::File,
    io::{BufRead, BufReader, Write},
};

/// Endpoint bound to the process terminal and local files; used by the
/// standalone binary.
///
/// A file that cannot be opened behaves like an empty one, the same way the
/// remote client treats bad paths, so both modes react identically to a
/// typo.
#[derive(Debug, Default)]
pub struct LocalIoEndpoint {
    input: Option<BufReader<File>>,
    output: Option<File>,
    pending_tokens: VecDeque<String>,
}

impl LocalIoEndpoint {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IoEndpoint for LocalIoEndpoint {
    fn display(&mut self, text: &str) -> KnnResult<()> {
        let mut stdout = std::io::stdout();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn prompt(&mut self) -> KnnResult<String> {
        next_stdin_token(&mut self.pending_tokens)
    }

    fn open_read(&mut self, path: &str) -> KnnResult<()> {
        self.input = match File::open(path) {
            Ok(file) => Some(BufReader::new(file)),
            Err(error) => {
                warn!("Cannot open {path} for reading: {error}");
                None
            }
        };
        Ok(())
    }

    fn read_line(&mut self) -> KnnResult<Option<String>> {
        match self.input.as_mut() {
            Some(input) => {
                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    Ok(None)
                } else {
                    Ok(Some(trim_newline(line)))
                }
            }
            None => Ok(None),
        }
    }

    fn close_read(&mut self) -> KnnResult<()> {
        self.input = None;
        Ok(())
    }

    fn open_write(&mut self, path: &str) -> KnnResult<()> {
        self.output = match File::create(path) {
            Ok(file) => Some(file),
            Err(error) => {
                warn!("Cannot open {path} for writing: {error}");
                None
            }
        };
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> KnnResult<()> {
        if let Some(output) = self.output.as_mut() {
            output.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    fn close_write(&mut self) -> KnnResult<()> {
        self.output = None;
        Ok(())
    }

    fn terminate(&mut self) -> KnnResult<()> {
        Ok(())
    }
}
