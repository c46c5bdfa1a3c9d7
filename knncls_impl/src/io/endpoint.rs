use crate::KnnResult;

/// What a session needs from its user-facing side.
///
/// The remote implementation talks the framed dialogue to a connected
/// client; the local one binds directly to the process terminal and local
/// files. The session machine is oblivious to the difference.
///
/// At most one read file and one write file are open at a time; opening a
/// new one implicitly replaces the previous.
pub trait IoEndpoint {
    /// Appends `text` to the user's terminal verbatim.
    fn display(&mut self, text: &str) -> KnnResult<()>;

    /// One whitespace-delimited token from the user.
    fn prompt(&mut self) -> KnnResult<String>;

    fn open_read(&mut self, path: &str) -> KnnResult<()>;

    /// The next line of the open read file, without its newline;
    /// `None` at end of file.
    fn read_line(&mut self) -> KnnResult<Option<String>>;

    fn close_read(&mut self) -> KnnResult<()>;

    fn open_write(&mut self, path: &str) -> KnnResult<()>;

    /// Appends `line` to the open write file verbatim.
    fn write_line(&mut self, line: &str) -> KnnResult<()>;

    fn close_write(&mut self) -> KnnResult<()>;

    /// Announces the end of the session.
    fn terminate(&mut self) -> KnnResult<()>;
}
