use std::io;

/// Interactive console input.
pub trait Prompt {
    /// Shows `message` and reads a single line without its line break.
    ///
    /// Implementations must fail with [`io::ErrorKind::UnexpectedEof`]
    /// when no more input is available.
    fn read_line(&self, message: &str) -> io::Result<String>;

    /// Waits until the user confirms `message`.
    fn acknowledge(&self, message: &str) -> io::Result<()> {
        self.read_line(message).map(|_| ())
    }
}
