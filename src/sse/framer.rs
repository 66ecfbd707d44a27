//! Line framer: turns raw byte chunks into logical lines.
//!
//! Network chunks split lines at arbitrary byte offsets, so the framer keeps
//! the trailing partial line in a byte buffer until its terminator arrives.
//! Buffering bytes (not text) means a multi-byte UTF-8 character split at a
//! chunk boundary is reassembled intact; only complete lines are decoded.

/// Stateful framer that buffers a partial line across chunk boundaries.
#[derive(Debug, Default)]
pub struct LineFramer {
    buffer: Vec<u8>,
}

impl LineFramer {
    /// Create a new framer with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a raw chunk, returning every line completed by it.
    ///
    /// Both `\n` and `\r\n` terminate a line. Genuinely invalid UTF-8 in a
    /// complete line is replaced lossily rather than failing the stream.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let mut line: Vec<u8> = self.buffer.drain(..=pos).collect();
            line.pop();
            while line.last() == Some(&b'\r') {
                line.pop();
            }
            lines.push(String::from_utf8_lossy(&line).into_owned());
        }
        lines
    }

    /// Drain the final unterminated line at end of stream, if any.
    pub fn flush(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        let mut line = std::mem::take(&mut self.buffer);
        while line.last() == Some(&b'\r') {
            line.pop();
        }
        Some(String::from_utf8_lossy(&line).into_owned())
    }
}
