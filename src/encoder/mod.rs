
use std::io::{ErrorKind, Read};
use thiserror::Error;

/// Number of byte literals per output line unless configured otherwise
pub const DEFAULT_BLOCK_WIDTH: usize = 12;

const INDENT_UNIT: &str = "    ";

const READ_CHUNK: usize = 8 * 1024;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Malformed byte literal at token {index}: {token:?}")]
    MalformedLiteral { index: usize, token: String },
}

/// Turns a byte stream into comma-terminated `0x..` literals laid out in
/// fixed-width blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    block_width: usize,
    indent: usize,
}

impl Encoder {
    /// Create an encoder with the default block width and no indent
    pub fn new() -> Self {
        Self {
            block_width: DEFAULT_BLOCK_WIDTH,
            indent: 0,
        }
    }

    /// Set the number of literals per line (0 keeps everything on one line)
    pub fn block_width(mut self, width: usize) -> Self {
        self.block_width = width;
        self
    }

    /// Set the indent level written after each line break
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Encode everything `input` yields.
    ///
    /// The whole stream is consumed. Read errors are returned as-is and no
    /// partial text is handed back.
    pub fn encode<R: Read>(&self, mut input: R) -> std::io::Result<String> {
        let linebreak = format!("\n{}", INDENT_UNIT.repeat(self.indent));
        let mut out = String::new();
        let mut buf = [0u8; READ_CHUNK];
        let mut in_block = 0;

        loop {
            let n = match input.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            for byte in &buf[..n] {
                out.push_str("0x");
                out.push_str(&hex::encode([*byte]));
                out.push(',');
                in_block += 1;
                if self.block_width == 0 || in_block < self.block_width {
                    out.push(' ');
                    continue;
                }
                out.push_str(&linebreak);
                in_block = 0;
            }
        }

        Ok(out)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a stream with the given block width and indent level
pub fn encode<R: Read>(input: R, block_width: usize, indent: usize) -> std::io::Result<String> {
    Encoder::new()
        .block_width(block_width)
        .indent(indent)
        .encode(input)
}

/// Parse literal text produced by [`encode`] back into bytes
pub fn decode(literal: &str) -> Result<Vec<u8>, DecodeError> {
    let tokens = literal
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty());

    let mut bytes = Vec::new();
    for (index, token) in tokens.enumerate() {
        let malformed = || DecodeError::MalformedLiteral {
            index,
            token: token.to_string(),
        };

        let digits = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .filter(|d| d.len() == 2)
            .ok_or_else(malformed)?;
        let decoded = hex::decode(digits).map_err(|_| malformed())?;
        bytes.extend_from_slice(&decoded);
    }

    Ok(bytes)
}
