//! Decoding byte streams into text
//!
//! Encodings are resolved from WHATWG labels (`utf-8`, `latin1`,
//! `shift_jis`, ...). Without a label the stream is read as UTF-8. Byte order
//! marks are not sniffed and malformed sequences decode to U+FFFD.

use crate::error::{Result, TextError};
use encoding_rs::{CoderResult, Decoder, Encoding, UTF_8};
use std::io::{self, BufRead, BufReader, Read};
use tracing::debug;

/// Size of the intermediate buffer used when draining a reader
pub const READ_BUFFER_SIZE: usize = 4000;

/// Resolve an encoding label, falling back to UTF-8 when absent
pub fn resolve_encoding(label: Option<&str>) -> Result<&'static Encoding> {
    match label {
        None => Ok(UTF_8),
        Some(label) => {
            Encoding::for_label(label.as_bytes()).ok_or_else(|| TextError::UnsupportedEncoding {
                label: label.to_string(),
            })
        }
    }
}

/// A [`Read`] adapter that decodes `inner` and yields UTF-8 bytes
pub struct DecodingReader<R> {
    inner: R,
    decoder: Decoder,
    raw: Box<[u8]>,
    /// Decoded text not yet handed out
    pending: String,
    pending_pos: usize,
    finished: bool,
}

impl<R: Read> DecodingReader<R> {
    /// Wrap `inner`, decoding with the encoding named by `label` (UTF-8 if `None`)
    pub fn new(inner: R, label: Option<&str>) -> Result<Self> {
        let encoding = resolve_encoding(label)?;
        Ok(Self::with_encoding(inner, encoding))
    }

    /// Wrap `inner`, decoding with an already resolved encoding
    pub fn with_encoding(inner: R, encoding: &'static Encoding) -> Self {
        Self {
            inner,
            decoder: encoding.new_decoder_without_bom_handling(),
            raw: vec![0u8; READ_BUFFER_SIZE].into_boxed_slice(),
            pending: String::new(),
            pending_pos: 0,
            finished: false,
        }
    }

    /// The encoding this reader decodes from
    pub fn encoding(&self) -> &'static Encoding {
        self.decoder.encoding()
    }

    /// Consume the adapter and return the wrapped reader
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn refill(&mut self) -> io::Result<()> {
        self.pending.clear();
        self.pending_pos = 0;
        let read = read_retrying(&mut self.inner, &mut self.raw)?;
        let last = read == 0;
        decode_chunk(&mut self.decoder, &self.raw[..read], &mut self.pending, last)?;
        self.finished = last;
        Ok(())
    }
}

impl<R: Read> Read for DecodingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        while self.pending_pos == self.pending.len() {
            if self.finished {
                return Ok(0);
            }
            self.refill()?;
        }
        let available = &self.pending.as_bytes()[self.pending_pos..];
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.pending_pos += n;
        Ok(n)
    }
}

/// Read a single chunk, retrying reads interrupted by signals
fn read_retrying<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match reader.read(buf) {
            Ok(n) => return Ok(n),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

fn decode_chunk(decoder: &mut Decoder, bytes: &[u8], out: &mut String, last: bool) -> io::Result<()> {
    let needed = decoder.max_utf8_buffer_length(bytes.len()).ok_or_else(|| {
        io::Error::new(io::ErrorKind::OutOfMemory, "decoded chunk exceeds addressable size")
    })?;
    out.reserve(needed);
    let (result, _read, _replaced) = decoder.decode_to_string(bytes, out, last);
    debug_assert!(matches!(result, CoderResult::InputEmpty));
    Ok(())
}

/// Split one `read_line` chunk into line contents.
///
/// A chunk ends with `\n` (or is the unterminated tail); `\r\n` and a lone
/// `\r` also end a line.
fn line_contents(chunk: &str) -> std::str::Split<'_, char> {
    let body = chunk.strip_suffix('\n').unwrap_or(chunk);
    let body = body.strip_suffix('\r').unwrap_or(body);
    body.split('\r')
}

/// Decode `stream` and return its lines, each followed by `\n`.
///
/// `\n`, `\r\n` and `\r` all end a line. The last line gets a `\n` even when
/// the stream does not end with a line terminator, so `"a\nb"` reads as
/// `"a\nb\n"`.
pub fn read_stream<R: Read>(stream: R, encoding: Option<&str>) -> Result<String> {
    let decoding = DecodingReader::new(stream, encoding)?;
    let label = decoding.encoding().name();
    let mut reader = BufReader::new(decoding);

    let mut text = String::new();
    let mut chunk = String::new();
    let mut lines = 0usize;
    loop {
        chunk.clear();
        if reader.read_line(&mut chunk)? == 0 {
            break;
        }
        for line in line_contents(&chunk) {
            text.push_str(line);
            text.push('\n');
            lines += 1;
        }
    }

    debug!(encoding = label, lines, bytes = text.len(), "read text stream");
    Ok(text)
}

/// Drain a UTF-8 reader into a string.
///
/// Reads in chunks of [`READ_BUFFER_SIZE`] bytes until a read returns zero;
/// short reads are not taken as end of input. Multi-byte sequences split
/// across reads decode correctly.
pub fn reader_to_string<R: Read>(mut reader: R) -> Result<String> {
    let mut buf = [0u8; READ_BUFFER_SIZE];
    let mut decoder = UTF_8.new_decoder_without_bom_handling();
    let mut text = String::new();
    loop {
        let read = read_retrying(&mut reader, &mut buf)?;
        let last = read == 0;
        decode_chunk(&mut decoder, &buf[..read], &mut text, last)?;
        if last {
            break;
        }
    }
    Ok(text)
}

/// Decode `stream` with the named encoding and return the text verbatim,
/// line terminators included.
pub fn stream_to_string<R: Read>(stream: R, encoding: Option<&str>) -> Result<String> {
    reader_to_string(DecodingReader::new(stream, encoding)?)
}
