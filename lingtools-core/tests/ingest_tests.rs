//! Stream ingestion against misbehaving readers

use lingtools_core::ingest::{read_stream, reader_to_string, stream_to_string, DecodingReader};
use lingtools_core::ErrorKind;
use std::io::{self, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Hands out at most `step` bytes per read
struct TrickleReader {
    data: Vec<u8>,
    pos: usize,
    step: usize,
}

impl TrickleReader {
    fn new(data: &[u8], step: usize) -> Self {
        Self {
            data: data.to_vec(),
            pos: 0,
            step,
        }
    }
}

impl Read for TrickleReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.step.min(buf.len()).min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// Fails with `kind` once `fail_at` bytes have been delivered, and records being dropped
struct FailingReader {
    inner: TrickleReader,
    fail_at: usize,
    kind: io::ErrorKind,
    failures_left: usize,
    dropped: Arc<AtomicBool>,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.inner.pos >= self.fail_at && self.failures_left > 0 {
            self.failures_left -= 1;
            return Err(io::Error::new(self.kind, "device unplugged"));
        }
        self.inner.read(buf)
    }
}

impl Drop for FailingReader {
    fn drop(&mut self) {
        self.dropped.store(true, Ordering::SeqCst);
    }
}

fn failing(data: &[u8], fail_at: usize, kind: io::ErrorKind, failures: usize) -> (FailingReader, Arc<AtomicBool>) {
    let dropped = Arc::new(AtomicBool::new(false));
    let reader = FailingReader {
        inner: TrickleReader::new(data, 3),
        fail_at,
        kind,
        failures_left: failures,
        dropped: Arc::clone(&dropped),
    };
    (reader, dropped)
}

#[test]
fn test_short_reads_do_not_end_input() {
    let text = "Grüße aus Köln — 日本語のテキスト 😀\n".repeat(300);
    for step in [1, 2, 3, 7, 4000, 5000] {
        let reader = TrickleReader::new(text.as_bytes(), step);
        assert_eq!(reader_to_string(reader).unwrap(), text, "step {step}");
    }
}

#[test]
fn test_read_stream_with_trickling_multibyte_input() {
    let reader = TrickleReader::new("ä\r\nö\rü".as_bytes(), 1);
    assert_eq!(read_stream(reader, Some("UTF-8")).unwrap(), "ä\nö\nü\n");
}

#[test]
fn test_io_failure_propagates_and_releases_source() {
    let (reader, dropped) = failing(b"line one\nline two\n", 6, io::ErrorKind::ConnectionReset, 1);
    let err = read_stream(reader, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(err.to_string().contains("device unplugged"));
    assert!(dropped.load(Ordering::SeqCst));
}

#[test]
fn test_source_released_on_success() {
    let (reader, dropped) = failing(b"abc", usize::MAX, io::ErrorKind::Other, 0);
    assert_eq!(read_stream(reader, None).unwrap(), "abc\n");
    assert!(dropped.load(Ordering::SeqCst));
}

#[test]
fn test_interrupted_reads_are_retried() {
    let (reader, _) = failing(b"a\nb", 0, io::ErrorKind::Interrupted, 2);
    assert_eq!(read_stream(reader, None).unwrap(), "a\nb\n");

    let (reader, _) = failing(b"xyz", 1, io::ErrorKind::Interrupted, 3);
    assert_eq!(reader_to_string(reader).unwrap(), "xyz");
}

#[test]
fn test_unsupported_encoding_releases_source() {
    let (reader, dropped) = failing(b"abc", usize::MAX, io::ErrorKind::Other, 0);
    let err = read_stream(reader, Some("ebcdic-klingon")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedEncoding);
    assert!(dropped.load(Ordering::SeqCst));
}

#[test]
fn test_legacy_encodings() {
    // "テスト" in Shift_JIS
    let sjis = [0x83, 0x65, 0x83, 0x58, 0x83, 0x67];
    assert_eq!(read_stream(&sjis[..], Some("shift_jis")).unwrap(), "テスト\n");

    // "Ωx" in UTF-16LE
    let utf16 = [0xA9, 0x03, b'x', 0x00];
    assert_eq!(stream_to_string(&utf16[..], Some("utf-16le")).unwrap(), "Ωx");

    assert_eq!(read_stream(&b"\x80"[..], Some("windows-1252")).unwrap(), "€\n");
}

#[test]
fn test_malformed_utf8_is_replaced() {
    assert_eq!(read_stream(&b"a\xffb"[..], None).unwrap(), "a\u{FFFD}b\n");
    assert_eq!(reader_to_string(&b"\xe3\x81"[..]).unwrap(), "\u{FFFD}");
}

#[test]
fn test_decoding_reader_is_a_plain_reader() {
    let mut reader = DecodingReader::new(&b"caf\xe9 cr\xe8me"[..], Some("latin1")).unwrap();
    let mut out = String::new();
    reader.read_to_string(&mut out).unwrap();
    assert_eq!(out, "café crème");
}
