// Secure random byte sources

use std::io::Read;
use std::sync::{Arc, Mutex};

use crate::error::{RandomError, Result};

/// A cryptographically secure source of random bytes.
///
/// `read` must fill the whole buffer or fail; a source never reports success
/// after a partial write. Sources are shared by reference, so any mutable
/// state has to be synchronized internally.
pub trait RandomSource: Send + Sync {
    /// Fill `buf` entirely with random bytes
    fn read(&self, buf: &mut [u8],) -> Result<(),>;
}

impl<S: RandomSource + ?Sized,> RandomSource for &S {
    fn read(&self, buf: &mut [u8],) -> Result<(),> {
        (**self).read(buf,)
    }
}

impl<S: RandomSource + ?Sized,> RandomSource for Box<S,> {
    fn read(&self, buf: &mut [u8],) -> Result<(),> {
        (**self).read(buf,)
    }
}

impl<S: RandomSource + ?Sized,> RandomSource for Arc<S,> {
    fn read(&self, buf: &mut [u8],) -> Result<(),> {
        (**self).read(buf,)
    }
}

/// OS-based secure random source
#[cfg(feature = "os-rng")]
#[derive(Debug, Clone, Copy, Default,)]
pub struct OsRandomSource;

#[cfg(feature = "os-rng")]
impl OsRandomSource {
    pub fn new() -> Self {
        OsRandomSource
    }
}

#[cfg(feature = "os-rng")]
impl RandomSource for OsRandomSource {
    fn read(&self, buf: &mut [u8],) -> Result<(),> {
        use rand::rngs::OsRng;
        use rand::RngCore;

        let requested = buf.len();
        OsRng.try_fill_bytes(buf,).map_err(|e| RandomError::source_failure(requested, e.to_string(),),)
    }
}

/// Source backed by any byte reader, e.g. an opened `/dev/urandom`.
///
/// Reaching EOF before the buffer is full is reported as a failure.
#[derive(Debug,)]
pub struct ReaderSource<R,> {
    reader: Mutex<R,>,
}

impl<R: Read + Send,> ReaderSource<R,> {
    pub fn new(reader: R,) -> Self {
        ReaderSource { reader: Mutex::new(reader,), }
    }

    pub fn into_inner(self,) -> Result<R,> {
        self.reader.into_inner().map_err(|_| RandomError::source_failure(0, "reader lock poisoned",),)
    }
}

impl<R: Read + Send,> RandomSource for ReaderSource<R,> {
    fn read(&self, buf: &mut [u8],) -> Result<(),> {
        let requested = buf.len();
        let mut reader = self
            .reader
            .lock()
            .map_err(|_| RandomError::source_failure(requested, "reader lock poisoned",),)?;
        reader.read_exact(buf,).map_err(|e| RandomError::source_failure(requested, e.to_string(),),)
    }
}

/// Replays a fixed byte sequence, for deterministic tests.
///
/// A read that asks for more bytes than remain fails and consumes nothing.
#[derive(Debug,)]
pub struct FixedSource {
    state: Mutex<FixedState,>,
}

#[derive(Debug,)]
struct FixedState {
    bytes: Vec<u8,>,
    cursor: usize,
}

impl FixedSource {
    pub fn new(bytes: &[u8],) -> Self {
        FixedSource { state: Mutex::new(FixedState { bytes: bytes.to_vec(), cursor: 0, },), }
    }

    /// Bytes not yet handed out
    pub fn remaining(&self,) -> usize {
        match self.state.lock() {
            Ok(state,) => state.bytes.len() - state.cursor,
            Err(poisoned,) => {
                let state = poisoned.into_inner();
                state.bytes.len() - state.cursor
            },
        }
    }
}

impl RandomSource for FixedSource {
    fn read(&self, buf: &mut [u8],) -> Result<(),> {
        let requested = buf.len();
        let mut state =
            self.state.lock().map_err(|_| RandomError::source_failure(requested, "fixed source lock poisoned",),)?;

        let available = state.bytes.len() - state.cursor;
        if available < requested {
            return Err(RandomError::source_failure(
                requested,
                format!("short read: only {available} bytes left"),
            ),);
        }

        let start = state.cursor;
        buf.copy_from_slice(&state.bytes[start..start + requested],);
        state.cursor += requested;
        Ok((),)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_fixed_source_replays_in_order() {
        let source = FixedSource::new(&[1, 2, 3, 4, 5,],);
        let mut first = [0u8; 2];
        let mut second = [0u8; 3];
        source.read(&mut first,).unwrap();
        source.read(&mut second,).unwrap();
        assert_eq!(first, [1, 2]);
        assert_eq!(second, [3, 4, 5]);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_fixed_source_short_read_consumes_nothing() {
        let source = FixedSource::new(&[0xAA, 0xBB,],);
        let mut buf = [0u8; 4];
        let err = source.read(&mut buf,).unwrap_err();
        assert_eq!(err.requested(), 4);
        assert_eq!(buf, [0u8; 4], "buffer must stay untouched on failure");
        assert_eq!(source.remaining(), 2);

        let mut exact = [0u8; 2];
        source.read(&mut exact,).unwrap();
        assert_eq!(exact, [0xAA, 0xBB]);
    }

    #[test]
    fn test_reader_source_reads_exactly() {
        let source = ReaderSource::new(Cursor::new(vec![9u8, 8, 7, 6],),);
        let mut buf = [0u8; 3];
        source.read(&mut buf,).unwrap();
        assert_eq!(buf, [9, 8, 7]);
    }

    #[test]
    fn test_reader_source_eof_is_an_error() {
        let source = ReaderSource::new(Cursor::new(vec![1u8, 2],),);
        let mut buf = [0u8; 8];
        let err = source.read(&mut buf,).unwrap_err();
        assert!(matches!(err, RandomError::RandomSource { requested: 8, .. }));
    }

    #[cfg(feature = "os-rng")]
    #[test]
    fn test_os_source_fills_buffer() {
        let source = OsRandomSource::new();
        let mut buf = [0u8; 64];
        source.read(&mut buf,).unwrap();
        // 64 zero bytes from a working CSPRNG is not a realistic outcome
        assert_ne!(buf, [0u8; 64]);
    }

    #[test]
    fn test_shared_source_through_arc() {
        let source = Arc::new(FixedSource::new(&[1, 2, 3, 4,],),);
        let a = Arc::clone(&source,);
        let mut buf = [0u8; 2];
        a.read(&mut buf,).unwrap();
        source.read(&mut buf,).unwrap();
        assert_eq!(buf, [3, 4]);
        assert_eq!(source.remaining(), 0);
    }
}
