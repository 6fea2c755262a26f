//! Non-destructive request body access.
//!
//! Canonicalization needs the full body bytes for hashing, but the body still
//! has to be sent over the wire afterwards. Body access is therefore a scoped
//! acquisition: read everything, then restore the stream to its original read
//! position on every exit path.

use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;

use crate::Error;
use crate::Result;

/// The contract a request body must satisfy to participate in signing:
/// fully readable and restorable to its original position.
pub trait ReadSeekSend: Read + Seek + Send {}

impl<T: Read + Seek + Send> ReadSeekSend for T {}

/// Read the body to the end without consuming it.
///
/// The stream is rewound to the position it had before the call on every exit
/// path, including read failures, so that a subsequent network send (or a
/// second verification attempt) observes an unconsumed body. All failures are
/// reported as [`crate::ErrorKind::BodyRead`].
pub fn read_restored(body: &mut dyn ReadSeekSend) -> Result<Vec<u8>> {
    let mut guard = RestoreGuard::new(body)?;
    let buf = guard.read_to_end()?;
    guard.restore()?;

    Ok(buf)
}

/// Scoped body acquisition: rewinds the stream when dropped, unless it has
/// been released through [`RestoreGuard::restore`].
struct RestoreGuard<'a> {
    body: Option<&'a mut dyn ReadSeekSend>,
    pos: u64,
}

impl<'a> RestoreGuard<'a> {
    fn new(body: &'a mut dyn ReadSeekSend) -> Result<Self> {
        let pos = body.stream_position().map_err(|e| {
            Error::body_read("request body position is unavailable").with_source(e)
        })?;

        Ok(Self {
            body: Some(body),
            pos,
        })
    }

    fn read_to_end(&mut self) -> Result<Vec<u8>> {
        let body = self.body.as_mut().expect("guard already released");

        let mut buf = Vec::new();
        body.read_to_end(&mut buf)
            .map_err(|e| Error::body_read("failed to read request body").with_source(e))?;

        Ok(buf)
    }

    fn restore(mut self) -> Result<()> {
        let body = self.body.take().expect("guard already released");
        body.seek(SeekFrom::Start(self.pos))
            .map_err(|e| Error::body_read("failed to rewind request body").with_source(e))?;

        Ok(())
    }
}

impl Drop for RestoreGuard<'_> {
    fn drop(&mut self) {
        if let Some(body) = self.body.take() {
            // Unwinding from a failed read: rewind is best effort here, the
            // read error is already on its way to the caller.
            let _ = body.seek(SeekFrom::Start(self.pos));
        }
    }
}
