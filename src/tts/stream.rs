//! TTS Stream module and file sink

use bytes::Bytes;
use futures_util::{Stream, StreamExt};
#[cfg(feature = "blocking")]
use std::io::Read;
use std::{
    io::Write,
    path::Path,
    pin::Pin,
    task::{Context, Poll},
};
use tokio::io::AsyncWriteExt;

use crate::error::Result;

#[cfg(feature = "blocking")]
const CHUNK_SIZE: usize = 8192;

/// Sync audio chunk stream over a synthesis response body
#[cfg(feature = "blocking")]
pub struct AudioStream {
    response: reqwest::blocking::Response,
    exhausted: bool,
}

#[cfg(feature = "blocking")]
impl AudioStream {
    pub(super) fn new(response: reqwest::blocking::Response) -> Self {
        Self {
            response,
            exhausted: false,
        }
    }

    /// Read the next audio chunk synchronously. `None` means the stream is
    /// exhausted and will not yield data again.
    pub fn read(&mut self) -> Result<Option<Bytes>> {
        if self.exhausted {
            return Ok(None);
        }

        let mut buf = [0u8; CHUNK_SIZE];
        let n = self.response.read(&mut buf)?;
        if n == 0 {
            self.exhausted = true;
            return Ok(None);
        }

        Ok(Some(Bytes::copy_from_slice(&buf[..n])))
    }
}

#[cfg(feature = "blocking")]
impl Iterator for AudioStream {
    type Item = Result<Bytes>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read().transpose()
    }
}

/// Async audio chunk stream over a synthesis response body
pub struct AudioStreamAsync {
    inner: Pin<Box<dyn Stream<Item = reqwest::Result<Bytes>> + Send>>,
}

impl AudioStreamAsync {
    pub(super) fn new(response: reqwest::Response) -> Self {
        Self {
            inner: Box::pin(response.bytes_stream()),
        }
    }

    /// Read the next audio chunk asynchronously. `None` means the stream is
    /// exhausted and will not yield data again.
    pub async fn read(&mut self) -> Result<Option<Bytes>> {
        match self.inner.next().await {
            Some(chunk) => Ok(Some(chunk?)),
            None => Ok(None),
        }
    }
}

impl Stream for AudioStreamAsync {
    type Item = Result<Bytes>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut()
            .inner
            .poll_next_unpin(cx)
            .map(|item| item.map(|chunk| chunk.map_err(Into::into)))
    }
}

/// Write every chunk of `chunks` to the file at `path`, in receipt order.
///
/// The target file is created, or truncated when it already exists. The file
/// handle is scoped to this call and is closed on the error path as well. A
/// chunk error aborts the write, leaving the chunks received so far on disk.
/// Returns the number of bytes written.
pub fn save_to_file<I>(chunks: I, path: impl AsRef<Path>) -> Result<u64>
where
    I: IntoIterator<Item = Result<Bytes>>,
{
    let mut file = std::fs::File::create(path)?;
    let mut written = 0u64;
    for chunk in chunks {
        let chunk = chunk?;
        file.write_all(&chunk)?;
        written += chunk.len() as u64;
    }
    file.flush()?;
    Ok(written)
}

/// Async version of [save_to_file]: drain `stream` into the file at `path`.
pub async fn save_stream_to_file<S>(mut stream: S, path: impl AsRef<Path>) -> Result<u64>
where
    S: Stream<Item = Result<Bytes>> + Unpin,
{
    let mut file = tokio::fs::File::create(path).await?;
    let mut written = 0u64;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("elevenlabs-tts-{}-{}", std::process::id(), name))
    }

    fn ok_chunks(chunks: &[&[u8]]) -> Vec<Result<Bytes>> {
        chunks
            .iter()
            .map(|chunk| Ok(Bytes::copy_from_slice(chunk)))
            .collect()
    }

    #[test]
    fn chunks_are_written_in_receipt_order() {
        let path = temp_path("ordered");
        let written =
            save_to_file(ok_chunks(&[b"ID3", b"\x00\x01", b"tail"]), &path).unwrap();

        assert_eq!(written, 9);
        assert_eq!(std::fs::read(&path).unwrap(), b"ID3\x00\x01tail");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn producer_error_keeps_already_received_chunks() {
        let path = temp_path("partial");
        let chunks = vec![
            Ok(Bytes::from_static(b"first")),
            Ok(Bytes::from_static(b"second")),
            Err(Error::IoError(std::io::Error::other("connection reset"))),
            Ok(Bytes::from_static(b"never written")),
        ];

        let result = save_to_file(chunks, &path);

        assert!(result.is_err());
        assert_eq!(std::fs::read(&path).unwrap(), b"firstsecond");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn second_run_replaces_the_previous_artifact() {
        let path = temp_path("replace");
        save_to_file(ok_chunks(&[b"a much longer first artifact"]), &path).unwrap();
        save_to_file(ok_chunks(&[b"short"]), &path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"short");
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn async_sink_concatenates_stream_chunks() {
        let path = temp_path("async-ordered");
        let stream = futures_util::stream::iter(ok_chunks(&[b"one", b"two", b"three"]));

        let written = save_stream_to_file(stream, &path).await.unwrap();

        assert_eq!(written, 11);
        assert_eq!(std::fs::read(&path).unwrap(), b"onetwothree");
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn async_sink_stops_at_first_stream_error() {
        let path = temp_path("async-partial");
        let stream = futures_util::stream::iter(vec![
            Ok(Bytes::from_static(b"kept")),
            Err(Error::IoError(std::io::Error::other("mid-stream failure"))),
        ]);

        let result = save_stream_to_file(stream, &path).await;

        assert!(result.is_err());
        assert_eq!(std::fs::read(&path).unwrap(), b"kept");
        let _ = std::fs::remove_file(&path);
    }
}
