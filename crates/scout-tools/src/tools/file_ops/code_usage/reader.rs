//! File content access used by the aggregator

use async_trait::async_trait;
use std::io;
use std::path::Path;

/// Source of raw file bytes
///
/// The aggregator reads every file through this trait so that the host can
/// supply its own filesystem primitives.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SourceReader: Send + Sync {
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Reads files from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

#[async_trait]
impl SourceReader for FsReader {
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }
}

/// Decode bytes as text, rejecting content that looks binary
pub fn decode_text(bytes: Vec<u8>) -> Option<String> {
    if bytes.contains(&0) {
        return None;
    }
    String::from_utf8(bytes).ok()
}
