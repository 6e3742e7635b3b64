//! Bundle archive assembly.
//!
//! Thin wrapper around `zip::ZipWriter` writing to an in-memory cursor. The
//! exporter adds every bundle entry through this type and takes the finished
//! zip bytes at the end; any zip failure here is fatal to the export.

use std::io::{Cursor, Write};
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

pub struct BundleWriter {
    zip: ZipWriter<Cursor<Vec<u8>>>,
}

impl BundleWriter {
    pub fn new() -> Self {
        BundleWriter {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    fn options() -> SimpleFileOptions {
        SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
    }

    pub fn add_file(&mut self, path: &str, content: &[u8]) -> zip::result::ZipResult<()> {
        self.zip.start_file(path, Self::options())?;
        self.zip.write_all(content)?;
        Ok(())
    }

    /// Writes an explicit directory entry, so the folder exists in the
    /// archive even when it holds no files.
    pub fn add_directory(&mut self, path: &str) -> zip::result::ZipResult<()> {
        self.zip.add_directory(path, Self::options())
    }

    pub fn finish(self) -> zip::result::ZipResult<Vec<u8>> {
        Ok(self.zip.finish()?.into_inner())
    }
}
