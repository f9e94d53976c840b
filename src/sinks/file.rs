//! File sink implementation

use crate::core::{LogRecord, LoggerError, RecordFormatter, Result, SinkBackend};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct FileSink {
    writer: Option<BufWriter<File>>,
    path: PathBuf,
}

impl FileSink {
    /// Open `path` for appending, creating it if needed
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}' for append", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SinkBackend for FileSink {
    fn sink_record(&mut self, record: &LogRecord, formatter: &RecordFormatter) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::sink("file", "writer not initialized"))?;

        let mut line = formatter.format(record);
        line.push('\n');
        writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = SinkBackend::flush(self);
    }
}
