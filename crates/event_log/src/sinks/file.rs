//! LcmLogSink - writes events into an LCM-style log container
//!
//! Container layout, big-endian, one frame per event:
//!
//! | field         | type | notes                          |
//! |---------------|------|--------------------------------|
//! | sync word     | u32  | `0xEDA1DA01`                   |
//! | event number  | u64  | sequential from 0              |
//! | utime         | i64  | absolute microseconds          |
//! | channel len   | u32  | bytes of the channel name      |
//! | payload len   | u32  | bytes of the encoded payload   |
//! | channel name  | [u8] | e.g. `ground_truth`            |
//! | payload       | [u8] | codec output                   |
//!
//! Append-only and not transactional: a failed write leaves a log that must
//! be treated as incomplete.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use contracts::{ConvertError, EventSink, LogEvent};
use tracing::{debug, error, instrument};

const SYNC_WORD: u32 = 0xEDA1_DA01;

/// Sink that writes the on-disk event-log container.
pub struct LcmLogSink {
    name: String,
    path: PathBuf,
    writer: BufWriter<File>,
    next_event_number: u64,
    bytes_written: u64,
}

impl LcmLogSink {
    /// Create the log file. With `overwrite` false, an existing file is an
    /// error rather than a silent truncation.
    pub fn create(path: &Path, overwrite: bool) -> Result<Self, ConvertError> {
        let mut options = OpenOptions::new();
        options.write(true);
        if overwrite {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }
        let file = options.open(path)?;

        Ok(Self {
            name: "lcm_log".to_string(),
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            next_event_number: 0,
            bytes_written: 0,
        })
    }

    /// Log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_frame(&mut self, event: &LogEvent) -> std::io::Result<()> {
        let channel = event.channel.as_str().as_bytes();

        self.writer.write_all(&SYNC_WORD.to_be_bytes())?;
        self.writer.write_all(&self.next_event_number.to_be_bytes())?;
        self.writer.write_all(&event.utime.to_be_bytes())?;
        self.writer.write_all(&(channel.len() as u32).to_be_bytes())?;
        self.writer.write_all(&(event.payload.len() as u32).to_be_bytes())?;
        self.writer.write_all(channel)?;
        self.writer.write_all(&event.payload)?;

        self.next_event_number += 1;
        self.bytes_written += (28 + channel.len() + event.payload.len()) as u64;
        Ok(())
    }
}

impl EventSink for LcmLogSink {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(
        name = "lcm_log_append",
        skip(self, event),
        fields(sink = %self.name, channel = %event.channel, utime = event.utime)
    )]
    async fn append(&mut self, event: LogEvent) -> Result<(), ConvertError> {
        self.write_frame(&event).map_err(|e| {
            error!(sink = %self.name, path = %self.path.display(), error = %e, "append failed");
            ConvertError::sink_write(&self.name, e.to_string())
        })?;
        metrics::counter!("event_log_bytes_written")
            .increment(28 + event.channel.as_str().len() as u64 + event.payload.len() as u64);
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), ConvertError> {
        self.writer
            .flush()
            .map_err(|e| ConvertError::sink_write(&self.name, e.to_string()))
    }

    async fn close(&mut self) -> Result<(), ConvertError> {
        self.writer
            .flush()
            .map_err(|e| ConvertError::sink_write(&self.name, e.to_string()))?;
        debug!(
            sink = %self.name,
            path = %self.path.display(),
            events = self.next_event_number,
            bytes = self.bytes_written,
            "log closed"
        );
        Ok(())
    }
}

/// One event read back from a log file.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedEvent {
    pub event_number: u64,
    pub utime: i64,
    pub channel: String,
    pub payload: Vec<u8>,
}

/// Read an entire log container back (verification tooling and tests).
///
/// # Errors
/// `RecordingParse` on a broken sync word or truncated frame.
pub fn read_log(path: &Path) -> Result<Vec<LoggedEvent>, ConvertError> {
    let mut data = Vec::new();
    File::open(path)?.read_to_end(&mut data)?;

    let mut events = Vec::new();
    let mut offset = 0usize;
    while offset < data.len() {
        let header = data
            .get(offset..offset + 28)
            .ok_or_else(|| ConvertError::recording_parse("truncated event header"))?;
        let sync = u32::from_be_bytes(header[0..4].try_into().unwrap());
        if sync != SYNC_WORD {
            return Err(ConvertError::recording_parse(format!(
                "bad sync word {sync:#010x} at offset {offset}"
            )));
        }
        let event_number = u64::from_be_bytes(header[4..12].try_into().unwrap());
        let utime = i64::from_be_bytes(header[12..20].try_into().unwrap());
        let channel_len = u32::from_be_bytes(header[20..24].try_into().unwrap()) as usize;
        let payload_len = u32::from_be_bytes(header[24..28].try_into().unwrap()) as usize;
        offset += 28;

        let body = data
            .get(offset..offset + channel_len + payload_len)
            .ok_or_else(|| ConvertError::recording_parse("truncated event body"))?;
        let channel = String::from_utf8(body[..channel_len].to_vec())
            .map_err(|e| ConvertError::recording_parse(format!("channel name: {e}")))?;
        events.push(LoggedEvent {
            event_number,
            utime,
            channel,
            payload: body[channel_len..].to_vec(),
        });
        offset += channel_len + payload_len;
    }

    Ok(events)
}
