//! Debug log utility
//!
//! Console output is verbatim, one line per message line. The optional file
//! sink prefixes each line with elapsed seconds since the log was opened.

use crate::{Error, Result};
use chrono::{Local, Utc};
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::{Arc, Mutex};
use std::time::Instant;

#[derive(Clone)]
pub struct Log {
    inner: Arc<LogInner>,
}

struct LogInner {
    state: Mutex<LogState>,
    start: Instant,
    output_to_console: bool,
}

struct LogState {
    writer: Option<BufWriter<File>>,
    last_seconds: f32,
}

impl Log {
    /// Console-only log, no file sink
    pub fn console() -> Self {
        Self {
            inner: Arc::new(LogInner {
                state: Mutex::new(LogState {
                    writer: None,
                    last_seconds: 0.0,
                }),
                start: Instant::now(),
                output_to_console: true,
            }),
        }
    }

    /// Log backed by a file, optionally echoing to the console
    pub fn to_file(path: &str, output_to_console: bool) -> Result<Self> {
        let file = File::create(path)
            .map_err(|e| Error::FileSave(format!("Unable to create file {}: {}", path, e)))?;

        let log = Self {
            inner: Arc::new(LogInner {
                state: Mutex::new(LogState {
                    writer: Some(BufWriter::new(file)),
                    last_seconds: 0.0,
                }),
                start: Instant::now(),
                output_to_console,
            }),
        };

        log.log(format!("Opened {}", path))?;
        log.log("\n----------------------------------------\n")?;
        log.log_time()?;
        log.log(format!("Operating System      {}", env::consts::OS))?;
        log.log(format!("Architecture:         {}", env::consts::ARCH))?;
        log.log("\n----------------------------------------\n")?;

        Ok(log)
    }

    pub fn log(&self, message: impl AsRef<str>) -> Result<()> {
        self.inner.log_lines(message.as_ref())
    }

    pub fn log_time(&self) -> Result<()> {
        let utc = Utc::now();
        let local = Local::now();
        self.log(format!(
            "Current time (UTC): {}",
            utc.format("%Y-%m-%d %H:%M:%S (UTC)")
        ))?;
        self.log(format!(
            "Current local time: {}",
            local.format("%Y-%m-%d %H:%M:%S (%z)")
        ))?;
        Ok(())
    }
}

impl LogInner {
    fn log_lines(&self, message: &str) -> Result<()> {
        let seconds = self.start.elapsed().as_secs_f32();

        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let diff = seconds - state.last_seconds;
        let prefix = format!("{:7.0}s {:6.1}+ ", seconds, diff);

        for line in message.split('\n') {
            if self.output_to_console {
                println!("{}", line);
            }
            if let Some(writer) = state.writer.as_mut() {
                writer.write_all(prefix.as_bytes())?;
                writer.write_all(line.as_bytes())?;
                writer.write_all(b"\n")?;
                writer.flush()?;
            }
            state.last_seconds = seconds;
        }

        Ok(())
    }
}

impl Drop for LogInner {
    fn drop(&mut self) {
        let has_writer = self
            .state
            .lock()
            .map(|state| state.writer.is_some())
            .unwrap_or(false);
        if !has_writer {
            return;
        }

        let _ = self.log_lines("\n----------------------------------------\n");
        let _ = self.log_lines("Closing log file.");
        let _ = self.log_lines(&format!(
            "Current time (UTC): {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S (UTC)")
        ));
        let _ = self.log_lines("Done.");
    }
}
