use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::Ordering;

use tracing::{warn, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::log::LogConfig;
use crate::terminal::{INPUT_BUFFER, PROMPT, TERMINAL_CLOSED};

const LOG_FILE: &str = "secret_number.log";
const ERROR_FILE: &str = "secret_number.err";

pub fn init_logger(config: &LogConfig) -> [WorkerGuard; 3] {
    let local_offset = time::UtcOffset::current_local_offset();

    let (time_format, format_err) =
        match time::format_description::parse_owned::<2>(&config.time_format) {
            Ok(format) => (format, None),
            Err(e) => (
                time::format_description::parse_owned::<2>(
                    &LogConfig::default().time_format,
                )
                .unwrap(),
                Some(e),
            ),
        };

    let (s, s_guard) = tracing_appender::non_blocking(LogStdoutWriter);

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(s.with_max_level(config.max_level.as_tracing_level()));

    let log_dir = Path::new(&config.directory);

    let file_writer = tracing_appender::rolling::daily(log_dir, LOG_FILE);
    let (f, f_guard) = tracing_appender::non_blocking(file_writer);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(f.with_max_level(Level::INFO));

    let file_error_writer = tracing_appender::rolling::daily(log_dir.join("error"), ERROR_FILE);
    let (f_err, f_err_guard) = tracing_appender::non_blocking(file_error_writer);

    let file_error_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(f_err.with_max_level(Level::ERROR));

    let (offset, offset_err) = match local_offset {
        Ok(ofs) => (ofs, None),
        Err(e) => (time::UtcOffset::UTC, Some(e)),
    };

    let timer = OffsetTime::new(offset, time_format);
    let (stdout_layer, file_layer, file_error_layer) = (
        stdout_layer.with_timer(timer.clone()),
        file_layer.with_timer(timer.clone()),
        file_error_layer.with_timer(timer),
    );

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .with(file_error_layer)
        .init();

    if let Some(e) = format_err {
        warn!("invalid log time format: {}, using the default format", e);
    }

    if let Some(e) = offset_err {
        warn!("cannot determine the local time offset: {}, using UTC", e);
    }

    [s_guard, f_guard, f_err_guard]
}

/// Stdout writer that keeps the input prompt intact: every log line is
/// written over the prompt, which is then redrawn together with whatever
/// the player has typed so far.
pub struct LogStdoutWriter;

impl Write for LogStdoutWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut stdout = io::stdout().lock();

        if TERMINAL_CLOSED.load(Ordering::Relaxed) {
            return Ok(buf.len());
        }

        stdout.write_all(&[13])?;
        let size = stdout.write(buf)?;

        stdout.write_all(PROMPT)?;

        if let Ok(rw) = INPUT_BUFFER.try_read() {
            stdout.write_all(rw.as_bytes())?;
        }

        stdout.flush()?;

        Ok(size)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}
