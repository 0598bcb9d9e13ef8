use std::any::Any;
use std::ffi::OsString;
use std::panic::{self, PanicHookInfo};
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

const DEFAULT_FILTER: &str = "info";

static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Where log lines go. Stdout is never used: it carries search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    /// `<dir>/<app>.log`, rotated daily.
    DailyFile(PathBuf),
}

impl LogSink {
    /// `TR_LOG_DIR` picks the file sink; unset or blank means stderr.
    pub fn from_env() -> Self {
        Self::from_dir(std::env::var_os("TR_LOG_DIR"))
    }

    pub fn from_dir(dir: Option<OsString>) -> Self {
        match dir.filter(|dir| !dir.to_string_lossy().trim().is_empty()) {
            Some(dir) => LogSink::DailyFile(PathBuf::from(dir)),
            None => LogSink::Stderr,
        }
    }

    fn writer(&self, app_name: &str) -> (BoxMakeWriter, bool) {
        let LogSink::DailyFile(dir) = self else {
            return (BoxMakeWriter::new(std::io::stderr), true);
        };

        if let Err(err) = std::fs::create_dir_all(dir) {
            eprintln!("cannot create log dir {}: {err}; using stderr", dir.display());
            return (BoxMakeWriter::new(std::io::stderr), true);
        }

        let appender = tracing_appender::rolling::daily(dir, format!("{app_name}.log"));
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let _ = FILE_GUARD.set(guard);
        (BoxMakeWriter::new(writer), false)
    }
}

/// `TR_LOG_DIR`, when set to something non-blank.
pub fn log_dir_from_env() -> Option<PathBuf> {
    match LogSink::from_env() {
        LogSink::DailyFile(dir) => Some(dir),
        LogSink::Stderr => None,
    }
}

/// Installs the global subscriber for `app_name`, filtered by `RUST_LOG`
/// (default `info`). Later calls are no-ops.
pub fn init_tracing_subscriber(app_name: &'static str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let (writer, ansi) = LogSink::from_env().writer(app_name);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_writer(writer)
        .try_init();
}

fn panic_text(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

fn report_panic(app_name: &str, info: &PanicHookInfo<'_>) {
    let thread = std::thread::current();
    let origin = info
        .location()
        .map(|loc| format!("{}:{}", loc.file(), loc.line()))
        .unwrap_or_else(|| "unknown".to_string());

    tracing::error!(
        application = app_name,
        thread = thread.name().unwrap_or("unnamed"),
        origin = %origin,
        panic_message = %panic_text(info.payload()),
        "panicked"
    );
}

/// Sends panics to the log. With `TR_LOG_INCLUDE_BACKTRACE=1` the default
/// hook also runs so the backtrace reaches stderr. Installed at most once.
pub fn install_tracing_panic_hook(app_name: &'static str) {
    static HOOKED: OnceLock<()> = OnceLock::new();

    HOOKED.get_or_init(|| {
        let chain_default = std::env::var("TR_LOG_INCLUDE_BACKTRACE")
            .is_ok_and(|flag| flag == "1" || flag.eq_ignore_ascii_case("true"));
        let previous = panic::take_hook();

        panic::set_hook(Box::new(move |info| {
            report_panic(app_name, info);
            if chain_default {
                previous(info);
            }
        }));
    });
}
