extern crate chrono;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[cfg_attr(test, macro_use)]
extern crate serde_json;

use chrono::{DateTime, Utc};
use env_logger::{Builder, Env};
use std::io::Write;

const DATETIME_FORMAT: &'static str = "[%Y-%m-%d][%H:%M:%S]";

#[derive(Serialize, Debug)]
struct LogEntry {
    level: String,
    #[serde(serialize_with = "datetime_serializer")]
    time: DateTime<Utc>,
    target: String,
    message: String,
    #[serde(flatten)]
    meta: Option<serde_json::Value>,
}

fn datetime_serializer<S>(x: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_str(format!("{}", x.format(DATETIME_FORMAT)).as_str())
}

/// A convenience wrapper around the log! macro for emitting log messages as
/// single-line JSON entries.
///
/// `jlog!(Info, "Log message")` produces
/// `{"level": "INFO", "target": "my_module", "message": "Log message"}`
/// and metadata can be attached with
/// `jlog!(Error, "Could not create venue", {"venue_id": id})`.
#[macro_export]
macro_rules! jlog {
    ($t:path, $msg:expr) => {{
        use $crate::transform_message;
        transform_message($t, None, $msg, None)
    }};
    ($t:path, $msg:expr, $json:tt) => {{
        use $crate::transform_message;
        let meta = json!($json);
        transform_message($t, None, $msg, Some(meta))
    }};
    ($t:path, $target: expr, $msg:expr, $json:tt) => {{
        use $crate::transform_message;
        let meta = json!($json);
        transform_message($t, Some($target), $msg, Some(meta))
    }};
}

pub fn transform_message(level: log::Level, target: Option<&str>, msg: &str, meta: Option<serde_json::Value>) {
    let inner = LogEntry {
        level: format!("{}", level),
        target: target.unwrap_or("none").to_string(),
        time: chrono::Utc::now(),
        message: msg.trim().to_string(),
        meta,
    };
    match target {
        Some(t) => log!(target: t, level, "{}", serde_json::to_string(&inner).unwrap()),
        None => log!(level, "{}", serde_json::to_string(&inner).unwrap()),
    }
}

fn is_json(msg: &str) -> bool {
    msg.starts_with("{") && msg.ends_with("}")
}

/// Installs a logger that writes every record as a JSON line. Records that
/// are already JSON (such as those produced by `jlog!`) pass through as is.
pub fn setup_logger() -> Result<(), log::SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let msg = format!("{}", record.args());
            if is_json(&msg) {
                writeln!(buf, "{}", msg)
            } else {
                let entry = LogEntry {
                    level: record.level().to_string(),
                    time: chrono::Utc::now(),
                    target: record.target().to_string(),
                    message: msg.trim().to_string(),
                    meta: None,
                };

                match serde_json::to_string(&entry) {
                    Ok(s) => writeln!(buf, "{}", s),
                    Err(err) => writeln!(buf, "Failed to serialize log entry: Error: {:?}, Entry: {:?}", err, entry),
                }
            }
        })
        .try_init()
}
