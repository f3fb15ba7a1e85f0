// Copyright (c) 2022 Huawei Technologies Co.,Ltd. All rights reserved.
//
// sysMaster is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan
// PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//         http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY
// KIND, EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO
// NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

//! Log sinks and the global logger setup.
use constants::{KMSG_PATH, LOG_LEVEL_ENV, LOG_TARGET_ENV, SYSLOG_SOCKET};
use log::{Level, Log, Metadata, Record};
use std::{
    env,
    fs::{File, OpenOptions},
    io::Write,
    os::unix::net::UnixDatagram,
    str::FromStr,
    sync::Mutex,
};

/// Where log records are sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// stderr of the process
    Console,
    /// the kernel log buffer, usable before any log daemon runs
    Kmsg,
    /// the syslog datagram socket
    Syslog,
}

impl FromStr for LogTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "console" => Ok(LogTarget::Console),
            "kmsg" => Ok(LogTarget::Kmsg),
            "syslog" => Ok(LogTarget::Syslog),
            _ => Err(format!("log target '{}' is strange", s)),
        }
    }
}

/// Parse a '-' joined list of targets, e.g. "console-kmsg".
///
/// Repeated targets are kept once.
pub fn parse_targets(s: &str) -> Result<Vec<LogTarget>, String> {
    let mut targets = Vec::new();
    for word in s.split('-') {
        let target = LogTarget::from_str(word.trim())?;
        if !targets.contains(&target) {
            targets.push(target);
        }
    }
    Ok(targets)
}

/// Parse a log level name or a syslog priority number.
pub fn parse_level(s: &str) -> Result<Level, String> {
    let s = s.trim();
    if let Ok(prio) = s.parse::<u8>() {
        return match prio {
            0..=3 => Ok(Level::Error),
            4 => Ok(Level::Warn),
            5 | 6 => Ok(Level::Info),
            7 => Ok(Level::Debug),
            _ => Err(format!("log level {} is out of range", prio)),
        };
    }

    match s.to_ascii_lowercase().as_str() {
        "err" | "error" => Ok(Level::Error),
        "warn" | "warning" => Ok(Level::Warn),
        "notice" | "info" => Ok(Level::Info),
        "debug" => Ok(Level::Debug),
        "trace" => Ok(Level::Trace),
        _ => Err(format!("invalid log level '{}'", s)),
    }
}

/// syslog priority of a record level, without facility
fn syslog_priority(level: Level) -> libc::c_int {
    match level {
        Level::Error => libc::LOG_ERR,
        Level::Warn => libc::LOG_WARNING,
        Level::Info => libc::LOG_INFO,
        Level::Debug | Level::Trace => libc::LOG_DEBUG,
    }
}

/// "<prio>ident[pid]: message", the format both kmsg and syslog understand
fn format_priority_line(prio: libc::c_int, ident: &str, pid: u32, msg: &str) -> String {
    format!("<{}>{}[{}]: {}", prio, ident, pid, msg)
}

fn local_time() -> String {
    let mut tm: libc::tm = unsafe { std::mem::zeroed() };
    let now: libc::time_t = unsafe { libc::time(std::ptr::null_mut()) };
    if unsafe { libc::localtime_r(&now, &mut tm) }.is_null() {
        return String::new();
    }

    format!(
        "{:0>4}-{:0>2}-{:0>2} {:0>2}:{:0>2}:{:0>2}",
        tm.tm_year + 1900, /* tm_year is years since 1900 */
        tm.tm_mon + 1,     /* tm_mon is months since Jan: [0, 11] */
        tm.tm_mday,
        tm.tm_hour,
        tm.tm_min,
        tm.tm_sec
    )
}

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let module_path = record.module_path().unwrap_or("unknown");
        let mut stderr = std::io::stderr().lock();
        /* Nowhere left to report a failing stderr. */
        let _ = writeln!(stderr, "{} {} {}", local_time(), module_path, record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

struct KmsgLogger {
    ident: String,
    kmsg: Mutex<File>,
}

impl KmsgLogger {
    fn new(ident: &str) -> std::io::Result<Self> {
        let kmsg = OpenOptions::new().write(true).open(KMSG_PATH)?;
        Ok(Self {
            ident: ident.to_string(),
            kmsg: Mutex::new(kmsg),
        })
    }
}

impl Log for KmsgLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let line = format_priority_line(
            syslog_priority(record.level()),
            &self.ident,
            std::process::id(),
            &record.args().to_string(),
        );

        let mut kmsg = match self.kmsg.lock() {
            Err(_) => return,
            Ok(v) => v,
        };
        /* One write() per record, the kernel treats each as a message. */
        if let Err(e) = kmsg.write_all((line + "\n").as_bytes()) {
            eprintln!("Failed to write message to {}: {}", KMSG_PATH, e);
        }
    }

    fn flush(&self) {}
}

struct SysLogger {
    ident: String,
    dgram: UnixDatagram,
}

impl SysLogger {
    fn new(ident: &str) -> std::io::Result<Self> {
        let dgram = UnixDatagram::unbound()?;
        dgram.connect(SYSLOG_SOCKET)?;
        Ok(Self {
            ident: ident.to_string(),
            dgram,
        })
    }
}

/* This is an extremely simple implementation, and only
 * supports the very basic log function. */
impl Log for SysLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let line = format_priority_line(
            libc::LOG_DAEMON | syslog_priority(record.level()),
            &self.ident,
            std::process::id(),
            &record.args().to_string(),
        );
        if let Err(e) = self.dgram.send(line.as_bytes()) {
            eprintln!("Failed to send message to syslogger: {}", e);
        }
    }

    fn flush(&self) {}
}

/// Collect different kinds of loggers together.
///
/// Include: ConsoleLogger, KmsgLogger, SysLogger
struct CombinedLogger {
    loggers: Vec<Box<dyn Log>>,
}

impl Log for CombinedLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        for logger in &self.loggers {
            logger.log(record);
        }
    }

    fn flush(&self) {
        for logger in &self.loggers {
            logger.flush();
        }
    }
}

impl CombinedLogger {
    fn new() -> Self {
        Self {
            loggers: Vec::new(),
        }
    }

    fn push(&mut self, logger: Box<dyn Log>) {
        self.loggers.push(logger)
    }

    fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}

/// Initialize the global static logger instance.
///
/// Repeated targets take effect only once. A target that can not be opened
/// is reported on stderr and skipped.
///
/// # Arguments
///
/// * `name` - The application name, used as syslog/kmsg identifier.
/// * `level` - Log message level.
/// * `targets` - A set of log targets.
pub fn init_log(name: &str, level: Level, targets: &[LogTarget]) {
    let mut combined_loggers = CombinedLogger::new();
    let mut installed: Vec<LogTarget> = Vec::new();

    for target in targets {
        if installed.contains(target) {
            continue;
        }

        let logger = match target {
            LogTarget::Console => Box::new(ConsoleLogger) as Box<dyn Log>,
            LogTarget::Kmsg => match KmsgLogger::new(name) {
                Ok(logger) => Box::new(logger) as Box<dyn Log>,
                Err(e) => {
                    eprintln!("{} failed to open {}: {}", name, KMSG_PATH, e);
                    continue;
                }
            },
            LogTarget::Syslog => match SysLogger::new(name) {
                Ok(logger) => Box::new(logger) as Box<dyn Log>,
                Err(e) => {
                    eprintln!("{} failed to create syslogger: {}", name, e);
                    continue;
                }
            },
        };

        installed.push(*target);
        combined_loggers.push(logger);
    }

    if combined_loggers.is_empty() {
        eprintln!("{}: no available log targets.", name);
    }

    if let Err(e) = log::set_boxed_logger(Box::new(combined_loggers)) {
        eprintln!("{}: failed to set global logger: {}", name, e);
        return;
    }

    log::set_max_level(level.to_level_filter());
}

/// Initialize logging the way generators are expected to log.
///
/// Level and targets come from the environment, defaulting to info level on
/// console and kmsg.
pub fn init_log_for_generator(name: &str) {
    let level = match env::var(LOG_LEVEL_ENV) {
        Ok(v) => parse_level(&v).unwrap_or_else(|e| {
            eprintln!("{}: {}={}: {}, ignoring.", name, LOG_LEVEL_ENV, v, e);
            Level::Info
        }),
        Err(_) => Level::Info,
    };

    let default_targets = vec![LogTarget::Console, LogTarget::Kmsg];
    let targets = match env::var(LOG_TARGET_ENV) {
        Ok(v) => parse_targets(&v).unwrap_or_else(|e| {
            eprintln!("{}: {}={}: {}, ignoring.", name, LOG_TARGET_ENV, v, e);
            default_targets
        }),
        Err(_) => default_targets,
    };

    init_log(name, level, &targets);
}
