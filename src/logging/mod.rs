//! Logging and output control
//!
//! This module provides the [`Logger`] used by the client for diagnostics. Verbose-only
//! levels (trace, debug, verbose, detail) are silent unless the logger was created in
//! verbose mode; `quiet` silences everything except errors.

use std::time::Duration;

/// Logger responsible for all client-side diagnostics
#[derive(Debug, Clone)]
pub struct Logger {
    pub verbose: bool,
    pub quiet: bool,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Logger {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            quiet: false,
        }
    }

    pub fn new_quiet() -> Self {
        Self {
            verbose: false,
            quiet: true,
        }
    }

    fn verbose_enabled(&self) -> bool {
        self.verbose && !self.quiet
    }

    // Structured logging levels
    pub fn trace(&self, message: &str) {
        if self.verbose_enabled() {
            println!("🔍 TRACE: {}", message);
        }
    }

    pub fn debug(&self, message: &str) {
        if self.verbose_enabled() {
            println!("🐛 DEBUG: {}", message);
        }
    }

    pub fn verbose(&self, message: &str) {
        if self.verbose_enabled() {
            println!("📝 {}", message);
        }
    }

    /// Warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            println!("⚠️  WARNING: {}", message);
        }
    }

    /// Error message, printed even in quiet mode
    pub fn error(&self, message: &str) {
        eprintln!("❌ ERROR: {}", message);
    }

    /// Detailed information (only shown in verbose mode)
    pub fn detail(&self, message: &str) {
        if self.verbose_enabled() {
            println!("   {}", message);
        }
    }

    /// One line per completed request
    pub fn request_summary(&self, method: &str, url: &str, status: u16, body_len: usize, elapsed: Duration) {
        self.detail(&format!(
            "{} {} -> {} ({}, {})",
            method,
            url,
            status,
            self.format_size(body_len as u64),
            self.format_duration(elapsed)
        ));
    }

    /// Format payload size in human-readable units
    pub fn format_size(&self, bytes: u64) -> String {
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }

    /// Format request latency
    pub fn format_duration(&self, duration: Duration) -> String {
        let millis = duration.as_millis();
        if millis < 1000 {
            format!("{}ms", millis)
        } else {
            format!("{:.2}s", duration.as_secs_f64())
        }
    }
}
