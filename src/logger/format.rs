//! Access log format module
//!
//! Supports multiple log formats:
//! - `text` (default; one readable line with method, client, outcome and elapsed time)
//! - `combined` (Apache/Nginx combined format)
//! - `common` (Common Log Format - CLF)
//! - `json` (JSON structured logging)
//! - Custom patterns with variables

use chrono::Local;

/// Access log entry containing all request/response information
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client socket address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method exactly as received
    pub method: String,
    /// Request URI path
    pub path: String,
    /// HTTP version (1.0, 1.1, 2)
    pub http_version: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: usize,
    /// Referer header
    pub referer: Option<String>,
    /// User-Agent header
    pub user_agent: Option<String>,
    /// Request processing time in microseconds
    pub request_time_us: u64,
    /// Short human-readable description of what happened
    pub outcome: String,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
            referer: None,
            user_agent: None,
            request_time_us: 0,
            outcome: String::new(),
        }
    }

    /// Format the log entry according to the specified format
    pub fn format(&self, format: &str) -> String {
        match format {
            "text" => self.format_text(),
            "combined" => self.format_combined(),
            "common" => self.format_common(),
            "json" => self.format_json(),
            custom => self.format_custom(custom),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn request_time_secs(&self) -> f64 {
        self.request_time_us as f64 / 1_000_000.0
    }

    /// `[time] METHOD /path from addr -> status outcome in 0.0000s`
    fn format_text(&self) -> String {
        format!(
            "[{}] {} {} from {} -> {} {} in {:.4}s",
            self.time.format("%Y/%m/%d %H:%M:%S%.6f"),
            self.method,
            self.path,
            self.remote_addr,
            self.status,
            self.outcome,
            self.request_time_secs(),
        )
    }

    /// Apache/Nginx Combined Log Format
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent "$http_referer" "$http_user_agent"`
    fn format_combined(&self) -> String {
        format!(
            "{} \"{}\" \"{}\"",
            self.format_common(),
            self.referer.as_deref().unwrap_or("-"),
            self.user_agent.as_deref().unwrap_or("-"),
        )
    }

    /// Common Log Format (CLF)
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.request_line(),
            self.status,
            self.body_bytes,
        )
    }

    /// JSON structured log format
    fn format_json(&self) -> String {
        serde_json::json!({
            "remote_addr": self.remote_addr,
            "time": self.time.to_rfc3339(),
            "method": self.method,
            "path": self.path,
            "http_version": self.http_version,
            "status": self.status,
            "body_bytes": self.body_bytes,
            "referer": self.referer,
            "user_agent": self.user_agent,
            "request_time_us": self.request_time_us,
            "outcome": self.outcome,
        })
        .to_string()
    }

    fn request_line(&self) -> String {
        format!("{} {} HTTP/{}", self.method, self.path, self.http_version)
    }

    /// Custom format with variable substitution
    ///
    /// Supported variables:
    /// - `$remote_addr` - Client address
    /// - `$time_local` - Local time in Common Log Format
    /// - `$time_iso8601` - ISO 8601 timestamp
    /// - `$request` - Full request line ("METHOD /path HTTP/version")
    /// - `$request_method` - HTTP method
    /// - `$request_uri` - Request path
    /// - `$status` - Response status code
    /// - `$body_bytes_sent` - Response body size
    /// - `$http_referer` - Referer header
    /// - `$http_user_agent` - User-Agent header
    /// - `$request_time` - Request processing time in seconds (4 decimal places)
    /// - `$outcome` - Outcome summary
    fn format_custom(&self, pattern: &str) -> String {
        let mut result = String::with_capacity(pattern.len() + 64);
        let mut rest = pattern;

        // Single pass: substituted values are never scanned for variables again
        while let Some(pos) = rest.find('$') {
            result.push_str(&rest[..pos]);
            let tail = &rest[pos + 1..];
            match self.expand_variable(tail) {
                Some((value, consumed)) => {
                    result.push_str(&value);
                    rest = &tail[consumed..];
                }
                None => {
                    result.push('$');
                    rest = tail;
                }
            }
        }
        result.push_str(rest);
        result
    }

    /// Value of the variable at the start of `tail` and the length of its name
    ///
    /// Longer names are tried first so `$request_time` is not read as `$request`.
    fn expand_variable(&self, tail: &str) -> Option<(String, usize)> {
        const VARIABLES: [&str; 12] = [
            "http_user_agent",
            "body_bytes_sent",
            "request_method",
            "request_time",
            "http_referer",
            "time_iso8601",
            "remote_addr",
            "request_uri",
            "time_local",
            "outcome",
            "request",
            "status",
        ];

        let name = VARIABLES.into_iter().find(|name| tail.starts_with(name))?;
        let value = match name {
            "remote_addr" => self.remote_addr.clone(),
            "time_local" => self.time.format("%d/%b/%Y:%H:%M:%S %z").to_string(),
            "time_iso8601" => self.time.to_rfc3339(),
            "request_time" => format!("{:.4}", self.request_time_secs()),
            "request_method" => self.method.clone(),
            "request_uri" => self.path.clone(),
            "request" => self.request_line(),
            "status" => self.status.to_string(),
            "body_bytes_sent" => self.body_bytes.to_string(),
            "http_referer" => self.referer.clone().unwrap_or_else(|| "-".to_string()),
            "http_user_agent" => self.user_agent.clone().unwrap_or_else(|| "-".to_string()),
            _ => self.outcome.clone(),
        };
        Some((value, name.len()))
    }
}
