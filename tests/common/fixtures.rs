//! Static log corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of representative log lines.
//! Join them with [`as_text`] to get a blob for the tokenizer.

/// One line per recognised timestamp format, plus one with none.
pub const CORPUS_TIMESTAMPS: &[&str] = &[
    "2025-11-22T09:15:03.124Z INFO Server start sequence initiated",
    "2024-01-15 10:00:00 INFO  Starting application version 2.4.1",
    "11/22/2025 09:15:11 WARN US formatted timestamp with warning marker latency=850ms",
    "Nov 22, 2025 09:15:10 ERROR Legacy formatted timestamp with error marker code=42",
    "1732276500 INFO Epoch timestamp example line (seconds)",
    "1732276500123 WARN Epoch timestamp example line (milliseconds)",
    "No severity token on this line but still informative content",
];

/// Unstructured lines in the shapes application logs usually take.
pub const CORPUS_UNSTRUCTURED: &[&str] = &[
    "2024-01-15 10:00:00 INFO  Starting application version 2.4.1",
    "2024-01-15 10:00:01 ERROR Failed to connect to database after 3 retries",
    "[2024-01-15T10:00:03Z] WARN: Disk usage at 92% on /dev/sda1",
    "ERROR: NullPointerException at com.example.App.handle(App.java:42)",
    "10:00:05.123 [main] DEBUG o.s.w.s.DispatcherServlet - Initializing Servlet 'dispatcherServlet'",
    "time=2024-01-15T10:00:06Z severity=CRITICAL message=\"Panic: index out of bounds\"",
    "GET /api/v1/users 200 47ms",
];

/// Recurring failures: three fetch errors share a shape, two stalls share
/// another, and the rest are singletons.
pub const CORPUS_RECURRING: &[&str] = &[
    "2025-11-22T09:15:04.002Z INFO Connected to database host=db.internal.local latency=12ms",
    "2025-11-22T09:15:05.000Z ERROR Failed to fetch user profile id=938120 reason=\"Timeout contacting profile-service\"",
    "2025-11-22T09:15:05.050Z ERROR Failed to fetch user profile id=1938121 reason=\"Timeout contacting profile-service\"",
    "2025-11-22T09:15:06.100Z WARN Slow external API call name=geo-ip elapsed=1210ms",
    "2025-11-22T09:15:05.100Z ERROR Failed to fetch user profile id=5588122 reason=\"Timeout contacting profile-service\"",
    "2025-11-22T09:15:08.750Z ERROR Shutdown stall: open connections=37",
    "2025-11-22T10:15:08.900Z ERROR Shutdown stall: open connections=4",
    "2025-11-22T10:20:00.000Z FATAL Out of memory rss_mb=16384",
    "2025-11-22T10:21:00.000Z DEBUG Cache miss key=user:42",
];

/// The payment-gateway message whose normalised key is pinned in the
/// normalization harness.
pub const PAYMENT_GATEWAY_MESSAGE: &str = "Payment gateway error code=PGW-442 message=\"Card declined\" orderId=abf0c4d9-2d52-4e1f-a6b9-73f2f1c5d001";

/// Join corpus lines into one text blob.
pub fn as_text(lines: &[&str]) -> String {
    lines.join("\n")
}

/// Generate `n` synthetic lines cycling through severities and hours.
pub fn corpus_high_volume(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let level = match i % 10 {
                0 => "ERROR",
                1 | 2 => "WARN",
                3 => "DEBUG",
                _ => "INFO",
            };
            format!(
                "2024-01-15T{:02}:{:02}:{:02}Z {} request {} finished in {}ms",
                i / 3600 % 24,
                i / 60 % 60,
                i % 60,
                level,
                i,
                i % 250,
            )
        })
        .collect()
}
