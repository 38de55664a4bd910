/// Everything that aborts a resolver run.
///
/// Messages are kept as strings so the error is `Clone`: one geocode failure
/// is observed by every member waiting on the same address.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// Missing or empty environment variable.
    Config(String),
    /// Connection, TLS or body read failure.
    Transport { url: String, message: String },
    /// Response with a status other than 200.
    Status { url: String, status: u16 },
    /// Response body that is not the JSON we expect.
    Decode { url: String, message: String },
    /// GraphQL errors or a missing organization.
    Directory(String),
    /// Geocoder status other than `OK`/`ZERO_RESULTS`.
    Geocode {
        status: String,
        message: Option<String>,
    },
    /// Writing the output file failed.
    Io(String),
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::Config(msg) => write!(f, "configuration error: {msg}"),
            ResolveError::Transport { url, message } => {
                write!(f, "request to {url} failed: {message}")
            }
            ResolveError::Status { url, status } => {
                write!(f, "request to {url} failed with status {status}")
            }
            ResolveError::Decode { url, message } => {
                write!(f, "invalid response from {url}: {message}")
            }
            ResolveError::Directory(msg) => write!(f, "directory error: {msg}"),
            ResolveError::Geocode {
                status,
                message: Some(message),
            } => write!(f, "{status}: {message}"),
            ResolveError::Geocode {
                status,
                message: None,
            } => write!(f, "{status}"),
            ResolveError::Io(msg) => write!(f, "write failed: {msg}"),
        }
    }
}

impl std::error::Error for ResolveError {}

impl From<std::io::Error> for ResolveError {
    fn from(err: std::io::Error) -> Self {
        ResolveError::Io(err.to_string())
    }
}
