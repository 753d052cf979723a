// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// The HTTP request could not be sent or its body could not be read.
    Fetch(String),
    /// The server answered with a non-success status code.
    Status(u16),
    /// The fetched bytes are not a decodable animated GIF.
    Decode(String),
    /// The body or its decoded frames exceed `limit` bytes.
    TooLarge { limit: u64 },
    Config(String),
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
            Error::Status(code) => write!(f, "HTTP status: {}", code),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::TooLarge { limit } => write!(f, "Image exceeds the {} byte limit", limit),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Error::Status(status.as_u16()),
            None => Error::Fetch(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
