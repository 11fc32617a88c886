// standard library
use std::fmt;

// external crates
use reqwest::StatusCode;
#[allow(unused_imports)]
use tracing::{error, info, trace, warn};

pub type HTTPCode = StatusCode;

/// The failure category of an error. Every error produced by this crate belongs
/// to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A payload or response had the wrong shape or type.
    Type,
    /// An argument had an invalid value.
    Value,
    /// A required key was missing from a payload.
    Key,
    /// The server rejected the request or it could not be delivered.
    Api,
}

impl ErrorKind {
    pub fn variants() -> Vec<ErrorKind> {
        vec![
            ErrorKind::Type,
            ErrorKind::Value,
            ErrorKind::Key,
            ErrorKind::Api,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Type => "api_type_error",
            Self::Value => "api_value_error",
            Self::Key => "api_key_error",
            Self::Api => "api_exception",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Base trait of every error this crate returns.
pub trait Error: std::error::Error {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Api
    }
    fn status(&self) -> Option<HTTPCode> {
        None
    }
    fn request_id(&self) -> Option<String> {
        None
    }
    fn is_network_connection_error(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone)]
pub struct Trace {
    pub file: &'static str,
    pub line: u32,
}

#[macro_export]
macro_rules! trace {
    () => {
        Box::new($crate::errors::Trace {
            file: file!(),
            line: line!(),
        })
    };
}

#[macro_export]
macro_rules! impl_error {
    ($enum_name:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::errors::Error for $enum_name {
            fn kind(&self) -> $crate::errors::ErrorKind {
                match self {
                    $(Self::$variant(e) => e.kind(),)+
                }
            }
            fn status(&self) -> Option<$crate::errors::HTTPCode> {
                match self {
                    $(Self::$variant(e) => e.status(),)+
                }
            }
            fn request_id(&self) -> Option<String> {
                match self {
                    $(Self::$variant(e) => e.request_id(),)+
                }
            }
            fn is_network_connection_error(&self) -> bool {
                match self {
                    $(Self::$variant(e) => e.is_network_connection_error(),)+
                }
            }
        }
    };
}

#[macro_export]
macro_rules! deserialize_warn {
    ($struct_name:expr, $field_name:expr, $default:expr) => {{
        ::tracing::warn!(
            "'{}' missing from struct '{}', setting to default: '{:?}'",
            $field_name,
            $struct_name,
            $default
        );
        $default
    }};
}
