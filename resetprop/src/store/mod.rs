use std::ffi::OsStr;
use std::fmt;

use crate::error::Result;

#[cfg(target_os = "android")]
mod bionic;
#[cfg(not(target_os = "android"))]
mod unavailable;
#[cfg(test)]
pub mod memory;

#[cfg(target_os = "android")]
pub use bionic::BionicStore as HostStore;
#[cfg(not(target_os = "android"))]
pub use unavailable::Unavailable as HostStore;

// bionic/libc/include/sys/system_properties.h
pub const PROP_VALUE_MAX: usize = 92;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    #[cfg_attr(not(target_os = "android"), allow(dead_code))]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]: [{}]", self.name, self.value)
    }
}

/// Access to the global property area owned by the host.
///
/// Implementations forward to the platform one call at a time: no caching,
/// no retries. Names and values go in as raw bytes; values read back may
/// already be truncated by the host.
pub trait PropertyStore {
    /// Opaque reference to a located property, valid for the process lifetime.
    type Handle: Copy;

    /// Must succeed before any other call is made.
    fn init(&mut self) -> Result<()>;

    fn find(&self, name: &OsStr) -> Result<Option<Self::Handle>>;

    /// `None` when the host could not produce a value for the handle.
    fn read(&self, handle: Self::Handle) -> Result<Option<Property>>;

    /// Every property, in whatever order the host enumerates them.
    fn list(&self) -> Result<Vec<Property>>;

    /// Create or overwrite `name`.
    fn set(&mut self, name: &OsStr, value: &OsStr) -> Result<()>;
}

/// Cut `value` down to what fits a `PROP_VALUE_MAX` buffer, terminator included.
#[cfg_attr(not(target_os = "android"), allow(dead_code))]
pub fn truncate_value(value: &mut String) {
    let limit = PROP_VALUE_MAX - 1;

    if value.len() > limit {
        let mut end = limit;
        while !value.is_char_boundary(end) {
            end -= 1;
        }
        value.truncate(end);
    }
}
