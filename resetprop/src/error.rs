use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[cfg_attr(target_os = "android", allow(dead_code))]
    #[error("resetprop is for Android only. Build with Android NDK for device.")]
    PlatformUnavailable,

    #[cfg_attr(not(target_os = "android"), allow(dead_code))]
    #[error("__system_properties_init failed")]
    Init,

    #[error("property not found: {0}")]
    NotFound(String),

    #[cfg_attr(not(target_os = "android"), allow(dead_code))]
    #[error("__system_property_foreach failed")]
    Enumeration,

    #[cfg_attr(not(target_os = "android"), allow(dead_code))]
    #[error("__system_property_set failed")]
    Set,

    #[error("invalid arguments")]
    Usage,
}

impl Error {
    /// Whether usage text has to accompany the diagnostic.
    pub fn wants_usage(&self) -> bool {
        matches!(self, Error::PlatformUnavailable | Error::Usage)
    }
}
