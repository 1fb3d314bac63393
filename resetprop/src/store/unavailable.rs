use std::ffi::OsStr;

use crate::error::{Error, Result};
use crate::store::{Property, PropertyStore};

/// Stand-in for targets without a bionic property area.
#[derive(Debug, Default)]
pub struct Unavailable;

impl PropertyStore for Unavailable {
    type Handle = ();

    fn init(&mut self) -> Result<()> {
        Err(Error::PlatformUnavailable)
    }

    fn find(&self, _name: &OsStr) -> Result<Option<()>> {
        Err(Error::PlatformUnavailable)
    }

    fn read(&self, _handle: ()) -> Result<Option<Property>> {
        Err(Error::PlatformUnavailable)
    }

    fn list(&self) -> Result<Vec<Property>> {
        Err(Error::PlatformUnavailable)
    }

    fn set(&mut self, _name: &OsStr, _value: &OsStr) -> Result<()> {
        Err(Error::PlatformUnavailable)
    }
}
