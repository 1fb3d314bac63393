use std::ffi::{OsStr, OsString};

use crate::error::{Error, Result};
use crate::store::{Property, PropertyStore, PROP_VALUE_MAX};

/// In-process property area with the host's observable rules: insertion
/// order, overwrite on set, long values only under `ro.`. Names and values
/// are kept as raw bytes and decoded lossily on the way out, like bionic.
#[derive(Debug, Default)]
pub struct MemoryStore {
    props: Vec<(OsString, OsString)>,
    initialized: bool,
    pub fail_init: bool,
    pub fail_list: bool,
    pub read_only: bool,
}

impl MemoryStore {
    pub fn with(props: &[(&str, &str)]) -> Self {
        Self {
            props: props.iter().map(|(name, value)| (name.into(), value.into())).collect(),
            ..Self::default()
        }
    }

    pub fn get(&self, name: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.props.iter()
            .find(|(key, _)| key == name.as_ref())
            .map(|(_, value)| value.as_os_str())
    }

    fn ensure_init(&self) {
        assert!(self.initialized, "property store used before init");
    }

    fn to_property((name, value): &(OsString, OsString)) -> Property {
        Property::new(name.to_string_lossy(), value.to_string_lossy())
    }
}

impl PropertyStore for MemoryStore {
    type Handle = usize;

    fn init(&mut self) -> Result<()> {
        if self.fail_init {
            return Err(Error::Init);
        }

        self.initialized = true;
        Ok(())
    }

    fn find(&self, name: &OsStr) -> Result<Option<usize>> {
        self.ensure_init();
        Ok(self.props.iter().position(|(key, _)| key == name))
    }

    fn read(&self, handle: usize) -> Result<Option<Property>> {
        self.ensure_init();
        Ok(self.props.get(handle).map(Self::to_property))
    }

    fn list(&self) -> Result<Vec<Property>> {
        self.ensure_init();

        if self.fail_list {
            return Err(Error::Enumeration);
        }

        Ok(self.props.iter().map(Self::to_property).collect())
    }

    fn set(&mut self, name: &OsStr, value: &OsStr) -> Result<()> {
        self.ensure_init();

        let read_only_name = name.as_encoded_bytes().starts_with(b"ro.");
        let too_long = value.len() >= PROP_VALUE_MAX && !read_only_name;

        if self.read_only || too_long {
            return Err(Error::Set);
        }

        match self.props.iter_mut().find(|(key, _)| key == name) {
            Some((_, old)) => *old = value.to_owned(),
            None => self.props.push((name.to_owned(), value.to_owned())),
        }

        Ok(())
    }
}
