use std::ffi::{c_void, CStr, CString, OsStr};
use std::mem;
use std::os::unix::ffi::OsStrExt;
use std::ptr::NonNull;

use libc::{c_char, c_int};
use log::{debug, warn};
use once_cell::sync::Lazy;

use crate::error::{Error, Result};
use crate::store::{truncate_value, Property, PropertyStore, PROP_VALUE_MAX};

const PROP_NAME_MAX: usize = 32;

#[repr(C)]
pub struct PropInfo {
    _opaque: [u8; 0],
}

type ReadCallback = unsafe extern "C" fn(cookie: *mut c_void, name: *const c_char, value: *const c_char, serial: u32);
type ForeachCallback = unsafe extern "C" fn(info: *const PropInfo, cookie: *mut c_void);
type ReadCallbackFn = unsafe extern "C" fn(info: *const PropInfo, callback: ReadCallback, cookie: *mut c_void);

extern "C" {
    fn __system_properties_init() -> c_int;
    fn __system_property_find(name: *const c_char) -> *const PropInfo;
    fn __system_property_read(info: *const PropInfo, name: *mut c_char, value: *mut c_char) -> c_int;
    fn __system_property_foreach(callback: ForeachCallback, cookie: *mut c_void) -> c_int;
    fn __system_property_set(name: *const c_char, value: *const c_char) -> c_int;
}

// only exported since API 26, older devices fall back to `__system_property_read`
static READ_CALLBACK: Lazy<Option<ReadCallbackFn>> = Lazy::new(|| {
    let symbol = unsafe {
        libc::dlsym(libc::RTLD_DEFAULT, c"__system_property_read_callback".as_ptr())
    };

    if symbol.is_null() {
        debug!("__system_property_read_callback unavailable, using legacy reads");
        None
    } else {
        Some(unsafe { mem::transmute::<*mut c_void, ReadCallbackFn>(symbol) })
    }
});

#[derive(Debug, Clone, Copy)]
pub struct PropHandle(NonNull<PropInfo>);

#[derive(Debug, Default)]
pub struct BionicStore;

unsafe fn lossy(ptr: *const c_char) -> String {
    if ptr.is_null() {
        String::new()
    } else {
        CStr::from_ptr(ptr).to_string_lossy().into_owned()
    }
}

unsafe extern "C" fn on_read(cookie: *mut c_void, name: *const c_char, value: *const c_char, _serial: u32) {
    let slot = &mut *(cookie as *mut Option<Property>);
    slot.replace(Property::new(lossy(name), lossy(value)));
}

unsafe extern "C" fn on_each(info: *const PropInfo, cookie: *mut c_void) {
    let props = &mut *(cookie as *mut Vec<Property>);

    if let Some(prop) = read_info(info) {
        props.push(prop);
    }
}

unsafe fn read_info(info: *const PropInfo) -> Option<Property> {
    match *READ_CALLBACK {
        Some(read_callback) => {
            let mut slot: Option<Property> = None;
            read_callback(info, on_read, &mut slot as *mut _ as *mut c_void);
            slot
        }
        None => {
            let mut name = [0 as c_char; PROP_NAME_MAX];
            let mut value = [0 as c_char; PROP_VALUE_MAX];

            if __system_property_read(info, name.as_mut_ptr(), value.as_mut_ptr()) <= 0 {
                return None;
            }

            Some(Property::new(lossy(name.as_ptr()), lossy(value.as_ptr())))
        }
    }
}

impl PropertyStore for BionicStore {
    type Handle = PropHandle;

    fn init(&mut self) -> Result<()> {
        if unsafe { __system_properties_init() } != 0 {
            return Err(Error::Init);
        }

        Ok(())
    }

    fn find(&self, name: &OsStr) -> Result<Option<PropHandle>> {
        let Ok(cname) = CString::new(name.as_bytes()) else {
            warn!("property name contains a nul byte: {name:?}");
            return Ok(None);
        };

        let info = unsafe { __system_property_find(cname.as_ptr()) };

        Ok(NonNull::new(info as *mut PropInfo).map(PropHandle))
    }

    fn read(&self, handle: PropHandle) -> Result<Option<Property>> {
        let prop = unsafe { read_info(handle.0.as_ptr()) };

        Ok(prop.map(|mut prop| {
            truncate_value(&mut prop.value);
            prop
        }))
    }

    fn list(&self) -> Result<Vec<Property>> {
        let mut props: Vec<Property> = Vec::new();

        let ret = unsafe {
            __system_property_foreach(on_each, &mut props as *mut _ as *mut c_void)
        };

        if ret != 0 {
            return Err(Error::Enumeration);
        }

        Ok(props)
    }

    fn set(&mut self, name: &OsStr, value: &OsStr) -> Result<()> {
        let cname = CString::new(name.as_bytes()).map_err(|_| Error::Set)?;
        let cvalue = CString::new(value.as_bytes()).map_err(|_| Error::Set)?;

        if unsafe { __system_property_set(cname.as_ptr(), cvalue.as_ptr()) } != 0 {
            warn!("property service rejected {}", name.to_string_lossy());
            return Err(Error::Set);
        }

        Ok(())
    }
}
