use std::panic;
use log::error;

// https://cs.android.com/android/platform/superproject/+/android14-release:bionic/libc/platform/bionic/reserved_signals.h;l=41
#[cfg(target_os = "android")]
const BIONIC_SIGNAL_DEBUGGER: libc::c_int = 35;

/// Log every panic before the default handler runs. On device the debuggerd
/// signal is raised as well, so a tombstone lands in `/data/tombstones`.
pub fn dump_tombstone_on_panic() {
    let default_handler = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        error!("{info}");

        #[cfg(target_os = "android")]
        unsafe {
            libc::raise(BIONIC_SIGNAL_DEBUGGER);
        }

        default_handler(info);
    }));
}
