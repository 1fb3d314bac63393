pub mod logger;
pub mod panic;

pub use panic::dump_tombstone_on_panic;

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! debug_select {
    ($debug: expr, $release: expr) => {
        $debug
    };
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! debug_select {
    ($debug: expr, $release: expr) => {
        $release
    };
}
