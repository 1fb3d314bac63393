use log::LevelFilter;

use crate::debug_select;

/// Level used when nothing else asks for one.
pub fn default_level() -> LevelFilter {
    debug_select!(LevelFilter::Trace, LevelFilter::Info)
}

// logcat is the only sink on device, stderr stays reserved for diagnostics
#[cfg(target_os = "android")]
pub fn init(tag: &str) {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(default_level())
            .with_tag(tag)
    );
}

// off unless `RUST_LOG` says otherwise, the CLI prints its own diagnostics
#[cfg(not(target_os = "android"))]
pub fn init(tag: &str) {
    let env = env_logger::Env::default().default_filter_or("off");
    let tag = tag.to_owned();

    let _ = env_logger::Builder::from_env(env)
        .format(move |buf, record| {
            use std::io::Write;
            writeln!(buf, "{tag}[{}]: {}", record.level(), record.args())
        })
        .try_init();
}
