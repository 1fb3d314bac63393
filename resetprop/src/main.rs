use std::env;
use std::io;
use std::process::ExitCode;

use common::dump_tombstone_on_panic;

use crate::store::HostStore;

mod cli;
mod error;
mod store;

fn main() -> ExitCode {
    common::logger::init("resetprop");
    dump_tombstone_on_panic();

    let mut store = HostStore::default();

    let code = cli::invoke(
        &mut store,
        env::args_os(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock()
    );

    ExitCode::from(code)
}
