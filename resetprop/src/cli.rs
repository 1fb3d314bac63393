use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, Command};
use log::{debug, error};

use crate::error::Error;
use crate::store::PropertyStore;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

const TAG: &str = "resetprop";

const AFTER_HELP: &str = "\
With no arguments every property is listed as `[name]: [value]`.
With NAME its value is printed, with NAME VALUE it is created or overwritten.";

// help text only, dispatch never goes through clap so `--` stays an ordinary word
fn command(prog: &str) -> Command {
    Command::new(TAG)
        .bin_name(prog)
        .about("Get, set or list Android system properties")
        .after_help(AFTER_HELP)
        .arg(
            Arg::new("NAME")
                .help("Property to read, or to write when VALUE follows")
                .value_parser(value_parser!(OsString))
        )
        .arg(
            Arg::new("VALUE")
                .help("Value to store under NAME")
                .value_parser(value_parser!(OsString))
        )
}

#[derive(Debug, PartialEq, Eq)]
pub enum Operation {
    List,
    Get { name: OsString },
    Set { name: OsString, value: OsString },
}

impl Operation {
    /// Select by word count alone, the words themselves are never interpreted.
    pub fn from_words(words: &[OsString]) -> Result<Self, Error> {
        let op = match words {
            [] => Operation::List,
            [name] => Operation::Get { name: name.clone() },
            [name, value] => Operation::Set { name: name.clone(), value: value.clone() },
            _ => return Err(Error::Usage),
        };

        Ok(op)
    }
}

pub fn program_name(argv: &[OsString]) -> String {
    argv.first()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| TAG.to_owned())
}

pub fn wants_help(argv: &[OsString]) -> bool {
    argv.iter().skip(1).any(|arg| arg == "-h" || arg == "--help")
}

pub fn usage(prog: &str) -> String {
    command(prog).render_help().to_string()
}

pub fn execute<S: PropertyStore>(store: &mut S, op: Operation, out: &mut impl Write) -> Result<()> {
    match op {
        Operation::List => {
            let props = store.list()?;
            debug!("listing {} properties", props.len());

            for prop in &props {
                writeln!(out, "{prop}").context("failed to write to stdout")?;
            }
        }
        Operation::Get { name } => {
            let prop = match store.find(&name)? {
                Some(handle) => store.read(handle)?,
                None => None,
            };

            let prop = prop.ok_or_else(|| Error::NotFound(name.to_string_lossy().into_owned()))?;
            debug!("read {prop}");

            writeln!(out, "{}", prop.value).context("failed to write to stdout")?;
        }
        Operation::Set { name, value } => {
            store.set(&name, &value)?;
            debug!("set [{}]: [{}]", name.to_string_lossy(), value.to_string_lossy());
        }
    }

    out.flush().context("failed to write to stdout")?;

    Ok(())
}

pub fn run<S: PropertyStore>(store: &mut S, argv: &[OsString], out: &mut impl Write) -> Result<()> {
    store.init()?;

    let words = argv.get(1..).unwrap_or_default();
    let op = Operation::from_words(words).inspect_err(|_| {
        debug!("rejected {} arguments", words.len());
    })?;

    execute(store, op, out)
}

pub fn report(prog: &str, err: &anyhow::Error, stderr: &mut impl Write) {
    let typed = err.downcast_ref::<Error>();

    if typed != Some(&Error::Usage) {
        error!("{err:#}");
        let _ = writeln!(stderr, "{TAG}: {err:#}");
    }

    if typed.is_some_and(|err| err.wants_usage()) {
        let _ = write!(stderr, "{}", usage(prog));
    }
}

/// One full invocation: help scan, init, dispatch. Returns the exit status.
pub fn invoke<S, I, T>(store: &mut S, argv: I, stdout: &mut impl Write, stderr: &mut impl Write) -> u8
where
    S: PropertyStore,
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let prog = program_name(&argv);

    if wants_help(&argv) {
        let _ = write!(stderr, "{}", usage(&prog));
        return EXIT_SUCCESS;
    }

    match run(store, &argv, stdout) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            report(&prog, &err, stderr);
            EXIT_FAILURE
        }
    }
}
