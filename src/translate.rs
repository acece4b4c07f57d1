
use crate::{
    opts::{ArgList, Id},
    resolve,
};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown parameter: -m{0}")]
    UnknownMachine(String),
    #[error(transparent)]
    Resolve(#[from] resolve::Error),
}

/// The fully translated backend command line, first token included.
#[derive(Debug)]
pub struct Translation {
    pub cmdline: Vec<String>,
    /// Echo the command line on stdout (verbose or dry run).
    pub echo: bool,
    /// Stop after echoing, without running the backend.
    pub dry_run: bool,
}

const BACKEND: &str = "lld-link";

fn machine_flag(emulation: &str) -> Result<&'static str, Error> {
    match emulation {
        "i386pe" => Ok("-machine:x86"),
        "i386pep" => Ok("-machine:x64"),
        "thumb2pe" => Ok("-machine:arm"),
        "arm64pe" => Ok("-machine:arm64"),
        other => Err(Error::UnknownMachine(other.to_owned())),
    }
}

/// Emit the backend flags for a parsed argument list. The emission order is
/// fixed and observable, so it must not be rearranged even where the backend
/// would accept a different one.
pub fn translate(args: &ArgList) -> Result<Translation, Error> {
    let mut cmdline = vec![BACKEND.to_owned()];

    // Options that may repeat resolve to their last occurrence.
    if let Some(entry) = args.last_value(Id::Entry) {
        cmdline.push(format!("-entry:{entry}"));
    }
    if let Some(subsystem) = args.last_value(Id::Subsystem) {
        cmdline.push(format!("-subsystem:{subsystem}"));
    }
    if let Some(implib) = args.last_value(Id::OutImplib) {
        cmdline.push(format!("-implib:{implib}"));
    }
    if let Some(stack) = args.last_value(Id::Stack) {
        cmdline.push(format!("-stack:{stack}"));
    }

    if let Some(output) = args.last_value(Id::Output) {
        cmdline.push(format!("-out:{output}"));
    } else if args.has(Id::Shared) {
        cmdline.push("-out:a.dll".to_owned());
    } else {
        cmdline.push("-out:a.exe".to_owned());
    }

    if args.has(Id::Shared) {
        cmdline.push("-dll".to_owned());
    }

    if let Some(emulation) = args.last_value(Id::Machine) {
        cmdline.push(machine_flag(emulation)?.to_owned());
    }

    for value in args.values(Id::Mllvm) {
        cmdline.push(format!("-mllvm:{value}"));
    }

    // The 32-bit image base symbol carries one more leading underscore.
    if args.last_value(Id::Machine) == Some("i386pe") {
        cmdline.push("-alternatename:__image_base__=___ImageBase".to_owned());
    } else {
        cmdline.push("-alternatename:__image_base__=__ImageBase".to_owned());
    }

    let search_paths: Vec<PathBuf> = args.values(Id::SearchPath).map(PathBuf::from).collect();
    let prefer_static = args.has(Id::Bstatic);

    // Inputs and libraries keep their relative order from the command line.
    for arg in args.args() {
        match (arg.id(), arg.value()) {
            (Id::Input, Some(file)) => cmdline.push(file.to_owned()),
            (Id::Library, Some(name)) => {
                let path = resolve::search_library(name, &search_paths, prefer_static)?;
                cmdline.push(path.display().to_string());
            }
            _ => {}
        }
    }

    let verbose = args.has(Id::Verbose);
    if verbose {
        cmdline.push("-verbose".to_owned());
    }
    let dry_run = args.has(Id::DryRun);

    Ok(Translation {
        cmdline,
        echo: verbose || dry_run,
        dry_run,
    })
}
