mod backend;
pub mod opts;
pub mod resolve;
pub mod translate;

pub use translate::Translation;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not parse the linker command line")]
    Parse(#[from] opts::Error),
    #[error("Could not translate arguments for the backend linker")]
    Translate(#[from] translate::Error),
    #[error("Backend linker reported failure")]
    Backend(#[from] backend::Error),
}

pub fn print_error(mut error: &dyn std::error::Error) {
    eprintln!("\x1b[93m{error}\x1b[0m");
    while let Some(source) = error.source() {
        eprintln!("Caused by: \x1b[35m{source}\x1b[0m");
        error = source;
    }
}

/// Translate a GNU ld style argument vector (program name already stripped)
/// into the backend linker's command line. Library references are resolved to
/// concrete paths here, so this touches the filesystem but changes nothing.
pub fn translate_args(argv: &[String]) -> Result<Translation, Error> {
    let args = opts::parse(argv)?;
    Ok(translate::translate(&args)?)
}

/// Translate and run the backend linker. Prints the translated command when
/// verbose or dry-run was requested; a dry run stops there and reports success.
pub fn link(argv: &[String]) -> Result<(), Error> {
    let translation = translate_args(argv)?;

    if translation.echo {
        println!("{}", translation.cmdline.join(" "));
    }
    if translation.dry_run {
        return Ok(());
    }

    Ok(backend::run(&translation.cmdline)?)
}
