use std::process::{Command, ExitStatus};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not run {0}")]
    Spawn(String, #[source] std::io::Error),
    #[error("{0} exited with {1}")]
    Failed(String, ExitStatus),
}

/// Run the translated command line, first token being the backend linker
/// program. The exit status is reported as-is, never reinterpreted.
pub fn run(cmdline: &[String]) -> Result<(), Error> {
    let Some((program, args)) = cmdline.split_first() else {
        return Ok(());
    };

    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|e| Error::Spawn(program.clone(), e))?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::Failed(program.clone(), status))
    }
}
