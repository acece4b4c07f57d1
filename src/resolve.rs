mod tests;

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unable to find library -l{0}")]
    NotFound(String),
}

fn find_file(dir: &Path, name: impl AsRef<Path>) -> Option<PathBuf> {
    let path = dir.join(name);
    path.exists().then_some(path)
}

/// Resolve a `-l` name to a file. A leading `:` names a literal file; anything
/// else goes through the `lib<name>.dll.a` / `lib<name>.a` convention, import
/// library first unless static linking is preferred. Directories are searched
/// in command line order and the first hit wins.
pub fn search_library(
    name: &str,
    search_paths: &[PathBuf],
    prefer_static: bool,
) -> Result<PathBuf, Error> {
    if let Some(exact) = name.strip_prefix(':') {
        return search_paths
            .iter()
            .find_map(|dir| find_file(dir, exact))
            .ok_or_else(|| Error::NotFound(name.to_owned()));
    }

    for dir in search_paths {
        if !prefer_static {
            if let Some(path) = find_file(dir, format!("lib{name}.dll.a")) {
                return Ok(path);
            }
        }
        if let Some(path) = find_file(dir, format!("lib{name}.a")) {
            return Ok(path);
        }
    }
    Err(Error::NotFound(name.to_owned()))
}
