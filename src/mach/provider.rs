use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, Error>;

/// ## Program source lookup
///
/// Consulted once for each program name not yet in the program table.
pub trait CodeProvider {
    fn source(&mut self, name: &str) -> Result<String>;
}

#[derive(Debug, Default)]
pub struct NoPrograms;

impl CodeProvider for NoPrograms {
    fn source(&mut self, name: &str) -> Result<String> {
        Err(error!(ProgramNotFound; name))
    }
}

impl CodeProvider for HashMap<String, String> {
    fn source(&mut self, name: &str) -> Result<String> {
        match self.get(name) {
            Some(s) => Ok(s.clone()),
            None => Err(error!(ProgramNotFound; name)),
        }
    }
}

/// Reads `<NAME>.tib` from a directory.
#[derive(Debug)]
pub struct DirectoryProvider {
    dir: PathBuf,
}

impl DirectoryProvider {
    pub const EXTENSION: &'static str = "tib";

    pub fn new<P: Into<PathBuf>>(dir: P) -> DirectoryProvider {
        DirectoryProvider { dir: dir.into() }
    }
}

impl CodeProvider for DirectoryProvider {
    fn source(&mut self, name: &str) -> Result<String> {
        let path = self
            .dir
            .join(name)
            .with_extension(DirectoryProvider::EXTENSION);
        match std::fs::read_to_string(&path) {
            Ok(s) => Ok(s),
            Err(error) => match error.kind() {
                ErrorKind::NotFound => Err(error!(ProgramNotFound; name)),
                _ => Err(error!(IoError; format!("{}: {}", path.display(), error))),
            },
        }
    }
}
