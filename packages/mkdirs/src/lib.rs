//! Create every directory named on the command line, parents included.
//!
//! Failures for individual directories are dropped: an existing directory, a
//! permission problem and a malformed path all look the same to the caller.
//! The only error that escapes is [`UsageError`], when no directories are given.

mod error;
pub mod logging;

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

pub use error::{CreateError, UsageError};

const DEFAULT_PROGRAM: &str = "mkdirs";

/// Parsed command line: the program name and the directories to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub dirs: Vec<PathBuf>,
}

impl Invocation {
    /// Build from raw process arguments, program name first.
    ///
    /// Every argument after the program name is a directory, including ones
    /// that begin with `-`.
    pub fn parse<I, S>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = program_name(args.next().as_deref());
        let dirs: Vec<PathBuf> = args.map(PathBuf::from).collect();

        if dirs.is_empty() {
            return Err(UsageError { program });
        }

        Ok(Self { program, dirs })
    }
}

fn program_name(arg0: Option<&OsStr>) -> String {
    arg0.and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string())
}

/// Create `path` and any missing ancestors.
///
/// An already existing directory counts as success. An empty path is rejected.
pub fn create_dir(path: &Path) -> Result<(), CreateError> {
    let result = if path.as_os_str().is_empty() {
        Err(io::Error::new(io::ErrorKind::NotFound, "empty path"))
    } else {
        fs::create_dir_all(path)
    };

    result.map_err(|source| CreateError {
        path: path.to_path_buf(),
        source,
    })
}

/// Create each directory in order, ignoring failures.
pub fn create_all<I, P>(paths: I)
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    for path in paths {
        let path = path.as_ref();
        match create_dir(path) {
            Ok(()) => debug!(path = %path.display(), "directory ready"),
            Err(err) => debug!(path = %path.display(), error = %err.source, "ignoring failure"),
        }
    }
}

/// Parse the arguments and create every directory they name.
pub fn run<I, S>(args: I) -> Result<(), UsageError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let invocation = Invocation::parse(args)?;
    create_all(&invocation.dirs);
    Ok(())
}
