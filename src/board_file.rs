//! Reading and writing board text files

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::board::{Board, ParseError};

/// Failure to load or store a board file
#[derive(Debug, Error)]
pub enum BoardFileError {
    #[error("failed to read board file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid board in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("failed to write board file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load a board. Surrounding whitespace (a trailing newline) is ignored.
pub fn read_board(path: impl AsRef<Path>) -> Result<Board, BoardFileError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| BoardFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    text.trim().parse().map_err(|source| BoardFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Store a board as its 21-character text form
pub fn write_board(path: impl AsRef<Path>, board: &Board) -> Result<(), BoardFileError> {
    let path = path.as_ref();
    fs::write(path, board.to_string()).map_err(|source| BoardFileError::Write {
        path: path.to_path_buf(),
        source,
    })
}
