// logtally - platform/fs.rs
//
// Filesystem access for log files.
// The file handle lives only inside `read_text_file` and is closed on every
// return path when it drops.

use crate::util::error::LoadError;
use std::io::{self, Read};
use std::path::Path;

/// Read a whole file as UTF-8 text, refusing files larger than `max_size`.
///
/// Errors:
/// - `LoadError::NotFound` if the path does not exist.
/// - `LoadError::TooLarge` if the file is bigger than `max_size` bytes, by
///   metadata or by the bytes actually read.
/// - `LoadError::InvalidEncoding` if the bytes are not valid UTF-8.
/// - `LoadError::Io` for anything else (permissions, directories, ...).
pub fn read_text_file(path: &Path, max_size: u64) -> Result<String, LoadError> {
    let io_err = |source: io::Error| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    };

    let file = std::fs::File::open(path).map_err(io_err)?;
    let size = file.metadata().map_err(io_err)?.len();
    if size > max_size {
        return Err(LoadError::TooLarge {
            path: path.to_path_buf(),
            size,
            max_size,
        });
    }

    // Pipes and pseudo-files report a size of 0, so the cap also bounds the
    // read itself. One byte past the cap is enough to detect an overrun.
    let mut bytes = Vec::with_capacity(size as usize);
    file.take(max_size.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(io_err)?;
    if bytes.len() as u64 > max_size {
        return Err(LoadError::TooLarge {
            path: path.to_path_buf(),
            size: bytes.len() as u64,
            max_size,
        });
    }

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read log file");

    String::from_utf8(bytes).map_err(|source| LoadError::InvalidEncoding {
        path: path.to_path_buf(),
        source,
    })
}
