//! Saving and loading to files, specifically.

use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::{debug, warn};

use crate::Error;

use super::Store;

const EXT: &str = "json";
const TMP_EXT: &str = "json.tmp";

/// Handle saves out of a directory, one file per key.
///
/// Writes go to a temporary file next to the real one, which is then renamed over it, so a crash mid-save leaves the
/// previous save intact rather than half a file.
#[derive(Debug, Clone)]
pub struct Directory(PathBuf);

impl Directory {
    /// Read and write saves in a specific location. The directory is created on first write if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self(path.as_ref().into())
    }

    /// Where the value for `key` lives.
    pub fn path_for(&self, key: &str) -> io::Result<PathBuf> {
        Ok(self.0.join(format!("{}.{}", checked(key)?, EXT)))
    }
}

/// Keys become file names, so they're limited to characters that can't escape the directory.
fn checked(key: &str) -> io::Result<&str> {
    let ok = !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(key)
    } else {
        Err(io::Error::new(io::ErrorKind::InvalidInput, format!("unusable key {:?}", key)))
    }
}

impl Store for Directory {
    type Error = Error;

    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        match fs::read_to_string(self.path_for(key)?) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        let path = self.path_for(key)?;
        let tmp = self.0.join(format!("{}.{}", key, TMP_EXT));
        fs::create_dir_all(&self.0)?;

        if let Err(e) = replace(&tmp, &path, value) {
            match fs::remove_file(&tmp) {
                Err(rm) if rm.kind() != io::ErrorKind::NotFound => {
                    warn!("couldn't clean up {}: {}", tmp.display(), rm)
                }
                _ => (),
            }
            return Err(e.into());
        }
        debug!("wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

fn replace(tmp: &Path, path: &Path, value: &str) -> io::Result<()> {
    let mut file = File::create(tmp)?;
    file.write_all(value.as_bytes())?;
    file.sync_all()?;
    // close before renaming, some platforms won't rename an open file
    drop(file);
    fs::rename(tmp, path)
}
