//! Keeping saves in memory, for throwaway games and tests.

use std::{collections::HashMap, io};

use crate::Error;

use super::Store;

/// A [`Store`] that lives and dies with the process. It counts writes, so callers can see how often it's hit.
#[derive(Default, Debug)]
pub struct Memory {
    values: HashMap<String, String>,
    writes: usize,
    read_only: bool,
}

impl Memory {
    /// A store that already holds one value.
    pub fn with(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_owned(), value.to_owned());
        Self { values, ..Self::default() }
    }

    /// How many successful writes have happened.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Make every following write fail, as if the storage quota ran out.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }
}

impl Store for Memory {
    type Error = Error;

    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        if self.read_only {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "store is read-only").into());
        }
        self.values.insert(key.to_owned(), value.to_owned());
        self.writes += 1;
        Ok(())
    }
}
