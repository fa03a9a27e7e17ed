//! Filesystem abstraction for the procfs-backed network readers.
//!
//! The kernel socket and device tables are plain text files, so hiding the
//! reads behind a trait lets the parsers run against canned content in tests
//! and on platforms without `/proc`.

use std::io;
use std::path::Path;

/// Read access to the files the network collector consumes.
pub trait FileSystem {
    /// Reads the entire contents of a file as a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Checks if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Real filesystem, delegating to `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
