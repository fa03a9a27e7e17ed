//! Mock filesystem for testing the procfs-backed readers without `/proc`.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use super::traits::FileSystem;

/// In-memory filesystem keyed by path.
#[derive(Debug, Default, Clone)]
pub struct MockFs {
    files: HashMap<PathBuf, String>,
}

impl MockFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with the given content, replacing any previous one.
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// A small but realistic `/proc/net` layout: loopback plus one
    /// ethernet interface, a listener and an established connection.
    pub fn typical_system() -> Self {
        Self::new()
            .with_file(
                "/proc/net/dev",
                "Inter-|   Receive                                                |  Transmit\n \
                 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed\n    \
                 lo: 8192000   64000    0    0    0     0          0         0  8192000   64000    0    0    0     0       0          0\n  \
                 eth0: 73400320  512000    0    0    0     0          0         0 31457280  256000    0    0    0     0       0          0\n",
            )
            .with_file(
                "/proc/net/tcp",
                "  sl  local_address rem_address   st tx_queue rx_queue tr tm->when retrnsmt   uid  timeout inode\n   \
                 0: 00000000:0016 00000000:0000 0A 00000000:00000000 00:00000000 00000000     0        0 10001 1\n   \
                 1: 0201A8C0:9C40 5DB8D822:01BB 01 00000000:00000000 00:00000000 00000000  1000        0 10002 1\n",
            )
            .with_file(
                "/proc/net/udp",
                "  sl  local_address rem_address   st tx_queue rx_queue tr tm->when retrnsmt   uid  timeout inode ref pointer drops\n  \
                 12: 00000000:0044 00000000:0000 07 00000000:00000000 00:00000000 00000000     0        0 10003 2 0000000000000000 0\n",
            )
    }
}

impl FileSystem for MockFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{:?}", path)))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}
