use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::common::{AppError, AppResult};
use crate::domains::planning::{Graph, GraphStore};

// Snapshot file framing: 4-byte magic, 1-byte format version, bincode payload.
const MAGIC: &[u8; 4] = b"LNAV";
const VERSION: u8 = 1;

/// [`GraphStore`] adapter keeping bincode graph snapshots under a base
/// directory, created on first save.
pub struct FilesystemGraphStore {
    base: PathBuf,
}

impl FilesystemGraphStore {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.base.join(name)
    }
}

impl GraphStore for FilesystemGraphStore {
    fn save_graph(&self, name: &str, graph: &Graph) -> AppResult<()> {
        fs::create_dir_all(&self.base)
            .map_err(|e| AppError::Store(format!("{}: {e}", self.base.display())))?;

        let payload = bincode::serialize(graph)
            .map_err(|e| AppError::Store(format!("graph serialization failed: {e}")))?;

        let mut bytes = Vec::with_capacity(MAGIC.len() + 1 + payload.len());
        bytes.extend_from_slice(MAGIC);
        bytes.push(VERSION);
        bytes.extend_from_slice(&payload);

        let path = self.path_for(name);
        fs::write(&path, bytes).map_err(|e| AppError::Store(format!("{}: {e}", path.display())))?;
        debug!(snapshot = %path.display(), "graph snapshot saved");
        Ok(())
    }

    fn load_graph(&self, name: &str) -> AppResult<Graph> {
        let path = self.path_for(name);
        let bytes =
            fs::read(&path).map_err(|e| AppError::Store(format!("{}: {e}", path.display())))?;

        if bytes.len() < MAGIC.len() + 1 || &bytes[..MAGIC.len()] != MAGIC {
            return Err(AppError::Store(format!(
                "{} is not a graph snapshot",
                path.display()
            )));
        }
        let version = bytes[MAGIC.len()];
        if version != VERSION {
            return Err(AppError::Store(format!(
                "unsupported snapshot version {version} in {}",
                path.display()
            )));
        }

        bincode::deserialize(&bytes[MAGIC.len() + 1..])
            .map_err(|e| AppError::Store(format!("graph deserialization failed: {e}")))
    }

    fn delete_graph(&self, name: &str) -> AppResult<()> {
        let path = self.path_for(name);
        fs::remove_file(&path).map_err(|e| AppError::Store(format!("{}: {e}", path.display())))
    }
}
