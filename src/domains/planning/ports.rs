use crate::common::AppResult;
use crate::domains::planning::{Graph, Path};

/// Port trait for output consumers that draw or export a graph plus an
/// optional planned route. Implementations (adapters) may plot, serialize,
/// or ship the scene elsewhere; the core only exposes read access.
pub trait SceneRenderer: Send + Sync {
    fn render(&self, graph: &Graph, path: Option<&Path>) -> AppResult<()>;
}

/// Port for persisting built graphs in various backends (filesystem, object
/// storage, ...) so an unchanged scenario can skip the rebuild.
pub trait GraphStore: Send + Sync {
    /// Save a graph snapshot under the given name
    fn save_graph(&self, name: &str, graph: &Graph) -> AppResult<()>;
    /// Load a graph snapshot previously saved
    fn load_graph(&self, name: &str) -> AppResult<Graph>;
    /// Delete a stored snapshot
    fn delete_graph(&self, name: &str) -> AppResult<()>;
}
