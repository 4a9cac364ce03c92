use crate::common::geometry::Point3;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config file {path} is not valid JSON: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("config file {path} is not valid TOML: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported config format for {path}, expected .json or .toml")]
    UnsupportedFormat { path: String },

    #[error("invalid configuration: {reason}")]
    Invalid { reason: String },
}

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("lattice of {nodes} candidate nodes exceeds the configured limit of {limit}")]
    LatticeTooLarge { nodes: usize, limit: usize },
}

/// Query-time failures. An unreachable goal is not an error; planners report
/// it as `Ok(None)` so callers can tell "unreachable" from "malformed query".
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("node {node} is not part of the planning graph")]
    InvalidNode { node: Point3 },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("graph construction error: {0}")]
    Graph(#[from] GraphError),

    #[error("planning error: {0}")]
    Plan(#[from] PlanError),

    #[error("store error: {0}")]
    Store(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type GraphResult<T> = Result<T, GraphError>;
pub type PlanResult<T> = Result<T, PlanError>;
pub type AppResult<T> = Result<T, AppError>;
