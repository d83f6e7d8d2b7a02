use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing {}", .0.display())]
    MissingInput(PathBuf),
    #[error("Error reading {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Error writing {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("Invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },
}
