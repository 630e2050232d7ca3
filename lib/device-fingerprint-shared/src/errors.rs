use thiserror::Error;

/// An error that happened while collecting
/// the attributes of a single domain.
#[derive(Error, Debug)]
pub enum CollectError {
    /// The hostname of this machine could not be read.
    #[error("could not read the hostname: {0}")]
    Hostname(std::io::Error),
    /// The hostname did not resolve to any address.
    #[error("could not resolve {host}: {reason}")]
    Resolve {
        /// The hostname that was looked up
        host: String,
        /// Why the lookup failed
        reason: String,
    },
    /// Neither a mac address nor a machine id was available.
    #[error("could not determine the node id: {0}")]
    NodeId(String),
    /// The file system at the root could not be queried.
    #[error("could not read the root file system: {0}")]
    RootDisk(std::io::Error),
    /// No disk is mounted at the file system root.
    #[error("no disk is mounted at the file system root")]
    NoRootDisk,
    /// Other errors
    #[error("{0}")]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for CollectError {
    fn from(value: anyhow::Error) -> Self {
        Self::Other(value)
    }
}
