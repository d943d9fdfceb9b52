use rclayout_types::ColorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Invalid color: {0}")]
    Color(#[from] ColorError),
    #[error("Container end without a matching start")]
    UnbalancedContainer,
    #[error("Document finished with {0} open container(s)")]
    UnclosedContainers(usize),
    #[error("Not a layout document (bad magic bytes)")]
    BadMagic,
    #[error("Encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}
