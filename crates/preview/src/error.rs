use rclayout_types::ColorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("Invalid color: {0}")]
    Color(#[from] ColorError),
}
