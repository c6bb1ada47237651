use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report artifact: {0}")]
    Io(#[from] std::io::Error),
}
