use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to render chart: {0}")]
    Render(String),

    #[error("Failed to write chart artifact: {0}")]
    Io(#[from] std::io::Error),
}
