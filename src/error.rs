use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("chart must be rendered before it can be updated")]
    NotRendered,

    #[error("chart has been disposed")]
    Disposed,

    #[error("render backend failure: {0}")]
    Backend(String),
}
