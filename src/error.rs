use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid series options: {0}")]
    InvalidOptions(String),

    #[error("unknown extent series: `{0}`")]
    UnknownSeries(String),

    #[error("drawing backend failure: {0}")]
    Backend(String),
}
