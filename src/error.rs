use thiserror::Error;

pub type SliderResult<T> = Result<T, SliderError>;

#[derive(Debug, Error)]
pub enum SliderError {
    #[error("date source holds {count} dates, at most {max} are supported")]
    DateSourceTooLarge { count: usize, max: usize },

    #[error("index {index} is out of range for a date source of {count} dates")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("invalid slider geometry: width={width}, height={height}")]
    InvalidGeometry { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
