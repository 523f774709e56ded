use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[expect(missing_docs, reason = "The variants are self-explanatory.")]
#[derive(Debug, Display, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    #[display("pixel index {index} out of range for a strip of {len} LEDs")]
    IndexOutOfRange { index: usize, len: usize },

    #[display("encode target holds {capacity} entries but the frame needs {needed}")]
    BufferTooSmall { needed: usize, capacity: usize },

    #[display("layout places a channel at byte {position} but the data word has {limit}")]
    InvalidLayout { position: usize, limit: usize },

    #[display("timing resolution must be non-zero")]
    InvalidResolution,

    #[display("pulse duration exceeds the 15-bit RMT tick field at this resolution")]
    InvalidTiming,

    // `#[error(not(source))]` below: the esp-hal RMT error types do not
    // implement `core::error::Error`.
    #[cfg(any(
        feature = "esp32",
        feature = "esp32c3",
        feature = "esp32c6",
        feature = "esp32h2",
        feature = "esp32s2",
        feature = "esp32s3"
    ))]
    #[display("RMT channel configuration failed: {_0:?}")]
    RmtConfig(#[error(not(source))] esp_hal::rmt::ConfigError),

    #[cfg(any(
        feature = "esp32",
        feature = "esp32c3",
        feature = "esp32c6",
        feature = "esp32h2",
        feature = "esp32s2",
        feature = "esp32s3"
    ))]
    #[display("RMT transmission failed: {_0:?}")]
    Transmit(#[error(not(source))] esp_hal::rmt::Error),
}
