use std::path::PathBuf;

/// Conversion errors. All of them are terminal for the current request;
/// the pipeline performs no retries and no fallback substitution.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Source image unreadable or not a recognized raster format
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// Invalid conversion options, rejected before any packing or formatting
    #[error("invalid conversion options: {0}")]
    Config(String),

    /// Destination file could not be written
    #[error("failed to write output file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
