use crate::error::Error;
use crate::{DEFAULT_ARRAY_NAME, DEFAULT_BYTES_PER_LINE};

/// Byte order of each packed 16-bit pixel value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// High byte first (what ST7789-class panels expect)
    #[default]
    Big,
    /// Low byte first
    Little,
}

/// Options for one conversion run. Supplied fresh per call; the pipeline
/// holds no process-wide state.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Byte literals per generated source line
    pub bytes_per_line: usize,
    /// Name of the emitted array; empty falls back to `picture_data`
    pub array_name: String,
    /// Replace every channel value with `255 - value` before packing
    pub invert_colors: bool,
    /// Which byte of the packed value is emitted first
    pub byte_order: ByteOrder,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            bytes_per_line: DEFAULT_BYTES_PER_LINE,
            array_name: DEFAULT_ARRAY_NAME.to_string(),
            invert_colors: false,
            byte_order: ByteOrder::default(),
        }
    }
}

impl ConvertOptions {
    /// Array name with the documented fallback for an empty field
    pub fn array_name(&self) -> &str {
        if self.array_name.is_empty() {
            DEFAULT_ARRAY_NAME
        } else {
            &self.array_name
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.bytes_per_line == 0 {
            return Err(Error::Config(
                "bytes per line must be a positive number".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parse a "bytes per line" option field.
///
/// An empty field falls back to the default of 12. Anything else must parse
/// as a positive integer; non-numeric text (whitespace-only included), zero
/// and negative values are configuration errors, never silent defaults.
pub fn parse_bytes_per_line(field: &str) -> Result<usize, Error> {
    if field.is_empty() {
        return Ok(DEFAULT_BYTES_PER_LINE);
    }
    let value: i64 = field
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("invalid bytes per line value: {field:?}")))?;
    if value <= 0 {
        return Err(Error::Config(format!(
            "bytes per line must be positive, got {value}"
        )));
    }
    Ok(value as usize)
}
