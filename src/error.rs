//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//!
//! Transport failures never abort an instruction sequence. The driver finishes
//! the sequence and then reports the first failure as [`Error::Interface`].
//!
//! ## Example
//!
//! ```
//! use lcd4004::{Builder, BuilderError, Geometry};
//!
//! // Enable pulse shorter than the controller's 450 ns minimum
//! let result = Builder::new().enable_pulse_ns(100).build();
//! assert!(matches!(result, Err(BuilderError::EnablePulseTooShort { ns: 100 })));
//!
//! // Five rows do not fit the row map
//! assert!(Geometry::new(40, 5).is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum columns per row (one 40x2 controller per partition)
pub const MAX_COLUMNS: u8 = 40;

/// Maximum rows across both partitions
pub const MAX_ROWS: u8 = 4;

/// Minimum enable pulse width accepted by the HD44780, in nanoseconds
pub const MIN_ENABLE_PULSE_NS: u32 = 450;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (I2C)
    ///
    /// The first transport failure seen while running an operation. The
    /// operation's remaining transfers were still sent.
    Interface(I::Error),
    /// Row index outside the row map
    ///
    /// Nothing was sent and the active partition is unchanged.
    InvalidRow {
        /// Requested row
        row: u8,
    },
    /// Invalid geometry passed to [`Display::begin`](crate::Display::begin)
    InvalidGeometry {
        /// Requested columns
        columns: u8,
        /// Requested rows
        rows: u8,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::InvalidRow { row } => {
                write!(f, "Invalid row {row} (display has {MAX_ROWS} rows)")
            }
            Self::InvalidGeometry { columns, rows } => {
                write!(f, "Invalid geometry: {columns}x{rows}")
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Enable pulse below [`MIN_ENABLE_PULSE_NS`]
    EnablePulseTooShort {
        /// Requested pulse width in nanoseconds
        ns: u32,
    },
    /// Geometry out of range
    ///
    /// See [`Geometry::new()`](crate::config::Geometry::new) for constraints.
    InvalidGeometry {
        /// Requested columns
        columns: u8,
        /// Requested rows
        rows: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EnablePulseTooShort { ns } => write!(
                f,
                "Enable pulse of {ns} ns is below the {MIN_ENABLE_PULSE_NS} ns minimum"
            ),
            Self::InvalidGeometry { columns, rows } => write!(
                f,
                "Invalid geometry {columns}x{rows} (max {MAX_COLUMNS}x{MAX_ROWS})"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_builder_error_messages() {
        assert_eq!(
            BuilderError::EnablePulseTooShort { ns: 100 }.to_string(),
            "Enable pulse of 100 ns is below the 450 ns minimum"
        );
        assert_eq!(
            BuilderError::InvalidGeometry { columns: 41, rows: 2 }.to_string(),
            "Invalid geometry 41x2 (max 40x4)"
        );
    }
}
