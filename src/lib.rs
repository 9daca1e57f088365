//! 40x4 Character LCD Driver
//!
//! A driver for 40x4 character displays built from two HD44780-compatible
//! controllers (top and bottom halves, 40x2 each) behind a PCF8574 I2C
//! port expander.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - 4-bit transfers with per-controller enable strobes
//! - Backlight control
//! - Custom glyphs (8 CGRAM slots)
//! - `core::fmt::Write` for formatted text
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use core::fmt::Write;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::i2c::{I2c, Operation};
//! use lcd4004::{Config, Display, I2cInterface};
//!
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let i2c = MockI2c;
//! # let delay = MockDelay;
//! let interface = I2cInterface::new(i2c, 0x3F);
//! let mut display = Display::new(interface, delay, Config::default());
//!
//! let _ = display.begin(40, 4);
//! let _ = display.set_backlight(255);
//! let _ = display.set_cursor(0, 2);
//! let _ = write!(display, "Bottom half, row {}", 2);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// HD44780 instruction definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Port expander pin mapping
pub mod expander;
/// Hardware interface abstraction
pub mod interface;
/// Row-to-controller addressing
pub mod layout;

pub use config::{Builder, Config, Geometry, MAX_COLUMNS, MAX_ROWS};
pub use display::{Display, GLYPH_SLOTS};
pub use error::{BuilderError, Error};
pub use expander::Partition;
pub use interface::{DEFAULT_ADDRESS, DisplayInterface, I2cInterface};
