//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`I2cInterface`]
//! struct for writing the port expander over I2C.
//!
//! ## Hardware Requirements
//!
//! The display needs:
//! - I2C bus (SDA + SCL)
//! - A PCF8574 (or compatible) expander at a single 7-bit address
//!
//! Serializing several devices that share one bus is the bus
//! implementation's job (e.g. `embedded-hal-bus`).
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{I2c, Operation};
//! use lcd4004::{DisplayInterface, I2cInterface};
//! # use core::convert::Infallible;
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
//! // Expander with A0..A2 pulled high
//! let mut interface = I2cInterface::new(MockI2c, 0x27);
//!
//! // Backlight on, everything else low
//! let _ = interface.write_port(0x08);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::I2c;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Default PCF8574 address (A0..A2 high)
pub const DEFAULT_ADDRESS: u8 = 0x27;

/// Trait for the bus that carries expander words
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// transport that can deliver a single byte to the expander.
///
/// ## Implementing
///
/// For most cases, use the provided [`I2cInterface`] struct. Implement this
/// trait yourself for other transports or for recording words in tests.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Prepare the bus before the first write
    ///
    /// Called once at the start of [`Display::begin`](crate::Display::begin).
    /// The default does nothing, which suits HALs that configure the bus when
    /// it is constructed.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus cannot be brought up.
    fn init(&mut self) -> InterfaceResult<(), Self::Error> {
        Ok(())
    }

    /// Drive all eight expander outputs with `word`
    ///
    /// # Errors
    ///
    /// Returns an error if the transfer is not acknowledged.
    fn write_port(&mut self, word: u8) -> InterfaceResult<(), Self::Error>;
}

/// I2C interface implementation for the PCF8574
///
/// Implements [`DisplayInterface`] for an embedded-hal v1.0 [`I2c`] bus.
/// Each word is sent as its own single-byte write transaction.
#[derive(Debug)]
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit expander address
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new interface for the expander at `address`
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Get the expander address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the I2C bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_port(&mut self, word: u8) -> InterfaceResult<(), Self::Error> {
        self.i2c.write(self.address, &[word])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError;

    impl embedded_hal::i2c::Error for MockError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
        }
    }

    #[derive(Debug, Default)]
    struct MockI2c {
        writes: Vec<(u8, Vec<u8>)>,
        nack: bool,
    }

    impl ErrorType for MockI2c {
        type Error = MockError;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.nack {
                return Err(MockError);
            }
            for op in operations.iter() {
                if let Operation::Write(bytes) = op {
                    self.writes.push((address, bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_default_address() {
        assert_eq!(DEFAULT_ADDRESS, 0x27);
    }

    #[test]
    fn test_write_port_sends_single_byte_to_address() {
        let mut interface = I2cInterface::new(MockI2c::default(), 0x3F);
        assert_eq!(interface.address(), 0x3F);

        interface.write_port(0xA9).unwrap();
        interface.write_port(0x08).unwrap();

        let i2c = interface.release();
        assert_eq!(
            i2c.writes,
            alloc::vec![(0x3F, alloc::vec![0xA9]), (0x3F, alloc::vec![0x08])]
        );
    }

    #[test]
    fn test_write_port_reports_nack() {
        let i2c = MockI2c {
            nack: true,
            ..MockI2c::default()
        };
        let mut interface = I2cInterface::new(i2c, 0x27);
        assert_eq!(interface.write_port(0x00), Err(MockError));
    }

    #[test]
    fn test_init_default_is_noop() {
        let mut interface = I2cInterface::new(MockI2c::default(), 0x27);
        assert!(interface.init().is_ok());
        assert!(interface.release().writes.is_empty());
    }
}
