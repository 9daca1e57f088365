//! HD44780 instruction definitions
//!
//! This module defines the instruction bytes and flag bits used to control
//! each HD44780 controller half. Instructions are sent with register select
//! low, data (DDRAM characters and CGRAM rows) with register select high.
//!
//! ## Instruction Structure
//!
//! Every instruction is one byte, transferred as two nibbles on the 4-bit bus:
//! 1. High nibble, latched by an enable strobe
//! 2. Low nibble, latched by a second enable strobe
//!
//! The instruction base (e.g. [`DISPLAY_CONTROL`]) is OR-ed with its flag bits.
//!
//! ## Example
//!
//! ```
//! use lcd4004::command::{BLINK_ON, CURSOR_ON, DISPLAY_CONTROL, DISPLAY_ON};
//!
//! // Display on, cursor on, blink off
//! assert_eq!(DISPLAY_CONTROL | DISPLAY_ON | CURSOR_ON, 0x0E);
//! assert_eq!(DISPLAY_CONTROL | DISPLAY_ON | CURSOR_ON | BLINK_ON, 0x0F);
//! ```

// Instructions

/// Clear display instruction (0x01)
///
/// Fills DDRAM with spaces and returns the cursor home. Takes about 1.52 ms.
pub const CLEAR_DISPLAY: u8 = 0x01;

/// Return home instruction (0x02)
///
/// Resets the DDRAM address and any display shift. Takes about 1.52 ms.
pub const RETURN_HOME: u8 = 0x02;

/// Entry mode set instruction (0x04)
///
/// OR with [`ENTRY_INCREMENT`] and [`ENTRY_SHIFT`].
pub const ENTRY_MODE_SET: u8 = 0x04;

/// Display on/off control instruction (0x08)
///
/// OR with [`DISPLAY_ON`], [`CURSOR_ON`] and [`BLINK_ON`].
pub const DISPLAY_CONTROL: u8 = 0x08;

/// Cursor or display shift instruction (0x10)
pub const CURSOR_SHIFT: u8 = 0x10;

/// Function set instruction (0x20)
///
/// Data length bit (0x10) is left clear: the expander only wires D4..D7.
pub const FUNCTION_SET: u8 = 0x20;

/// Set CGRAM address instruction (0x40)
///
/// Lower 6 bits select the glyph slot (bits 5..3) and row (bits 2..0).
pub const SET_CGRAM_ADDR: u8 = 0x40;

/// Set DDRAM address instruction (0x80)
///
/// Lower 7 bits are the DDRAM address.
pub const SET_DDRAM_ADDR: u8 = 0x80;

// Entry mode flags

/// Cursor moves right after each write (I/D)
pub const ENTRY_INCREMENT: u8 = 0x02;
/// Whole display shifts on each write (S)
pub const ENTRY_SHIFT: u8 = 0x01;

// Display control flags

/// Display on (D)
pub const DISPLAY_ON: u8 = 0x04;
/// Underline cursor on (C)
pub const CURSOR_ON: u8 = 0x02;
/// Blinking block cursor on (B)
pub const BLINK_ON: u8 = 0x01;

// Shift flags

/// Shift the display instead of moving the cursor (S/C)
pub const SHIFT_DISPLAY: u8 = 0x08;
/// Shift to the right (R/L); left when clear
pub const SHIFT_RIGHT: u8 = 0x04;
/// Shift to the left
pub const SHIFT_LEFT: u8 = 0x00;

// Function set flags

/// Two display lines per controller (N)
pub const TWO_LINES: u8 = 0x08;

// Reset-by-instruction nibbles

/// Nibble sent three times to recover 8-bit mode from an unknown state
pub const RESET_NIBBLE: u8 = 0x03;
/// Nibble that switches the interface to 4-bit mode
pub const FOUR_BIT_NIBBLE: u8 = 0x02;

/// Entry mode flags after the controller's internal reset
pub const ENTRY_MODE_DEFAULT: u8 = ENTRY_INCREMENT;
/// Display control flags the driver assumes after reset
pub const DISPLAY_CONTROL_DEFAULT: u8 = DISPLAY_ON;
