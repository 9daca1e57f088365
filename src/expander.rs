//! Port expander wiring
//!
//! The PCF8574 drives eight output lines from one register. Each write
//! defines every line at once, so the register select, enable and backlight
//! bits must be re-stated on every transfer.
//!
//! | Bit  | Line                     |
//! |------|--------------------------|
//! | 7..4 | D7..D4 (data nibble)     |
//! | 3    | Backlight                |
//! | 2    | Enable, bottom partition |
//! | 1    | Enable, top partition    |
//! | 0    | Register select          |
//!
//! ## Example
//!
//! ```
//! use lcd4004::expander::{encode, Partition};
//!
//! // Data nibble 0x4 strobed into the bottom controller, backlight on
//! assert_eq!(encode(0x4, true, Partition::Bottom, 255), 0x4D);
//! ```

/// Register select (high = data register)
pub const PIN_RS: u8 = 0x01;
/// Enable strobe for the top controller
pub const PIN_EN_TOP: u8 = 0x02;
/// Enable strobe for the bottom controller
pub const PIN_EN_BOTTOM: u8 = 0x04;
/// Backlight enable
pub const PIN_BACKLIGHT: u8 = 0x08;
/// Both enable strobes
pub const PIN_EN_MASK: u8 = PIN_EN_TOP | PIN_EN_BOTTOM;

/// Controller half selected by an enable strobe
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Partition {
    /// No enable line asserted
    Deselected,
    /// Top controller (rows 0 and 1)
    #[default]
    Top,
    /// Bottom controller (rows 2 and 3)
    Bottom,
}

impl Partition {
    /// Both controllers, in broadcast order
    pub const BOTH: [Self; 2] = [Self::Top, Self::Bottom];

    /// Enable bit for this partition
    pub fn enable_bit(self) -> u8 {
        match self {
            Self::Deselected => 0,
            Self::Top => PIN_EN_TOP,
            Self::Bottom => PIN_EN_BOTTOM,
        }
    }
}

/// Pack a nibble and control lines into one expander word
///
/// Only the low 4 bits of `nibble` are used. Any non-zero `backlight` level
/// turns the backlight on.
pub fn encode(nibble: u8, is_data: bool, partition: Partition, backlight: u8) -> u8 {
    let mut word = (nibble & 0x0F) << 4;
    if is_data {
        word |= PIN_RS;
    }
    word |= partition.enable_bit();
    if backlight > 0 {
        word |= PIN_BACKLIGHT;
    }
    word
}

/// Same word with both enable strobes released
pub fn release_enable(word: u8) -> u8 {
    word & !PIN_EN_MASK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_instruction_nibble_top() {
        assert_eq!(encode(0x3, false, Partition::Top, 0), 0x32);
    }

    #[test]
    fn test_encode_data_nibble_bottom_with_backlight() {
        assert_eq!(encode(0x1, true, Partition::Bottom, 1), 0x1D);
    }

    #[test]
    fn test_encode_deselected_has_no_enable() {
        let word = encode(0xF, true, Partition::Deselected, 0);
        assert_eq!(word & PIN_EN_MASK, 0);
        assert_eq!(word, 0xF1);
    }

    #[test]
    fn test_encode_masks_upper_bits() {
        assert_eq!(encode(0x12, false, Partition::Deselected, 0), 0x20);
    }

    #[test]
    fn test_any_positive_backlight_level_sets_bit() {
        for level in [1u8, 7, 128, 255] {
            assert_eq!(
                encode(0, false, Partition::Deselected, level),
                PIN_BACKLIGHT
            );
        }
        assert_eq!(encode(0, false, Partition::Deselected, 0), 0);
    }

    #[test]
    fn test_release_enable_keeps_other_lines() {
        let word = encode(0xA, true, Partition::Top, 3);
        assert_eq!(release_enable(word), 0xA9);
    }

    #[test]
    fn test_partition_default_is_top() {
        assert_eq!(Partition::default(), Partition::Top);
        assert_eq!(Partition::BOTH, [Partition::Top, Partition::Bottom]);
    }
}
