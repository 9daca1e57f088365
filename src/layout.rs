//! Row addressing
//!
//! Maps a logical row of the 4-row display to the controller half that owns
//! it and that controller's DDRAM base address.
//!
//! | Row | Partition | DDRAM base |
//! |-----|-----------|------------|
//! | 0   | Top       | 0x00       |
//! | 1   | Top       | 0x40       |
//! | 2   | Bottom    | 0x14       |
//! | 3   | Bottom    | 0x54       |
//!
//! The table is fixed. The configured column count does not change it, and
//! the offsets are only exact for 40-column partitions.
//!
//! ## Example
//!
//! ```
//! use lcd4004::expander::Partition;
//! use lcd4004::layout::row_address;
//!
//! let addr = row_address(2).ok_or(())?;
//! assert_eq!(addr.partition, Partition::Bottom);
//! assert_eq!(addr.ddram_address(5), 0x19);
//!
//! assert!(row_address(4).is_none());
//! # Ok::<(), ()>(())
//! ```

use crate::expander::Partition;

/// Number of logical rows
pub const ROWS: usize = 4;

/// Controller half and DDRAM base address for one logical row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowAddress {
    /// Controller that owns the row
    pub partition: Partition,
    /// DDRAM address of column 0
    pub base: u8,
}

impl RowAddress {
    /// DDRAM address of `col` in this row, truncated to 7 bits
    pub fn ddram_address(&self, col: u8) -> u8 {
        self.base.wrapping_add(col) & 0x7F
    }
}

/// Row-to-partition map
pub const ROW_MAP: [RowAddress; ROWS] = [
    RowAddress {
        partition: Partition::Top,
        base: 0x00,
    },
    RowAddress {
        partition: Partition::Top,
        base: 0x40,
    },
    RowAddress {
        partition: Partition::Bottom,
        base: 0x14,
    },
    RowAddress {
        partition: Partition::Bottom,
        base: 0x54,
    },
];

/// Look up a row, returning `None` when `row` is outside the map
pub fn row_address(row: u8) -> Option<RowAddress> {
    ROW_MAP.get(row as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_map_entries() {
        let expected = [
            (Partition::Top, 0x00),
            (Partition::Top, 0x40),
            (Partition::Bottom, 0x14),
            (Partition::Bottom, 0x54),
        ];
        for (row, (partition, base)) in expected.into_iter().enumerate() {
            let addr = row_address(row as u8).unwrap();
            assert_eq!(addr.partition, partition);
            assert_eq!(addr.base, base);
        }
    }

    #[test]
    fn test_out_of_range_rows() {
        assert!(row_address(4).is_none());
        assert!(row_address(u8::MAX).is_none());
    }

    #[test]
    fn test_ddram_address_adds_column() {
        let addr = row_address(3).unwrap();
        assert_eq!(addr.ddram_address(0), 0x54);
        assert_eq!(addr.ddram_address(39), 0x7B);
    }

    #[test]
    fn test_ddram_address_stays_within_seven_bits() {
        let addr = row_address(3).unwrap();
        // 0x54 + 0x30 = 0x84, wraps into the 7-bit address space
        assert_eq!(addr.ddram_address(0x30), 0x04);
    }
}
