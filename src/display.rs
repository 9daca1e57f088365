//! Core display operations

use embedded_hal::delay::DelayNs;

use crate::command::{
    BLINK_ON, CLEAR_DISPLAY, CURSOR_ON, CURSOR_SHIFT, DISPLAY_CONTROL, DISPLAY_CONTROL_DEFAULT,
    DISPLAY_ON, ENTRY_INCREMENT, ENTRY_MODE_DEFAULT, ENTRY_MODE_SET, ENTRY_SHIFT,
    FOUR_BIT_NIBBLE, FUNCTION_SET, RESET_NIBBLE, RETURN_HOME, SET_CGRAM_ADDR, SET_DDRAM_ADDR,
    SHIFT_DISPLAY, SHIFT_LEFT, SHIFT_RIGHT, TWO_LINES,
};
use crate::config::{Config, Geometry};
use crate::error::Error;
use crate::expander::{self, Partition};
use crate::interface::DisplayInterface;
use crate::layout;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Number of CGRAM glyph slots
pub const GLYPH_SLOTS: u8 = 8;

/// Core driver for a two-controller 40x4 display
///
/// Owns the interface, the delay source and every flag the controllers need
/// re-sent. Global settings (entry mode, display control, clear, home,
/// scrolling, glyphs) go to both partitions, top first. Cursor moves and
/// character writes go to one partition only.
///
/// A transport failure does not stop an operation. The remaining transfers
/// are sent, the failure is logged, and the first one is returned as
/// [`Error::Interface`] once the operation is complete.
pub struct Display<I, D>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Delay source for strobe and settle timing
    delay: D,
    /// Display configuration
    config: Config,
    /// Geometry recorded by `begin`
    geometry: Geometry,
    /// Backlight level, non-zero is on
    backlight: u8,
    /// Entry mode flags (I/D, S)
    entry_mode: u8,
    /// Display control flags (D, C, B)
    display_control: u8,
    /// Partition receiving character writes
    active: Partition,
    /// First transport failure of the running operation
    transport_error: Option<I::Error>,
}

impl<I, D> Display<I, D>
where
    I: DisplayInterface,
    D: DelayNs,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent until [`begin`](Self::begin).
    pub fn new(interface: I, delay: D, config: Config) -> Self {
        let backlight = config.backlight;
        Self {
            interface,
            delay,
            config,
            geometry: Geometry::default(),
            backlight,
            entry_mode: ENTRY_MODE_DEFAULT,
            display_control: DISPLAY_CONTROL_DEFAULT,
            active: Partition::Top,
            transport_error: None,
        }
    }

    /// Bring both controllers from an unknown state into 4-bit mode
    ///
    /// Runs the HD44780 "initializing by instruction" sequence on both
    /// partitions, selects one or two lines, then turns the display on,
    /// clears it and sets left-to-right entry.
    ///
    /// `columns` is validated and recorded but does not change addressing.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidGeometry` before sending anything if the
    /// geometry is out of range, or `Error::Interface` with the first
    /// transport failure after the full sequence was sent.
    pub fn begin(&mut self, columns: u8, rows: u8) -> DisplayResult<I> {
        let geometry =
            Geometry::new(columns, rows).map_err(|_| Error::InvalidGeometry { columns, rows })?;
        self.geometry = geometry;
        log::debug!("begin: {columns}x{rows}");

        if let Err(e) = self.interface.init() {
            self.report(e);
        }

        // Deselect both controllers and wait out power-on
        self.write_port(expander::encode(0, false, Partition::Deselected, self.backlight));
        self.delay.delay_ms(self.config.power_on_delay_ms);

        self.display_control = DISPLAY_CONTROL_DEFAULT;
        self.entry_mode = ENTRY_MODE_DEFAULT;

        for wait_us in self.config.reset_delays_us {
            self.broadcast_nibble(RESET_NIBBLE);
            self.delay.delay_us(wait_us);
        }
        self.broadcast_nibble(FOUR_BIT_NIBBLE);

        let mut function = FUNCTION_SET;
        if geometry.is_multi_line() {
            function |= TWO_LINES;
        }
        self.broadcast(function);

        self.display_control |= DISPLAY_ON;
        self.send_display_control();
        self.send_clear();
        self.entry_mode |= ENTRY_INCREMENT;
        self.send_entry_mode();

        self.finish()
    }

    /// Clear the display (same as [`clear`](Self::clear))
    pub fn init(&mut self) -> DisplayResult<I> {
        self.clear()
    }

    /// Clear both partitions and return their cursors home
    pub fn clear(&mut self) -> DisplayResult<I> {
        self.send_clear();
        self.finish()
    }

    /// Return both cursors home and undo any display shift
    ///
    /// Character writes go to the top partition afterwards.
    pub fn home(&mut self) -> DisplayResult<I> {
        self.broadcast(RETURN_HOME);
        self.delay.delay_us(self.config.clear_home_us);
        self.active = Partition::Top;
        self.finish()
    }

    /// Move the cursor to `col` on `row`
    ///
    /// Selects the partition that owns `row`; following character writes go
    /// there. Only that partition receives the address.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRow` if `row` >= 4. Nothing is sent and the
    /// active partition is unchanged.
    pub fn set_cursor(&mut self, col: u8, row: u8) -> DisplayResult<I> {
        let addr = layout::row_address(row).ok_or(Error::InvalidRow { row })?;
        self.active = addr.partition;
        self.send(SET_DDRAM_ADDR | addr.ddram_address(col), false, addr.partition);
        self.finish()
    }

    /// Turn the display off (DDRAM is kept)
    pub fn no_display(&mut self) -> DisplayResult<I> {
        self.update_display_control(DISPLAY_ON, false)
    }

    /// Turn the display on
    pub fn display(&mut self) -> DisplayResult<I> {
        self.update_display_control(DISPLAY_ON, true)
    }

    /// Show the underline cursor
    pub fn cursor(&mut self) -> DisplayResult<I> {
        self.update_display_control(CURSOR_ON, true)
    }

    /// Hide the underline cursor
    pub fn no_cursor(&mut self) -> DisplayResult<I> {
        self.update_display_control(CURSOR_ON, false)
    }

    /// Blink the cursor position
    pub fn blink(&mut self) -> DisplayResult<I> {
        self.update_display_control(BLINK_ON, true)
    }

    /// Stop blinking the cursor position
    pub fn no_blink(&mut self) -> DisplayResult<I> {
        self.update_display_control(BLINK_ON, false)
    }

    /// Shift the contents of both partitions one column left
    pub fn scroll_display_left(&mut self) -> DisplayResult<I> {
        self.broadcast(CURSOR_SHIFT | SHIFT_DISPLAY | SHIFT_LEFT);
        self.finish()
    }

    /// Shift the contents of both partitions one column right
    pub fn scroll_display_right(&mut self) -> DisplayResult<I> {
        self.broadcast(CURSOR_SHIFT | SHIFT_DISPLAY | SHIFT_RIGHT);
        self.finish()
    }

    /// Text flows left to right
    pub fn left_to_right(&mut self) -> DisplayResult<I> {
        self.update_entry_mode(ENTRY_INCREMENT, true)
    }

    /// Text flows right to left
    pub fn right_to_left(&mut self) -> DisplayResult<I> {
        self.update_entry_mode(ENTRY_INCREMENT, false)
    }

    /// Shift the display on each write ("right justify" from the cursor)
    pub fn autoscroll(&mut self) -> DisplayResult<I> {
        self.update_entry_mode(ENTRY_SHIFT, true)
    }

    /// Keep the display still on each write
    pub fn no_autoscroll(&mut self) -> DisplayResult<I> {
        self.update_entry_mode(ENTRY_SHIFT, false)
    }

    /// Set the backlight level; any non-zero level switches it on
    ///
    /// The expander has no memory of the backlight line, so a deselected
    /// word is written straight away to latch it.
    pub fn set_backlight(&mut self, level: u8) -> DisplayResult<I> {
        self.backlight = level;
        log::debug!("backlight: {level}");
        self.write_port(expander::encode(0, false, Partition::Deselected, level));
        self.finish()
    }

    /// Define a custom glyph on both partitions
    ///
    /// `slot` is wrapped into 0..8, so slot 9 is slot 1. Each bitmap row uses
    /// its low 5 bits. The controllers are left addressing CGRAM; call
    /// [`set_cursor`](Self::set_cursor) or [`home`](Self::home) before
    /// writing text.
    pub fn create_char(&mut self, slot: u8, bitmap: &[u8; 8]) -> DisplayResult<I> {
        let slot = slot % GLYPH_SLOTS;
        for partition in Partition::BOTH {
            self.send(SET_CGRAM_ADDR | (slot << 3), false, partition);
            for &row in bitmap {
                self.send(row, true, partition);
            }
        }
        self.finish()
    }

    /// Write one character code to the active partition
    ///
    /// Best effort: always returns 1. A transport failure is only logged.
    pub fn write(&mut self, ch: u8) -> usize {
        self.send(ch, true, self.active);
        // already logged by `report`
        self.transport_error = None;
        1
    }

    /// Write character codes to the active partition, one transfer each
    pub fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        bytes.iter().map(|&ch| self.write(ch)).sum()
    }

    /// Get the backlight level
    pub fn backlight(&self) -> u8 {
        self.backlight
    }

    /// Get the entry mode flags
    pub fn entry_mode(&self) -> u8 {
        self.entry_mode
    }

    /// Get the display control flags
    pub fn display_control(&self) -> u8 {
        self.display_control
    }

    /// Get the partition receiving character writes
    pub fn active_partition(&self) -> Partition {
        self.active
    }

    /// Get the geometry recorded by `begin`
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Release the interface and delay
    pub fn release(self) -> (I, D) {
        (self.interface, self.delay)
    }

    fn update_display_control(&mut self, flag: u8, on: bool) -> DisplayResult<I> {
        if on {
            self.display_control |= flag;
        } else {
            self.display_control &= !flag;
        }
        self.send_display_control();
        self.finish()
    }

    fn update_entry_mode(&mut self, flag: u8, on: bool) -> DisplayResult<I> {
        if on {
            self.entry_mode |= flag;
        } else {
            self.entry_mode &= !flag;
        }
        self.send_entry_mode();
        self.finish()
    }

    fn send_display_control(&mut self) {
        self.broadcast(DISPLAY_CONTROL | self.display_control);
    }

    fn send_entry_mode(&mut self) {
        self.broadcast(ENTRY_MODE_SET | self.entry_mode);
    }

    fn send_clear(&mut self) {
        self.broadcast(CLEAR_DISPLAY);
        self.delay.delay_us(self.config.clear_home_us);
    }

    /// Send an instruction to both partitions, top first
    fn broadcast(&mut self, instruction: u8) {
        for partition in Partition::BOTH {
            self.send(instruction, false, partition);
        }
    }

    fn broadcast_nibble(&mut self, nibble: u8) {
        for partition in Partition::BOTH {
            self.send_nibble(nibble, false, partition);
        }
    }

    /// Send a byte as high nibble then low nibble
    fn send(&mut self, value: u8, is_data: bool, partition: Partition) {
        self.send_nibble(value >> 4, is_data, partition);
        self.send_nibble(value & 0x0F, is_data, partition);
    }

    /// Present a nibble and strobe the partition's enable line
    fn send_nibble(&mut self, nibble: u8, is_data: bool, partition: Partition) {
        let word = expander::encode(nibble, is_data, partition, self.backlight);
        self.write_port(word);
        self.delay.delay_ns(self.config.enable_pulse_ns);
        self.write_port(expander::release_enable(word));
        self.delay.delay_us(self.config.settle_us);
    }

    fn write_port(&mut self, word: u8) {
        log::trace!("port <- {word:#04x}");
        if let Err(e) = self.interface.write_port(word) {
            self.report(e);
        }
    }

    fn report(&mut self, e: I::Error) {
        log::warn!("expander write failed: {e:?}");
        if self.transport_error.is_none() {
            self.transport_error = Some(e);
        }
    }

    /// Surface the first transport failure of the operation, if any
    fn finish(&mut self) -> DisplayResult<I> {
        match self.transport_error.take() {
            Some(e) => Err(Error::Interface(e)),
            None => Ok(()),
        }
    }
}

impl<I, D> core::fmt::Write for Display<I, D>
where
    I: DisplayInterface,
    D: DelayNs,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}
