//! Core display operations

use log::{debug, trace};

use crate::command::{
    ACTIVATE_SCROLL, CHARGE_PUMP, COLUMN_ADDR, COM_SCAN_DEC, COM_SCAN_INC, DEACTIVATE_SCROLL,
    DISPLAY_ALL_ON, DISPLAY_ALL_ON_RESUME, DISPLAY_OFF, DISPLAY_ON, INVERT_DISPLAY, MEMORY_MODE,
    NORMAL_DISPLAY, PAGE_ADDR, SCROLL_LEFT, SCROLL_RIGHT, SCROLL_VERTICAL_LEFT,
    SCROLL_VERTICAL_RIGHT, SEGMENT_REMAP, SET_CLOCK_DIVIDE, SET_COM_PINS, SET_CONTRAST,
    SET_DISPLAY_OFFSET, SET_MULTIPLEX, SET_PRECHARGE, SET_START_LINE, SET_VCOM_DESELECT,
    SET_VERTICAL_SCROLL_AREA,
};
use crate::config::Config;
use crate::error::Error;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Horizontal direction for continuous scrolls
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollDirection {
    /// Scroll content towards higher column addresses
    Right,
    /// Scroll content towards lower column addresses
    Left,
}

/// Core display driver for the SSD1306
///
/// This struct provides register-level operations for the SSD1306
/// controller: initialization, framebuffer transfer, and the immediate-mode
/// hardware settings (contrast, invert, on/off, scrolling). It holds no
/// pixel state; pair it with a [`Framebuffer`](crate::framebuffer::Framebuffer),
/// or use [`GraphicDisplay`](crate::graphics::GraphicDisplay) (requires the
/// `graphics` feature) which combines the two.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Last contrast written, restored by `dim(false)`
    contrast: u8,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// The controller is not touched until [`init`](Self::init) is called.
    pub fn new(interface: I, config: Config) -> Self {
        let contrast = config.contrast;
        Self {
            interface,
            config,
            contrast,
        }
    }

    /// Initialize the controller
    ///
    /// Runs the datasheet power-up sequence: multiplex and COM wiring for
    /// the configured panel variant, charge pump and pre-charge for the
    /// configured supply, horizontal memory addressing, then display on.
    /// Must be called before [`flush`](Self::flush).
    pub fn init(&mut self) -> DisplayResult<I> {
        let dims = self.config.dimensions;

        self.send_commands(&[
            DISPLAY_OFF,
            SET_CLOCK_DIVIDE,
            self.config.clock_divide,
            SET_MULTIPLEX,
            dims.rows - 1,
        ])?;

        self.send_commands(&[
            SET_DISPLAY_OFFSET,
            self.config.display_offset & 0x3F,
            SET_START_LINE | (self.config.start_line & 0x3F),
            CHARGE_PUMP,
            self.config.vcc_source.charge_pump_byte(),
        ])?;

        let segment_remap = if self.config.segment_remap {
            SEGMENT_REMAP | 0x01
        } else {
            SEGMENT_REMAP
        };
        let com_scan = if self.config.com_scan_descending {
            COM_SCAN_DEC
        } else {
            COM_SCAN_INC
        };
        // Horizontal addressing so flush can stream the whole buffer
        self.send_commands(&[MEMORY_MODE, 0x00, segment_remap, com_scan])?;

        self.send_commands(&[
            SET_COM_PINS,
            self.config.com_pins,
            SET_CONTRAST,
            self.config.contrast,
            SET_PRECHARGE,
            self.config.precharge,
            SET_VCOM_DESELECT,
            self.config.vcomh_deselect,
        ])?;

        self.send_commands(&[
            DISPLAY_ALL_ON_RESUME,
            NORMAL_DISPLAY,
            DEACTIVATE_SCROLL,
            DISPLAY_ON,
        ])?;

        self.contrast = self.config.contrast;
        debug!(
            "ssd1306: initialized {}x{} panel",
            dims.cols, dims.rows
        );
        Ok(())
    }

    /// Push a framebuffer to display RAM
    ///
    /// Programs the full column/page address window, then streams
    /// `dimensions.buffer_size()` bytes in a single data transfer. Extra
    /// bytes in a larger buffer are ignored.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if the buffer holds fewer than
    /// `dimensions.buffer_size()` bytes.
    pub fn flush(&mut self, buffer: &[u8]) -> DisplayResult<I> {
        let expected = self.config.dimensions.buffer_size();
        if buffer.len() < expected {
            return Err(Error::BufferTooSmall {
                required: expected,
                provided: buffer.len(),
            });
        }

        self.send_commands(&[
            PAGE_ADDR,
            0x00,
            0xFF, // past the last page; the address wraps before reaching it
            COLUMN_ADDR,
            0x00,
            self.config.dimensions.cols - 1,
        ])?;
        self.interface
            .send_data(&buffer[..expected])
            .map_err(Error::Interface)?;

        trace!("ssd1306: flushed {expected} bytes");
        Ok(())
    }

    /// Set the contrast (0x00 dimmest, 0xFF brightest)
    ///
    /// Takes effect immediately. The value is cached and restored by
    /// [`dim(false)`](Self::dim).
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<I> {
        self.send_commands(&[SET_CONTRAST, contrast])?;
        self.contrast = contrast;
        Ok(())
    }

    /// Get the cached contrast value
    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    /// Dim the display, or restore the last configured contrast
    ///
    /// The usable contrast range is too narrow for fine brightness control,
    /// but dropping to zero is a useful low-power/night mode. Buffer
    /// contents are unaffected.
    pub fn dim(&mut self, dim: bool) -> DisplayResult<I> {
        let level = if dim { 0x00 } else { self.contrast };
        self.send_commands(&[SET_CONTRAST, level])
    }

    /// Enable or disable inverted mode (black-on-white)
    ///
    /// Takes effect immediately; RAM contents are unchanged. When enabled, a
    /// RAM bit of 0 lights the pixel.
    pub fn set_invert(&mut self, invert: bool) -> DisplayResult<I> {
        self.send_commands(&[if invert { INVERT_DISPLAY } else { NORMAL_DISPLAY }])
    }

    /// Turn the panel on or off (sleep mode)
    ///
    /// RAM contents are retained while off.
    pub fn set_display_on(&mut self, on: bool) -> DisplayResult<I> {
        self.send_commands(&[if on { DISPLAY_ON } else { DISPLAY_OFF }])
    }

    /// Light every pixel regardless of RAM contents (lamp test), or resume
    /// following RAM
    pub fn set_all_on(&mut self, all_on: bool) -> DisplayResult<I> {
        self.send_commands(&[if all_on {
            DISPLAY_ALL_ON
        } else {
            DISPLAY_ALL_ON_RESUME
        }])
    }

    /// Start a continuous horizontal scroll over a page range
    ///
    /// Scrolls pages `start_page..=end_page` by one column every 5 frames
    /// until [`stop_scroll`](Self::stop_scroll). To scroll the whole display
    /// pass `0` and `pages() - 1`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPageRange` unless
    /// `start_page <= end_page < dimensions.pages()`.
    pub fn start_scroll_horizontal(
        &mut self,
        direction: ScrollDirection,
        start_page: u8,
        end_page: u8,
    ) -> DisplayResult<I> {
        self.check_page_range(start_page, end_page)?;
        let opcode = match direction {
            ScrollDirection::Right => SCROLL_RIGHT,
            ScrollDirection::Left => SCROLL_LEFT,
        };
        self.send_commands(&[
            opcode, 0x00, start_page, 0x00, end_page, 0x00, 0xFF, ACTIVATE_SCROLL,
        ])
    }

    /// Start a continuous diagonal scroll over a page range
    ///
    /// Combines the horizontal scroll with a one-row-per-frame vertical
    /// scroll of the full display height.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPageRange` unless
    /// `start_page <= end_page < dimensions.pages()`.
    pub fn start_scroll_diagonal(
        &mut self,
        direction: ScrollDirection,
        start_page: u8,
        end_page: u8,
    ) -> DisplayResult<I> {
        self.check_page_range(start_page, end_page)?;
        self.send_commands(&[
            SET_VERTICAL_SCROLL_AREA,
            0x00,
            self.config.dimensions.rows,
        ])?;
        let opcode = match direction {
            ScrollDirection::Right => SCROLL_VERTICAL_RIGHT,
            ScrollDirection::Left => SCROLL_VERTICAL_LEFT,
        };
        self.send_commands(&[opcode, 0x00, start_page, 0x00, end_page, 0x01, ACTIVATE_SCROLL])
    }

    /// Stop any scroll in progress
    ///
    /// Display RAM is left in the scrolled state; flush the framebuffer
    /// afterwards to restore it.
    pub fn stop_scroll(&mut self) -> DisplayResult<I> {
        self.send_commands(&[DEACTIVATE_SCROLL])
    }

    /// Send a raw command byte, bypassing the driver
    ///
    /// Escape hatch for datasheet commands without a dedicated method.
    pub fn command(&mut self, command: u8) -> DisplayResult<I> {
        self.send_commands(&[command])
    }

    /// Send a raw command stream, bypassing the driver
    pub fn commands(&mut self, commands: &[u8]) -> DisplayResult<I> {
        self.send_commands(commands)
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> crate::config::Dimensions {
        self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the driver and release the interface
    pub fn release(self) -> I {
        self.interface
    }

    fn check_page_range(&self, start: u8, end: u8) -> DisplayResult<I> {
        if start > end || end >= self.config.dimensions.pages() {
            return Err(Error::InvalidPageRange { start, end });
        }
        Ok(())
    }

    fn send_commands(&mut self, commands: &[u8]) -> DisplayResult<I> {
        self.interface
            .send_commands(commands)
            .map_err(Error::Interface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Dimensions, VccSource};
    use alloc::vec::Vec;

    #[derive(Debug)]
    struct MockInterface {
        commands: Vec<Vec<u8>>,
        data: Vec<Vec<u8>>,
    }

    impl MockInterface {
        fn new() -> Self {
            Self {
                commands: Vec::new(),
                data: Vec::new(),
            }
        }

        /// All command bytes in send order, across streams
        fn flat_commands(&self) -> Vec<u8> {
            self.commands.iter().flatten().copied().collect()
        }
    }

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn send_commands(&mut self, commands: &[u8]) -> Result<(), Self::Error> {
            self.commands.push(commands.to_vec());
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.data.push(data.to_vec());
            Ok(())
        }
    }

    fn test_display(rows: u8, cols: u8) -> Display<MockInterface> {
        let config = Builder::new()
            .dimensions(Dimensions::new(rows, cols).unwrap())
            .build()
            .unwrap();
        Display::new(MockInterface::new(), config)
    }

    fn subsequence_of(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_init_brackets_sequence_with_off_and_on() {
        let mut display = test_display(64, 128);
        display.init().unwrap();
        let cmds = display.interface.flat_commands();
        assert_eq!(cmds.first(), Some(&DISPLAY_OFF));
        assert_eq!(cmds.last(), Some(&DISPLAY_ON));
    }

    #[test]
    fn test_init_derives_multiplex_from_rows() {
        let mut display = test_display(32, 128);
        display.init().unwrap();
        let cmds = display.interface.flat_commands();
        assert!(subsequence_of(&cmds, &[SET_MULTIPLEX, 31]));
    }

    #[test]
    fn test_init_sends_panel_variant_bytes() {
        let mut display = test_display(64, 128);
        display.init().unwrap();
        let cmds = display.interface.flat_commands();
        assert!(subsequence_of(&cmds, &[SET_COM_PINS, 0x12]));
        assert!(subsequence_of(&cmds, &[SET_CONTRAST, 0xCF]));
        assert!(subsequence_of(&cmds, &[SET_PRECHARGE, 0xF1]));
        assert!(subsequence_of(&cmds, &[CHARGE_PUMP, 0x14]));
    }

    #[test]
    fn test_init_external_vcc_disables_charge_pump() {
        let config = Builder::new()
            .dimensions(Dimensions::new(64, 128).unwrap())
            .vcc_source(VccSource::External)
            .build()
            .unwrap();
        let mut display = Display::new(MockInterface::new(), config);
        display.init().unwrap();
        let cmds = display.interface.flat_commands();
        assert!(subsequence_of(&cmds, &[CHARGE_PUMP, 0x10]));
        assert!(subsequence_of(&cmds, &[SET_PRECHARGE, 0x22]));
    }

    #[test]
    fn test_init_uses_horizontal_addressing() {
        let mut display = test_display(64, 128);
        display.init().unwrap();
        let cmds = display.interface.flat_commands();
        assert!(subsequence_of(&cmds, &[MEMORY_MODE, 0x00]));
    }

    #[test]
    fn test_flush_programs_full_window_then_streams() {
        let mut display = test_display(64, 128);
        let buffer = alloc::vec![0xA5u8; 1024];
        display.flush(&buffer).unwrap();

        let cmds = display.interface.flat_commands();
        assert!(subsequence_of(&cmds, &[PAGE_ADDR, 0x00, 0xFF]));
        assert!(subsequence_of(&cmds, &[COLUMN_ADDR, 0x00, 127]));

        assert_eq!(display.interface.data.len(), 1);
        assert_eq!(display.interface.data[0].len(), 1024);
        assert!(display.interface.data[0].iter().all(|b| *b == 0xA5));
    }

    #[test]
    fn test_flush_truncates_oversized_buffer() {
        let mut display = test_display(32, 128);
        let buffer = alloc::vec![0xFFu8; 2048];
        display.flush(&buffer).unwrap();
        assert_eq!(display.interface.data[0].len(), 512);
    }

    #[test]
    fn test_flush_short_buffer_returns_error() {
        let mut display = test_display(64, 128);
        let buffer = alloc::vec![0u8; 1023];
        let result = display.flush(&buffer);
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall {
                required: 1024,
                provided: 1023
            })
        ));
        // Nothing was sent
        assert!(display.interface.commands.is_empty());
        assert!(display.interface.data.is_empty());
    }

    #[test]
    fn test_set_contrast_caches_value() {
        let mut display = test_display(64, 128);
        display.set_contrast(0x42).unwrap();
        assert_eq!(display.contrast(), 0x42);
        let cmds = display.interface.flat_commands();
        assert!(subsequence_of(&cmds, &[SET_CONTRAST, 0x42]));
    }

    #[test]
    fn test_dim_drops_to_zero_and_restores_cached_contrast() {
        let mut display = test_display(64, 128);
        display.set_contrast(0x42).unwrap();

        display.dim(true).unwrap();
        assert_eq!(
            display.interface.commands.last().unwrap().as_slice(),
            &[SET_CONTRAST, 0x00]
        );

        display.dim(false).unwrap();
        assert_eq!(
            display.interface.commands.last().unwrap().as_slice(),
            &[SET_CONTRAST, 0x42]
        );
        // dim does not clobber the cache
        assert_eq!(display.contrast(), 0x42);
    }

    #[test]
    fn test_dim_without_set_contrast_restores_panel_default() {
        let mut display = test_display(64, 128);
        display.dim(true).unwrap();
        display.dim(false).unwrap();
        assert_eq!(
            display.interface.commands.last().unwrap().as_slice(),
            &[SET_CONTRAST, 0xCF]
        );
    }

    #[test]
    fn test_set_invert() {
        let mut display = test_display(64, 128);
        display.set_invert(true).unwrap();
        assert_eq!(
            display.interface.commands.last().unwrap().as_slice(),
            &[INVERT_DISPLAY]
        );
        display.set_invert(false).unwrap();
        assert_eq!(
            display.interface.commands.last().unwrap().as_slice(),
            &[NORMAL_DISPLAY]
        );
    }

    #[test]
    fn test_set_display_on_off() {
        let mut display = test_display(64, 128);
        display.set_display_on(false).unwrap();
        assert_eq!(
            display.interface.commands.last().unwrap().as_slice(),
            &[DISPLAY_OFF]
        );
        display.set_display_on(true).unwrap();
        assert_eq!(
            display.interface.commands.last().unwrap().as_slice(),
            &[DISPLAY_ON]
        );
    }

    #[test]
    fn test_scroll_right_full_display() {
        let mut display = test_display(64, 128);
        display
            .start_scroll_horizontal(ScrollDirection::Right, 0, 7)
            .unwrap();
        assert_eq!(
            display.interface.commands.last().unwrap().as_slice(),
            &[SCROLL_RIGHT, 0x00, 0, 0x00, 7, 0x00, 0xFF, ACTIVATE_SCROLL]
        );
    }

    #[test]
    fn test_scroll_left_uses_left_opcode() {
        let mut display = test_display(64, 128);
        display
            .start_scroll_horizontal(ScrollDirection::Left, 2, 5)
            .unwrap();
        assert_eq!(
            display.interface.commands.last().unwrap().as_slice(),
            &[SCROLL_LEFT, 0x00, 2, 0x00, 5, 0x00, 0xFF, ACTIVATE_SCROLL]
        );
    }

    #[test]
    fn test_scroll_diagonal_programs_vertical_area_first() {
        let mut display = test_display(64, 128);
        display
            .start_scroll_diagonal(ScrollDirection::Right, 0, 7)
            .unwrap();
        let streams = &display.interface.commands;
        assert_eq!(
            streams[streams.len() - 2].as_slice(),
            &[SET_VERTICAL_SCROLL_AREA, 0x00, 64]
        );
        assert_eq!(
            streams.last().unwrap().as_slice(),
            &[
                SCROLL_VERTICAL_RIGHT,
                0x00,
                0,
                0x00,
                7,
                0x01,
                ACTIVATE_SCROLL
            ]
        );
    }

    #[test]
    fn test_scroll_rejects_inverted_range() {
        let mut display = test_display(64, 128);
        let result = display.start_scroll_horizontal(ScrollDirection::Right, 5, 2);
        assert!(matches!(
            result,
            Err(Error::InvalidPageRange { start: 5, end: 2 })
        ));
        assert!(display.interface.commands.is_empty());
    }

    #[test]
    fn test_scroll_rejects_page_past_end() {
        // 32 rows -> 4 pages, so page 4 is out of range
        let mut display = test_display(32, 128);
        let result = display.start_scroll_diagonal(ScrollDirection::Left, 0, 4);
        assert!(matches!(result, Err(Error::InvalidPageRange { .. })));
    }

    #[test]
    fn test_stop_scroll() {
        let mut display = test_display(64, 128);
        display.stop_scroll().unwrap();
        assert_eq!(
            display.interface.commands.last().unwrap().as_slice(),
            &[DEACTIVATE_SCROLL]
        );
    }

    #[test]
    fn test_raw_command_passthrough() {
        let mut display = test_display(64, 128);
        display.command(crate::command::NOP).unwrap();
        assert_eq!(
            display.interface.commands.last().unwrap().as_slice(),
            &[crate::command::NOP]
        );
        display.commands(&[SET_CONTRAST, 0x10]).unwrap();
        assert_eq!(
            display.interface.commands.last().unwrap().as_slice(),
            &[SET_CONTRAST, 0x10]
        );
    }

    #[test]
    fn test_all_on_lamp_test() {
        let mut display = test_display(64, 128);
        display.set_all_on(true).unwrap();
        assert_eq!(
            display.interface.commands.last().unwrap().as_slice(),
            &[DISPLAY_ALL_ON]
        );
        display.set_all_on(false).unwrap();
        assert_eq!(
            display.interface.commands.last().unwrap().as_slice(),
            &[DISPLAY_ALL_ON_RESUME]
        );
    }
}
