//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Number of rows (height in pixels, corresponds to COM outputs)
    pub rows: u8,
    /// Number of columns (width in pixels, corresponds to SEG outputs)
    pub cols: u8,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - rows == 0 or rows > MAX_ROWS (64)
    /// - cols == 0 or cols > MAX_COLUMNS (128)
    pub fn new(rows: u8, cols: u8) -> Result<Self, BuilderError> {
        if rows == 0 || rows > MAX_ROWS {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        if cols == 0 || cols > MAX_COLUMNS {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of pages, the controller's native row-addressing unit
    ///
    /// A page is a band of 8 pixel rows; heights that are not a multiple of
    /// 8 round up and pad the final page.
    pub fn pages(&self) -> u8 {
        self.rows.div_ceil(8)
    }

    /// Calculate required framebuffer size in bytes
    ///
    /// One byte per column per page: `cols * ceil(rows / 8)`.
    pub fn buffer_size(&self) -> usize {
        self.cols as usize * self.pages() as usize
    }
}

/// Display rotation relative to native orientation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

/// Display supply configuration
///
/// Selects the charge pump, pre-charge, and per-panel contrast bytes sent
/// during initialization.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum VccSource {
    /// Panel voltage generated from the logic supply by the internal charge
    /// pump (the common case for bare OLED modules)
    #[default]
    SwitchCap,
    /// Panel voltage provided externally; internal charge pump disabled
    External,
}

impl VccSource {
    /// Charge pump setting byte for [`crate::command::CHARGE_PUMP`]
    pub fn charge_pump_byte(self) -> u8 {
        match self {
            Self::SwitchCap => 0x14,
            Self::External => 0x10,
        }
    }

    /// Pre-charge period byte for [`crate::command::SET_PRECHARGE`]
    pub fn precharge_byte(self) -> u8 {
        match self {
            Self::SwitchCap => 0xF1,
            Self::External => 0x22,
        }
    }
}

/// Per-panel-variant initialization bytes
///
/// The COM pin wiring and factory contrast differ between panel variants and
/// are keyed by resolution (and supply, for contrast). [`Builder`] consults
/// this table for any value not set explicitly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelDefaults {
    /// COM pins hardware configuration byte (command 0xDA)
    pub com_pins: u8,
    /// Contrast byte (command 0x81)
    pub contrast: u8,
}

impl PanelDefaults {
    /// Look up the defaults for a panel variant
    ///
    /// Known variants: 128x64, 128x32, 96x16. Unknown resolutions fall back
    /// to sequential COM wiring and a mid-range contrast.
    pub fn lookup(dimensions: Dimensions, vcc_source: VccSource) -> Self {
        let external = vcc_source == VccSource::External;
        match (dimensions.cols, dimensions.rows) {
            (128, 32) => Self {
                com_pins: 0x02,
                contrast: 0x8F,
            },
            (128, 64) => Self {
                com_pins: 0x12,
                contrast: if external { 0x9F } else { 0xCF },
            },
            (96, 16) => Self {
                com_pins: 0x02,
                contrast: if external { 0x10 } else { 0xAF },
            },
            _ => Self {
                com_pins: 0x02,
                contrast: 0x8F,
            },
        }
    }
}

/// Display configuration
///
/// This struct holds all configurable parameters for the SSD1306 controller.
/// Use [`Builder`] to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Initial display rotation
    pub rotation: Rotation,
    /// Panel supply configuration
    pub vcc_source: VccSource,
    /// COM pins hardware configuration byte
    pub com_pins: u8,
    /// Initial contrast
    pub contrast: u8,
    /// Pre-charge period byte
    pub precharge: u8,
    /// Vertical COM shift (0..=63)
    pub display_offset: u8,
    /// Display RAM start line (0..=63)
    pub start_line: u8,
    /// Clock divide ratio / oscillator frequency byte
    pub clock_divide: u8,
    /// VCOMH deselect level byte
    pub vcomh_deselect: u8,
    /// Map column 127 to SEG0 (horizontal mirror; matches most modules)
    pub segment_remap: bool,
    /// Scan COM outputs in descending order (vertical mirror; matches most
    /// modules)
    pub com_scan_descending: bool,
}

impl Config {
    /// Get the rotated dimensions based on rotation setting
    pub fn rotated_dimensions(&self) -> Dimensions {
        match self.rotation {
            Rotation::Rotate0 | Rotation::Rotate180 => self.dimensions,
            Rotation::Rotate90 | Rotation::Rotate270 => Dimensions {
                rows: self.dimensions.cols,
                cols: self.dimensions.rows,
            },
        }
    }
}

/// Builder for constructing display configuration
///
/// Values not set explicitly are derived from the panel variant table
/// ([`PanelDefaults`]) and the supply configuration ([`VccSource`]).
///
/// # Example
///
/// ```
/// use ssd1306::{Builder, Dimensions, Rotation, VccSource};
///
/// let dims = Dimensions::new(64, 128).unwrap();
/// let config = Builder::new()
///     .dimensions(dims)
///     .rotation(Rotation::Rotate180)
///     .vcc_source(VccSource::SwitchCap)
///     .build()
///     .unwrap();
/// assert_eq!(config.com_pins, 0x12);
/// assert_eq!(config.contrast, 0xCF);
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Display rotation
    rotation: Rotation,
    /// Panel supply configuration
    vcc_source: VccSource,
    /// COM pins override (default from the panel variant table)
    com_pins: Option<u8>,
    /// Contrast override (default from the panel variant table)
    contrast: Option<u8>,
    /// Pre-charge override (default from the supply configuration)
    precharge: Option<u8>,
    /// Vertical COM shift
    display_offset: u8,
    /// Display RAM start line
    start_line: u8,
    /// Clock divide ratio / oscillator frequency byte
    clock_divide: u8,
    /// VCOMH deselect level byte
    vcomh_deselect: u8,
    /// Horizontal mirror
    segment_remap: bool,
    /// Vertical mirror
    com_scan_descending: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            rotation: Rotation::Rotate0,
            vcc_source: VccSource::SwitchCap,
            com_pins: None,
            contrast: None,
            precharge: None,
            // No vertical shift
            display_offset: 0x00,
            // RAM line 0 at the top
            start_line: 0x00,
            // Datasheet-suggested ratio
            clock_divide: 0x80,
            // ~0.77 x Vcc
            vcomh_deselect: 0x40,
            // Both mirrors on, matching how most modules mount the glass
            segment_remap: true,
            com_scan_descending: true,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set initial display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the panel supply configuration
    pub fn vcc_source(mut self, vcc_source: VccSource) -> Self {
        self.vcc_source = vcc_source;
        self
    }

    /// Override the COM pins hardware configuration byte
    pub fn com_pins(mut self, value: u8) -> Self {
        self.com_pins = Some(value);
        self
    }

    /// Override the initial contrast
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = Some(value);
        self
    }

    /// Override the pre-charge period byte
    pub fn precharge(mut self, value: u8) -> Self {
        self.precharge = Some(value);
        self
    }

    /// Set the vertical COM shift (0..=63)
    pub fn display_offset(mut self, value: u8) -> Self {
        self.display_offset = value;
        self
    }

    /// Set the display RAM start line (0..=63)
    pub fn start_line(mut self, value: u8) -> Self {
        self.start_line = value;
        self
    }

    /// Set the clock divide ratio / oscillator frequency byte
    pub fn clock_divide(mut self, value: u8) -> Self {
        self.clock_divide = value;
        self
    }

    /// Set the VCOMH deselect level byte
    pub fn vcomh_deselect(mut self, value: u8) -> Self {
        self.vcomh_deselect = value;
        self
    }

    /// Set whether column 127 maps to SEG0 (horizontal mirror)
    pub fn segment_remap(mut self, value: bool) -> Self {
        self.segment_remap = value;
        self
    }

    /// Set whether COM outputs scan in descending order (vertical mirror)
    pub fn com_scan_descending(mut self, value: bool) -> Self {
        self.com_scan_descending = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set.
    pub fn build(self) -> Result<Config, BuilderError> {
        let dimensions = self.dimensions.ok_or(BuilderError::MissingDimensions)?;
        let defaults = PanelDefaults::lookup(dimensions, self.vcc_source);
        Ok(Config {
            dimensions,
            rotation: self.rotation,
            vcc_source: self.vcc_source,
            com_pins: self.com_pins.unwrap_or(defaults.com_pins),
            contrast: self.contrast.unwrap_or(defaults.contrast),
            precharge: self
                .precharge
                .unwrap_or_else(|| self.vcc_source.precharge_byte()),
            display_offset: self.display_offset,
            start_line: self.start_line,
            clock_divide: self.clock_divide,
            vcomh_deselect: self.vcomh_deselect,
            segment_remap: self.segment_remap,
            com_scan_descending: self.com_scan_descending,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_rejects_zero_and_oversize() {
        assert!(Dimensions::new(0, 128).is_err());
        assert!(Dimensions::new(64, 0).is_err());
        assert!(Dimensions::new(65, 128).is_err());
        assert!(matches!(
            Dimensions::new(64, 129),
            Err(BuilderError::InvalidDimensions { rows: 64, cols: 129 })
        ));
    }

    #[test]
    fn test_buffer_size_rounds_height_up_to_pages() {
        assert_eq!(Dimensions::new(64, 128).unwrap().buffer_size(), 1024);
        assert_eq!(Dimensions::new(32, 128).unwrap().buffer_size(), 512);
        assert_eq!(Dimensions::new(16, 96).unwrap().buffer_size(), 192);
        // 40 rows -> 5 pages
        assert_eq!(Dimensions::new(40, 72).unwrap().buffer_size(), 360);
        // 20 rows pad the third page
        assert_eq!(Dimensions::new(20, 64).unwrap().buffer_size(), 192);
    }

    #[test]
    fn test_pages() {
        assert_eq!(Dimensions::new(64, 128).unwrap().pages(), 8);
        assert_eq!(Dimensions::new(16, 96).unwrap().pages(), 2);
        assert_eq!(Dimensions::new(40, 72).unwrap().pages(), 5);
    }

    #[test]
    fn test_panel_defaults_lookup() {
        let d128x64 = Dimensions::new(64, 128).unwrap();
        let d128x32 = Dimensions::new(32, 128).unwrap();
        let d96x16 = Dimensions::new(16, 96).unwrap();

        let v = PanelDefaults::lookup(d128x64, VccSource::SwitchCap);
        assert_eq!(v, PanelDefaults { com_pins: 0x12, contrast: 0xCF });

        let v = PanelDefaults::lookup(d128x64, VccSource::External);
        assert_eq!(v, PanelDefaults { com_pins: 0x12, contrast: 0x9F });

        let v = PanelDefaults::lookup(d128x32, VccSource::SwitchCap);
        assert_eq!(v, PanelDefaults { com_pins: 0x02, contrast: 0x8F });

        let v = PanelDefaults::lookup(d96x16, VccSource::SwitchCap);
        assert_eq!(v, PanelDefaults { com_pins: 0x02, contrast: 0xAF });

        // Unknown variant falls back
        let d = Dimensions::new(48, 64).unwrap();
        let v = PanelDefaults::lookup(d, VccSource::SwitchCap);
        assert_eq!(v, PanelDefaults { com_pins: 0x02, contrast: 0x8F });
    }

    #[test]
    fn test_builder_missing_dimensions() {
        assert!(matches!(
            Builder::new().build(),
            Err(BuilderError::MissingDimensions)
        ));
    }

    #[test]
    fn test_builder_derives_panel_and_vcc_bytes() {
        let config = Builder::new()
            .dimensions(Dimensions::new(32, 128).unwrap())
            .build()
            .unwrap();
        assert_eq!(config.com_pins, 0x02);
        assert_eq!(config.contrast, 0x8F);
        assert_eq!(config.precharge, 0xF1);

        let config = Builder::new()
            .dimensions(Dimensions::new(64, 128).unwrap())
            .vcc_source(VccSource::External)
            .build()
            .unwrap();
        assert_eq!(config.contrast, 0x9F);
        assert_eq!(config.precharge, 0x22);
    }

    #[test]
    fn test_builder_overrides_win_over_lookup() {
        let config = Builder::new()
            .dimensions(Dimensions::new(64, 128).unwrap())
            .com_pins(0x02)
            .contrast(0x40)
            .precharge(0xD9)
            .build()
            .unwrap();
        assert_eq!(config.com_pins, 0x02);
        assert_eq!(config.contrast, 0x40);
        assert_eq!(config.precharge, 0xD9);
    }

    #[test]
    fn test_rotated_dimensions_swaps_for_quarter_turns() {
        let config = Builder::new()
            .dimensions(Dimensions::new(64, 128).unwrap())
            .rotation(Rotation::Rotate90)
            .build()
            .unwrap();
        let rotated = config.rotated_dimensions();
        assert_eq!(rotated.rows, 128);
        assert_eq!(rotated.cols, 64);

        let config = Builder::new()
            .dimensions(Dimensions::new(64, 128).unwrap())
            .rotation(Rotation::Rotate180)
            .build()
            .unwrap();
        assert_eq!(config.rotated_dimensions(), config.dimensions);
    }
}
