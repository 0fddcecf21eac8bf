use std::fmt;

use image::Rgba;

use crate::raw;

/// A single opaque palette color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PaletteColor {
    /// Red component
    pub red: u8,
    /// Green component
    pub green: u8,
    /// Blue component
    pub blue: u8,
}

impl PaletteColor {
    /// Create a color from its components
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        PaletteColor { red, green, blue }
    }

    /// Create a color from a packed `0xRRGGBB` value, ignoring the top byte
    pub const fn from_rgb(value: u32) -> Self {
        PaletteColor {
            red: (value >> 16) as u8,
            green: (value >> 8) as u8,
            blue: value as u8,
        }
    }

    /// Pack the color into `0xRRGGBB`
    pub fn to_rgb(self) -> u32 {
        (self.red as u32) << 16 | (self.green as u32) << 8 | self.blue as u32
    }

    /// Parse `#RRGGBB`, `RRGGBB` or `0xRRGGBB`
    pub fn from_hex(value: &str) -> Option<Self> {
        raw::read_lookup_hex(value)
    }

    /// The upper case `#RRGGBB` form, as written to record files
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Squared euclidean distance between two colors in RGB space
    pub fn distance_squared(self, other: PaletteColor) -> u32 {
        let dr = self.red as i32 - other.red as i32;
        let dg = self.green as i32 - other.green as i32;
        let db = self.blue as i32 - other.blue as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Fully opaque RGBA pixel of this color
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.red, self.green, self.blue, 255])
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl From<[u8; 3]> for PaletteColor {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        PaletteColor::new(red, green, blue)
    }
}
