use std::convert::TryFrom;

use image::RgbaImage;

use super::PaletteRecord;

impl PaletteRecord {
    /// Render the palette as a horizontal strip, one band per color
    ///
    /// Each band is `band_width` pixels wide and `height` pixels high, in
    /// palette order from left to right. An empty palette yields an image
    /// with zero width. Returns `None` if the total width does not fit in a
    /// `u32`.
    pub fn swatch(&self, band_width: u32, height: u32) -> Option<RgbaImage> {
        let bands = u32::try_from(self.colors.len()).ok()?;
        let width = band_width.checked_mul(bands)?;

        let mut image = RgbaImage::new(width, height);
        for (band, color) in self.colors.iter().enumerate() {
            let pixel = color.to_rgba();
            let start = band as u32 * band_width;
            for x in start..start + band_width {
                for y in 0..height {
                    image.put_pixel(x, y, pixel);
                }
            }
        }
        Some(image)
    }
}
