use std::io::BufRead;

use tracing::{debug, warn};

pub use color::*;

use crate::{error::FormatError, raw};

mod color;
mod swatch;
#[cfg(test)]
mod test;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A named palette, the unit the store loads and saves
///
/// The text form of a record is a metadata line `<count> <name>` followed by
/// one `#RRGGBB` line per color:
///
/// ```text
/// 2 Ocean
/// #0077BE
/// #00A6D6
/// ```
pub struct PaletteRecord {
    name: String,
    colors: Vec<PaletteColor>,
}

impl PaletteRecord {
    /// Create a new record without any colors
    ///
    /// Fails with [`FormatError::InvalidName`] if `name` is not a valid
    /// record name, see [`is_valid_name`].
    pub fn new<N: Into<String>>(name: N) -> Result<Self, FormatError> {
        Self::with_colors(name, Vec::new())
    }

    /// Create a new record from a list of colors
    pub fn with_colors<N: Into<String>>(
        name: N,
        colors: Vec<PaletteColor>,
    ) -> Result<Self, FormatError> {
        let name = checked_name(name.into())?;
        Ok(PaletteRecord { name, colors })
    }

    /// Read a record from a stream in the record text format
    ///
    /// `name` is the name the record is being loaded under and always becomes
    /// the record's name. A different name in the metadata line (left there by
    /// a save under another name) is only reported.
    pub fn from_reader<N: Into<String>, R: BufRead>(
        name: N,
        reader: R,
    ) -> Result<Self, FormatError> {
        let name = checked_name(name.into())?;
        let mut lines = reader.lines();

        let first = match lines.next() {
            Some(line) => line?,
            None => return Err(FormatError::parse(1, "missing metadata line")),
        };
        let header =
            raw::read_header(&first).map_err(|message| FormatError::parse(1, message))?;
        if header.name != name {
            warn!(
                "Record file for {} names itself {}, keeping {}",
                name, header.name, name
            );
        }
        let expected = header.count;

        let mut colors = Vec::new();
        for (offset, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let color = raw::read_color(&line)
                .map_err(|message| FormatError::parse(offset + 2, message))?;
            colors.push(color);
        }

        if colors.len() != expected {
            return Err(FormatError::parse(
                1,
                format!("expected {} colors, found {}", expected, colors.len()),
            ));
        }

        debug!("Parsed record {} with {} colors", name, colors.len());
        Ok(PaletteRecord { name, colors })
    }

    /// Parse a record from its full text
    pub fn parse<N: Into<String>>(name: N, text: &str) -> Result<Self, FormatError> {
        Self::from_reader(name, text.as_bytes())
    }

    /// The text written to the record's file, the inverse of [`PaletteRecord::parse`]
    pub fn save_string(&self) -> String {
        let mut out = format!("{} {}\n", self.colors.len(), self.name);
        for color in &self.colors {
            out.push_str(&color.to_hex());
            out.push('\n');
        }
        out
    }

    /// Get the name of the record
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the colors in palette order
    pub fn colors(&self) -> &[PaletteColor] {
        &self.colors
    }

    /// Append a color to the end of the palette
    pub fn push(&mut self, color: PaletteColor) {
        self.colors.push(color);
    }

    /// Insert a color at `index`, returning `false` if it is out of bounds
    pub fn insert(&mut self, index: usize, color: PaletteColor) -> bool {
        if index > self.colors.len() {
            return false;
        }
        self.colors.insert(index, color);
        true
    }

    /// Remove the color at `index`
    pub fn remove(&mut self, index: usize) -> Option<PaletteColor> {
        if index >= self.colors.len() {
            return None;
        }
        Some(self.colors.remove(index))
    }

    /// Replace the color at `index`, returning the old one
    pub fn replace(&mut self, index: usize, color: PaletteColor) -> Option<PaletteColor> {
        self.colors
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, color))
    }

    /// Number of colors in the palette
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

fn checked_name(name: String) -> Result<String, FormatError> {
    if is_valid_name(&name) {
        Ok(name)
    } else {
        Err(FormatError::InvalidName(name))
    }
}

/// Whether `name` can be used as a record name
///
/// Record names double as file name stems and index lines, so they must be
/// non blank and must not contain line breaks or path separators.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
        && name != "."
        && name != ".."
        && !name.contains(|c: char| matches!(c, '\n' | '\r' | '/' | '\\' | '\0'))
}
