use std::cell::OnceCell;

use tracing::debug;

use crate::record::PaletteColor;

mod table;

/// An entry of the reference table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedColor {
    /// Canonical name of the color
    pub name: String,
    #[allow(missing_docs)]
    pub color: PaletteColor,
}

/// Finds the closest named color for a palette color
///
/// The reference table is only built the first time a name is looked up and
/// is reused afterwards. The resolver is not meant to be shared between
/// threads.
#[derive(Debug, Default)]
pub struct ColorNameResolver {
    source: Option<Vec<(String, u32)>>,
    table: OnceCell<Vec<NamedColor>>,
}

impl ColorNameResolver {
    /// A resolver over the X11 color names
    pub fn new() -> Self {
        Self::default()
    }

    /// A resolver over a custom list of `(name, 0xRRGGBB)` entries
    ///
    /// Declaration order decides ties, the first entry wins.
    pub fn with_table<N: Into<String>, I: IntoIterator<Item = (N, u32)>>(entries: I) -> Self {
        ColorNameResolver {
            source: Some(
                entries
                    .into_iter()
                    .map(|(name, value)| (name.into(), value))
                    .collect(),
            ),
            table: OnceCell::new(),
        }
    }

    /// Whether the reference table has been built yet
    pub fn is_built(&self) -> bool {
        self.table.get().is_some()
    }

    fn table(&self) -> &[NamedColor] {
        self.table.get_or_init(|| {
            let table: Vec<NamedColor> = match &self.source {
                Some(entries) => entries
                    .iter()
                    .map(|(name, value)| NamedColor {
                        name: name.clone(),
                        color: PaletteColor::from_rgb(*value),
                    })
                    .collect(),
                None => table::X11_COLORS
                    .iter()
                    .map(|&(name, value)| NamedColor {
                        name: name.to_string(),
                        color: PaletteColor::from_rgb(value),
                    })
                    .collect(),
            };
            debug!("Built color name table with {} entries", table.len());
            table
        })
    }

    /// Get the table entry closest to `color`
    ///
    /// An exact value match wins, otherwise the entry with the smallest
    /// squared RGB distance. Returns `None` only for an empty table.
    pub fn nearest(&self, color: PaletteColor) -> Option<&NamedColor> {
        let table = self.table();
        if let Some(exact) = table.iter().find(|entry| entry.color == color) {
            return Some(exact);
        }

        let mut best: Option<(&NamedColor, u32)> = None;
        for entry in table {
            let distance = entry.color.distance_squared(color);
            match best {
                Some((_, best_distance)) if best_distance <= distance => {}
                _ => best = Some((entry, distance)),
            }
        }
        best.map(|(entry, _)| entry)
    }

    /// Get the name of the table entry closest to `color`
    pub fn name_of(&self, color: PaletteColor) -> Option<&str> {
        self.nearest(color).map(|entry| entry.name.as_str())
    }

    /// Get the closest color name for a hex string such as `#1E90FF`
    ///
    /// Returns `None` if `hex` is not a hex color or the table is empty.
    pub fn name_of_hex(&self, hex: &str) -> Option<&str> {
        let color = PaletteColor::from_hex(hex)?;
        self.name_of(color)
    }
}
