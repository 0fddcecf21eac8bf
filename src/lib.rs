//! A small catalog of named color palettes kept as plain text files
//!
//! A [`RecordStore`] reads the list of palette names from an index file once,
//! then loads [`PaletteRecord`]s from their own files when they are asked for,
//! either by name or a batch at a time in index order. All file access goes
//! through a [`FileContext`], so the store never leaves the storage area it
//! is given.
//!
//! ```
//! use palette_store::{MemoryContext, PaletteColor, PaletteRecord, RecordStore};
//!
//! let context = MemoryContext::new();
//! let mut store = RecordStore::new(&context);
//! let ocean = PaletteRecord::with_colors("Ocean", vec![PaletteColor::from_rgb(0x0077be)]).unwrap();
//! store.create(ocean).unwrap();
//!
//! let mut reopened = RecordStore::new(&context);
//! assert_eq!(reopened.load_next(10).loaded, vec!["Ocean"]);
//! assert_eq!(reopened.color_name("#0077BE").unwrap(), "Dark Cyan");
//! ```

#![warn(missing_docs)]

pub use error::*;
pub use names::{ColorNameResolver, NamedColor};
pub use record::*;
pub use store::*;

mod error;
mod names;
pub mod raw;
mod record;
mod store;
