/// Base name of the index file when none is given
pub const DEFAULT_INDEX_BASE: &str = "RecordsIndex";

/// Suffix appended to the index name and to every record name
pub const DEFAULT_SUFFIX: &str = ".txt";

/// Where a [`RecordStore`](crate::RecordStore) finds its files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Index file name without its suffix
    pub index_base: String,
    /// Suffix of the index and record files, including the dot
    pub suffix: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        StoreOptions {
            index_base: DEFAULT_INDEX_BASE.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl StoreOptions {
    /// Use another index file
    pub fn with_index_base<S: Into<String>>(mut self, index_base: S) -> Self {
        self.index_base = index_base.into();
        self
    }

    /// Use another file suffix
    pub fn with_suffix<S: Into<String>>(mut self, suffix: S) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// File name of the index
    pub fn index_file_name(&self) -> String {
        format!("{}{}", self.index_base, self.suffix)
    }

    /// File name of the record called `name`
    pub fn record_file_name(&self, name: &str) -> String {
        format!("{}{}", name, self.suffix)
    }
}
