use std::{
    collections::{hash_map::Entry, HashMap},
    io::{self, BufRead, Write},
};

use tracing::{debug, error, info, warn};

pub use context::*;
pub use options::*;

use crate::{
    error::{StoreError, StoreResult},
    names::ColorNameResolver,
    raw,
    record::{is_valid_name, PaletteRecord},
};

mod context;
mod options;

/// Outcome of a batch load
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Names that were loaded, in index order
    pub loaded: Vec<String>,
    /// Names that could not be loaded, with the reason
    pub failed: Vec<(String, StoreError)>,
}

impl LoadReport {
    /// Whether nothing was attempted
    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty() && self.failed.is_empty()
    }

    /// Whether every attempted record was loaded
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// A catalog of palette records backed by an index file
///
/// The index is read once when the store is opened. Records are only read
/// from their files when asked for, either by name or in batches following
/// index order.
#[derive(Debug)]
pub struct RecordStore<C> {
    context: C,
    options: StoreOptions,
    index_file_name: String,
    record_names: Vec<String>,
    records: HashMap<String, PaletteRecord>,
    /// How many names, from the start of the index, `load_next` went over
    loaded_count: usize,
    failed: Vec<String>,
    index_error: Option<StoreError>,
    color_names: ColorNameResolver,
}

impl<C: FileContext> RecordStore<C> {
    /// Open the store with the default index file
    pub fn new(context: C) -> Self {
        Self::open(context, StoreOptions::default())
    }

    /// Open the store with the index file `<index_base>.txt`
    pub fn with_index<S: Into<String>>(context: C, index_base: S) -> Self {
        Self::open(context, StoreOptions::default().with_index_base(index_base))
    }

    /// Open the store and read the list of record names from its index
    ///
    /// This never fails. A missing index gives an empty catalog and a broken
    /// one keeps the names read before the failure; either way the problem is
    /// logged and available from [`RecordStore::index_error`].
    pub fn open(context: C, options: StoreOptions) -> Self {
        let index_file_name = options.index_file_name();
        info!("Creating record store using index file {}", index_file_name);

        if context.exists(&index_file_name) {
            debug!("Index file {} found", index_file_name);
        } else {
            warn!(
                "Index file {} not found, it may still be readable",
                index_file_name
            );
        }

        let (record_names, index_error) = read_index(&context, &index_file_name);
        info!(
            "Finished reading index file {} with {} record names",
            index_file_name,
            record_names.len()
        );

        RecordStore {
            context,
            options,
            index_file_name,
            record_names,
            records: HashMap::new(),
            loaded_count: 0,
            failed: Vec::new(),
            index_error,
            color_names: ColorNameResolver::new(),
        }
    }

    /// Load the record called `name` from its file
    ///
    /// A record which is already in memory is replaced. The file is read even
    /// when `name` is not in the index, but only indexed records are kept.
    pub fn load_by_name(&mut self, name: &str) -> StoreResult<&PaletteRecord> {
        let record = self.read_record(name)?;

        if !self.record_names.iter().any(|known| known == name) {
            let err = StoreError::UnknownRecord(name.to_string());
            warn!("{}", err);
            return Err(err);
        }

        self.failed.retain(|failed| failed != name);
        match self.records.entry(name.to_string()) {
            Entry::Occupied(mut entry) => {
                debug!("Replacing loaded record {}", name);
                entry.insert(record);
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => Ok(entry.insert(record)),
        }
    }

    /// Load the next `count` records in index order
    ///
    /// The cursor moves past every attempted name even when loading it fails;
    /// such names are remembered for [`RecordStore::retry_failed`].
    pub fn load_next(&mut self, count: usize) -> LoadReport {
        let mut report = LoadReport::default();
        let start = self.loaded_count;
        let end = self.record_names.len().min(start.saturating_add(count));
        if start >= end {
            debug!(
                "Nothing to load, cursor at {} of {}",
                start,
                self.record_names.len()
            );
            return report;
        }

        info!(
            "Attempting to load the next {} record{}",
            count,
            if count == 1 { "" } else { "s" }
        );
        for index in start..end {
            let name = self.record_names[index].clone();
            debug!("Record load {}: {}", index, name);
            match self.load_by_name(&name).map(|_| ()) {
                Ok(_) => report.loaded.push(name),
                Err(err) => {
                    if !self.failed.contains(&name) {
                        self.failed.push(name.clone());
                    }
                    report.failed.push((name, err));
                }
            }
        }
        self.loaded_count = end;

        report
    }

    /// Try again to load every record a batch load failed on
    ///
    /// The load cursor is not moved.
    pub fn retry_failed(&mut self) -> LoadReport {
        let mut report = LoadReport::default();
        let names = std::mem::take(&mut self.failed);
        if !names.is_empty() {
            info!("Retrying {} failed records", names.len());
        }

        for name in names {
            match self.load_by_name(&name).map(|_| ()) {
                Ok(_) => report.loaded.push(name),
                Err(err) => {
                    self.failed.push(name.clone());
                    report.failed.push((name, err));
                }
            }
        }

        report
    }

    /// Save the loaded record called `name` to its file
    pub fn save_by_name(&self, name: &str) -> StoreResult<()> {
        let Some(record) = self.records.get(name) else {
            let err = StoreError::RecordNotLoaded(name.to_string());
            warn!("Attempting to save a record that is not loaded: {}", err);
            return Err(err);
        };
        self.save_as(record, name)
    }

    /// Save `record` to the file of its own name
    pub fn save(&self, record: &PaletteRecord) -> StoreResult<()> {
        self.save_as(record, record.name())
    }

    /// Save `record` to the file of `name`, overwriting it
    ///
    /// Neither the index nor the loaded records change, even if `name` is not
    /// the record's own name.
    pub fn save_as(&self, record: &PaletteRecord, name: &str) -> StoreResult<()> {
        if !is_valid_name(name) {
            let err = StoreError::InvalidName(name.to_string());
            error!("{}", err);
            return Err(err);
        }

        let file = self.options.record_file_name(name);
        info!("Saving record under name {}", name);
        write_file(&self.context, &file, &record.save_string()).map_err(|source| {
            let err = StoreError::RecordWrite { file, source };
            error!("{}", err);
            err
        })
    }

    /// Add `name` to the index and rewrite the index file
    ///
    /// Nothing changes in memory if the index file cannot be written. An
    /// index that exists but was not read completely is never rewritten, as
    /// that would drop the names that could not be read.
    pub fn register_name(&mut self, name: &str) -> StoreResult<()> {
        self.check_index_complete()?;
        self.check_new_name(name)?;

        let mut contents = String::new();
        for known in self.record_names.iter().map(String::as_str).chain(Some(name)) {
            contents.push_str(known);
            contents.push('\n');
        }
        write_file(&self.context, &self.index_file_name, &contents).map_err(|source| {
            let err = StoreError::IndexWrite {
                file: self.index_file_name.clone(),
                source,
            };
            error!("{}", err);
            err
        })?;

        info!("Registered record name {}", name);
        self.record_names.push(name.to_string());
        Ok(())
    }

    /// Add a new record: write its file, register its name and keep it loaded
    pub fn create(&mut self, record: PaletteRecord) -> StoreResult<&PaletteRecord> {
        self.check_index_complete()?;
        self.check_new_name(record.name())?;
        self.save(&record)?;
        self.register_name(record.name())?;

        let name = record.name().to_string();
        Ok(self.records.entry(name).or_insert(record))
    }

    /// Drop a record from memory, leaving its file and index entry alone
    pub fn unload(&mut self, name: &str) -> Option<PaletteRecord> {
        let record = self.records.remove(name);
        if record.is_some() {
            debug!("Unloaded record {}", name);
        }
        record
    }

    /// Get the name of the color closest to a hex value such as `#1E90FF`
    pub fn color_name(&self, hex: &str) -> StoreResult<&str> {
        self.color_names
            .name_of_hex(hex)
            .ok_or_else(|| StoreError::InvalidColor(hex.to_string()))
    }

    /// A missing index may be started from scratch, any other failure may not
    fn check_index_complete(&self) -> StoreResult<()> {
        match &self.index_error {
            None => Ok(()),
            Some(StoreError::IndexUnavailable { source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                Ok(())
            }
            Some(_) => {
                let err = StoreError::IndexIncomplete(self.index_file_name.clone());
                error!("{}", err);
                Err(err)
            }
        }
    }

    fn check_new_name(&self, name: &str) -> StoreResult<()> {
        let err = if !is_valid_name(name) {
            StoreError::InvalidName(name.to_string())
        } else if self.record_names.iter().any(|known| known == name) {
            StoreError::DuplicateName(name.to_string())
        } else {
            return Ok(());
        };
        warn!("{}", err);
        Err(err)
    }

    fn read_record(&self, name: &str) -> StoreResult<PaletteRecord> {
        let file = self.options.record_file_name(name);
        let reader = match self.context.reader(&file) {
            Ok(reader) => reader,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                let err = StoreError::RecordNotFound(file);
                error!("{}", err);
                return Err(err);
            }
            Err(source) => {
                let err = StoreError::RecordRead {
                    file,
                    source: source.into(),
                };
                error!("{}", err);
                return Err(err);
            }
        };

        PaletteRecord::from_reader(name, reader).map_err(|source| {
            let err = StoreError::RecordRead { file, source };
            error!("{}", err);
            err
        })
    }
}

impl<C> RecordStore<C> {
    /// File name of the index backing this store
    pub fn index_file_name(&self) -> &str {
        &self.index_file_name
    }

    /// Every known record name, in index order
    pub fn record_names(&self) -> &[String] {
        &self.record_names
    }

    /// How many names the batch loads went over so far
    pub fn loaded_count(&self) -> usize {
        self.loaded_count
    }

    /// Get a loaded record
    pub fn get(&self, name: &str) -> Option<&PaletteRecord> {
        self.records.get(name)
    }

    /// Whether the record called `name` is in memory
    pub fn is_loaded(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// The loaded records, in index order
    pub fn loaded(&self) -> impl Iterator<Item = &PaletteRecord> {
        self.record_names
            .iter()
            .filter_map(move |name| self.records.get(name))
    }

    /// Number of loaded records
    pub fn loaded_len(&self) -> usize {
        self.records.len()
    }

    /// Number of known record names
    pub fn len(&self) -> usize {
        self.record_names.len()
    }

    /// Whether the index names no records
    pub fn is_empty(&self) -> bool {
        self.record_names.is_empty()
    }

    /// Whether batch loading has gone through the whole index
    pub fn is_fully_loaded(&self) -> bool {
        self.loaded_count == self.record_names.len()
    }

    /// Names a batch load failed on and that have not loaded since
    pub fn failed_names(&self) -> &[String] {
        &self.failed
    }

    /// The problem met while reading the index, if any
    pub fn index_error(&self) -> Option<&StoreError> {
        self.index_error.as_ref()
    }

    /// The color name lookup used by [`RecordStore::color_name`]
    pub fn color_names(&self) -> &ColorNameResolver {
        &self.color_names
    }

    /// The storage area this store reads and writes
    pub fn context(&self) -> &C {
        &self.context
    }

    /// The options this store was opened with
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }
}

/// Read all record names from the index, stopping at the first read error
fn read_index<C: FileContext>(context: &C, file: &str) -> (Vec<String>, Option<StoreError>) {
    let mut names = Vec::new();

    let reader = match context.reader(file) {
        Ok(reader) => reader,
        Err(source) => {
            let err = StoreError::IndexUnavailable {
                file: file.to_string(),
                source,
            };
            error!("{}", err);
            return (names, Some(err));
        }
    };

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(source) => {
                let err = StoreError::IndexRead {
                    file: file.to_string(),
                    read: names.len(),
                    source,
                };
                error!("{}", err);
                return (names, Some(err));
            }
        };
        if let Some(name) = raw::read_index_line(&line) {
            debug!("Found record name: {}", name);
            names.push(name.to_string());
        }
    }

    (names, None)
}

fn write_file<C: FileContext>(context: &C, file: &str, contents: &str) -> io::Result<()> {
    let mut writer = context.writer(file)?;
    writer.write_all(contents.as_bytes())?;
    writer.flush()
}
