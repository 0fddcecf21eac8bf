use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Cursor, Write},
    path::{Path, PathBuf},
};

/// Access to the private storage area a [`RecordStore`](crate::RecordStore) lives in
///
/// Files are addressed by plain file names. Every handle is closed when it is
/// dropped.
pub trait FileContext {
    /// Whether a file with this name exists
    fn exists(&self, name: &str) -> bool;

    /// Open a file for reading
    ///
    /// A missing file must be reported with [`io::ErrorKind::NotFound`].
    fn reader(&self, name: &str) -> io::Result<Box<dyn BufRead + '_>>;

    /// Open a file for writing, replacing whatever was there
    fn writer(&self, name: &str) -> io::Result<Box<dyn Write + '_>>;
}

impl<C: FileContext + ?Sized> FileContext for &C {
    fn exists(&self, name: &str) -> bool {
        (**self).exists(name)
    }

    fn reader(&self, name: &str) -> io::Result<Box<dyn BufRead + '_>> {
        (**self).reader(name)
    }

    fn writer(&self, name: &str) -> io::Result<Box<dyn Write + '_>> {
        (**self).writer(name)
    }
}

/// A [`FileContext`] over a single directory on disk
#[derive(Debug, Clone)]
pub struct DirContext {
    root: PathBuf,
}

impl DirContext {
    /// Use an existing directory
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        DirContext { root: root.into() }
    }

    /// Use a directory, creating it and its parents if needed
    pub fn create<P: Into<PathBuf>>(root: P) -> io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(DirContext { root })
    }

    /// The directory all files live in
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `name` inside the root, refusing anything that is not a plain file name
    fn path(&self, name: &str) -> io::Result<PathBuf> {
        if name.is_empty()
            || name == "."
            || name == ".."
            || name.contains(|c: char| c == '/' || c == '\\')
        {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{:?} is not a plain file name", name),
            ));
        }
        Ok(self.root.join(name))
    }
}

impl FileContext for DirContext {
    fn exists(&self, name: &str) -> bool {
        self.path(name).map(|path| path.is_file()).unwrap_or(false)
    }

    fn reader(&self, name: &str) -> io::Result<Box<dyn BufRead + '_>> {
        let file = File::open(self.path(name)?)?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn writer(&self, name: &str) -> io::Result<Box<dyn Write + '_>> {
        let file = File::create(self.path(name)?)?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

/// An in-memory [`FileContext`]
///
/// Keeps every file as bytes and counts how many times a file was opened for
/// writing, which makes it usable as a spy in tests. It can also be switched
/// to refuse writes.
#[derive(Debug, Default)]
pub struct MemoryContext {
    files: RefCell<BTreeMap<String, Vec<u8>>>,
    writes: Cell<usize>,
    read_only: Cell<bool>,
}

impl MemoryContext {
    /// An empty storage area
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, builder style
    pub fn with_file<N: Into<String>, B: Into<Vec<u8>>>(self, name: N, contents: B) -> Self {
        self.insert(name, contents);
        self
    }

    /// Add or replace a file without counting it as a write
    pub fn insert<N: Into<String>, B: Into<Vec<u8>>>(&self, name: N, contents: B) {
        self.files.borrow_mut().insert(name.into(), contents.into());
    }

    /// Remove a file
    pub fn remove(&self, name: &str) -> Option<Vec<u8>> {
        self.files.borrow_mut().remove(name)
    }

    /// Get the contents of a file as text
    pub fn contents(&self, name: &str) -> Option<String> {
        self.files
            .borrow()
            .get(name)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Names of all files, sorted
    pub fn file_names(&self) -> Vec<String> {
        self.files.borrow().keys().cloned().collect()
    }

    /// How many times a file was opened for writing
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Make every following [`FileContext::writer`] call fail
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }
}

impl FileContext for MemoryContext {
    fn exists(&self, name: &str) -> bool {
        self.files.borrow().contains_key(name)
    }

    fn reader(&self, name: &str) -> io::Result<Box<dyn BufRead + '_>> {
        match self.files.borrow().get(name) {
            Some(bytes) => Ok(Box::new(Cursor::new(bytes.clone()))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", name),
            )),
        }
    }

    fn writer(&self, name: &str) -> io::Result<Box<dyn Write + '_>> {
        if self.read_only.get() {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is read only", name),
            ));
        }
        self.writes.set(self.writes.get() + 1);
        self.files.borrow_mut().insert(name.to_string(), Vec::new());
        Ok(Box::new(MemoryWriter {
            context: self,
            name: name.to_string(),
            buffer: Vec::new(),
        }))
    }
}

/// Collects written bytes and stores them on flush and on drop
struct MemoryWriter<'a> {
    context: &'a MemoryContext,
    name: String,
    buffer: Vec<u8>,
}

impl MemoryWriter<'_> {
    fn commit(&self) {
        self.context
            .files
            .borrow_mut()
            .insert(self.name.clone(), self.buffer.clone());
    }
}

impl Write for MemoryWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.commit();
        Ok(())
    }
}

impl Drop for MemoryWriter<'_> {
    fn drop(&mut self) {
        self.commit();
    }
}
