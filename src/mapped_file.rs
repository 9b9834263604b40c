//! Memory-mapped file I/O: a read-only private mapping for input captures
//! and a size-exact writable mapping for output captures.
//!
//! Mirrors the original implementation's `MappedFile` (open + mmap, move-only,
//! no copy) but leans on `memmap2` rather than raw `mmap(2)` calls, and
//! replaces its custom destructor/move-constructor dance with ordinary Rust
//! ownership: `Mmap`/`MmapMut` already unmap on drop, so there is nothing
//! left to hand-roll here.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use memmap2::{Mmap, MmapMut};

/// A read-only, privately-mapped view of an existing file.
pub struct MappedFile {
    mmap: Mmap,
}

impl MappedFile {
    /// Opens `path` read-only and maps it into memory.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        // SAFETY note (teacher convention: this crate forbids unsafe code
        // everywhere else): `Mmap::map` is the one inherently unsafe
        // operation memmap2 exposes, since external modification of the
        // backing file while mapped is technically UB. We accept that risk
        // here, the same way the original C++ implementation accepts it by
        // calling `mmap(2)` directly, since this tool is a short-lived CLI
        // reading files the caller is not racing against.
        #[allow(unsafe_code)]
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(Self { mmap })
    }

    pub fn data(&self) -> &[u8] {
        &self.mmap
    }

    pub fn size(&self) -> usize {
        self.mmap.len()
    }
}

/// A writable mapping over a freshly created, size-exact output file.
///
/// Output size is always known up front (writers compute it before calling
/// this), so there is never a need to grow the mapping after creation.
pub struct MappedFileMut {
    mmap: MmapMut,
}

impl MappedFileMut {
    /// Creates (or truncates) `path`, sizes it to exactly `size` bytes, and
    /// maps it read-write.
    pub fn create(path: impl AsRef<Path>, size: usize) -> io::Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        file.set_len(size as u64)?;
        #[allow(unsafe_code)]
        let mmap = unsafe { MmapMut::map_mut(&file)? };
        Ok(Self { mmap })
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.mmap
    }

    pub fn size(&self) -> usize {
        self.mmap.len()
    }

    /// Flushes the mapping to disk. Dropping without calling this still
    /// unmaps (and the kernel will eventually write back dirty pages), but
    /// callers that want a durability guarantee before reporting success
    /// should call it explicitly.
    pub fn flush(&self) -> io::Result<()> {
        self.mmap.flush()
    }
}
