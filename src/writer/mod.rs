//! Size-first, byte-exact writers for all six output modes (spec §4.5).

pub mod basic;
pub mod full;
pub mod subset;

use crate::mapped_file::MappedFileMut;
use crate::packets::Packets;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("PCAP link layer of File A and File B differs. This output format requires that they match")]
    LinkLayerMismatch,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Which of the six output layouts to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputMode {
    Basic,
    Full,
    #[value(name = "match_a")]
    MatchA,
    #[value(name = "match_b")]
    MatchB,
    Added,
    Removed,
}

/// Writes `packets_a`/`packets_b` to `path` in the requested `mode`.
pub fn write_output(
    mode: OutputMode,
    packets_a: &Packets,
    packets_b: &Packets,
    path: impl AsRef<Path>,
) -> Result<(), WriteError> {
    match mode {
        OutputMode::MatchA => subset::write_subset(packets_a, true, path),
        OutputMode::MatchB => subset::write_subset(packets_b, true, path),
        OutputMode::Removed => subset::write_subset(packets_a, false, path),
        OutputMode::Added => subset::write_subset(packets_b, false, path),
        OutputMode::Basic => basic::write_basic(packets_a, packets_b, path),
        OutputMode::Full => full::write_full(packets_a, packets_b, path),
    }
}

/// Allocates a size-exact writable mapping and writes the standard file
/// header into its first 24 bytes, returning the mapping positioned for the
/// caller to fill in the remaining `total_bytes - FileHeader::SIZE` bytes.
pub(crate) fn create_with_header(
    path: impl AsRef<Path>,
    total_bytes: usize,
    link_type: u32,
) -> io::Result<MappedFileMut> {
    let mut mapped = MappedFileMut::create(path, total_bytes)?;
    let header = crate::pcap::file_header::FileHeader::standard(link_type);
    mapped.data_mut()[0..crate::pcap::file_header::FileHeader::SIZE]
        .copy_from_slice(&header.to_bytes());
    Ok(mapped)
}
