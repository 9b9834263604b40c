//! Drives the full pipeline: load, offset, pair, summarize, optionally write.

use crate::cli::Cli;
use crate::diff::pairing::{self, PairingError};
use crate::diff::{DiffConfig, DiffConfigError};
use crate::mapped_file::MappedFile;
use crate::pcap::reader::parse_packets;
use crate::pcap::PcapParseError;
use crate::timestamp::Timestamp;
use crate::writer::{self, OutputMode, WriteError};
use log::info;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(
        "--time-offset-[a|b] and --auto-time-align are mutually exclusive options"
    )]
    AutoAlignConflictsWithOffset,
    #[error("auto timestamp alignment is currently unsupported")]
    AutoAlignUnsupported,
    #[error("PCAP link layer of File A and File B differs. The 'basic' output format requires that they match. Select a different output mode")]
    BasicLinkLayerMismatch,
    #[error(transparent)]
    DiffConfig(#[from] DiffConfigError),
    #[error(transparent)]
    Pairing(#[from] PairingError),
    #[error("failed to parse file: {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: PcapParseError,
    },
    #[error(transparent)]
    Write(#[from] WriteError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Timestamp(#[from] crate::timestamp::TimestampError),
}

/// Packet classification counts after pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOutcome {
    pub matched: usize,
    pub removed: usize,
    pub added: usize,
}

impl DiffOutcome {
    /// Exit code per spec §6: 0 identical, 1 differences present.
    pub fn exit_code(&self) -> u8 {
        if self.removed == 0 && self.added == 0 { 0 } else { 1 }
    }
}

/// Runs the full pipeline for an already-parsed `Cli`. Does not touch
/// `std::process`; `main` translates the result into an exit code.
pub fn run(cli: &Cli) -> Result<DiffOutcome, CliError> {
    if cli.auto_time_align && (cli.time_offset_a != 0.0 || cli.time_offset_b != 0.0) {
        return Err(CliError::AutoAlignConflictsWithOffset);
    }
    if cli.auto_time_align {
        return Err(CliError::AutoAlignUnsupported);
    }

    let max_packets = if cli.max_packets == 0 {
        None
    } else {
        Some(cli.max_packets as usize)
    };

    info!("Reading File A: {}", cli.file_a.display());
    let mapped_a = MappedFile::open(&cli.file_a)?;
    let mut packets_a = parse_packets(mapped_a.data(), max_packets).map_err(|source| {
        CliError::Parse { path: cli.file_a.display().to_string(), source }
    })?;
    info!("Reading File A - Done");

    info!("Reading File B: {}", cli.file_b.display());
    let mapped_b = MappedFile::open(&cli.file_b)?;
    let mut packets_b = parse_packets(mapped_b.data(), max_packets).map_err(|source| {
        CliError::Parse { path: cli.file_b.display().to_string(), source }
    })?;
    info!("Reading File B - Done");

    if cli.verbose {
        if let Ok(meta) = packets_a.metadata_string() {
            info!("File A - {meta}");
        }
        if let Ok(meta) = packets_b.metadata_string() {
            info!("File B - {meta}");
        }
    }

    if matches!(cli.output_format, OutputMode::Basic)
        && packets_a.link_layer() != packets_b.link_layer()
    {
        return Err(CliError::BasicLinkLayerMismatch);
    }

    packets_a.offset_timestamps(cli.time_offset_a)?;
    if cli.time_offset_a != 0.0 {
        if let Ok(start) = packets_a.start_time_string() {
            info!(
                "File A - Applying time offset: {} seconds. New start time: {start}",
                cli.time_offset_a
            );
        }
    }

    packets_b.offset_timestamps(cli.time_offset_b)?;
    if cli.time_offset_b != 0.0 {
        if let Ok(start) = packets_b.start_time_string() {
            info!(
                "File B - Applying time offset: {} seconds. New start time: {start}",
                cli.time_offset_b
            );
        }
    }

    let time_range_neg = Timestamp::from_seconds_f64(cli.neg_time_diff)?;
    let time_range_pos = Timestamp::from_seconds_f64(cli.pos_time_diff)?;
    let config = DiffConfig::new(
        cli.search_method,
        &cli.byte_mask,
        &cli.range_a,
        &cli.range_b,
        time_range_neg,
        time_range_pos,
    )?;

    pairing::find_matching(&config, &mut packets_a, &mut packets_b)?;

    let removed = packets_a.iter().filter(|p| !p.is_match).count();
    let added = packets_b.iter().filter(|p| !p.is_match).count();
    let matched = packets_a.len() - removed;

    info!("Matched: {matched} [Packets in both A and B]");
    info!("Removed: {removed} [Packets in A only]");
    info!("Added:   {added} [Packets in B only]");

    if let Some(output) = &cli.output {
        info!("Writing file: {}", output.display());
        writer::write_output(cli.output_format, &packets_a, &packets_b, output)?;
        info!("Writing file - Done");
    }

    Ok(DiffOutcome { matched, removed, added })
}
