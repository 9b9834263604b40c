//! Parsing the classic PCAP (libpcap) file format: a 24-byte global header
//! followed by a stream of 16-byte packet headers, each followed by raw
//! payload bytes.
//!
//! Only PCAP v2.4, microsecond resolution, host-endian is supported
//! (spec §1, §4.2); PCAPng and nanosecond/byte-swapped captures are
//! explicit non-goals.

pub mod file_header;
pub mod packet_header;
pub mod reader;

use thiserror::Error;

/// Errors raised while validating or parsing a PCAP byte buffer.
#[derive(Debug, Error)]
pub enum PcapParseError {
    #[error("file is too small to be a PCAP file")]
    FileTooSmall,
    #[error(
        "PCAP file uses nanosecond timestamps. Only PCAPs with microsecond timestamps are supported"
    )]
    NanosecondResolutionUnsupported,
    #[error(
        "PCAP file uses a different endian to this processor (microsecond resolution). Only PCAPs with the same endian as the processor running this program are supported"
    )]
    ByteSwappedMicrosecondUnsupported,
    #[error(
        "PCAP file uses a different endian to this processor (nanosecond resolution). Only PCAPs with the same endian as the processor running this program are supported"
    )]
    ByteSwappedNanosecondUnsupported,
    #[error("file is not a PCAP file (magic number {0:#010x})")]
    NotAPcapFile(u32),
    #[error("PCAP file version {major}.{minor} is not supported. Only version 2.4 is supported")]
    UnsupportedVersion { major: u16, minor: u16 },
    #[error("packet {index} was truncated: incl_len ({incl_len}) != orig_len ({orig_len})")]
    TruncatedPacket {
        index: usize,
        incl_len: u32,
        orig_len: u32,
    },
    #[error("packet {index} has a corrupt record header: {source}")]
    InvalidTimestamp {
        index: usize,
        #[source]
        source: crate::pcap::packet_header::InvalidPacketTimestamp,
    },
    #[error("file appears truncated or corrupt: record header at packet {index} is incomplete")]
    IncompleteRecordHeader { index: usize },
    #[error("file appears truncated or corrupt: packet {index} payload is incomplete")]
    IncompletePayload { index: usize },
    #[error("file appears truncated or corrupt: {0} trailing byte(s) after the last packet")]
    TrailingBytes(usize),
    #[error("file contains no packets")]
    NoPackets,
}
