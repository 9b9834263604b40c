//! The 16-byte per-packet record header preceding every payload.

use crate::byte_order::{ReadExt, WriteExt};
use crate::timestamp::{Timestamp, TimestampError};
use std::io::{self, Read, Write};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("packet record header has an invalid timestamp: {0}")]
pub struct InvalidPacketTimestamp(#[from] TimestampError);

/// A single packet record header: timestamp plus the two length fields.
///
/// Field order is fixed (`ts_sec`, `ts_usec`, `incl_len`, `orig_len`): unlike
/// the general libpcap format, this crate only ever reads/writes v2.4
/// captures, so there is no version-dependent swap of `incl_len`/`orig_len`.
/// Whether `incl_len == orig_len` is a property the reader enforces, not
/// something this type tracks itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketHeader {
    pub timestamp: Timestamp,
    pub incl_len: u32,
    pub orig_len: u32,
}

impl PacketHeader {
    pub const SIZE: usize = 16;

    pub fn new(timestamp: Timestamp, incl_len: u32, orig_len: u32) -> Self {
        Self {
            timestamp,
            incl_len,
            orig_len,
        }
    }

    pub fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        let bytes = reader.read_bytes::<{ Self::SIZE }>()?;
        Self::parse_bytes(&bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }

    /// Parses a raw 16-byte record header. Rejects (rather than clamping) a
    /// `ts_usec >= 1_000_000`, matching `pcap_reader.cpp`'s behaviour of
    /// reading the timestamp field raw and letting a bogus value surface as
    /// corruption instead of silently rewriting it.
    pub fn parse_bytes(bytes: &[u8; Self::SIZE]) -> Result<Self, InvalidPacketTimestamp> {
        let ts_sec = u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let ts_usec = u32::from_ne_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        let incl_len = u32::from_ne_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
        let orig_len = u32::from_ne_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]);
        Ok(Self {
            timestamp: Timestamp::new(ts_sec, ts_usec)?,
            incl_len,
            orig_len,
        })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u32_ne(self.timestamp.sec())?;
        writer.write_u32_ne(self.timestamp.usec())?;
        writer.write_u32_ne(self.incl_len)?;
        writer.write_u32_ne(self.orig_len)?;
        Ok(())
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[0..4].copy_from_slice(&self.timestamp.sec().to_ne_bytes());
        out[4..8].copy_from_slice(&self.timestamp.usec().to_ne_bytes());
        out[8..12].copy_from_slice(&self.incl_len.to_ne_bytes());
        out[12..16].copy_from_slice(&self.orig_len.to_ne_bytes());
        out
    }
}
