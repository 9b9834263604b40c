//! An ordered collection of packets from one capture, plus its link layer.

use crate::packet::Packet;
use crate::timestamp::{Timestamp, TimestampError};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot operate on an empty packet collection")]
pub struct EmptyPacketsError;

/// All packets loaded from one input file, in file order, tagged with the
/// link layer from that file's global header.
#[derive(Debug, Clone, Default)]
pub struct Packets {
    packets: Vec<Packet>,
    link_layer: u32,
}

impl Packets {
    pub fn new() -> Self {
        Self {
            packets: Vec::new(),
            link_layer: 0,
        }
    }

    pub fn load(packets: Vec<Packet>, link_layer: u32) -> Self {
        Self {
            packets,
            link_layer,
        }
    }

    pub fn len(&self) -> usize {
        self.packets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }

    pub fn link_layer(&self) -> u32 {
        self.link_layer
    }

    pub fn get(&self, index: usize) -> Option<&Packet> {
        self.packets.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Packet> {
        self.packets.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Packet> {
        self.packets.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Packet> {
        self.packets.iter_mut()
    }

    /// A one-line summary: packet count, link layer in hex, start time.
    pub fn metadata_string(&self) -> Result<String, EmptyPacketsError> {
        let first = self.packets.first().ok_or(EmptyPacketsError)?;
        Ok(format!(
            "Num packets: {:>9}. Link type: {:#010x}. Start Time: {}",
            self.packets.len(),
            self.link_layer,
            first.header.timestamp.format_local(),
        ))
    }

    pub fn start_time_string(&self) -> Result<String, EmptyPacketsError> {
        let first = self.packets.first().ok_or(EmptyPacketsError)?;
        Ok(first.header.timestamp.format_local())
    }

    /// Shifts every packet's timestamp by `time_offset` seconds, positive or
    /// negative. A no-op for `0.0`. Fails if `time_offset`'s magnitude does
    /// not fit in a `Timestamp` (matching the original's `Timestamp(double)`
    /// constructor, which throws rather than silently dropping the shift).
    pub fn offset_timestamps(&mut self, time_offset: f64) -> Result<(), TimestampError> {
        if time_offset == 0.0 {
            return Ok(());
        }
        // `Timestamp::from_seconds_f64` only accepts non-negative input, so
        // the sign of the shift picks add vs. subtract rather than being
        // folded into the offset itself.
        let magnitude = time_offset.abs();
        let offset = Timestamp::from_seconds_f64(magnitude)?;
        for packet in &mut self.packets {
            if time_offset > 0.0 {
                packet.header.timestamp += offset;
            } else {
                packet.header.timestamp -= offset;
            }
        }
        Ok(())
    }
}

impl std::ops::Index<usize> for Packets {
    type Output = Packet;

    fn index(&self, index: usize) -> &Packet {
        &self.packets[index]
    }
}

impl std::ops::IndexMut<usize> for Packets {
    fn index_mut(&mut self, index: usize) -> &mut Packet {
        &mut self.packets[index]
    }
}

impl<'a> IntoIterator for &'a Packets {
    type Item = &'a Packet;
    type IntoIter = std::slice::Iter<'a, Packet>;

    fn into_iter(self) -> Self::IntoIter {
        self.packets.iter()
    }
}
