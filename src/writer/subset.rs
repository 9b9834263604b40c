//! The `match_a`/`match_b`/`added`/`removed` writers: one filtered
//! collection, plain PCAP record layout, unchanged payload bytes.

use crate::pcap::file_header::FileHeader;
use crate::pcap::packet_header::PacketHeader;
use crate::packets::Packets;
use crate::writer::{create_with_header, WriteError};
use std::path::Path;

pub fn write_subset(
    packets: &Packets,
    matched: bool,
    path: impl AsRef<Path>,
) -> Result<(), WriteError> {
    let mut total_bytes = FileHeader::SIZE;
    for packet in packets {
        if packet.is_match == matched {
            total_bytes += PacketHeader::SIZE + packet.data.len();
        }
    }

    let mut mapped = create_with_header(path, total_bytes, packets.link_layer())?;
    let mut offset = FileHeader::SIZE;
    let data = mapped.data_mut();
    for packet in packets {
        if packet.is_match != matched {
            continue;
        }
        data[offset..offset + PacketHeader::SIZE].copy_from_slice(&packet.header.to_bytes());
        offset += PacketHeader::SIZE;
        data[offset..offset + packet.data.len()].copy_from_slice(&packet.data);
        offset += packet.data.len();
    }
    mapped.flush()?;
    Ok(())
}
