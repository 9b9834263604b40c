//! The `basic` writer: A and B interleaved by timestamp, one trailing diff
//! marker byte per record.

use crate::pcap::file_header::FileHeader;
use crate::pcap::packet_header::PacketHeader;
use crate::packets::Packets;
use crate::writer::{create_with_header, WriteError};
use std::path::Path;

const MARKER_A_MATCHED: u8 = 0;
const MARKER_A_UNMATCHED: u8 = 1;
const MARKER_B: u8 = 2;

pub fn write_basic(
    packets_a: &Packets,
    packets_b: &Packets,
    path: impl AsRef<Path>,
) -> Result<(), WriteError> {
    if packets_a.link_layer() != packets_b.link_layer() {
        return Err(WriteError::LinkLayerMismatch);
    }

    let mut total_bytes = FileHeader::SIZE;
    for packet in packets_a {
        total_bytes += PacketHeader::SIZE + packet.data.len() + 1;
    }
    for packet in packets_b {
        if !packet.is_match {
            total_bytes += PacketHeader::SIZE + packet.data.len() + 1;
        }
    }

    let mut mapped = create_with_header(path, total_bytes, packets_a.link_layer())?;
    let mut offset = FileHeader::SIZE;
    let data = mapped.data_mut();

    let write_record = |data: &mut [u8], offset: &mut usize, header: &PacketHeader, payload: &[u8], marker: u8| {
        let incremented = PacketHeader::new(header.timestamp, header.incl_len + 1, header.orig_len + 1);
        data[*offset..*offset + PacketHeader::SIZE].copy_from_slice(&incremented.to_bytes());
        *offset += PacketHeader::SIZE;
        data[*offset..*offset + payload.len()].copy_from_slice(payload);
        *offset += payload.len();
        data[*offset] = marker;
        *offset += 1;
    };

    let mut i = 0;
    let mut j = 0;
    while i < packets_a.len() && j < packets_b.len() {
        if packets_b[j].is_match {
            j += 1;
            continue;
        }
        if packets_a[i].header.timestamp < packets_b[j].header.timestamp {
            let marker = if packets_a[i].is_match { MARKER_A_MATCHED } else { MARKER_A_UNMATCHED };
            write_record(data, &mut offset, &packets_a[i].header, &packets_a[i].data, marker);
            i += 1;
        } else {
            write_record(data, &mut offset, &packets_b[j].header, &packets_b[j].data, MARKER_B);
            j += 1;
        }
    }
    while i < packets_a.len() {
        let marker = if packets_a[i].is_match { MARKER_A_MATCHED } else { MARKER_A_UNMATCHED };
        write_record(data, &mut offset, &packets_a[i].header, &packets_a[i].data, marker);
        i += 1;
    }
    while j < packets_b.len() {
        if !packets_b[j].is_match {
            write_record(data, &mut offset, &packets_b[j].header, &packets_b[j].data, MARKER_B);
        }
        j += 1;
    }

    mapped.flush()?;
    Ok(())
}
