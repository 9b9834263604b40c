//! The `full` writer: same interleave as `basic`, but link type `147`
//! (DLT_USER0) and a bespoke framed diff header inside every payload
//! (spec §4.5). The original implementation never built this writer; its
//! framing comes straight from the specification.

use crate::link_type::LinkType;
use crate::packet::Side;
use crate::pcap::file_header::FileHeader;
use crate::pcap::packet_header::PacketHeader;
use crate::packets::Packets;
use crate::writer::{create_with_header, WriteError};
use std::path::Path;

const MARKER_MATCHED: u8 = 0;
const MARKER_REMOVED: u8 = 1;
const MARKER_ADDED: u8 = 2;

/// Bytes needed for one record's framed payload, not counting the 16-byte
/// record header itself.
enum Frame<'a> {
    Added { link_type_b: u32, payload_b: &'a [u8] },
    Removed { link_type_a: u32, payload_a: &'a [u8] },
    Matched {
        link_type_a: u32,
        payload_a: &'a [u8],
        link_type_b: u32,
        ts_sec_b: u32,
        ts_usec_b: u32,
        payload_b: &'a [u8],
    },
}

impl Frame<'_> {
    fn len(&self) -> usize {
        match self {
            Frame::Added { payload_b, .. } => 5 + payload_b.len(),
            Frame::Removed { payload_a, .. } => 5 + payload_a.len(),
            Frame::Matched { payload_a, payload_b, .. } => 21 + payload_a.len() + payload_b.len(),
        }
    }

    fn write(&self, out: &mut [u8]) {
        match *self {
            Frame::Added { link_type_b, payload_b } => {
                out[0] = MARKER_ADDED;
                out[1..5].copy_from_slice(&link_type_b.to_ne_bytes());
                out[5..5 + payload_b.len()].copy_from_slice(payload_b);
            }
            Frame::Removed { link_type_a, payload_a } => {
                out[0] = MARKER_REMOVED;
                out[1..5].copy_from_slice(&link_type_a.to_ne_bytes());
                out[5..5 + payload_a.len()].copy_from_slice(payload_a);
            }
            Frame::Matched {
                link_type_a,
                payload_a,
                link_type_b,
                ts_sec_b,
                ts_usec_b,
                payload_b,
            } => {
                let mut cursor = 0usize;
                out[cursor] = MARKER_MATCHED;
                cursor += 1;
                out[cursor..cursor + 4].copy_from_slice(&link_type_a.to_ne_bytes());
                cursor += 4;
                out[cursor..cursor + 4].copy_from_slice(&(payload_a.len() as u32).to_ne_bytes());
                cursor += 4;
                out[cursor..cursor + payload_a.len()].copy_from_slice(payload_a);
                cursor += payload_a.len();
                out[cursor..cursor + 4].copy_from_slice(&link_type_b.to_ne_bytes());
                cursor += 4;
                out[cursor..cursor + 4].copy_from_slice(&ts_sec_b.to_ne_bytes());
                cursor += 4;
                out[cursor..cursor + 4].copy_from_slice(&ts_usec_b.to_ne_bytes());
                cursor += 4;
                out[cursor..cursor + payload_b.len()].copy_from_slice(payload_b);
            }
        }
    }
}

pub fn write_full(
    packets_a: &Packets,
    packets_b: &Packets,
    path: impl AsRef<Path>,
) -> Result<(), WriteError> {
    let link_type_a = packets_a.link_layer();
    let link_type_b = packets_b.link_layer();

    let frame_for_a = |index: usize| -> Frame<'_> {
        let pa = &packets_a[index];
        match pa.mate {
            Some((Side::B, j)) => {
                let pb = &packets_b[j];
                Frame::Matched {
                    link_type_a,
                    payload_a: &pa.data,
                    link_type_b,
                    ts_sec_b: pb.header.timestamp.sec(),
                    ts_usec_b: pb.header.timestamp.usec(),
                    payload_b: &pb.data,
                }
            }
            _ => Frame::Removed { link_type_a, payload_a: &pa.data },
        }
    };
    let frame_for_b = |index: usize| -> Frame<'_> {
        Frame::Added { link_type_b, payload_b: &packets_b[index].data }
    };

    let mut total_bytes = FileHeader::SIZE;
    for i in 0..packets_a.len() {
        total_bytes += PacketHeader::SIZE + frame_for_a(i).len();
    }
    for j in 0..packets_b.len() {
        if !packets_b[j].is_match {
            total_bytes += PacketHeader::SIZE + frame_for_b(j).len();
        }
    }

    let mut mapped = create_with_header(path, total_bytes, u32::from(LinkType::User0))?;
    let mut offset = FileHeader::SIZE;
    let data = mapped.data_mut();

    let write_record = |data: &mut [u8], offset: &mut usize, timestamp: crate::timestamp::Timestamp, frame: Frame| {
        let frame_len = frame.len();
        let header = PacketHeader::new(timestamp, frame_len as u32, frame_len as u32);
        data[*offset..*offset + PacketHeader::SIZE].copy_from_slice(&header.to_bytes());
        *offset += PacketHeader::SIZE;
        frame.write(&mut data[*offset..*offset + frame_len]);
        *offset += frame_len;
    };

    let mut i = 0;
    let mut j = 0;
    while i < packets_a.len() && j < packets_b.len() {
        if packets_b[j].is_match {
            j += 1;
            continue;
        }
        if packets_a[i].header.timestamp < packets_b[j].header.timestamp {
            write_record(data, &mut offset, packets_a[i].header.timestamp, frame_for_a(i));
            i += 1;
        } else {
            write_record(data, &mut offset, packets_b[j].header.timestamp, frame_for_b(j));
            j += 1;
        }
    }
    while i < packets_a.len() {
        write_record(data, &mut offset, packets_a[i].header.timestamp, frame_for_a(i));
        i += 1;
    }
    while j < packets_b.len() {
        if !packets_b[j].is_match {
            write_record(data, &mut offset, packets_b[j].header.timestamp, frame_for_b(j));
        }
        j += 1;
    }

    mapped.flush()?;
    Ok(())
}
