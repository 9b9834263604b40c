//! Validates and parses a whole PCAP byte buffer into packets.

use crate::packet::Packet;
use crate::pcap::file_header::FileHeader;
use crate::pcap::packet_header::PacketHeader;
use crate::pcap::PcapParseError;
use crate::packets::Packets;

/// Parses `buf` (the full contents of a PCAP file) into a `Packets`
/// collection, optionally stopping after `max_packets` records.
///
/// Validation mirrors the original reader: the global header is checked
/// first (size, magic, version), then each record header is checked in turn
/// (`incl_len == orig_len`, payload not truncated). When `max_packets` is
/// `None`, the whole buffer must be consumed exactly or the file is
/// considered corrupt; when capped, trailing bytes beyond the cap are simply
/// never inspected.
pub fn parse_packets(buf: &[u8], max_packets: Option<usize>) -> Result<Packets, PcapParseError> {
    let header = FileHeader::parse(buf)?;

    let mut offset = FileHeader::SIZE;
    let mut packets = Vec::new();

    while offset + PacketHeader::SIZE <= buf.len() {
        if let Some(max) = max_packets {
            if packets.len() == max {
                break;
            }
        }

        let header_bytes: [u8; PacketHeader::SIZE] = buf[offset..offset + PacketHeader::SIZE]
            .try_into()
            .map_err(|_| PcapParseError::IncompleteRecordHeader { index: packets.len() })?;
        let record_header = PacketHeader::parse_bytes(&header_bytes).map_err(|source| {
            PcapParseError::InvalidTimestamp { index: packets.len(), source }
        })?;

        if record_header.incl_len != record_header.orig_len {
            return Err(PcapParseError::TruncatedPacket {
                index: packets.len(),
                incl_len: record_header.incl_len,
                orig_len: record_header.orig_len,
            });
        }

        offset += PacketHeader::SIZE;
        let incl_len = record_header.incl_len as usize;

        if offset + incl_len > buf.len() {
            return Err(PcapParseError::IncompletePayload { index: packets.len() });
        }

        let data = buf[offset..offset + incl_len].to_vec();
        packets.push(Packet::new(record_header, data));
        offset += incl_len;
    }

    if max_packets.is_none() && offset != buf.len() {
        return Err(PcapParseError::TrailingBytes(buf.len() - offset));
    }

    if packets.is_empty() {
        return Err(PcapParseError::NoPackets);
    }

    Ok(Packets::load(packets, header.link_type))
}
