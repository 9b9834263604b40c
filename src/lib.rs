//! Differential comparator for classic PCAP (libpcap v2.4, microsecond,
//! host-endian) capture files: classifies every packet in two captures as
//! matched, removed, or added, and can emit one of six output captures
//! describing the result.

#![deny(unsafe_code)]

pub mod byte_order;
pub mod cli;
pub mod diff;
pub mod link_type;
pub mod logging;
pub mod mapped_file;
pub mod orchestrator;
pub mod packet;
pub mod packets;
pub mod pcap;
pub mod timestamp;
pub mod writer;
