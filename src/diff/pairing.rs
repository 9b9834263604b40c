//! Deciding match relationships between packets of A and packets of B.

use crate::diff::compare::compare;
use crate::diff::{DiffConfig, SearchMethod};
use crate::packet::Side;
use crate::packets::Packets;
use log::debug;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PairingError {
    #[error("search method 'location' is currently unsupported")]
    UnsupportedSearchMethod,
}

/// Dispatches to the configured search strategy. On return, invariants
/// I1-I4 (spec §3) hold over `packets_a`/`packets_b`.
pub fn find_matching(
    config: &DiffConfig,
    packets_a: &mut Packets,
    packets_b: &mut Packets,
) -> Result<(), PairingError> {
    match config.search_method {
        SearchMethod::Timestamp => {
            timestamp_search(config, packets_a, packets_b);
            Ok(())
        }
        SearchMethod::Full => {
            full_search(config, packets_a, packets_b);
            Ok(())
        }
        SearchMethod::Location => Err(PairingError::UnsupportedSearchMethod),
    }
}

fn timestamp_search(config: &DiffConfig, packets_a: &mut Packets, packets_b: &mut Packets) {
    let mut cursor = 0usize;

    for i in 0..packets_a.len() {
        if packets_a[i].is_match {
            continue;
        }

        let window_start = packets_a[i].header.timestamp - config.time_range_neg;
        let window_end = packets_a[i].header.timestamp + config.time_range_pos;

        // The cursor only ever moves forward: B is in time order, and A is
        // processed in time order too, so the lower bound for A[i]'s window
        // can never regress past where A[i-1]'s window started.
        cursor = lower_bound(packets_b, cursor, window_start);
        debug!("A[{i}] window=[{window_start}, {window_end}] cursor={cursor}");

        let mut j = cursor;
        while j < packets_b.len() && packets_b[j].header.timestamp <= window_end {
            if !packets_b[j].is_match && compare(config, &packets_a[i], &packets_b[j]) {
                packets_a[i].mark_matched((Side::B, j));
                packets_b[j].mark_matched((Side::A, i));
                break;
            }
            j += 1;
        }
    }
}

fn full_search(config: &DiffConfig, packets_a: &mut Packets, packets_b: &mut Packets) {
    for i in 0..packets_a.len() {
        for j in 0..packets_b.len() {
            if packets_b[j].is_match {
                continue;
            }
            if compare(config, &packets_a[i], &packets_b[j]) {
                packets_a[i].mark_matched((Side::B, j));
                packets_b[j].mark_matched((Side::A, i));
                break;
            }
        }
    }
}

/// First index `>= start` in `packets` whose timestamp is not less than
/// `target`. Binary search, never inspecting indices before `start`.
fn lower_bound(packets: &Packets, start: usize, target: crate::timestamp::Timestamp) -> usize {
    let mut lo = start;
    let mut hi = packets.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if packets[mid].header.timestamp < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::Packet;
    use crate::pcap::packet_header::PacketHeader;
    use crate::timestamp::Timestamp;

    fn packets_at(secs: &[u32], payload: &[u8]) -> Packets {
        let list = secs
            .iter()
            .map(|&sec| {
                Packet::new(
                    PacketHeader::new(Timestamp::new(sec, 0).unwrap(), payload.len() as u32, payload.len() as u32),
                    payload.to_vec(),
                )
            })
            .collect();
        Packets::load(list, 1)
    }

    fn config(neg: u32, pos: u32) -> DiffConfig {
        DiffConfig::new(
            SearchMethod::Timestamp,
            "",
            "[:]",
            "[:]",
            Timestamp::new(neg, 0).unwrap(),
            Timestamp::new(pos, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn timestamp_search_matches_within_window() {
        let mut a = packets_at(&[10], b"P");
        let mut b = packets_at(&[10], b"P");
        let cfg = config(1, 1);
        find_matching(&cfg, &mut a, &mut b).unwrap();
        assert!(a[0].is_match);
        assert!(b[0].is_match);
        assert_eq!(a[0].mate, Some((Side::B, 0)));
    }

    #[test]
    fn timestamp_search_leaves_out_of_window_unmatched() {
        let mut a = packets_at(&[10], b"P");
        let mut b = packets_at(&[20], b"P");
        let cfg = config(1, 1);
        find_matching(&cfg, &mut a, &mut b).unwrap();
        assert!(!a[0].is_match);
        assert!(!b[0].is_match);
    }

    #[test]
    fn full_search_ignores_timestamps() {
        let mut a = packets_at(&[10], b"P");
        let mut b = packets_at(&[9999], b"P");
        let cfg = DiffConfig::new(
            SearchMethod::Full,
            "",
            "[:]",
            "[:]",
            Timestamp::ZERO,
            Timestamp::ZERO,
        )
        .unwrap();
        find_matching(&cfg, &mut a, &mut b).unwrap();
        assert!(a[0].is_match);
        assert!(b[0].is_match);
    }

    #[test]
    fn location_search_is_unsupported() {
        let mut a = packets_at(&[10], b"P");
        let mut b = packets_at(&[10], b"P");
        let cfg = DiffConfig::new(
            SearchMethod::Location,
            "",
            "[:]",
            "[:]",
            Timestamp::ZERO,
            Timestamp::ZERO,
        )
        .unwrap();
        let err = find_matching(&cfg, &mut a, &mut b).unwrap_err();
        assert_eq!(err, PairingError::UnsupportedSearchMethod);
    }

    #[test]
    fn cursor_does_not_rewind_across_later_a_packets() {
        let mut a = packets_at(&[10, 20], b"P");
        let mut b = packets_at(&[10, 20], b"P");
        let cfg = config(1, 1);
        find_matching(&cfg, &mut a, &mut b).unwrap();
        assert!(a[0].is_match && a[1].is_match);
        assert_eq!(a[0].mate, Some((Side::B, 0)));
        assert_eq!(a[1].mate, Some((Side::B, 1)));
    }
}
