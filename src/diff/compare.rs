//! The byte-range + bit-mask equality predicate used by the pairing engine.

use crate::diff::DiffConfig;
use crate::packet::Packet;

/// Resolves a `ByteRange`'s raw `(start, end)` pair against an actual
/// payload length, returning `None` if the range does not fit (matching the
/// original's "return false" bounds checks rather than panicking).
fn resolve_range(start: usize, end: i64, data_len: usize) -> Option<(usize, usize)> {
    if start >= data_len {
        return None;
    }
    let end = if end <= 0 {
        // `end` is a negative-or-zero offset from the end of the payload.
        let trim = (-end) as usize;
        data_len.checked_sub(trim)?
    } else {
        end as usize
    };
    if end > data_len {
        return None;
    }
    Some((start, end))
}

/// Compares `packet_a` and `packet_b` under `config`'s ranges and mask.
///
/// Returns `false` (never matches) whenever a range does not fit in the
/// respective payload, or the two resolved ranges have different lengths.
/// Within the mask's length, only bit positions set to `true` are compared;
/// beyond the mask's length every byte is compared.
pub fn compare(config: &DiffConfig, packet_a: &Packet, packet_b: &Packet) -> bool {
    let Some((mut index_a, end_a)) =
        resolve_range(config.range_a.start, config.range_a.end, packet_a.data.len())
    else {
        return false;
    };
    let Some((mut index_b, end_b)) =
        resolve_range(config.range_b.start, config.range_b.end, packet_b.data.len())
    else {
        return false;
    };

    if end_a <= index_a || end_b <= index_b {
        return false;
    }
    if (end_a - index_a) != (end_b - index_b) {
        return false;
    }

    let mask = config.mask.bits();
    let mut mask_index = 0;
    while mask_index < mask.len() && index_a < end_a {
        if mask[mask_index] && packet_a.data[index_a] != packet_b.data[index_b] {
            return false;
        }
        index_a += 1;
        index_b += 1;
        mask_index += 1;
    }

    while index_a < end_a {
        if packet_a.data[index_a] != packet_b.data[index_b] {
            return false;
        }
        index_a += 1;
        index_b += 1;
    }

    true
}
