//! End-to-end scenario tests (spec §8's seed tests) driven through the
//! public orchestrator API, with input/output captures built and read back
//! as raw bytes on disk (mmap-backed I/O needs real files).

use pcap_diff::cli::Cli;
use pcap_diff::diff::SearchMethod;
use pcap_diff::orchestrator;
use pcap_diff::pcap::reader::parse_packets;
use pcap_diff::writer::OutputMode;
use std::path::PathBuf;

fn temp_path(tag: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("pcap-diff-scenario-{tag}-{:p}.pcap", &path));
    path
}

fn write_pcap(path: &PathBuf, link_type: u32, packets: &[(u32, u32, &[u8])]) {
    let mut buf = Vec::new();
    buf.extend_from_slice(&0xA1B2C3D4u32.to_ne_bytes());
    buf.extend_from_slice(&2u16.to_ne_bytes());
    buf.extend_from_slice(&4u16.to_ne_bytes());
    buf.extend_from_slice(&0u32.to_ne_bytes());
    buf.extend_from_slice(&0u32.to_ne_bytes());
    buf.extend_from_slice(&65535u32.to_ne_bytes());
    buf.extend_from_slice(&link_type.to_ne_bytes());
    for (sec, usec, payload) in packets {
        buf.extend_from_slice(&sec.to_ne_bytes());
        buf.extend_from_slice(&usec.to_ne_bytes());
        buf.extend_from_slice(&(payload.len() as u32).to_ne_bytes());
        buf.extend_from_slice(&(payload.len() as u32).to_ne_bytes());
        buf.extend_from_slice(payload);
    }
    std::fs::write(path, buf).unwrap();
}

fn base_cli(file_a: PathBuf, file_b: PathBuf, output: PathBuf) -> Cli {
    Cli {
        file_a,
        file_b,
        max_packets: 0,
        byte_mask: String::new(),
        range_a: "[:]".to_string(),
        range_b: "[:]".to_string(),
        auto_time_align: false,
        time_offset_a: 0.0,
        time_offset_b: 0.0,
        neg_time_diff: 0.01,
        pos_time_diff: 0.01,
        search_method: SearchMethod::Timestamp,
        output_format: OutputMode::Basic,
        output: Some(output),
        verbose: false,
    }
}

#[test]
fn scenario_1_identical_files_match_a_is_byte_identical() {
    let file_a = temp_path("s1-a");
    let file_b = temp_path("s1-b");
    let output = temp_path("s1-out");
    let packets = [(1, 0, b"AA".as_slice()), (1, 100, b"BB"), (1, 200, b"CC")];
    write_pcap(&file_a, 1, &packets);
    write_pcap(&file_b, 1, &packets);

    let mut cli = base_cli(file_a.clone(), file_b.clone(), output.clone());
    cli.neg_time_diff = 0.0;
    cli.pos_time_diff = 0.0;
    cli.output_format = OutputMode::MatchA;

    let outcome = orchestrator::run(&cli).unwrap();
    assert_eq!(outcome.exit_code(), 0);

    let original = std::fs::read(&file_a).unwrap();
    let written = std::fs::read(&output).unwrap();
    assert_eq!(original, written);

    for path in [file_a, file_b, output] {
        std::fs::remove_file(path).ok();
    }
}

#[test]
fn scenario_2_one_added_packet() {
    let file_a = temp_path("s2-a");
    let file_b = temp_path("s2-b");
    let output = temp_path("s2-out");
    write_pcap(&file_a, 1, &[(1, 0, b"XX")]);
    write_pcap(&file_b, 1, &[(1, 0, b"XX"), (1, 1000, b"YY")]);

    let mut cli = base_cli(file_a.clone(), file_b.clone(), output.clone());
    cli.output_format = OutputMode::Added;

    let outcome = orchestrator::run(&cli).unwrap();
    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(outcome.added, 1);
    assert_eq!(outcome.removed, 0);

    let buf = std::fs::read(&output).unwrap();
    let packets = parse_packets(&buf, None).unwrap();
    assert_eq!(packets.len(), 1);
    assert_eq!(packets[0].header.timestamp.sec(), 1);
    assert_eq!(packets[0].header.timestamp.usec(), 1000);
    assert_eq!(packets[0].data, b"YY");

    for path in [file_a, file_b, output] {
        std::fs::remove_file(path).ok();
    }
}

#[test]
fn scenario_3_timestamp_skew_within_window_matches() {
    let file_a = temp_path("s3-a");
    let file_b = temp_path("s3-b");
    let output = temp_path("s3-out");
    write_pcap(&file_a, 1, &[(10, 0, b"P")]);
    write_pcap(&file_b, 1, &[(10, 5000, b"P")]);

    let mut cli = base_cli(file_a.clone(), file_b.clone(), output.clone());
    cli.neg_time_diff = 0.01;
    cli.pos_time_diff = 0.01;
    cli.output_format = OutputMode::Basic;

    let outcome = orchestrator::run(&cli).unwrap();
    assert_eq!(outcome.exit_code(), 0);

    let buf = std::fs::read(&output).unwrap();
    // 24-byte file header + 16-byte record header + "P" + marker byte == 42.
    assert_eq!(buf.len(), 24 + 16 + 1 + 1);
    assert_eq!(buf[buf.len() - 2], b'P');
    assert_eq!(buf[buf.len() - 1], 0);

    for path in [file_a, file_b, output] {
        std::fs::remove_file(path).ok();
    }
}

#[test]
fn scenario_4_mask_ignores_variable_byte() {
    let file_a = temp_path("s4-a");
    let file_b = temp_path("s4-b");
    let output_removed = temp_path("s4-removed");
    let output_added = temp_path("s4-added");
    write_pcap(&file_a, 1, &[(1, 0, &[0xAA, 0xBB, 0xCC])]);
    write_pcap(&file_b, 1, &[(1, 0, &[0xAA, 0xFF, 0xCC])]);

    let mut cli = base_cli(file_a.clone(), file_b.clone(), output_removed.clone());
    cli.byte_mask = "101".to_string();
    let outcome = orchestrator::run(&cli).unwrap();
    assert_eq!(outcome.exit_code(), 0);

    cli.byte_mask = "111".to_string();
    cli.output_format = OutputMode::Removed;
    cli.output = Some(output_removed.clone());
    let outcome = orchestrator::run(&cli).unwrap();
    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(outcome.removed, 1);

    cli.output_format = OutputMode::Added;
    cli.output = Some(output_added.clone());
    let outcome = orchestrator::run(&cli).unwrap();
    assert_eq!(outcome.added, 1);

    let removed_buf = std::fs::read(&output_removed).unwrap();
    let removed_packets = parse_packets(&removed_buf, None).unwrap();
    assert_eq!(removed_packets[0].data, vec![0xAA, 0xBB, 0xCC]);

    let added_buf = std::fs::read(&output_added).unwrap();
    let added_packets = parse_packets(&added_buf, None).unwrap();
    assert_eq!(added_packets[0].data, vec![0xAA, 0xFF, 0xCC]);

    for path in [file_a, file_b, output_removed, output_added] {
        std::fs::remove_file(path).ok();
    }
}

#[test]
fn scenario_5_range_length_mismatch_is_rejected_before_writing() {
    let file_a = temp_path("s5-a");
    let file_b = temp_path("s5-b");
    let output = temp_path("s5-out");
    write_pcap(&file_a, 1, &[(1, 0, b"01234567")]);
    write_pcap(&file_b, 1, &[(1, 0, b"01234567")]);

    let mut cli = base_cli(file_a.clone(), file_b.clone(), output.clone());
    cli.range_a = "[0:4]".to_string();
    cli.range_b = "[0:8]".to_string();

    let err = orchestrator::run(&cli).unwrap_err();
    assert!(format!("{err}").contains("different lengths"));
    assert!(!output.exists());

    for path in [file_a, file_b] {
        std::fs::remove_file(path).ok();
    }
}

#[test]
fn scenario_6_full_format_matched_record() {
    let file_a = temp_path("s6-a");
    let file_b = temp_path("s6-b");
    let output = temp_path("s6-out");
    write_pcap(&file_a, 1, &[(5, 0, b"ab")]);
    write_pcap(&file_b, 113, &[(5, 50, b"abcd")]);

    let mut cli = base_cli(file_a.clone(), file_b.clone(), output.clone());
    cli.output_format = OutputMode::Full;

    let outcome = orchestrator::run(&cli).unwrap();
    assert_eq!(outcome.exit_code(), 0);

    let buf = std::fs::read(&output).unwrap();
    let file_link_type = u32::from_ne_bytes(buf[20..24].try_into().unwrap());
    assert_eq!(file_link_type, 147);

    let incl_len = u32::from_ne_bytes(buf[32..36].try_into().unwrap());
    assert_eq!(incl_len, 27);

    let frame = &buf[40..40 + 27];
    let mut expected = vec![0x00];
    expected.extend_from_slice(&1u32.to_ne_bytes());
    expected.extend_from_slice(&2u32.to_ne_bytes());
    expected.extend_from_slice(b"ab");
    expected.extend_from_slice(&113u32.to_ne_bytes());
    expected.extend_from_slice(&5u32.to_ne_bytes());
    expected.extend_from_slice(&50u32.to_ne_bytes());
    expected.extend_from_slice(b"abcd");
    assert_eq!(frame, expected.as_slice());

    for path in [file_a, file_b, output] {
        std::fs::remove_file(path).ok();
    }
}

#[test]
fn max_packets_cap_stops_parsing_without_trailing_bytes_error() {
    let file_a = temp_path("cap-a");
    let file_b = temp_path("cap-b");
    let output = temp_path("cap-out");
    write_pcap(&file_a, 1, &[(1, 0, b"A"), (2, 0, b"B"), (3, 0, b"C")]);
    write_pcap(&file_b, 1, &[(1, 0, b"A")]);

    let mut cli = base_cli(file_a.clone(), file_b.clone(), output.clone());
    cli.max_packets = 1;
    cli.output_format = OutputMode::MatchA;

    let outcome = orchestrator::run(&cli).unwrap();
    assert_eq!(outcome.matched, 1);

    for path in [file_a, file_b, output] {
        std::fs::remove_file(path).ok();
    }
}
