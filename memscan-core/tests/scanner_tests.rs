//! 扫描器端到端测试

mod common;
use common::{chunked_pairs, pairs, read_fixture, CANONICAL};
use memscan_core::{join_lines, scan, sum_of_products};

#[test]
fn test_canonical_example() {
    assert_eq!(pairs(CANONICAL), vec![(2, 4), (5, 5), (11, 8), (8, 5)]);
    assert_eq!(sum_of_products(scan(CANONICAL)), 161);
}

#[test]
fn test_single_instruction() {
    assert_eq!(pairs("mul(654,789)"), vec![(654, 789)]);
}

#[test]
fn test_fixture_file() {
    let text = join_lines(&read_fixture("example1.txt"));
    let ops: Vec<_> = scan(&text).collect();
    assert_eq!(ops.len(), 4);
    assert_eq!(sum_of_products(ops), 161);
}

#[test]
fn test_multiline_fixture_joins_without_separator() {
    let raw = read_fixture("example_multiline.txt");
    // scanning the raw text loses the instruction split by the line break
    assert_eq!(pairs(&raw), vec![(2, 4), (11, 8), (8, 5)]);

    let joined = join_lines(&raw);
    assert_eq!(joined, CANONICAL);
    assert_eq!(sum_of_products(scan(&joined)), 161);
}

#[test]
fn test_every_two_way_split_matches_single_pass() {
    let expected = pairs(CANONICAL);
    for mid in 0..=CANONICAL.len() {
        let (head, tail) = CANONICAL.split_at(mid);
        assert_eq!(chunked_pairs([head, tail]), expected, "split at {mid}");
    }
}

#[test]
fn test_char_by_char_feeding_matches_single_pass() {
    let source = "mul(1,2)mul(999,1000)mul(3,4)xmul(5,6)";
    let chunks: Vec<String> = source.chars().map(String::from).collect();
    assert_eq!(
        chunked_pairs(chunks.iter().map(String::as_str)),
        pairs(source)
    );
}

#[test]
fn test_independent_scans_differ_across_split_token() {
    let (head, tail) = ("xmul(2,", "4)mul(3,3)");
    let independent: Vec<_> = pairs(head).into_iter().chain(pairs(tail)).collect();
    assert_eq!(independent, vec![(3, 3)]);
    assert_eq!(pairs(&format!("{head}{tail}")), vec![(2, 4), (3, 3)]);
}

#[test]
fn test_independent_scans_agree_on_clean_boundary() {
    let (head, tail) = ("mul(2,4)!", "?mul(3,3)");
    let independent: Vec<_> = pairs(head).into_iter().chain(pairs(tail)).collect();
    assert_eq!(independent, pairs(&format!("{head}{tail}")));
}

#[test]
fn test_rescan_is_deterministic() {
    assert_eq!(pairs(CANONICAL), pairs(CANONICAL));
}

#[test]
fn test_operands_stay_in_range() {
    let mut noisy = String::new();
    for i in 0..2000u32 {
        let digits = i % 5 + 1;
        let operand: String = (0..digits).map(|d| char::from(b'0' + ((i + d) % 10) as u8)).collect();
        noisy.push_str(&format!("mul({operand},{operand})"));
        if i % 7 == 0 {
            noisy.push('m');
        }
    }
    let found = pairs(&noisy);
    assert!(!found.is_empty());
    assert!(found.iter().all(|&(x, y)| x <= 999 && y <= 999));
}

#[test]
fn test_embedded_prefix_limitation() {
    assert!(pairs("mmul(1,2)").is_empty());
}

#[test]
fn test_empty_input() {
    assert!(pairs("").is_empty());
    assert_eq!(sum_of_products(scan("")), 0);
}
