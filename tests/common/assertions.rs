//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

/// Parse part-list text into `name -> [plate, tile, round1x1, round2x2]`
pub fn parse_part_list(text: &str) -> BTreeMap<String, [usize; 4]> {
    text.lines()
        .map(|line| {
            let mut fields = line.split(',');
            let name = fields.next().unwrap().to_string();
            let counts: Vec<usize> = fields.map(|f| f.parse().unwrap()).collect();
            assert_eq!(counts.len(), 4, "Malformed part list line: {line}");
            (name, [counts[0], counts[1], counts[2], counts[3]])
        })
        .collect()
}

/// Assert the part list accounts for exactly six pieces per tile
pub fn assert_part_total(text: &str, tiles: usize) {
    let total: usize = parse_part_list(text)
        .values()
        .flat_map(|c| c.iter())
        .sum();
    assert_eq!(total, tiles * 6, "Part list:\n{text}");
}

/// Assert every build-file line is a well-formed type-1 line
pub fn assert_build_file(text: &str, tiles: usize) {
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), tiles * 6);
    for line in lines {
        let fields: Vec<&str> = line.split(' ').collect();
        assert_eq!(fields.len(), 15, "Malformed line: {line}");
        assert_eq!(fields[0], "1");
        assert!(
            fields[1].starts_with("0x2") && fields[1].len() == 9,
            "Bad color in: {line}"
        );
        assert!(fields[14].ends_with(".dat"), "Bad part in: {line}");
    }
}
