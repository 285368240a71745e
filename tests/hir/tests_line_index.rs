//! Position mapping tests over fixture documents.

use polynav::base::{LineIndex, Position, TextSize};
use rstest::rstest;

use crate::helpers::graph_helpers::*;
use crate::helpers::source_fixtures::*;

#[rstest]
#[case::first_char(0, 0, 0)]
#[case::multibyte(2, 0, 2)]
#[case::before_crlf(5, 0, 5)]
#[case::between_cr_and_lf(6, 0, 6)]
#[case::after_crlf(7, 1, 0)]
#[case::lone_cr(12, 1, 5)]
#[case::after_lone_cr(13, 2, 0)]
#[case::check_mark(19, 2, 6)]
#[case::after_lf(26, 3, 0)]
#[case::end_of_document(30, 3, 4)]
fn test_mixed_endings(#[case] offset: u32, #[case] line: usize, #[case] column: usize) {
    let index = LineIndex::new(MIXED_ENDINGS);
    let position = index.to_line_col(TextSize::from(offset)).unwrap();
    assert_eq!(position, Position::new(line, column));
    assert_eq!(index.to_offset(position).unwrap(), TextSize::from(offset));
}

#[test]
fn test_round_trip_over_every_fixture() {
    let graph = navigation_graph();
    for document in graph.documents() {
        let len = u32::from(document.line_index.len());
        assert_eq!(len as usize, document.text.chars().count());
        for offset in 0..=len {
            let offset = TextSize::from(offset);
            let position = document.line_index.to_line_col(offset).unwrap();
            assert_eq!(
                document.line_index.to_offset(position).unwrap(),
                offset,
                "round trip failed in {} at {}",
                document.path,
                position
            );
        }
    }
}

#[test]
fn test_out_of_range_positions() {
    let index = LineIndex::new(MIXED_ENDINGS);
    assert!(index.to_line_col(TextSize::from(31)).unwrap_err().is_out_of_range());
    assert!(index.to_offset(Position::new(4, 0)).unwrap_err().is_out_of_range());
    // "wörld" plus its `\r` is six columns
    assert!(index.to_offset(Position::new(1, 6)).is_err());
    assert!(index.to_offset(Position::new(3, 5)).is_err());
}

#[test]
fn test_fixture_positions_match_editor_columns() {
    let position = position_of(INDEX, "local-property", 0);
    let graph = navigation_graph();
    let document = graph.document_by_path(INDEX_PATH).unwrap();
    let offset = document.line_index.to_offset(position).unwrap();
    let text: String = document
        .text
        .chars()
        .skip(u32::from(offset) as usize)
        .take("local-property".len())
        .collect();
    assert_eq!(text, "local-property");
}
