//! Edge-list file parsing

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::graph::{GraphBuilder, SegmentGraph};

/// Error raised while reading an edge-list file
#[derive(Debug, Error)]
pub enum ParseError {
    /// A data line did not split into the three expected fields
    #[error("data line {line}: expected 3 fields, found {found}: {text:?}")]
    FieldCount {
        line: usize,
        found: usize,
        text: String,
    },

    /// A field was not an unsigned integer
    #[error("data line {line}: not an integer: {token:?}")]
    InvalidInteger { line: usize, token: String },

    /// The underlying file could not be read
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Load a segment's reference graph from an edge-list file
pub fn load_edge_list(path: &Path) -> Result<SegmentGraph, ParseError> {
    log::info!("Reading edge list: {}", path.display());
    let file = File::open(path)?;
    read_edge_list(BufReader::new(file))
}

/// Parse an edge-list stream into a segment graph.
///
/// The first line is a header and is discarded. Every following line must
/// hold exactly three whitespace-separated integers:
/// `<referencedFrame> <weight> <referencedByFrame>`. A weight of 0 marks the
/// referenced frame as a sink. The first malformed line aborts the read.
pub fn read_edge_list<R: BufRead>(reader: R) -> Result<SegmentGraph, ParseError> {
    let mut builder = GraphBuilder::new();
    let mut lines = reader.lines();

    // Consume the header line
    if lines.next().transpose()?.is_none() {
        return Ok(builder.finish());
    }

    for (index, line) in lines.enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(ParseError::FieldCount {
                line: index + 1,
                found: fields.len(),
                text: line.clone(),
            });
        }

        let referenced = parse_field(fields[0], index + 1)?;
        let weight = parse_field(fields[1], index + 1)?;
        let referenced_by = parse_field(fields[2], index + 1)?;
        builder.record(referenced, weight, referenced_by);
    }

    Ok(builder.finish())
}

fn parse_field(token: &str, line: usize) -> Result<u32, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidInteger {
        line,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<SegmentGraph, ParseError> {
        read_edge_list(Cursor::new(text))
    }

    #[test]
    fn header_only_input_is_an_empty_graph() {
        let segment = parse("poc weight poc_ref\n").unwrap();
        assert!(segment.bytestream_order.is_empty());
        assert!(segment.graph.is_empty());
        assert_eq!(segment.max_weight, 0);
    }

    #[test]
    fn empty_input_is_an_empty_graph() {
        let segment = parse("").unwrap();
        assert!(segment.bytestream_order.is_empty());
    }

    #[test]
    fn builds_graph_order_and_counters() {
        let segment = parse("poc weight poc_ref\n1 5 2\n1 3 4\n2 0 3\n").unwrap();

        assert_eq!(segment.bytestream_order, vec![1, 2]);
        assert_eq!(segment.max_weight, 5);
        assert_eq!(segment.stats.vertices, 2);
        assert_eq!(segment.stats.edges, 2);
        assert_eq!(segment.stats.sinks, 1);

        let citations: Vec<(u32, u32)> = segment
            .graph
            .references(1)
            .iter()
            .map(|r| (r.by_frame, r.weight))
            .collect();
        assert_eq!(citations, vec![(2, 5), (4, 3)]);
        assert!(!segment.graph.contains(2));
    }

    #[test]
    fn frames_returning_later_in_the_stream_reappear_in_order() {
        let segment = parse("h h h\n1 5 2\n1 6 3\n2 7 3\n1 8 9\n").unwrap();
        assert_eq!(segment.bytestream_order, vec![1, 2, 1]);
    }

    #[test]
    fn tolerates_arbitrary_whitespace_between_fields() {
        let segment = parse("h h h\n  1\t 5   2 \n").unwrap();
        assert_eq!(segment.bytestream_order, vec![1]);
        assert_eq!(segment.max_weight, 5);
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = parse("h h h\n1 5\n").unwrap_err();
        match err {
            ParseError::FieldCount { line, found, .. } => {
                assert_eq!(line, 1);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_integer_field() {
        let err = parse("h h h\n1 5 2\n1 x 2\n").unwrap_err();
        match err {
            ParseError::InvalidInteger { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_blank_data_lines() {
        assert!(matches!(
            parse("h h h\n1 5 2\n\n").unwrap_err(),
            ParseError::FieldCount { found: 0, .. }
        ));
    }
}
