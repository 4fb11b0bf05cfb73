use std::collections::BTreeSet;
use std::io::Read;

use crate::error::SolveError;

/// Largest id or distance accepted in the input.
pub const MAX_VALUE: u64 = 3_999_999_999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub start: u32,
    pub end: u32,
    /// Longest distance allowed for each of the two legs.
    pub max_distance: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: u32,
    pub to: u32,
    pub distance: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub route: Route,
    /// Edges longer than `route.max_distance` are already dropped.
    pub edges: Vec<Edge>,
    pub savehouses: BTreeSet<u32>,
}

enum Fields {
    One(u32),
    Three(u32, u32, u32),
}

#[derive(Clone, Copy)]
enum Section {
    Header,
    Edges,
    Savehouses,
}

/// Parses the solver input. Lines are `\n` terminated, the last one may omit
/// its terminator.
pub fn parse_problem<R: Read>(mut reader: R) -> Result<Problem, SolveError> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    if input.is_empty() {
        return Err(SolveError::InputEmpty);
    }
    let body = input.strip_suffix(b"\n").unwrap_or(&input);

    let mut section = Section::Header;
    let mut route = None;
    let mut edges = Vec::new();
    let mut savehouses = BTreeSet::new();

    for (idx, line) in body.split(|b| *b == b'\n').enumerate() {
        let line_no = idx + 1;
        let fields = parse_fields(line, line_no)?;
        section = match (section, fields) {
            (Section::Header, Fields::Three(start, end, max_distance)) => {
                route = Some(Route {
                    start,
                    end,
                    max_distance,
                });
                Section::Edges
            }
            (Section::Edges, Fields::Three(from, to, distance)) => {
                let limit = route.map(|r| r.max_distance).unwrap_or(0);
                if distance <= limit {
                    edges.push(Edge { from, to, distance });
                }
                Section::Edges
            }
            (Section::Edges | Section::Savehouses, Fields::One(id)) => {
                savehouses.insert(id);
                Section::Savehouses
            }
            (Section::Header, Fields::One(_)) | (Section::Savehouses, Fields::Three(..)) => {
                return Err(SolveError::InvalidFormat { line: line_no });
            }
        };
    }

    let route = route.ok_or(SolveError::InvalidFormat { line: 1 })?;
    Ok(Problem {
        route,
        edges,
        savehouses,
    })
}

fn parse_fields(line: &[u8], line_no: usize) -> Result<Fields, SolveError> {
    let mut values = Vec::with_capacity(3);
    for field in line.split(|b| *b == b' ') {
        if values.len() == 3 {
            return Err(SolveError::InvalidFormat { line: line_no });
        }
        values.push(parse_number(field, line_no)?);
    }
    match values[..] {
        [id] => Ok(Fields::One(id)),
        [a, b, c] => Ok(Fields::Three(a, b, c)),
        _ => Err(SolveError::InvalidFormat { line: line_no }),
    }
}

fn parse_number(field: &[u8], line_no: usize) -> Result<u32, SolveError> {
    if field.is_empty() || !field.iter().all(u8::is_ascii_digit) {
        return Err(SolveError::InvalidFormat { line: line_no });
    }
    let mut value: u64 = 0;
    for digit in field {
        value = value * 10 + u64::from(digit - b'0');
        if value > MAX_VALUE {
            return Err(SolveError::OutOfRange { line: line_no });
        }
    }
    // MAX_VALUE < u32::MAX
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Problem, SolveError> {
        parse_problem(s.as_bytes())
    }

    #[test]
    fn parses_all_sections() {
        let p = parse("1 4 10\n1 2 3\n2 4 11\n2 4 5\n2\n3\n2\n").unwrap();
        assert_eq!(
            p.route,
            Route {
                start: 1,
                end: 4,
                max_distance: 10
            }
        );
        assert_eq!(
            p.edges,
            vec![
                Edge { from: 1, to: 2, distance: 3 },
                Edge { from: 2, to: 4, distance: 5 },
            ]
        );
        assert_eq!(p.savehouses.into_iter().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn final_newline_is_optional() {
        assert_eq!(parse("5 5 5\n5").unwrap(), parse("5 5 5\n5\n").unwrap());
    }

    #[test]
    fn header_only_has_no_savehouses() {
        let p = parse("1 2 3\n").unwrap();
        assert!(p.edges.is_empty());
        assert!(p.savehouses.is_empty());
    }

    #[test]
    fn empty_input() {
        assert!(matches!(parse(""), Err(SolveError::InputEmpty)));
    }

    #[test]
    fn format_violations() {
        for (input, bad_line) in [
            ("\n", 1),
            (" 1 2 3\n", 1),
            ("1  2 3\n", 1),
            ("1 2\n", 1),
            ("1 2 3 4\n", 1),
            ("1 2 3\r\n", 1),
            ("1 2 3\n\n4\n", 2),
            ("1 2 3\n4\n5 6 7\n", 3),
            ("7\n", 1),
            ("1 2 x\n", 1),
            ("1 2 3\n+4\n", 2),
        ] {
            match parse(input) {
                Err(SolveError::InvalidFormat { line }) => assert_eq!(line, bad_line, "{input:?}"),
                other => panic!("{input:?} gave {other:?}"),
            }
        }
    }

    #[test]
    fn range_violations() {
        assert!(matches!(
            parse("4000000000 1 1\n"),
            Err(SolveError::OutOfRange { line: 1 })
        ));
        assert!(matches!(
            parse("1 1 1\n99999999999999999999999\n"),
            Err(SolveError::OutOfRange { line: 2 })
        ));
        assert!(parse("3999999999 3999999999 3999999999\n3999999999\n").is_ok());
    }

    #[test]
    fn range_is_checked_before_later_fields() {
        assert!(matches!(
            parse("5000000000 x\n"),
            Err(SolveError::OutOfRange { line: 1 })
        ));
    }
}
