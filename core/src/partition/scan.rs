use std::io::{self, BufRead};

/// Lines containing this are data lines.
pub const DATA_DELIMITER: char = ' ';

/// Scanner position after the header has been consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    ExpectData,
    /// `first` is the line that ended the data section.
    ExpectTrailer { first: String },
}

pub(crate) fn is_data_line(line: &str) -> bool {
    line.contains(DATA_DELIMITER)
}

/// Reads one line without its terminator (`\n` or `\r\n`). `None` at end of
/// stream.
pub(crate) fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(Some(buf))
}

pub(crate) fn read_rest<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut rest = String::new();
    reader.read_to_string(&mut rest)?;
    Ok(rest)
}

pub(crate) fn read_rest_lines<R: BufRead>(reader: &mut R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    while let Some(line) = read_line(reader)? {
        lines.push(line);
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn read_line_strips_both_terminators() {
        let mut r = Cursor::new("a\r\nb\nc");
        assert_eq!(read_line(&mut r).unwrap().as_deref(), Some("a"));
        assert_eq!(read_line(&mut r).unwrap().as_deref(), Some("b"));
        assert_eq!(read_line(&mut r).unwrap().as_deref(), Some("c"));
        assert_eq!(read_line(&mut r).unwrap(), None);
    }

    #[test]
    fn read_rest_keeps_raw_text() {
        let mut r = Cursor::new("x\r\ny\n");
        assert_eq!(read_rest(&mut r).unwrap(), "x\r\ny\n");
    }
}
