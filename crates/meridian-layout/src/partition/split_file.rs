//! Split-key file parsing.
//!
//! Explicit split points for raw-keyed tables can be supplied as a text
//! file: UTF-8, one row key per line, with a single trailing newline
//! permitted. Arbitrary bytes are written as `\xNN` escapes and a literal
//! backslash as `\\`:
//!
//! ```text
//! b
//! m\x00
//! \xff\xfe
//! ```
//!
//! The reader returns keys in file order without sorting them; ordering is
//! validated when the keys are partitioned, so a misordered file fails with
//! the same error a misordered in-memory list would.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use meridian_common::error::{MeridianError, MeridianResult};
use meridian_common::types::RowKey;

/// Reads split keys from a file on disk.
pub fn read_split_keys_from_path(path: impl AsRef<Path>) -> MeridianResult<Vec<RowKey>> {
    let file = File::open(path)?;
    read_split_keys(BufReader::new(file))
}

/// Reads split keys from any reader.
pub fn read_split_keys(mut reader: impl Read) -> MeridianResult<Vec<RowKey>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    parse_split_keys(&data)
}

fn parse_split_keys(data: &[u8]) -> MeridianResult<Vec<RowKey>> {
    if data.is_empty() {
        return Err(MeridianError::InvalidSplitKeyFile {
            line: 1,
            reason: "file is empty".to_string(),
        });
    }

    let mut lines: Vec<&[u8]> = data.split(|&b| b == b'\n').collect();
    // One trailing newline is allowed
    if lines.last().map_or(false, |line| line.is_empty()) {
        lines.pop();
    }

    let mut keys = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        let number = index + 1;
        let key = unescape_line(line, number)?;
        if key.is_empty() {
            return Err(MeridianError::InvalidSplitKeyFile {
                line: number,
                reason: "empty split key".to_string(),
            });
        }
        keys.push(RowKey::from_vec(key));
    }
    Ok(keys)
}

/// Decodes one line, resolving `\xNN` and `\\` escapes.
fn unescape_line(line: &[u8], number: usize) -> MeridianResult<Vec<u8>> {
    let mut out = Vec::with_capacity(line.len());
    let mut i = 0;

    while i < line.len() {
        let byte = line[i];
        if byte != b'\\' {
            out.push(byte);
            i += 1;
            continue;
        }
        match line.get(i + 1) {
            Some(b'\\') => {
                out.push(b'\\');
                i += 2;
            }
            Some(b'x') => {
                let hi = line.get(i + 2).copied().and_then(hex_digit);
                let lo = line.get(i + 3).copied().and_then(hex_digit);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi << 4) | lo);
                        i += 4;
                    }
                    _ => {
                        return Err(MeridianError::InvalidSplitKeyFile {
                            line: number,
                            reason: "truncated \\x escape, expected two hex digits".to_string(),
                        });
                    }
                }
            }
            Some(other) => {
                return Err(MeridianError::InvalidSplitKeyFile {
                    line: number,
                    reason: format!("unsupported escape '\\{}'", *other as char),
                });
            }
            None => {
                return Err(MeridianError::InvalidSplitKeyFile {
                    line: number,
                    reason: "dangling '\\' at end of line".to_string(),
                });
            }
        }
    }
    Ok(out)
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempfile::NamedTempFile;

    fn parse(text: &str) -> MeridianResult<Vec<RowKey>> {
        read_split_keys(text.as_bytes())
    }

    #[test]
    fn test_plain_keys() {
        let keys = parse("b\nm").unwrap();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].as_bytes(), b"b");
        assert_eq!(keys[1].as_bytes(), b"m");
    }

    #[test]
    fn test_trailing_newline_allowed() {
        let keys = parse("b\nm\n").unwrap();
        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn test_hex_escapes() {
        let keys = parse("m\\x00\n\\xff\\xFE").unwrap();
        assert_eq!(keys[0].as_bytes(), &[b'm', 0x00]);
        assert_eq!(keys[1].as_bytes(), &[0xFF, 0xFE]);
    }

    #[test]
    fn test_backslash_escape() {
        let keys = parse("a\\\\b").unwrap();
        assert_eq!(keys[0].as_bytes(), b"a\\b");
    }

    #[test]
    fn test_keys_returned_in_file_order() {
        // No sorting here; the partitioner judges ordering
        let keys = parse("m\nb").unwrap();
        assert_eq!(keys[0].as_bytes(), b"m");
        assert_eq!(keys[1].as_bytes(), b"b");
    }

    #[test]
    fn test_empty_file_rejected() {
        match parse("") {
            Err(MeridianError::InvalidSplitKeyFile { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected InvalidSplitKeyFile, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_line_rejected() {
        match parse("b\n\nm") {
            Err(MeridianError::InvalidSplitKeyFile { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("empty"));
            }
            other => panic!("expected InvalidSplitKeyFile, got {other:?}"),
        }
    }

    #[test]
    fn test_truncated_hex_escape_rejected() {
        match parse("b\nbad\\x0") {
            Err(MeridianError::InvalidSplitKeyFile { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("\\x"));
            }
            other => panic!("expected InvalidSplitKeyFile, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_escape_rejected() {
        match parse("a\\q") {
            Err(MeridianError::InvalidSplitKeyFile { line, reason }) => {
                assert_eq!(line, 1);
                assert!(reason.contains("\\q"));
            }
            other => panic!("expected InvalidSplitKeyFile, got {other:?}"),
        }
    }

    #[test]
    fn test_dangling_backslash_rejected() {
        match parse("ab\\") {
            Err(MeridianError::InvalidSplitKeyFile { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected InvalidSplitKeyFile, got {other:?}"),
        }
    }

    #[test]
    fn test_read_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"b\nm\\x00\nz\n").unwrap();

        let keys = read_split_keys_from_path(file.path()).unwrap();
        assert_eq!(keys.len(), 3);
        assert_eq!(keys[1].as_bytes(), &[b'm', 0x00]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_split_keys_from_path("/definitely/not/here.splits");
        assert!(matches!(result, Err(MeridianError::Io { .. })));
    }
}
