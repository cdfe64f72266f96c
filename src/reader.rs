use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{open_error, Result, TallyError};

/// Field delimiter within the first line.
const DELIMITER: char = ',';

/// Byte-order mark some editors prepend to UTF-8 files.
const BOM: char = '\u{feff}';

/// Read the first line of `path` and split it into validated tokens.
///
/// Tokens must be non-empty runs of ASCII letters; original case is
/// preserved. The first offending token aborts the read with
/// [`TallyError::IllegalCharacter`] and nothing read so far is
/// returned. An empty file, or an empty first line, yields no tokens.
/// Lines after the first are never read.
pub fn read_tokens(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut reader = BufReader::new(file);

    let mut line = String::new();
    reader.read_line(&mut line)?;

    let line = line.trim_end_matches(['\n', '\r']);
    let line = line.strip_prefix(BOM).unwrap_or(line);

    if line.is_empty() {
        return Ok(Vec::new());
    }

    // split() keeps trailing empty fields, so "a,b," produces a third,
    // empty token that fails validation below.
    let mut tokens = Vec::new();
    for (index, field) in line.split(DELIMITER).enumerate() {
        validate_token(field, index + 1)?;
        tokens.push(field.to_string());
    }

    Ok(tokens)
}

fn validate_token(token: &str, position: usize) -> Result<()> {
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(TallyError::IllegalCharacter {
            position,
            text: token.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn input_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_reads_tokens_in_line_order() {
        let file = input_file("ab,XY,c");
        let tokens = read_tokens(file.path()).unwrap();
        assert_eq!(tokens, vec!["ab", "XY", "c"]);
    }

    #[test]
    fn test_preserves_token_case() {
        let file = input_file("aB,Cd");
        let tokens = read_tokens(file.path()).unwrap();
        assert_eq!(tokens, vec!["aB", "Cd"]);
    }

    #[test]
    fn test_strips_leading_bom() {
        let file = input_file("\u{feff}ab,XY");
        let tokens = read_tokens(file.path()).unwrap();
        assert_eq!(tokens, vec!["ab", "XY"]);
    }

    #[test]
    fn test_only_first_line_is_read() {
        let file = input_file("ab,cd\nzz,qq");
        let tokens = read_tokens(file.path()).unwrap();
        assert_eq!(tokens, vec!["ab", "cd"]);
    }

    #[test]
    fn test_crlf_line_ending() {
        let file = input_file("ab,cd\r\nzz");
        let tokens = read_tokens(file.path()).unwrap();
        assert_eq!(tokens, vec!["ab", "cd"]);
    }

    #[test]
    fn test_empty_file_yields_no_tokens() {
        let file = input_file("");
        assert!(read_tokens(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_blank_first_line_yields_no_tokens() {
        let file = input_file("\nab,cd");
        assert!(read_tokens(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_digit_fails_with_position_and_text() {
        let file = input_file("ab,a1");
        match read_tokens(file.path()) {
            Err(TallyError::IllegalCharacter { position, text }) => {
                assert_eq!(position, 2);
                assert_eq!(text, "a1");
            }
            other => panic!("expected IllegalCharacter, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_empty_field_fails() {
        let file = input_file("a,b,");
        assert!(matches!(
            read_tokens(file.path()),
            Err(TallyError::IllegalCharacter { position: 3, .. })
        ));
    }

    #[test]
    fn test_non_ascii_letter_fails() {
        let file = input_file("ab,f\u{fc}r");
        assert!(matches!(
            read_tokens(file.path()),
            Err(TallyError::IllegalCharacter { position: 2, .. })
        ));
    }

    #[test]
    fn test_missing_file_is_file_error() {
        let result = read_tokens(Path::new("no_such_token_file.txt"));
        assert!(matches!(result, Err(TallyError::FileIo(_))));
    }
}
