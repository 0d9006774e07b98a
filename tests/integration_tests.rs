//! Integration tests for datanorm

use datanorm::{FileFormat, FileParser, ParseError, ParseResult};
use serde_json::json;
use std::io::Write;

fn parse(filename: &str, data: &[u8]) -> datanorm::Result<ParseResult> {
    FileParser::new().parse_bytes(Some(filename), data)
}

#[test]
fn test_unsupported_extensions_fail() {
    for name in ["data.parquet", "data.tsv", "report.pdf", "noext", "csv"] {
        let err = parse(name, b"a,b\n1,2\n").unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedFormat(_)), "{name}");
    }
}

#[test]
fn test_detection_is_case_insensitive() {
    let result = parse("LEDGER.CSV", b"a\n1\n").unwrap();
    assert_eq!(result.file_type, FileFormat::Csv);

    let err = parse("Book1.XLSX", b"not a workbook").unwrap_err();
    assert!(matches!(
        err,
        ParseError::ParseFailure {
            format: FileFormat::Excel,
            ..
        }
    ));
}

#[test]
fn test_csv_roundtrip_preserves_strings() {
    let data = b"id,name,joined\n007,Alice,2024-03-05\n8,Bob,hello\n";
    let result = parse("people.csv", data).unwrap();

    assert_eq!(result.filename, "people.csv");
    assert_eq!(result.file_type, FileFormat::Csv);
    assert_eq!(result.rows.len(), 2);
    // "007" must remain the string "007", never become the number 7
    assert_eq!(
        result.rows[0],
        json!({"id": "007", "name": "Alice", "joined": "2024-03-05"})
    );
    assert_eq!(
        result.rows[1],
        json!({"id": "8", "name": "Bob", "joined": "hello"})
    );
}

#[test]
fn test_malformed_csv_is_parse_failure() {
    let err = parse("bad.csv", b"a,b\n1,2,3\n").unwrap_err();

    match err {
        ParseError::ParseFailure { format, message } => {
            assert_eq!(format, FileFormat::Csv);
            assert!(!message.is_empty());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_json_array_passes_through() {
    let result = parse("t.json", br#"[{"a":1},{"a":2}]"#).unwrap();

    assert_eq!(result.file_type, FileFormat::Json);
    assert_eq!(result.rows, vec![json!({"a": 1}), json!({"a": 2})]);
}

#[test]
fn test_json_transactions_array_becomes_rows() {
    let result = parse("t.json", br#"{"transactions":[{"x":1}]}"#).unwrap();
    assert_eq!(result.rows, vec![json!({"x": 1})]);
}

#[test]
fn test_json_plain_object_is_sole_row() {
    let result = parse("t.json", br#"{"x":1}"#).unwrap();
    assert_eq!(result.rows, vec![json!({"x": 1})]);
}

#[test]
fn test_json_scalar_is_unexpected_structure() {
    let err = parse("t.json", b"42").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedStructure));
}

#[test]
fn test_json_date_values_are_normalized() {
    let result = parse("t.json", br#"[{"when":"05/03/2024","n":7}]"#).unwrap();

    // Only the string field changes; the number is untouched
    assert_eq!(result.rows, vec![json!({"when": "2024-03-05", "n": 7})]);
}

#[test]
fn test_text_tab_delimiter() {
    let result = parse("t.txt", b"a\tb\n1\t2\n").unwrap();

    assert_eq!(result.file_type, FileFormat::Text);
    assert_eq!(result.rows, vec![json!({"a": "1", "b": "2"})]);
}

#[test]
fn test_text_comma_delimiter() {
    let result = parse("t.txt", b"a,b\n1,2\n").unwrap();
    assert_eq!(result.rows, vec![json!({"a": "1", "b": "2"})]);
}

#[test]
fn test_text_short_lines_pad() {
    let result = parse("t.txt", b"a,b,c\n1,2\n").unwrap();
    assert_eq!(result.rows, vec![json!({"a": "1", "b": "2", "c": ""})]);
}

#[test]
fn test_text_empty_file_yields_no_rows() {
    let result = parse("t.txt", b"").unwrap();
    assert!(result.rows.is_empty());
}

#[test]
fn test_date_normalization_examples() {
    let data = b"a,b,c,d,e,f\n\
        2024-03-05,05/03/2024,01-15-2024,99/01/01,hello,99/99/9999\n";
    let result = parse("dates.csv", data).unwrap();

    assert_eq!(
        result.rows[0],
        json!({
            "a": "2024-03-05",
            "b": "2024-03-05",
            "c": "2024-01-15",
            "d": "2099-01-01",
            "e": "hello",
            "f": "99/99/9999",
        })
    );
}

#[test]
fn test_normalization_is_idempotent() {
    let data = b"date\n05/03/2024\n";
    let first = parse("t.csv", data).unwrap();

    let again = datanorm::normalize_rows(first.rows.clone());
    assert_eq!(first.rows, again);
}

#[test]
fn test_raw_mode_skips_normalization() {
    let mut parser = FileParser::new();
    parser.normalize_dates(false);

    let result = parser.parse_bytes(Some("t.csv"), b"date\n05/03/2024\n").unwrap();
    assert_eq!(result.rows, vec![json!({"date": "05/03/2024"})]);
}

#[test]
fn test_parse_path_detects_from_filename() {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .unwrap();
    file.write_all(b"date,amount\n05/03/2024,12.50\n").unwrap();

    let result = FileParser::new().parse_path(file.path()).unwrap();

    assert_eq!(result.file_type, FileFormat::Csv);
    assert_eq!(
        result.rows,
        vec![json!({"date": "2024-03-05", "amount": "12.50"})]
    );
}

#[test]
fn test_wire_serialization_shape() {
    let result = parse("t.txt", b"a,b\n1,2\n").unwrap();
    let wire = serde_json::to_value(&result).unwrap();

    assert_eq!(
        wire,
        json!({
            "filename": "t.txt",
            "fileType": "text",
            "rows": [{"a": "1", "b": "2"}],
        })
    );
}
