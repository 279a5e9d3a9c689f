use super::Location;

#[test]
fn test_get_line_byte_positions() {
    let text = "programme\ntest;\r\n\rdebut";
    let byte_positions = super::get_line_byte_positions(text);
    assert_eq!(byte_positions, vec![0..10, 10..17, 17..23]);
}

#[test]
fn test_trailing_newline_opens_empty_line() {
    let byte_positions = super::get_line_byte_positions("fin.\n");
    assert_eq!(byte_positions, vec![0..5, 5..5]);
}

#[test]
fn test_mapped_file() {
    const TEST_FILE: &str = "programme essai1;\ndebut\nfin.";
    let source_file = super::SourceFile::temp(TEST_FILE).unwrap();
    assert_eq!(source_file.content(), TEST_FILE);
    assert_eq!(source_file.line_number(), 3);
    assert_eq!(source_file.get_line(2), Some("debut\n"));
    assert_eq!(source_file.get_line(3), Some("fin."));
    assert_eq!(source_file.get_line(0), None);
    assert_eq!(source_file.get_line(4), None);
}

#[test]
fn test_empty_file() {
    let source_file = super::SourceFile::temp("").unwrap();
    assert!(source_file.is_empty());
    assert_eq!(source_file.line_number(), 1);
}

#[test]
fn test_location_display() {
    assert_eq!(Location::new(3, 14).to_string(), "3:14");
    assert_eq!(Location::default(), Location::START);
}
