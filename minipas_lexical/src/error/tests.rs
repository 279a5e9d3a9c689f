use minipas_base::source_file::Location;

use super::{Error, IllegalCharacter, MalformedNumberLiteral, UnterminatedComment};
use crate::classifier::CommentOpener;

#[test]
fn messages() {
    let error = Error::from(IllegalCharacter {
        location: Location::new(1, 3),
        character: '@',
    });
    assert_eq!(error.to_string(), "illegal character '@'");
    assert_eq!(error.kind_name(), "IllegalCharacter");
    assert_eq!(error.width(), 1);

    let error = Error::from(UnterminatedComment {
        location: Location::new(4, 1),
        opener: CommentOpener::ParenStar,
    });
    assert_eq!(error.to_string(), "unterminated comment, `(*` is never closed");
    assert_eq!(error.help().as_deref(), Some("close the comment with `*)`"));
    assert_eq!(error.width(), 2);
}

#[test]
fn serializes_flat_position() {
    let error = Error::from(MalformedNumberLiteral {
        location: Location::new(2, 7),
        text: "1.2.3".to_string(),
        accepted: "1.2".to_string(),
    });

    let value = serde_json::to_value(&error).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "kind": "MalformedNumberLiteral",
            "line": 2,
            "col": 7,
            "message": "malformed number literal `1.2.3`",
        })
    );
}
