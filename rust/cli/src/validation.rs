//! Parsing of the interactive seat's input.
//!
//! A turn prompt accepts one face value that the seat actually rolled, or
//! a quit command. Anything else yields a message and the prompt repeats.

use vegas_engine::dice::DiceValue;

/// Outcome of parsing one line typed at the face prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A face present in the pending roll
    Face(DiceValue),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse `input` against the faces currently on offer.
///
/// # Example
///
/// ```rust
/// # use vegas_cli::validation::{parse_face_input, ParseResult};
/// use vegas_engine::dice::DiceValue;
///
/// let rolled = [DiceValue::Two, DiceValue::Five];
/// assert_eq!(parse_face_input("5", &rolled), ParseResult::Face(DiceValue::Five));
/// assert_eq!(parse_face_input("quit", &rolled), ParseResult::Quit);
/// assert!(matches!(parse_face_input("4", &rolled), ParseResult::Invalid(_)));
/// ```
pub fn parse_face_input(input: &str, available: &[DiceValue]) -> ParseResult {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    if input == "q" || input == "quit" {
        return ParseResult::Quit;
    }

    let Ok(value) = input.parse::<u8>() else {
        return ParseResult::Invalid(format!("Unrecognized input: {}", input));
    };
    let Some(face) = DiceValue::from_u8(value) else {
        return ParseResult::Invalid(format!("Face must be 1 to 6, got {}", value));
    };
    if !available.contains(&face) {
        let faces: Vec<String> = available.iter().map(|f| f.to_string()).collect();
        return ParseResult::Invalid(format!(
            "No die shows {}; choose one of {}",
            face,
            faces.join(", ")
        ));
    }
    ParseResult::Face(face)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLLED: [DiceValue; 3] = [DiceValue::One, DiceValue::Three, DiceValue::Six];

    #[test]
    fn accepts_rolled_faces_with_whitespace() {
        assert_eq!(parse_face_input(" 3 ", &ROLLED), ParseResult::Face(DiceValue::Three));
        assert_eq!(parse_face_input("6\n", &ROLLED), ParseResult::Face(DiceValue::Six));
    }

    #[test]
    fn quit_is_case_insensitive() {
        assert_eq!(parse_face_input("Q", &ROLLED), ParseResult::Quit);
        assert_eq!(parse_face_input("QUIT", &ROLLED), ParseResult::Quit);
    }

    #[test]
    fn rejects_faces_outside_one_to_six() {
        match parse_face_input("7", &ROLLED) {
            ParseResult::Invalid(msg) => assert!(msg.contains("1 to 6")),
            other => panic!("expected Invalid, got {:?}", other),
        }
        assert!(matches!(parse_face_input("0", &ROLLED), ParseResult::Invalid(_)));
    }

    #[test]
    fn rejects_faces_not_rolled() {
        match parse_face_input("2", &ROLLED) {
            ParseResult::Invalid(msg) => assert_eq!(msg, "No die shows 2; choose one of 1, 3, 6"),
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn rejects_words_and_empty_lines() {
        assert!(matches!(parse_face_input("", &ROLLED), ParseResult::Invalid(_)));
        match parse_face_input("three", &ROLLED) {
            ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
            other => panic!("expected Invalid, got {:?}", other),
        }
    }
}
