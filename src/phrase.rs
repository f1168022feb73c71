//! Line parsing for phrase lists.
//!
//! Each input line carries a phrase and, optionally, a translation in
//! parentheses. The translation is only ever written to the log file; it is
//! never sent to the synthesis engine.

use regex::Regex;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseEntry {
    /// The line with the parenthetical removed, trimmed.
    pub phrase: String,
    /// Content of the first parenthesized group, trimmed. Empty when the
    /// line has no parenthetical.
    pub translation: String,
}

/// Parser for phrase-list lines.
///
/// Holds its regexes compiled once; create one parser per process and reuse
/// it for every line.
pub struct LineParser {
    parenthetical: Regex,
    punctuation: Regex,
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser {
    pub fn new() -> Self {
        Self {
            parenthetical: Regex::new(r"\((.*?)\)").expect("valid literal regex"),
            punctuation: Regex::new(r"[.,!?]").expect("valid literal regex"),
        }
    }

    /// Split one line into phrase and translation.
    ///
    /// The translation is the content of the first parenthesized group
    /// (non-greedy); that group is removed from the line to form the phrase.
    /// Both parts are trimmed of surrounding whitespace.
    pub fn parse(&self, line: &str) -> PhraseEntry {
        let translation = self
            .parenthetical
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();
        let phrase = self.parenthetical.replacen(line, 1, "").trim().to_string();
        PhraseEntry { phrase, translation }
    }

    /// Derive the audio file stem for a phrase.
    ///
    /// Deletes each of `.` `,` `!` `?`, then replaces spaces with hyphens.
    /// No collision detection and no further filesystem sanitization; two
    /// phrases with the same stem overwrite the same file.
    pub fn file_stem(&self, phrase: &str) -> String {
        self.punctuation.replace_all(phrase, "").replace(' ', "-")
    }
}

#[cfg(test)]
mod tests {
    use super::LineParser;

    #[test]
    fn splits_phrase_and_translation() {
        let parser = LineParser::new();
        let entry = parser.parse("Guten Morgen (Good morning)");
        assert_eq!(entry.phrase, "Guten Morgen");
        assert_eq!(entry.translation, "Good morning");
    }

    #[test]
    fn line_without_parenthetical_has_empty_translation() {
        let parser = LineParser::new();
        let entry = parser.parse("  Danke  ");
        assert_eq!(entry.phrase, "Danke");
        assert_eq!(entry.translation, "");
    }

    #[test]
    fn only_first_parenthetical_becomes_translation() {
        let parser = LineParser::new();
        let entry = parser.parse("Bitte (please) sehr (very)");
        assert_eq!(entry.translation, "please");
        assert_eq!(entry.phrase, "Bitte  sehr (very)");
    }

    #[test]
    fn translation_is_trimmed() {
        let parser = LineParser::new();
        let entry = parser.parse("Tschüss ( bye )");
        assert_eq!(entry.translation, "bye");
        assert_eq!(entry.phrase, "Tschüss");
    }

    #[test]
    fn file_stem_strips_punctuation_and_hyphenates() {
        let parser = LineParser::new();
        assert_eq!(parser.file_stem("Hallo, wie geht's?"), "Hallo-wie-geht's");
    }

    #[test]
    fn file_stem_is_idempotent() {
        let parser = LineParser::new();
        let once = parser.file_stem("Guten Morgen, alle!");
        let twice = parser.file_stem(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_line_yields_empty_entry() {
        let parser = LineParser::new();
        let entry = parser.parse("");
        assert_eq!(entry.phrase, "");
        assert_eq!(entry.translation, "");
        assert_eq!(parser.file_stem(&entry.phrase), "");
    }
}
