//! Plain-text rendering of conversation entries.

use chatline_models::{Message, Sender};
use chrono::Local;

/// Short speaker label used in transcripts.
pub fn speaker(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "you",
        Sender::Bot => "bot",
    }
}

/// `[HH:MM:SS] you: text`, timestamp in local time.
pub fn format_message(message: &Message) -> String {
    format!(
        "[{}] {}: {}",
        message.sent_at().with_timezone(&Local).format("%H:%M:%S"),
        speaker(message.sender()),
        message.text()
    )
}

/// Wrap `text` into rows of at most `width` terminal cells, keeping
/// explicit line breaks. Words longer than a row are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width.max(1))
        .into_iter()
        .map(std::borrow::Cow::into_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use unicode_width::UnicodeWidthStr;

    use super::*;

    #[test]
    fn format_has_speaker_and_text() {
        let line = format_message(&Message::user("  Hello ").unwrap());
        assert!(line.ends_with("] you: Hello"), "{line}");
        assert!(line.starts_with('['));

        let line = format_message(&Message::bot("Hi there"));
        assert!(line.ends_with("] bot: Hi there"), "{line}");
    }

    #[test]
    fn wrap_splits_long_lines() {
        assert_eq!(wrap("abcdefg", 3), ["abc", "def", "g"]);
    }

    #[test]
    fn wrap_keeps_line_breaks_and_blank_lines() {
        assert_eq!(wrap("ab\n\ncd", 10), ["ab", "", "cd"]);
    }

    #[test]
    fn wrap_measures_wide_characters_in_cells() {
        let rows = wrap("你好世界你好", 6);
        assert_eq!(rows, ["你好世", "界你好"]);
        for row in &rows {
            assert!(UnicodeWidthStr::width(row.as_str()) <= 6, "{row}");
        }
    }

    #[test]
    fn wrap_does_not_count_combining_marks() {
        // 6 chars, 4 cells: the two vowel/tone marks take no space
        assert_eq!(UnicodeWidthStr::width("สวัสดี"), 4);
        assert_eq!(wrap("สวัสดี", 4), ["สวัสดี"]);
    }

    #[test]
    fn wrap_breaks_on_spaces_first() {
        assert_eq!(wrap("hello there world", 11), ["hello there", "world"]);
    }

    #[test]
    fn wrap_zero_width_does_not_loop() {
        assert_eq!(wrap("ab", 0), ["a", "b"]);
    }
}
