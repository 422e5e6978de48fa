//! Rule-based replies.
//!
//! The reference bot lower-cases the incoming text and checks a short list
//! of keyword rules in order. Matching is plain substring search, so
//! `"this"` counts as a greeting because it contains `"hi"`.

/// Produces the reply text for an incoming chat message.
pub trait Responder: Send + Sync {
    /// Reply to `message`.
    fn reply(&self, message: &str) -> String;
}

/// Reply for greetings.
pub const GREETING: &str = "Hello! How can I help you today? (สวัสดีครับ มีอะไรให้ช่วยไหมครับ)";

/// Reply for identity questions.
pub const IDENTITY: &str = "I am a simple AI chatbot. (ผมคือแชทบอท AI ครับ)";

/// Reply for farewells.
pub const FAREWELL: &str = "Goodbye! Have a nice day. (ลาก่อนครับ)";

/// Keyword table, checked top to bottom.
const RULES: &[(&[&str], &str)] = &[
    (&["hello", "hi", "สวัสดี"], GREETING),
    (&["who are you", "คุณคือใคร"], IDENTITY),
    (&["bye", "บ๊ายบาย"], FAREWELL),
];

/// The keyword bot.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedResponder;

impl Responder for RuleBasedResponder {
    fn reply(&self, message: &str) -> String {
        let lowered = message.to_lowercase();

        RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
            .map_or_else(
                || format!("You said: {lowered}. I'm still learning! (ระบบยังเรียนรู้อยู่ครับ)"),
                |(_, reply)| (*reply).to_string(),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(message: &str) -> String {
        RuleBasedResponder.reply(message)
    }

    #[test]
    fn greetings() {
        assert_eq!(reply("Hello there"), GREETING);
        assert_eq!(reply("HI"), GREETING);
        assert_eq!(reply("สวัสดีครับ"), GREETING);
    }

    #[test]
    fn identity_question() {
        assert_eq!(reply("Who are you?"), IDENTITY);
        assert_eq!(reply("คุณคือใคร"), IDENTITY);
    }

    #[test]
    fn farewell() {
        assert_eq!(reply("ok BYE"), FAREWELL);
        assert_eq!(reply("บ๊ายบาย"), FAREWELL);
    }

    #[test]
    fn earlier_rules_win() {
        assert_eq!(reply("hello, who are you?"), GREETING);
        assert_eq!(reply("who are you? bye"), IDENTITY);
    }

    #[test]
    fn substring_matching_is_kept() {
        // "this" contains "hi"
        assert_eq!(reply("what is this"), GREETING);
    }

    #[test]
    fn fallback_echoes_lowercased_text() {
        assert_eq!(
            reply("Tell me A Joke"),
            "You said: tell me a joke. I'm still learning! (ระบบยังเรียนรู้อยู่ครับ)"
        );
    }

    #[test]
    fn empty_message_uses_fallback() {
        assert_eq!(
            reply(""),
            "You said: . I'm still learning! (ระบบยังเรียนรู้อยู่ครับ)"
        );
    }
}
