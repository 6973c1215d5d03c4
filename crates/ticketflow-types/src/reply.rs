pub const GREETING_REPLY: &str = "Hello! I'm here to help you. How can I assist you today?";
pub const PASSWORD_REPLY: &str = "I can help you with login issues. You can reset your password by clicking 'Forgot Password' on the login page.";
pub const THANKS_REPLY: &str = "You're very welcome! Is there anything else I can help you with?";
pub const FALLBACK_REPLY: &str = "I understand your concern. Could you provide more details so I can better assist you?";

/// How a trigger is compared against the lower-cased message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    /// Must appear as a whole word; short greetings occur inside ordinary words ("this", "they")
    Word(&'static str),
    /// May appear anywhere, so inflections ("passwords", "thankful") still match
    Substring(&'static str),
}

impl Trigger {
    fn matches(&self, lowered: &str, words: &[&str]) -> bool {
        match self {
            Trigger::Word(word) => words.contains(word),
            Trigger::Substring(fragment) => lowered.contains(fragment),
        }
    }
}

/// Rules checked in order; first match wins
const REPLY_RULES: &[(&[Trigger], &str)] = &[
    (
        &[Trigger::Word("hello"), Trigger::Word("hi"), Trigger::Word("hey")],
        GREETING_REPLY,
    ),
    (
        &[Trigger::Substring("password"), Trigger::Substring("login")],
        PASSWORD_REPLY,
    ),
    (
        &[Trigger::Substring("thank"), Trigger::Substring("thanks")],
        THANKS_REPLY,
    ),
];

/// Placeholder bot: pick a canned answer for a customer message.
///
/// Greetings must be whole words, so "this" does not count as "hi". The
/// password and thanks triggers match anywhere in the message.
pub fn scripted_reply(message: &str) -> &'static str {
    let lowered = message.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    REPLY_RULES
        .iter()
        .find(|(triggers, _)| triggers.iter().any(|t| t.matches(&lowered, &words)))
        .map(|(_, reply)| *reply)
        .unwrap_or(FALLBACK_REPLY)
}
