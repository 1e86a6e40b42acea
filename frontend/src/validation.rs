use once_cell::sync::Lazy;
use regex::Regex;

// Browser `\s`: Unicode White_Space minus U+0085, plus U+FEFF.
const BROWSER_SPACE: &str =
    r"\t\n\x0B\x0C\r\x20\x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    let ws = BROWSER_SPACE;
    Regex::new(&format!(r"^[^{ws}@]+@[^{ws}@]+\.[^{ws}@]+$")).expect("valid email pattern")
});

// ASCII digits only, like the browser's `\d`.
static PHONE: Lazy<Regex> = Lazy::new(|| {
    let ws = BROWSER_SPACE;
    Regex::new(&format!(r"^[0-9{ws}+\-()]{{7,15}}$")).expect("valid phone pattern")
});

const MIN_NAME_UNITS: usize = 2;
const MIN_MESSAGE_UNITS: usize = 10;

fn is_browser_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Trims the way `String.prototype.trim` does in the browser.
pub fn browser_trim(value: &str) -> &str {
    value.trim_matches(is_browser_space)
}

/// Length as the browser reports it, in UTF-16 code units.
pub fn browser_len(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn is_valid_name(name: &str) -> bool {
    browser_len(browser_trim(name)) >= MIN_NAME_UNITS
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(browser_trim(email))
}

/// Italian and international numbers: digits, spaces, `+`, `-` and parentheses.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE.is_match(browser_trim(phone))
}

pub fn is_valid_message(message: &str) -> bool {
    browser_len(browser_trim(message)) >= MIN_MESSAGE_UNITS
}

/// Text fields of the contact form, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    pub fn is_valid(self, value: &str) -> bool {
        match self {
            Field::Name => is_valid_name(value),
            Field::Email => is_valid_email(value),
            Field::Phone => is_valid_phone(value),
            Field::Message => is_valid_message(value),
        }
    }
}
