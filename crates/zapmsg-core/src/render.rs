use chrono::{NaiveTime, Timelike};

use crate::contact::Contact;

pub const NAME_PLACEHOLDER: &str = "{nome}";
pub const GREETING_PLACEHOLDER: &str = "{saudacao}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            0..12 => Greeting::Morning,
            12..18 => Greeting::Afternoon,
            _ => Greeting::Evening,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Greeting::Morning => "Bom dia",
            Greeting::Afternoon => "Boa tarde",
            Greeting::Evening => "Boa noite",
        }
    }
}

/// Substitutes every `{nome}` and `{saudacao}` in `template`.
pub fn render(template: &str, contact: &Contact, now: NaiveTime) -> String {
    template
        .replace(NAME_PLACEHOLDER, contact.name())
        .replace(GREETING_PLACEHOLDER, Greeting::for_hour(now.hour()).as_str())
}

/// Marks that stay literal in a query value, as with `encodeURIComponent`.
const LITERAL_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encodes `text` for use as a URL query value.
///
/// Everything but ASCII alphanumerics and `-_.!~*'()` is escaped.
pub fn encode_for_url(text: &str) -> String {
    // An input `%` comes out as `%25`, so these escapes only stand for the marks.
    LITERAL_MARKS
        .iter()
        .fold(urlencoding::encode(text).into_owned(), |encoded, (escaped, mark)| {
            encoded.replace(escaped, mark)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_greeting_buckets() {
        let ana = Contact::new("Ana", "5511999991111");
        let template = "Olá {nome}, {saudacao}!";

        assert_eq!(render(template, &ana, at(9, 0)), "Olá Ana, Bom dia!");
        assert_eq!(render(template, &ana, at(15, 0)), "Olá Ana, Boa tarde!");
        assert_eq!(render(template, &ana, at(20, 0)), "Olá Ana, Boa noite!");
    }

    #[test]
    fn test_bucket_edges() {
        assert_eq!(Greeting::for_hour(0), Greeting::Morning);
        assert_eq!(Greeting::for_hour(11), Greeting::Morning);
        assert_eq!(Greeting::for_hour(12), Greeting::Afternoon);
        assert_eq!(Greeting::for_hour(17), Greeting::Afternoon);
        assert_eq!(Greeting::for_hour(18), Greeting::Evening);
        assert_eq!(Greeting::for_hour(23), Greeting::Evening);
    }

    #[test]
    fn test_every_occurrence_is_replaced() {
        let bia = Contact::new("Bia", "5511999991111");
        assert_eq!(render("{nome} {nome} {nome}", &bia, at(10, 30)), "Bia Bia Bia");
    }

    #[test]
    fn test_placeholders_are_case_sensitive() {
        let bia = Contact::new("Bia", "5511999991111");
        assert_eq!(render("{Nome} {SAUDACAO}", &bia, at(10, 0)), "{Nome} {SAUDACAO}");
    }

    #[test]
    fn test_encode_for_url() {
        assert_eq!(encode_for_url("Olá Ana, tudo bem?"), "Ol%C3%A1%20Ana%2C%20tudo%20bem%3F");
        assert_eq!(encode_for_url("linha 1\nlinha 2"), "linha%201%0Alinha%202");
        assert_eq!(encode_for_url("a&b=c"), "a%26b%3Dc");
    }

    #[test]
    fn test_encode_keeps_uri_component_marks() {
        assert_eq!(encode_for_url("Oi!"), "Oi!");
        assert_eq!(encode_for_url("Amigo(a) *'-_.~"), "Amigo(a)%20*'-_.~");
        assert_eq!(encode_for_url("100%21"), "100%2521");
        assert_eq!(encode_for_url("#promo+50%"), "%23promo%2B50%25");
    }
}
