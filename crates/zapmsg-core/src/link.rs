use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkMode {
    /// `wa.me` links, handled by the native app on phones.
    #[default]
    Direct,
    /// WhatsApp Web in the browser.
    Web,
}

impl LinkMode {
    pub fn toggled(self) -> Self {
        match self {
            LinkMode::Direct => LinkMode::Web,
            LinkMode::Web => LinkMode::Direct,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LinkMode::Direct => "WhatsApp (app)",
            LinkMode::Web => "WhatsApp Web (PC)",
        }
    }
}

/// Builds the outbound link. `phone` must already be digits only and
/// `encoded_text` already percent-encoded.
pub fn build_link(phone: &str, encoded_text: &str, mode: LinkMode) -> String {
    match mode {
        LinkMode::Direct => format!("https://wa.me/{}?text={}", phone, encoded_text),
        LinkMode::Web => format!(
            "https://web.whatsapp.com/send?phone={}&text={}",
            phone, encoded_text
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_link() {
        assert_eq!(
            build_link("5511999999999", "Ola", LinkMode::Direct),
            "https://wa.me/5511999999999?text=Ola"
        );
    }

    #[test]
    fn test_web_link() {
        assert_eq!(
            build_link("5511999999999", "Ola%20Ana", LinkMode::Web),
            "https://web.whatsapp.com/send?phone=5511999999999&text=Ola%20Ana"
        );
    }

    #[test]
    fn test_toggle() {
        assert_eq!(LinkMode::Direct.toggled(), LinkMode::Web);
        assert_eq!(LinkMode::Web.toggled(), LinkMode::Direct);
    }
}
