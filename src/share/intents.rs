use clap::ValueEnum;
use url::Url;

use super::link::LinkError;

const WHATSAPP_URL: &str = "https://wa.me/";
const FACEBOOK_SHARER_URL: &str = "https://www.facebook.com/sharer/sharer.php";

/// Where a result can be shared
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShareTarget {
    Whatsapp,
    Facebook,
}

impl ShareTarget {
    /// URL that opens the target's share dialog for this result
    pub fn intent_url(self, text: &str, link: &str) -> Result<String, LinkError> {
        match self {
            ShareTarget::Whatsapp => whatsapp_url(text),
            ShareTarget::Facebook => facebook_url(link),
        }
    }
}

/// Message posted along with a result link
pub fn share_text(name_a: &str, name_b: &str, score: u8, link: &str) -> String {
    format!(
        "{} and {} have a {}% love compatibility! Check your compatibility at {}",
        name_a, name_b, score, link
    )
}

pub fn whatsapp_url(text: &str) -> Result<String, LinkError> {
    Ok(Url::parse_with_params(WHATSAPP_URL, &[("text", text)])?.into())
}

pub fn facebook_url(link: &str) -> Result<String, LinkError> {
    Ok(Url::parse_with_params(FACEBOOK_SHARER_URL, &[("u", link)])?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_text() {
        let text = share_text("Alice", "Bob", 45, "https://lovecalc.app/?a=Alice&b=Bob");
        assert_eq!(
            text,
            "Alice and Bob have a 45% love compatibility! Check your compatibility at https://lovecalc.app/?a=Alice&b=Bob"
        );
    }

    #[test]
    fn test_whatsapp_url_encodes_text() {
        let url = whatsapp_url("Alice & Bob: 45%").unwrap();
        assert_eq!(url, "https://wa.me/?text=Alice+%26+Bob%3A+45%25");
    }

    #[test]
    fn test_facebook_url_encodes_link() {
        let url = facebook_url("https://lovecalc.app/?a=Alice&b=Bob").unwrap();
        assert_eq!(
            url,
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Flovecalc.app%2F%3Fa%3DAlice%26b%3DBob"
        );
    }

    #[test]
    fn test_intent_url_dispatch() {
        let link = "https://lovecalc.app/?a=Alice&b=Bob";
        let wa = ShareTarget::Whatsapp.intent_url("hi", link).unwrap();
        let fb = ShareTarget::Facebook.intent_url("hi", link).unwrap();
        assert!(wa.starts_with("https://wa.me/?text="));
        assert!(fb.starts_with("https://www.facebook.com/sharer/sharer.php?u="));
    }
}
