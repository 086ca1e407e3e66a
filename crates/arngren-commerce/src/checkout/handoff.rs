//! Handing a rendered order to a mail composer.

use serde::{Deserialize, Serialize};
use std::fmt;

use urlencoding::encode;

/// Webmail providers with a known compose URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Webmail {
    Gmail,
    Outlook,
}

impl Webmail {
    /// Every supported provider.
    pub const ALL: [Webmail; 2] = [Webmail::Gmail, Webmail::Outlook];

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            Webmail::Gmail => "Gmail",
            Webmail::Outlook => "Outlook",
        }
    }

    fn compose_url(&self, to: &str, subject: &str, body: &str) -> String {
        match self {
            Webmail::Gmail => format!(
                "https://mail.google.com/mail/?view=cm&fs=1&to={}&su={}&body={}",
                encode(to),
                encode(subject),
                encode(body)
            ),
            Webmail::Outlook => format!(
                "https://outlook.live.com/mail/0/deeplink/compose?to={}&subject={}&body={}",
                encode(to),
                encode(subject),
                encode(body)
            ),
        }
    }
}

/// Where the composed order is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MailTarget {
    /// The platform's `mailto:` handler.
    #[default]
    DefaultClient,
    /// A webmail compose page, opened in a new tab.
    Webmail(Webmail),
}

impl fmt::Display for MailTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailTarget::DefaultClient => f.write_str("mailto"),
            MailTarget::Webmail(webmail) => f.write_str(webmail.label()),
        }
    }
}

/// A composed email, not yet sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailHandoff {
    /// Recipient address.
    pub recipient: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

impl MailHandoff {
    /// Compose an email.
    pub fn new(recipient: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// `mailto:` URL with the subject and body URL-encoded.
    ///
    /// The recipient is left as-is, as mail clients expect.
    pub fn mailto_url(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            encode(&self.subject),
            encode(&self.body)
        )
    }

    /// URL for the chosen target.
    pub fn to_url(&self, target: MailTarget) -> String {
        match target {
            MailTarget::DefaultClient => self.mailto_url(),
            MailTarget::Webmail(webmail) => {
                webmail.compose_url(&self.recipient, &self.subject, &self.body)
            }
        }
    }
}
