use std::fmt::Write as _;

/// Fields read from the contact form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    /// `mailto:` link that opens the visitor's mail client pre-filled.
    pub fn mailto(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            encode_uri_component(&self.subject),
            encode_uri_component(&self.body())
        )
    }
}

/// Percent-encode like JavaScript's `encodeURIComponent`.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for b in input.bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(b as char),
            _ => {
                _ = write!(out, "%{:02X}", b);
            }
        }
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
}

impl NotificationKind {
    pub fn class_name(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification notification-success",
        }
    }
}

pub const NOTIFICATION_STYLE: &str = "position: fixed; top: 100px; right: 20px; \
background: var(--gradient-primary); color: var(--text-light); padding: 1rem 2rem; \
border-radius: 10px; box-shadow: var(--shadow-glow); z-index: 10000; \
animation: slideIn 0.3s ease;";
