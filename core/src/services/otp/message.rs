//! OTP email rendering

use super::traits::EmailMessage;

const SUBJECT: &str = "Your OTP";

/// Render the passcode email
///
/// A missing display name renders as an empty string.
pub fn render_otp_email(
    to: &str,
    from: &str,
    name: Option<&str>,
    code: u16,
    ttl_minutes: i64,
) -> EmailMessage {
    let name = name.unwrap_or_default();
    EmailMessage {
        to: to.to_string(),
        from: from.to_string(),
        subject: SUBJECT.to_string(),
        text: format!(
            "Hi {}, your OTP code is {}. It will expire in {} minutes.",
            name, code, ttl_minutes
        ),
        html: format!(
            "<strong>Hi {}</strong>, your OTP code is <strong>{}</strong>. It will expire in {} minutes.",
            escape_html(name),
            code,
            ttl_minutes
        ),
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let message = render_otp_email("alice@example.com", "otp@coursegate.io", Some("Alice"), 4821, 5);
        assert_eq!(message.subject, "Your OTP");
        assert_eq!(
            message.text,
            "Hi Alice, your OTP code is 4821. It will expire in 5 minutes."
        );
        assert_eq!(
            message.html,
            "<strong>Hi Alice</strong>, your OTP code is <strong>4821</strong>. It will expire in 5 minutes."
        );
        assert_eq!(message.from, "otp@coursegate.io");
    }

    #[test]
    fn test_render_without_name() {
        let message = render_otp_email("bob@example.com", "otp@coursegate.io", None, 1000, 5);
        assert!(message.text.starts_with("Hi , your OTP code is 1000."));
    }

    #[test]
    fn test_html_escapes_name() {
        let message = render_otp_email("x@example.com", "otp@coursegate.io", Some("<b>Eve</b>"), 1234, 5);
        assert!(message.html.contains("&lt;b&gt;Eve&lt;/b&gt;"));
        assert!(message.text.contains("<b>Eve</b>"));
    }
}
