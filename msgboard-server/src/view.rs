//! HTML rendering for the board page

use std::fmt::Write;

use crate::models::Message;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Message Board</title>
<style>
body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }
textarea { width: 100%; }
li { margin-bottom: 0.75rem; }
time { color: #666; font-size: 0.85rem; }
</style>
</head>
<body>
<h1>Message Board</h1>
<form action="/add" method="post">
<textarea name="message" rows="3" required></textarea>
<button type="submit">Post</button>
</form>
"#;

const FOOT: &str = "</body>\n</html>\n";

/// Render the index page: the submission form followed by `messages`
/// in the order given.
pub fn render_index(messages: &[Message]) -> String {
    let mut html = String::from(HEAD);

    if messages.is_empty() {
        html.push_str("<p class=\"empty\">No messages yet.</p>\n");
    } else {
        html.push_str("<ul class=\"messages\">\n");
        for message in messages {
            // Writing to a String cannot fail
            let _ = writeln!(
                html,
                "<li id=\"m{}\"><time>{}</time><p>{}</p></li>",
                message.id,
                message.created_at.format(TIMESTAMP_FORMAT),
                escape_html(&message.text)
            );
        }
        html.push_str("</ul>\n");
    }

    html.push_str(FOOT);
    html
}

/// Escape text for inclusion in element content or quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn message(id: i32, text: &str, secs: u32) -> Message {
        Message {
            id,
            text: text.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, secs).unwrap(),
        }
    }

    #[test]
    fn empty_board() {
        let html = render_index(&[]);
        assert!(html.contains("No messages yet."));
        assert!(html.contains(r#"<form action="/add" method="post">"#));
        assert!(html.contains(r#"name="message""#));
    }

    #[test]
    fn keeps_given_order() {
        let html = render_index(&[message(2, "second", 5), message(1, "first", 1)]);

        let second = html.find("second").unwrap();
        let first = html.find("first").unwrap();
        assert!(second < first);
        assert!(html.contains("<time>2024-05-01 12:00:05</time>"));
    }

    #[test]
    fn escapes_message_text() {
        let html = render_index(&[message(1, "<script>alert('x')</script> & \"q\"", 0)]);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; &quot;q&quot;"));
    }
}
