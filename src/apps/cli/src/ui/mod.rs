//! Plain-text rendering of the scene session
//!
//! Writes transcript entries and the image strip to any `Write` sink.

use std::io::{self, Write};
use visuweave_core::{ChatMessage, SceneSession, Speaker};

fn speaker_label(speaker: Speaker) -> &'static str {
    match speaker {
        Speaker::User => "you",
        Speaker::Assistant => "visuweave",
    }
}

pub fn render_message(out: &mut impl Write, message: &ChatMessage) -> io::Result<()> {
    writeln!(out, "[{}] {}", speaker_label(message.speaker), message.text)
}

/// Renders transcript entries from index `from` onwards and returns the new
/// transcript length.
pub fn render_transcript_since(
    out: &mut impl Write,
    session: &SceneSession,
    from: usize,
) -> io::Result<usize> {
    for message in session.transcript.iter().skip(from) {
        render_message(out, message)?;
    }
    Ok(session.transcript.len())
}

pub fn render_images(out: &mut impl Write, session: &SceneSession) -> io::Result<()> {
    if session.images.is_empty() {
        let hint = if session.is_text_only() {
            "Type a scene description"
        } else {
            "Describe a scene to see matching images"
        };
        return writeln!(out, "  ({})", hint);
    }

    for (idx, image) in session.images.iter().enumerate() {
        writeln!(out, "  {:>2}. {:<16} {}", idx + 1, image.display_name, image.url)?;
    }
    Ok(())
}

pub fn render_status(out: &mut impl Write, session: &SceneSession) -> io::Result<()> {
    match &session.status {
        Some(status) => writeln!(out, "status: {}", status),
        None if session.is_text_only() => writeln!(out, "status: Type your description"),
        None => writeln!(out, "status: Ready"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use visuweave_core::ResolvedAsset;

    #[test]
    fn renders_new_messages_only() {
        let mut session = SceneSession::new();
        session.push_user("Processing scene: \"a cat\"");

        let mut out = Vec::new();
        let next = render_transcript_since(&mut out, &session, 1).unwrap();
        assert_eq!(next, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[you] Processing scene: \"a cat\"\n"
        );
    }

    #[test]
    fn renders_images_in_order() {
        let mut session = SceneSession::new();
        session.images.push(ResolvedAsset {
            url: "http://localhost:5000/images/plus.png".to_string(),
            filename: "plus.png".to_string(),
            display_name: "+".to_string(),
        });

        let mut out = Vec::new();
        render_images(&mut out, &session).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(" 1. +"));
        assert!(text.contains("plus.png"));
    }
}
