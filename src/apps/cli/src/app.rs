use crate::commands::{Command, HELP};
use crate::ui;
use std::io::{self, Write};
use std::ops::ControlFlow;
use tracing::debug;
use visuweave_core::{SceneComposer, SceneSession, SpeechCapture};

/// Front end state: the session it owns plus its collaborators.
pub struct App {
    composer: SceneComposer,
    capture: Box<dyn SpeechCapture>,
    session: SceneSession,
    rendered: usize,
}

impl App {
    pub fn new(composer: SceneComposer, capture: Box<dyn SpeechCapture>) -> Self {
        let session = SceneSession::with_capture(capture.capability());
        Self {
            composer,
            capture,
            session,
            rendered: 0,
        }
    }

    pub fn session(&self) -> &SceneSession {
        &self.session
    }

    /// Prints transcript entries added since the last call.
    pub fn flush_transcript(&mut self, out: &mut impl Write) -> io::Result<()> {
        self.rendered = ui::render_transcript_since(out, &self.session, self.rendered)?;
        Ok(())
    }

    pub async fn handle(&mut self, command: Command, out: &mut impl Write) -> io::Result<ControlFlow<()>> {
        debug!("Handling command: {:?}", command);

        match command {
            Command::Empty => return Ok(ControlFlow::Continue(())),
            Command::Quit => return Ok(ControlFlow::Break(())),
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Unknown(raw) => writeln!(out, "Unknown command: {} (try /help)", raw)?,
            Command::Images => ui::render_images(out, &self.session)?,
            Command::Clear => {
                self.session.clear();
                self.rendered = 0;
                self.flush_transcript(out)?;
            }
            Command::Speak => {
                if self.session.is_text_only() {
                    writeln!(out, "Voice input is unavailable, type your description instead.")?;
                } else {
                    self.composer
                        .listen_and_process(&mut self.session, self.capture.as_ref())
                        .await;
                    self.flush_transcript(out)?;
                    ui::render_images(out, &self.session)?;
                }
            }
            Command::Scene(text) => {
                self.composer.process_scene(&mut self.session, &text).await;
                self.flush_transcript(out)?;
                ui::render_images(out, &self.session)?;
            }
        }

        ui::render_status(out, &self.session)?;
        Ok(ControlFlow::Continue(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use visuweave_core::{AssetProbe, CaptureError, SceneVariant, ScriptedCapture, UnavailableCapture};

    struct OnlyBeach;

    #[async_trait]
    impl AssetProbe for OnlyBeach {
        async fn exists(&self, url: &str) -> bool {
            url.ends_with("/beach.jpg")
        }
    }

    fn app(capture: Box<dyn SpeechCapture>) -> App {
        let composer = SceneComposer::new(
            SceneVariant::Noun,
            Arc::new(OnlyBeach),
            "http://localhost:5000/images/",
        );
        App::new(composer, capture)
    }

    #[tokio::test]
    async fn typed_scene_prints_transcript_and_images() {
        let mut app = app(Box::new(UnavailableCapture::default()));
        let mut out = Vec::new();
        app.flush_transcript(&mut out).unwrap();

        let flow = app
            .handle(Command::Scene("a beach at dusk".to_string()), &mut out)
            .await
            .unwrap();
        assert!(flow.is_continue());

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Speech recognition not supported in your browser."));
        assert!(text.contains("Looking for: beach, dusk"));
        assert!(text.contains("Found 1 images matching your scene"));
        assert!(text.contains("http://localhost:5000/images/beach.jpg"));
        assert!(text.contains("status: Ready") || text.contains("status: Type your description"));
    }

    #[tokio::test]
    async fn speak_uses_injected_capture() {
        let capture = ScriptedCapture::new([Ok("beach".to_string()), Err(CaptureError::NoMicrophone)]);
        let mut app = app(Box::new(capture));
        let mut out = Vec::new();

        app.handle(Command::Speak, &mut out).await.unwrap();
        assert_eq!(app.session().images.len(), 1);

        app.handle(Command::Speak, &mut out).await.unwrap();
        assert!(app.session().is_text_only());

        app.handle(Command::Speak, &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Described scene: beach"));
        assert!(text.contains("No microphone found. Ensure a microphone is connected."));
        assert!(text.contains("Voice input is unavailable"));
    }

    #[tokio::test]
    async fn clear_and_quit() {
        let mut app = app(Box::new(UnavailableCapture::default()));
        let mut out = Vec::new();
        app.handle(Command::Scene("beach".to_string()), &mut out).await.unwrap();

        app.handle(Command::Clear, &mut out).await.unwrap();
        assert!(app.session().images.is_empty());
        assert_eq!(app.session().transcript.len(), 1);

        let flow = app.handle(Command::Quit, &mut out).await.unwrap();
        assert!(flow.is_break());
    }
}
