/// One line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Scene(String),
    Speak,
    Clear,
    Images,
    Help,
    Quit,
    Unknown(String),
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }

        let Some(name) = trimmed.strip_prefix('/') else {
            return Self::Scene(trimmed.to_string());
        };

        match name.to_lowercase().as_str() {
            "speak" | "listen" | "mic" => Self::Speak,
            "clear" => Self::Clear,
            "images" | "ls" => Self::Images,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Unknown(trimmed.to_string()),
        }
    }
}

pub const HELP: &str = "\
Type a scene description and press Enter, e.g. \"A sunny beach with palm trees\".
  /speak   describe the scene by voice
  /images  list the current images
  /clear   clear images and conversation
  /quit    exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_scene() {
        assert_eq!(
            Command::parse("  A sunny beach  "),
            Command::Scene("A sunny beach".to_string())
        );
        assert_eq!(Command::parse("   "), Command::Empty);
    }

    #[test]
    fn slash_commands() {
        assert_eq!(Command::parse("/speak"), Command::Speak);
        assert_eq!(Command::parse("/CLEAR"), Command::Clear);
        assert_eq!(Command::parse("/images"), Command::Images);
        assert_eq!(Command::parse("/exit"), Command::Quit);
        assert_eq!(Command::parse("/dance"), Command::Unknown("/dance".to_string()));
    }
}
