use std::path::PathBuf;

use thiserror::Error;

use super::controller::CopyTarget;

pub const HELP: &str = "\
Commands:
  select <path>          choose an audio file
  youtube <url>          use a YouTube video instead of a file
  submit                 upload and analyze the selected input
  ask <question>         ask about the processed lecture
  copy transcript|summary  (summary is also `analysis`)
  dismiss                close the current message
  reset                  start over
  show                   print the current state
  help                   this text
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select(PathBuf),
    Youtube(String),
    Submit,
    Ask(String),
    Copy(CopyTarget),
    Dismiss,
    Reset,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}`; type `help`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("copy what? use `copy transcript` or `copy summary`")]
    UnknownCopyTarget,
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse(line: &str) -> Option<Result<Command, CommandError>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "select" | "open" => required(rest, "select").map(|p| Command::Select(PathBuf::from(p))),
        "youtube" | "yt" => required(rest, "youtube").map(|u| Command::Youtube(u.to_string())),
        "submit" | "upload" => Ok(Command::Submit),
        // The question itself may be blank; the controller decides what that means.
        "ask" => Ok(Command::Ask(rest.to_string())),
        "copy" => match rest.to_ascii_lowercase().as_str() {
            "transcript" => Ok(Command::Copy(CopyTarget::Transcript)),
            "summary" | "analysis" => Ok(Command::Copy(CopyTarget::Analysis)),
            _ => Err(CommandError::UnknownCopyTarget),
        },
        "dismiss" | "ok" => Ok(Command::Dismiss),
        "reset" => Ok(Command::Reset),
        "show" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Err(CommandError::Unknown(word.to_string())),
    };
    Some(command)
}

fn required<'a>(rest: &'a str, name: &'static str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(name))
    } else {
        Ok(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse("   \n"), None);
    }

    #[test]
    fn select_keeps_spaces_in_path() {
        assert_eq!(
            parse("select  my lectures/week 1.mp3 "),
            Some(Ok(Command::Select(PathBuf::from("my lectures/week 1.mp3"))))
        );
    }

    #[test]
    fn ask_keeps_full_question() {
        assert_eq!(
            parse("ask What is the main topic?"),
            Some(Ok(Command::Ask("What is the main topic?".to_string())))
        );
        assert_eq!(parse("ask"), Some(Ok(Command::Ask(String::new()))));
    }

    #[test]
    fn copy_targets() {
        assert_eq!(
            parse("copy summary"),
            Some(Ok(Command::Copy(CopyTarget::Analysis)))
        );
        assert_eq!(
            parse("COPY Transcript"),
            Some(Ok(Command::Copy(CopyTarget::Transcript)))
        );
        assert_eq!(parse("copy"), Some(Err(CommandError::UnknownCopyTarget)));
    }

    #[test]
    fn missing_argument_and_unknown_command() {
        assert_eq!(
            parse("select"),
            Some(Err(CommandError::MissingArgument("select")))
        );
        assert_eq!(
            parse("frobnicate now"),
            Some(Err(CommandError::Unknown("frobnicate".to_string())))
        );
    }
}
