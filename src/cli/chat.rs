//! CLI `chat` command: an interactive session in the terminal.
//!
//! Lines starting with `/` are commands (`/clear`, `/history`, `/export <path>`,
//! `/help`, `/quit`); anything else is a question.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::config::GuideConfig;
use crate::session::{transcript, Conversation};

const WELCOME: &str = "👋 Welcome to Binondo!
I'm your heritage guide for the world's oldest Chinatown! Ask me about:

  🍜 Food Spots          \"Give me food spots in Binondo\"
  🏛️ Heritage Sites      \"What are Binondo's heritage sites?\"
  🎭 Cultural Traditions \"Tell me about cultural festivals\"
  📚 History             \"How did Binondo become the oldest Chinatown?\"
  ⛪ Specific Sites      \"Tell me about Binondo Church\"
  🥟 Specific Places     \"What is the history of Eng Bee Tin?\"

Commands: /clear  /history  /export <path>  /help  /quit";

/// Run the chat loop on stdin/stdout.
pub fn chat(config: &GuideConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(config, stdin.lock(), stdout.lock())
}

/// Chat loop over an arbitrary reader and writer. Ends on `/quit` or end of input.
pub fn run<R: BufRead, W: Write>(config: &GuideConfig, input: R, mut out: W) -> Result<()> {
    let guide = super::guide_from(config);
    let user = config.chat.user_label.as_str();
    let assistant = config.chat.assistant_label.as_str();
    let mut convo = Conversation::new();

    writeln!(out, "{WELCOME}\n")?;

    let mut lines = input.lines();
    loop {
        write!(out, "{user}> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line.context("failed to read input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line) {
            Some(Command::Quit) => break,
            Some(Command::Help) => writeln!(out, "{WELCOME}\n")?,
            Some(Command::Clear) => {
                convo.clear();
                writeln!(out, "Chat history cleared.\n")?;
            }
            Some(Command::History) => {
                if convo.is_empty() {
                    writeln!(out, "No messages yet.\n")?;
                } else {
                    writeln!(out, "{}\n", convo.to_markdown(user, assistant))?;
                }
            }
            Some(Command::Export(path)) => {
                match transcript::export(&convo, path, user, assistant) {
                    Ok(turns) => writeln!(out, "Exported {turns} turns to {path}.\n")?,
                    Err(e) => writeln!(out, "Export failed: {e:#}\n")?,
                }
            }
            Some(Command::Unknown(cmd)) => {
                writeln!(out, "Unknown command: {cmd}. Try /help.\n")?;
            }
            None => {
                let reply = convo.submit(&guide, line);
                writeln!(out, "\n{assistant}:\n{}\n", reply.text)?;
            }
        }
    }

    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    Help,
    Clear,
    History,
    Export(&'a str),
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Option<Command<'_>> {
    let rest = line.strip_prefix('/')?;
    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };
    Some(match name {
        "quit" | "exit" | "q" => Command::Quit,
        "help" | "?" => Command::Help,
        "clear" | "reset" => Command::Clear,
        "history" => Command::History,
        "export" if !arg.is_empty() => Command::Export(arg),
        _ => Command::Unknown(line),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> String {
        let mut out = Vec::new();
        run(&GuideConfig::default(), script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("/quit"), Some(Command::Quit));
        assert_eq!(parse_command("/export  out.md "), Some(Command::Export("out.md")));
        assert_eq!(parse_command("/export"), Some(Command::Unknown("/export")));
        assert_eq!(parse_command("hopia"), None);
    }

    #[test]
    fn answers_questions_until_eof() {
        let out = run_script("food spots\n");
        assert!(out.contains("Amazing Food Spots in Binondo!"));
        assert!(out.contains("Heritage Guide:"));
    }

    #[test]
    fn clear_then_history_is_empty() {
        let out = run_script("hopia\n/clear\n/history\n/quit\n");
        assert!(out.contains("Chat history cleared."));
        assert!(out.contains("No messages yet."));
    }

    #[test]
    fn export_writes_transcript() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("chat.md");
        let script = format!("tikoy\n/export {}\n/quit\n", path.display());
        let out = run_script(&script);
        assert!(out.contains("Exported 2 turns"));
        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(saved.starts_with("**You:** tikoy"));
    }
}
