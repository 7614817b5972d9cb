//! Conversation export.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::Conversation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptFormat {
    Markdown,
    Json,
}

impl TranscriptFormat {
    /// `.json` exports JSON; anything else is Markdown.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Markdown,
        }
    }
}

#[derive(Debug, Serialize)]
struct TranscriptJson<'a> {
    exported_at: String,
    turns: &'a [super::Turn],
}

/// Render a transcript in the given format.
pub fn render(
    convo: &Conversation,
    format: TranscriptFormat,
    user_label: &str,
    assistant_label: &str,
) -> Result<String> {
    match format {
        TranscriptFormat::Markdown => Ok(convo.to_markdown(user_label, assistant_label)),
        TranscriptFormat::Json => {
            let data = TranscriptJson {
                exported_at: chrono::Utc::now().to_rfc3339(),
                turns: convo.turns(),
            };
            serde_json::to_string_pretty(&data).context("failed to serialize transcript")
        }
    }
}

/// Write a transcript to `path`, picking the format from the extension.
/// Uses an atomic write (tmp + rename).
pub fn export(
    convo: &Conversation,
    path: impl AsRef<Path>,
    user_label: &str,
    assistant_label: &str,
) -> Result<usize> {
    let path = path.as_ref();
    let contents = render(convo, TranscriptFormat::from_path(path), user_label, assistant_label)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let tmp_path = tmp_path_for(path);
    std::fs::write(&tmp_path, &contents)
        .with_context(|| format!("failed to write temp file: {}", tmp_path.display()))?;
    std::fs::rename(&tmp_path, path).context("failed to rename temp file")?;

    tracing::info!(path = %path.display(), turns = convo.len(), "transcript exported");
    Ok(convo.len())
}

/// `visit.json` -> `visit.json.tmp`, so exports of different formats never share one.
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::Guide;

    #[test]
    fn format_follows_extension() {
        assert_eq!(TranscriptFormat::from_path(Path::new("chat.JSON")), TranscriptFormat::Json);
        assert_eq!(TranscriptFormat::from_path(Path::new("chat.md")), TranscriptFormat::Markdown);
        assert_eq!(TranscriptFormat::from_path(Path::new("chat")), TranscriptFormat::Markdown);
    }

    #[test]
    fn json_transcript_lists_turns() {
        let mut convo = Conversation::new();
        convo.submit(&Guide::default(), "dim sum");
        let json = render(&convo, TranscriptFormat::Json, "You", "Guide").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let turns = value["turns"].as_array().unwrap();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0]["role"], "user");
        assert_eq!(turns[0]["text"], "dim sum");
        assert_eq!(turns[1]["role"], "assistant");
    }

    #[test]
    fn tmp_path_keeps_the_full_name() {
        assert_eq!(tmp_path_for(Path::new("out/visit.json")), Path::new("out/visit.json.tmp"));
        assert_eq!(tmp_path_for(Path::new("visit.md")), Path::new("visit.md.tmp"));
    }

    #[test]
    fn export_leaves_unrelated_tmp_files_alone() {
        let tmp = tempfile::TempDir::new().unwrap();
        let unrelated = tmp.path().join("visit.tmp");
        std::fs::write(&unrelated, "keep me").unwrap();

        let mut convo = Conversation::new();
        convo.submit(&Guide::default(), "hopia");
        export(&convo, tmp.path().join("visit.json"), "You", "Guide").unwrap();
        export(&convo, tmp.path().join("visit.md"), "You", "Guide").unwrap();

        assert_eq!(std::fs::read_to_string(&unrelated).unwrap(), "keep me");
        assert!(tmp.path().join("visit.json").exists());
        assert!(tmp.path().join("visit.md").exists());
        assert!(!tmp.path().join("visit.json.tmp").exists());
    }
}
