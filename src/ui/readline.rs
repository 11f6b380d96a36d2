//! Readline wrapper with a persistent history file.

use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};

/// Thin wrapper over `rustyline::DefaultEditor` that appends every
/// non-blank line to the history file.
pub struct Readline {
    editor: DefaultEditor,
    history_path: PathBuf,
}

impl Readline {
    pub fn new(history_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .build();
        let mut editor = DefaultEditor::with_config(config)?;

        let history_path = history_path.unwrap_or_else(default_history_path);
        if let Some(parent) = history_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = editor.load_history(&history_path);

        Ok(Self {
            editor,
            history_path,
        })
    }

    pub fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        let line = self.editor.readline(prompt)?;
        if !line.trim().is_empty() {
            let _ = self.editor.add_history_entry(line.as_str());
            let _ = self.editor.append_history(&self.history_path);
        }
        Ok(line)
    }
}

/// `~/.capital-gains/.history`, or the working directory when HOME is unset
pub fn default_history_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".capital-gains/.history")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_directory_is_created() {
        let home = tempfile::TempDir::new().unwrap();
        let path = home.path().join("nested").join(".history");

        let rl = Readline::new(Some(path.clone())).unwrap();
        assert_eq!(rl.history_path, path);
        assert!(home.path().join("nested").is_dir());
    }

    #[test]
    fn test_default_history_path_location() {
        let path = default_history_path();
        assert!(path.ends_with(".capital-gains/.history"));
    }
}
