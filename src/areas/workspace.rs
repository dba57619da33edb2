use anyhow::Context;
use std::path::{Path, PathBuf};

/// Where a text handed to a command comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    File(PathBuf),
    Literal(String),
}

impl TextSource {
    /// Interpret a command line argument as literal text or as a file path
    pub fn from_arg(arg: &str, literal: bool) -> Self {
        if literal {
            TextSource::Literal(arg.to_string())
        } else {
            TextSource::File(PathBuf::from(arg))
        }
    }
}

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self, source: &TextSource) -> anyhow::Result<String> {
        match source {
            TextSource::File(file) => self.read_file(file),
            TextSource::Literal(text) => Ok(text.clone()),
        }
    }

    /// Read a UTF-8 text file, resolving relative paths against the workspace root
    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<String> {
        let file_path = self.path.join(file_path);

        if !file_path.exists() {
            anyhow::bail!("The specified path does not exist: {:?}", file_path);
        }
        if !file_path.is_file() {
            anyhow::bail!("The specified path is not a file: {:?}", file_path);
        }

        std::fs::read_to_string(&file_path)
            .with_context(|| format!("Unable to read text file {:?}", file_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::{FileWriteStr, PathChild, PathCreateDir};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn workspace_dir() -> TempDir {
        TempDir::new().expect("Failed to create temp dir")
    }

    #[rstest]
    fn reads_relative_file(workspace_dir: TempDir) {
        workspace_dir
            .child("original.txt")
            .write_str("为了让你集中精力上课…")
            .unwrap();
        let workspace = Workspace::new(workspace_dir.path().into());

        let text = workspace
            .load(&TextSource::from_arg("original.txt", false))
            .unwrap();

        assert_eq!(text, "为了让你集中精力上课…");
    }

    #[rstest]
    fn returns_literal_text_untouched(workspace_dir: TempDir) {
        let workspace = Workspace::new(workspace_dir.path().into());

        let text = workspace
            .load(&TextSource::from_arg("original.txt", true))
            .unwrap();

        assert_eq!(text, "original.txt");
    }

    #[rstest]
    fn fails_on_missing_file(workspace_dir: TempDir) {
        let workspace = Workspace::new(workspace_dir.path().into());

        let error = workspace
            .load(&TextSource::File(PathBuf::from("missing.txt")))
            .unwrap_err();

        assert!(error.to_string().contains("does not exist"));
    }

    #[rstest]
    fn fails_on_directory(workspace_dir: TempDir) {
        workspace_dir.child("drafts").create_dir_all().unwrap();
        let workspace = Workspace::new(workspace_dir.path().into());

        let error = workspace
            .load(&TextSource::File(PathBuf::from("drafts")))
            .unwrap_err();

        assert!(error.to_string().contains("is not a file"));
    }
}
