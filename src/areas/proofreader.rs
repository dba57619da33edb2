use crate::areas::workspace::{TextSource, Workspace};
use crate::artifacts::diff::{DiffEngine, DiffOptions};
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Largest input, in characters, accepted unless the caller raises the limit
///
/// The edit-distance fallback needs memory proportional to the product of both
/// input lengths, so unbounded input can exhaust the machine.
pub const DEFAULT_MAX_CHARS: usize = 5000;

pub struct Proofreader {
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    engine: DiffEngine,
    max_chars: Option<usize>,
}

impl Proofreader {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;

        Ok(Proofreader {
            writer: RefCell::new(writer),
            workspace: Workspace::new(path.into_boxed_path()),
            engine: DiffEngine::default(),
            max_chars: Some(DEFAULT_MAX_CHARS),
        })
    }

    pub fn with_options(mut self, options: DiffOptions) -> Self {
        self.engine = DiffEngine::new(options);
        self
    }

    /// Limit both inputs to `max_chars` characters; zero lifts the limit
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = (max_chars > 0).then_some(max_chars);
        self
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn engine(&self) -> &DiffEngine {
        &self.engine
    }

    /// Load the original and proofread texts, enforcing the size limit on both
    pub fn load_pair(
        &self,
        original: &TextSource,
        proofread: &TextSource,
    ) -> anyhow::Result<(String, String)> {
        let original = self.workspace.load(original)?;
        self.check_size("original text", &original)?;

        let proofread = self.workspace.load(proofread)?;
        self.check_size("proofread text", &proofread)?;

        Ok((original, proofread))
    }

    fn check_size(&self, label: &str, text: &str) -> anyhow::Result<()> {
        let Some(max_chars) = self.max_chars else {
            return Ok(());
        };

        let chars = text.chars().count();
        if chars > max_chars {
            anyhow::bail!(
                "{label} has {chars} characters, more than the limit of {max_chars} (raise it with --max-chars)"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use rstest::{fixture, rstest};

    #[fixture]
    fn proofreader_dir() -> TempDir {
        TempDir::new().expect("Failed to create temp dir")
    }

    fn proofreader(dir: &TempDir) -> Proofreader {
        Proofreader::new(&dir.path().to_string_lossy(), Box::new(std::io::sink()))
            .expect("Failed to create proofreader")
    }

    #[rstest]
    fn rejects_text_over_limit(proofreader_dir: TempDir) {
        let proofreader = proofreader(&proofreader_dir).with_max_chars(3);

        let error = proofreader
            .load_pair(
                &TextSource::Literal("abc".to_string()),
                &TextSource::Literal("集中精力".to_string()),
            )
            .unwrap_err();

        assert!(error.to_string().starts_with("proofread text has 4 characters"));
    }

    #[rstest]
    fn zero_lifts_the_limit(proofreader_dir: TempDir) {
        let proofreader = proofreader(&proofreader_dir).with_max_chars(0);
        let long_text = "a".repeat(DEFAULT_MAX_CHARS + 1);

        let (original, proofread) = proofreader
            .load_pair(
                &TextSource::Literal(long_text.clone()),
                &TextSource::Literal(String::new()),
            )
            .unwrap();

        assert_eq!(original, long_text);
        assert!(proofread.is_empty());
    }

    #[rstest]
    fn applies_default_limit(proofreader_dir: TempDir) {
        let proofreader = proofreader(&proofreader_dir);
        let long_text = "a".repeat(DEFAULT_MAX_CHARS + 1);

        let result = proofreader.load_pair(
            &TextSource::Literal(long_text),
            &TextSource::Literal(String::new()),
        );

        assert!(result.is_err());
    }
}
