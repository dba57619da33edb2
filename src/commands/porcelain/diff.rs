use crate::areas::proofreader::Proofreader;
use crate::areas::workspace::TextSource;
use crate::artifacts::diff::{DiffKind, DiffScript, Difference};
use colored::{ColoredString, Colorize};
use std::io::Write;

impl Proofreader {
    pub fn diff(
        &self,
        original: &TextSource,
        proofread: &TextSource,
        stat: bool,
    ) -> anyhow::Result<()> {
        let (original, proofread) = self.load_pair(original, proofread)?;
        let script = self.engine().diff(&original, &proofread)?;

        script
            .iter()
            .try_for_each(|difference| self.print_difference(difference))?;

        if stat {
            self.print_stat(&script)?;
        }

        Ok(())
    }

    fn print_difference(&self, difference: &Difference) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}: `{}`",
            Self::format_label(difference.kind()),
            difference.content()
        )?;

        Ok(())
    }

    fn print_stat(&self, script: &DiffScript) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} segments, {} deleted, {} inserted",
            script.len(),
            script.deleted_chars().to_string().red(),
            script.inserted_chars().to_string().green()
        )?;

        Ok(())
    }

    fn format_label(kind: DiffKind) -> ColoredString {
        match kind {
            DiffKind::Equal => kind.label().normal(),
            DiffKind::Delete => kind.label().red(),
            DiffKind::Insert => kind.label().green(),
        }
    }
}
