use crate::areas::proofreader::Proofreader;
use crate::areas::workspace::TextSource;
use std::io::Write;

impl Proofreader {
    pub fn distance(&self, original: &TextSource, proofread: &TextSource) -> anyhow::Result<()> {
        let (original, proofread) = self.load_pair(original, proofread)?;
        let distance = self.engine().distance(&original, &proofread);

        writeln!(self.writer(), "{distance}")?;

        Ok(())
    }
}
