use anyhow::Result;
use clap::{Parser, Subcommand};
use prfx::areas::proofreader::{DEFAULT_MAX_CHARS, Proofreader};
use prfx::areas::workspace::TextSource;
use prfx::artifacts::core::Output;
use prfx::artifacts::diff::DiffOptions;

#[derive(Parser)]
#[command(
    name = "prfx",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A character-level diff for proofread text",
    long_about = "This tool compares an original text with its proofread version, \
    character by character, and prints the deletions and insertions between them. \
    It works on Unicode characters, so CJK text is compared glyph by glyph.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Show the edits between an original and a proofread text",
        long_about = "This command prints one line per segment of the edit script, \
        labelled Equal, Delete or Insert. Both texts are read from files unless --text is given."
    )]
    Diff {
        #[arg(index = 1, help = "The original text (a file path, or the text itself with --text)")]
        original: String,
        #[arg(index = 2, help = "The proofread text (a file path, or the text itself with --text)")]
        proofread: String,
        #[arg(short, long, help = "Treat the arguments as literal text instead of file paths")]
        text: bool,
        #[arg(short, long, help = "Shift edit boundaries onto word and line breaks")]
        semantic: bool,
        #[arg(long, help = "Finish with a summary line counting the edits")]
        stat: bool,
        #[arg(
            long,
            default_value_t = DEFAULT_MAX_CHARS,
            help = "Refuse inputs longer than this many characters (0 for no limit)"
        )]
        max_chars: usize,
    },
    #[command(
        name = "distance",
        about = "Print the Levenshtein distance between two texts",
        long_about = "This command prints the minimum number of single-character insertions, \
        deletions and substitutions turning the original text into the proofread one."
    )]
    Distance {
        #[arg(index = 1, help = "The original text (a file path, or the text itself with --text)")]
        original: String,
        #[arg(index = 2, help = "The proofread text (a file path, or the text itself with --text)")]
        proofread: String,
        #[arg(short, long, help = "Treat the arguments as literal text instead of file paths")]
        text: bool,
        #[arg(
            long,
            default_value_t = DEFAULT_MAX_CHARS,
            help = "Refuse inputs longer than this many characters (0 for no limit)"
        )]
        max_chars: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = Output::detect();
    if !output.is_interactive() {
        colored::control::set_override(false);
    }

    let pwd = std::env::current_dir()?;
    let proofreader = Proofreader::new(&pwd.to_string_lossy(), output.writer())?;

    match &cli.command {
        Commands::Diff {
            original,
            proofread,
            text,
            semantic,
            stat,
            max_chars,
        } => proofreader
            .with_options(DiffOptions::new(*semantic))
            .with_max_chars(*max_chars)
            .diff(
                &TextSource::from_arg(original, *text),
                &TextSource::from_arg(proofread, *text),
                *stat,
            )?,
        Commands::Distance {
            original,
            proofread,
            text,
            max_chars,
        } => proofreader.with_max_chars(*max_chars).distance(
            &TextSource::from_arg(original, *text),
            &TextSource::from_arg(proofread, *text),
        )?,
    }

    output.finish()
}
