use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

/// Workspace holding `original.txt` and `proofread.txt`, a one-word substitution apart
#[fixture]
pub fn cat_dog_dir(workspace_dir: TempDir) -> TempDir {
    write_file(FileSpec::new(
        workspace_dir.path().join("original.txt"),
        "The cat in the hat".to_string(),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join("proofread.txt"),
        "The dog in the hat".to_string(),
    ));

    workspace_dir
}

#[fixture]
pub fn cat_dog_diff_output() -> String {
    "Equal: `The `\nDelete: `cat`\nInsert: `dog`\nEqual: ` in the hat`\n".to_string()
}

pub fn run_prfx_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("prfx").expect("Failed to find prfx binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
