use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub const BASE: &str = "# Base\n\nAlways be helpful.\n";
pub const TYPESCRIPT: &str = "## TypeScript\n\nPrefer `unknown` over `any`.\n";
pub const TESTING: &str = "## Testing\n\nWrite the failing test first.\n";
pub const REACT: &str = "## React\n\nKeep components small.\n";
pub const FRAMEWORK_TESTING: &str = "## Framework testing\n\nUse the framework's runner.\n";

/// A throwaway documentation library plus a separate working directory.
pub struct Fixture {
    pub library: TempDir,
    pub workdir: TempDir,
}

impl Fixture {
    pub fn new() -> Result<Self> {
        let library = TempDir::new().context("allocating library dir")?;
        let root = library.path();
        write(root, "base.md", BASE)?;
        write(root, "languages/typescript.md", TYPESCRIPT)?;
        write(root, "frameworks/react.md", REACT)?;
        write(root, "frameworks/testing.md", FRAMEWORK_TESTING)?;
        write(root, "practices/testing.md", TESTING)?;
        fs::create_dir_all(root.join("infra"))?;
        fs::create_dir_all(root.join("agents"))?;
        let workdir = TempDir::new().context("allocating work dir")?;
        Ok(Self { library, workdir })
    }

    pub fn root(&self) -> &Path {
        self.library.path()
    }

    pub fn output_path(&self, relative: &str) -> PathBuf {
        self.workdir.path().join(relative)
    }

    /// `combine` with `--root` pointing at the fixture, run from the work dir.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(combine_binary());
        cmd.current_dir(self.workdir.path())
            .env_remove("COMBINE_ROOT")
            .env("NO_COLOR", "1")
            .arg("--root")
            .arg(self.root());
        cmd
    }
}

pub fn write(root: &Path, relative: &str, contents: &str) -> Result<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))
}

pub fn combine_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_combine"))
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}
