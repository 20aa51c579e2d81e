use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const STDIO: &str = "-";

#[derive(Debug)]
pub struct Intake {
    pub file_name: Option<String>,
    pub text: String,
}

pub fn read_input(input: &str) -> Result<Intake> {
    if input == STDIO {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        return Ok(Intake {
            file_name: None,
            text: buffer,
        });
    }

    let text = std::fs::read_to_string(input)
        .context(format!("Failed to open input file: '{}'", input))?;
    let file_name = Path::new(input)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned());
    Ok(Intake { file_name, text })
}

pub trait Egress {
    fn save(&mut self, file_name: &str, contents: &str) -> Result<()>;
}

pub struct DirEgress {
    dir: PathBuf,
}

impl DirEgress {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }
}

impl Egress for DirEgress {
    fn save(&mut self, file_name: &str, contents: &str) -> Result<()> {
        write_file(&self.dir.join(file_name), contents)
    }
}

pub struct FileEgress {
    path: PathBuf,
}

impl FileEgress {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl Egress for FileEgress {
    fn save(&mut self, _file_name: &str, contents: &str) -> Result<()> {
        write_file(&self.path, contents)
    }
}

pub struct StdoutEgress;

impl Egress for StdoutEgress {
    fn save(&mut self, file_name: &str, contents: &str) -> Result<()> {
        log::debug!("Writing '{}' to stdout", file_name);
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(contents.as_bytes())
            .context("Failed to write to stdout")?;
        handle.flush().context("Failed to write to stdout")?;
        Ok(())
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    log::info!("Saving {}", path.display());
    let file = File::create(path)
        .context(format!("Failed to create file: '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .context("Failed to write to output file.")?;
    writer.flush().context("Failed to write to output file.")?;
    Ok(())
}
