use srtedit::editor::Toggled;
use srtedit::error::SrtEditError;
use srtedit::host::{self, DirEgress, Egress, FileEgress, StdoutEgress, STDIO};
use srtedit::lint::{self, Warning};
use srtedit::session::Session;
use srtedit::srt::SubtitleEntry;

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::Parser as ClapParser;

const STDIN_NAME: &str = "stdin.srt";
const SRT_SUFFIX: &str = ".srt";

fn main() {
    match run() {
        Ok(()) => (),
        Err(err) => {
            eprintln!("An error occurred: {}", err);
            for cause in err.chain().skip(1) {
                eprintln!("    {}", cause);
            }
            std::process::exit(1);
        }
    }
}

#[derive(ClapParser)]
#[command(about = "Edit the text of SRT subtitles")]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "The file to read from. If not supplied, the subtitles will be read from standard input.",
        default_value = STDIO
    )]
    input: String,
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "The file to write to. Defaults to <NAME>.srt next to the input, or standard output when reading from standard input."
    )]
    output: Option<String>,
    #[arg(
        short,
        long,
        value_name = "NAME",
        help = "Base name of the generated file. Defaults to the input name with an '_edit' suffix."
    )]
    name: Option<String>,
    #[arg(
        short,
        long,
        value_name = "ID=TEXT",
        help = "Replace the text of the subtitle with the given id. May be repeated."
    )]
    edit: Vec<String>,
    #[arg(short, long, help = "Print the subtitles instead of generating a file.")]
    list: bool,
    #[arg(
        short,
        long,
        help = "Report problems in the input and exit with an error if there are any."
    )]
    check: bool,
    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity.")]
    verbose: u8,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logger(cli.verbose);

    let intake = host::read_input(&cli.input)?;

    let warnings = lint::lint(&intake.text);
    if cli.check {
        for warning in &warnings {
            println!("{}", warning);
        }
        return check_result(&warnings).map_err(anyhow::Error::from);
    }
    for warning in &warnings {
        log::warn!("{}", warning);
    }

    let mut session = Session::new();
    let file_name = intake.file_name.as_deref().unwrap_or(STDIN_NAME);
    session.load(file_name, &intake.text);
    if !session.is_active() {
        log::warn!("You appear to have supplied an empty file.");
        return Ok(());
    }
    log::info!("Loaded {} subtitle(s) from {}", session.store().len(), file_name);

    if let Some(name) = &cli.name {
        session.set_output_name(base_name(name));
    }

    for arg in &cli.edit {
        let (id, text) = parse_edit(arg)?;
        match session.edit(id, text) {
            Some(Toggled::Committed) => log::info!("Updated subtitle {}", id),
            Some(_) => log::debug!("Subtitle {} is unchanged", id),
            None => log::warn!("No subtitle with id '{}', ignoring edit", id),
        }
    }

    if cli.list {
        print!("{}", Listing(&session.entries()));
        return Ok(());
    }

    let export = session
        .generate()
        .ok_or_else(|| anyhow!("Nothing to generate."))?;
    let destination = destination_for(&cli, intake.file_name.is_some());
    guard_input(&cli, &destination, &export.file_name)?;
    destination
        .into_egress()
        .save(&export.file_name, &export.contents)?;

    Ok(())
}

fn check_result(warnings: &[Warning]) -> Result<(), SrtEditError> {
    if warnings.is_empty() {
        Ok(())
    } else {
        Err(SrtEditError::LintFailed(warnings.len()))
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Destination {
    Stdout,
    File(PathBuf),
    Dir(PathBuf),
}

impl Destination {
    fn into_egress(self) -> Box<dyn Egress> {
        match self {
            Destination::Stdout => Box::new(StdoutEgress),
            Destination::File(path) => Box::new(FileEgress::new(path)),
            Destination::Dir(dir) => Box::new(DirEgress::new(dir)),
        }
    }
}

fn destination_for(cli: &Cli, from_file: bool) -> Destination {
    match cli.output.as_deref() {
        Some(STDIO) => Destination::Stdout,
        Some(path) => Destination::File(PathBuf::from(path)),
        None if from_file => {
            let dir = Path::new(&cli.input)
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            Destination::Dir(dir.to_path_buf())
        }
        None if cli.name.is_some() => Destination::Dir(PathBuf::from(".")),
        None => Destination::Stdout,
    }
}

// Only an explicit --output may replace the input.
fn guard_input(cli: &Cli, destination: &Destination, file_name: &str) -> Result<(), SrtEditError> {
    if cli.input == STDIO {
        return Ok(());
    }
    match destination {
        Destination::Dir(dir) if same_file(&dir.join(file_name), Path::new(&cli.input)) => {
            Err(SrtEditError::WouldOverwriteInput(cli.input.clone()))
        }
        _ => Ok(()),
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn parse_edit(arg: &str) -> Result<(&str, &str), SrtEditError> {
    arg.split_once('=')
        .ok_or_else(|| SrtEditError::InvalidEdit(arg.to_string()))
}

fn base_name(name: &str) -> &str {
    name.strip_suffix(SRT_SUFFIX).unwrap_or(name)
}

struct Listing<'a>(&'a [SubtitleEntry]);

impl<'a> fmt::Display for Listing<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sub in self.0 {
            writeln!(f, "No.{}", sub.id())?;
            writeln!(f, "{}", sub.sub().unwrap_or_default())?;
            writeln!(f)?;
        }
        Ok(())
    }
}

fn setup_logger(level: u8) {
    let mut builder = pretty_env_logger::formatted_timed_builder();

    let log_level = match level {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    builder.filter_level(log_level);
    builder.format_timestamp_millis();
    builder.init();
}
