//! Pulls packed-palette sprites out of a raw memory dump and writes each one
//! as a PNG.
//!
//! ```text
//! dump-extract -i <DUMP> [-o <DIR>] [-r] [-a] [-v...]
//! ```
mod filemanager;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use lib_dump::constants::FORMAT_NAME;
use lib_dump::{extract_sprites, ExtractOptions};
use log::{error, info, LevelFilter};

use filemanager::ExtractError;

#[derive(Parser, Debug)]
#[command(name = "dump-extract", version, about = "Extract sprites from a memory dump")]
struct Cli {
    /// Path to the dump file.
    #[arg(short, long)]
    input: PathBuf,

    /// Directory the PNG files are written to. Must already exist; empty means
    /// the current directory.
    #[arg(short, long, default_value = ".")]
    output: String,

    /// Keep the green color key instead of making it transparent.
    #[arg(short, long)]
    raw_alpha: bool,

    /// Append the byte range of each sprite in the dump to its file name.
    #[arg(short, long)]
    address: bool,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn run(cli: &Cli) -> Result<usize, ExtractError> {
    let dir = filemanager::output_dir(Path::new(&cli.output))?;
    let dump = filemanager::read_dump(&cli.input)?;
    info!(
        "Scanning {} ({} bytes) for {} records",
        cli.input.display(),
        dump.len(),
        FORMAT_NAME
    );

    let options = ExtractOptions::default().with_preserve_color_key_alpha(cli.raw_alpha);
    let sprites = extract_sprites(&dump, &options);

    let written = filemanager::save_sprites(&dir, &sprites, cli.address)?;
    Ok(written.len())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    lib_dump::init_logging(cli.log_level());

    match run(&cli) {
        Ok(count) => {
            info!("Wrote {} sprites", count);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["dump-extract", "-i", "dump.bin", "-r", "-a", "-vv"]);
        assert_eq!(cli.input, PathBuf::from("dump.bin"));
        assert_eq!(cli.output, ".");
        assert!(cli.raw_alpha);
        assert!(cli.address);
        assert_eq!(cli.log_level(), LevelFilter::Trace);
    }

    #[test]
    fn test_run_writes_sprites() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("dump.bin");
        let output = dir.path().join("out");
        fs::create_dir(&output).unwrap();

        let mut dump = vec![0xEE; 8];
        dump.extend([
            4, 2, 2, 0x00, 0x01, 0xFF, 0x07, 0xE0, 0x00, 0x1F, 0x10, 0x01, 0x00, 0x11,
        ]);
        dump.extend(vec![0xEE; 32]);
        fs::write(&input, &dump).unwrap();

        let cli = Cli::parse_from([
            "dump-extract",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-a",
        ]);
        assert_eq!(run(&cli).unwrap(), 1);

        let png = image::open(output.join("0_0x8-0x15.png")).unwrap().to_rgba8();
        assert_eq!(png.dimensions(), (4, 2));
        assert_eq!(png.get_pixel(0, 0).0, [0, 255, 0, 0]);
        assert_eq!(png.get_pixel(1, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_empty_output_is_current_dir() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("dump.bin");
        // No header signature anywhere, so nothing lands in the current directory
        fs::write(&input, [0xEE; 64]).unwrap();

        let path = input.to_str().unwrap();
        let cli = Cli::try_parse_from(["dump-extract", "-i", path, "-o", ""]).unwrap();
        assert_eq!(cli.output, "");
        assert_eq!(run(&cli).unwrap(), 0);
    }

    #[test]
    fn test_error_message_is_readable() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.bin");
        let path = missing.to_str().unwrap();

        let cli = Cli::parse_from(["dump-extract", "-i", path]);
        let err = run(&cli).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with(&format!("IO error on {}: ", path)));
    }

    #[test]
    fn test_run_rejects_file_as_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("dump.bin");
        fs::write(&input, [0u8; 16]).unwrap();

        let path = input.to_str().unwrap();
        let cli = Cli::parse_from(["dump-extract", "-i", path, "-o", path]);
        assert!(matches!(run(&cli), Err(ExtractError::NotADirectory(_))));
    }
}
