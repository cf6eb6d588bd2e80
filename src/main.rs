use clap::Parser;
use imgshrink::config::{self, FileConfig, Overrides, ShrinkConfig};
use imgshrink::{output, process};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "imgshrink")]
#[command(about = "Shrink a directory tree of JPEG and PNG images")]
#[command(long_about = "\
Shrink a directory tree of JPEG and PNG images

Every .jpg, .jpeg and .png file under the input directory is decoded,
scaled down to the maximum width if it is wider, and written to the same
relative path under the output directory.

  JPEG  quality is lowered from 80 in steps of 5 until the file fits the
        target size. If quality 5 still does not fit, it is written anyway.
  PNG   re-encoded losslessly.

Other files are ignored. A file that fails is reported and skipped; the
exit status is 1 if any file failed.

Run 'imgshrink --print-config' for a documented config file.")]
#[command(version)]
struct Cli {
    /// Input directory
    #[arg(short = 'i', long = "input", required_unless_present = "print_config")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(short = 'o', long = "output", required_unless_present = "print_config")]
    output: Option<PathBuf>,

    /// Target size in KB for JPEG compression [default: 1000]
    #[arg(short = 's', long = "target-size", value_name = "KB")]
    target_size: Option<u32>,

    /// Maximum width in px for image resizing [default: 1920]
    #[arg(short = 'w', long = "max-width", value_name = "PX")]
    max_width: Option<u32>,

    /// TOML file with target_size_kb / max_width (flags take precedence)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a JSON report of every processed file to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print a stock config file with all options documented
    #[arg(long)]
    print_config: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    if cli.print_config {
        print!("{}", config::stock_config_toml());
        return Ok(ExitCode::SUCCESS);
    }

    // clap requires both unless --print-config was given
    let (Some(input), Some(output_dir)) = (cli.input, cli.output) else {
        unreachable!("clap enforces --input and --output");
    };
    let file_config = match &cli.config {
        Some(path) => config::load_file_config(path)?,
        None => FileConfig::default(),
    };
    let config = ShrinkConfig::resolve(
        input,
        output_dir,
        file_config,
        Overrides {
            target_size_kb: cli.target_size,
            max_width: cli.max_width,
        },
    )?;

    println!("{}", output::format_banner(&config));

    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for report in rx {
            output::print_file_report(&report);
        }
    });
    let result = process::run(&config, Some(tx));
    printer.join().map_err(|_| "output thread panicked")?;
    let summary = result?;

    if let Some(report_path) = &cli.report {
        let json = serde_json::to_string_pretty(&summary)?;
        std::fs::write(report_path, json)?;
    }

    println!("{}", output::format_summary(&summary));

    if summary.has_failures() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
