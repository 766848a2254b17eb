use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use golombrice::{compress, decompress, Config, Width};

#[derive(Parser)]
#[command(name = "golombrice", about = "Golomb-Rice fixed-width integer compression")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file of fixed-width integers
    Compress {
        /// Input file
        file: PathBuf,
        /// Output file (default: <file>.golomb)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Rice parameter: remainder bit-width (default: width/2)
        #[arg(short)]
        k: Option<u8>,
        /// Integer width in bits: 8, 16, 32 or 64
        #[arg(short, long, default_value_t = 32)]
        width: u8,
        /// Treat the integers as unsigned
        #[arg(short, long)]
        unsigned: bool,
    },
    /// Decompress a .golomb file
    Decompress {
        /// Input file
        file: PathBuf,
        /// Output file (default: strip .golomb extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compress {
            file,
            output,
            k,
            width,
            unsigned,
        } => {
            let width = Width::try_from(width).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            let k = k.unwrap_or(width.bits() as u8 / 2);
            let cfg = Config::new(k, width, !unsigned).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            let data = fs::read(&file).unwrap_or_else(|e| {
                eprintln!("Error reading {}: {e}", file.display());
                std::process::exit(1);
            });
            let compressed = compress(&data, &cfg).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            let out_path = output.unwrap_or_else(|| {
                let mut p = file.clone();
                let name = format!("{}.golomb", p.file_name().unwrap().to_string_lossy());
                p.set_file_name(name);
                p
            });
            fs::write(&out_path, &compressed).unwrap_or_else(|e| {
                eprintln!("Error writing {}: {e}", out_path.display());
                std::process::exit(1);
            });
            eprintln!(
                "  {} \u{2192} {} bytes ({:.1}%)",
                data.len(),
                compressed.len(),
                compressed.len() as f64 * 100.0 / data.len().max(1) as f64
            );
            eprintln!("  Written to {}", out_path.display());
        }
        Commands::Decompress { file, output } => {
            let data = fs::read(&file).unwrap_or_else(|e| {
                eprintln!("Error reading {}: {e}", file.display());
                std::process::exit(1);
            });
            let raw = decompress(&data).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            let out_path = output.unwrap_or_else(|| {
                let s = file.to_string_lossy();
                if let Some(stripped) = s.strip_suffix(".golomb") {
                    PathBuf::from(stripped)
                } else {
                    let mut p = file.clone();
                    let name = format!("{}.out", p.file_name().unwrap().to_string_lossy());
                    p.set_file_name(name);
                    p
                }
            });
            fs::write(&out_path, &raw).unwrap_or_else(|e| {
                eprintln!("Error writing {}: {e}", out_path.display());
                std::process::exit(1);
            });
            eprintln!("  {} \u{2192} {} bytes", data.len(), raw.len());
            eprintln!("  Written to {}", out_path.display());
        }
    }
}
