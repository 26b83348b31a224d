use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rgb565_codec::ByteOrder;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "rgb565-carray")]
#[command(about = "Image to RGB565 C-Array Converter")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image to an RGB565 C array
    Convert {
        /// Input image path (PNG, JPEG, BMP, GIF, ...)
        #[arg(short, long)]
        input: PathBuf,
        /// Output file path (defaults to <input stem>_rgb565.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Byte literals per generated line
        #[arg(short, long, default_value = "12", value_parser = parse_bytes_per_line)]
        bytes_per_line: usize,
        /// Name of the emitted array
        #[arg(short, long, default_value = "picture_data")]
        array_name: String,
        /// Invert colors before packing
        #[arg(long)]
        invert: bool,
        /// Byte order of each packed 16-bit value
        #[arg(long, value_enum, default_value_t = ByteOrderArg::Big)]
        byte_order: ByteOrderArg,
    },
    /// Show source image information and the expected output size
    Info {
        /// Input image path
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ByteOrderArg {
    /// High byte first (ST7789-class panels)
    Big,
    /// Low byte first
    Little,
}

impl From<ByteOrderArg> for ByteOrder {
    fn from(arg: ByteOrderArg) -> Self {
        match arg {
            ByteOrderArg::Big => ByteOrder::Big,
            ByteOrderArg::Little => ByteOrder::Little,
        }
    }
}

fn parse_bytes_per_line(s: &str) -> Result<usize, String> {
    rgb565_codec::parse_bytes_per_line(s).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            bytes_per_line,
            array_name,
            invert,
            byte_order,
        } => {
            let options = rgb565_codec::ConvertOptions {
                bytes_per_line,
                array_name,
                invert_colors: invert,
                byte_order: byte_order.into(),
            };
            commands::convert(&input, output, &options)?;
        }

        Commands::Info { input } => {
            commands::info(&input)?;
        }
    }

    Ok(())
}
