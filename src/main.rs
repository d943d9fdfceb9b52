use clap::Parser;
use rclayout::{
    ConvertError, Converter, DEFAULT_DENSITY, DocumentOptions, LayoutConfig, default_output_path,
};
use rclayout_preview::DEFAULT_POLL_INTERVAL;
use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;
use std::thread;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Converts JSON layout configs into `.rc` documents.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file to convert
    input: Option<PathBuf>,

    /// Output file (defaults to the input path with an `.rc` extension)
    output: Option<PathBuf>,

    /// Convert every `*.json` file in INPUT_DIR into OUTPUT_DIR
    #[arg(long, num_args = 2, value_names = ["INPUT_DIR", "OUTPUT_DIR"], conflicts_with_all = ["input", "output"])]
    dir: Option<Vec<PathBuf>>,

    /// Multiplier from dp to device pixels
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    density: f32,

    /// Read preview messages from stdin, one per line, and report every re-render
    #[arg(long, default_value_t = false, conflicts_with_all = ["input", "output", "dir"])]
    preview: bool,
}

fn print_usage() {
    eprintln!("Usage: rclayout <input.json> [output.rc]");
    eprintln!("       rclayout --dir <input-dir> <output-dir>");
    eprintln!("       rclayout --preview < messages.jsonl");
}

fn main() -> Result<(), ConvertError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "rclayout=info");
        }
    }
    env_logger::init();

    if env::args_os().len() <= 1 {
        print_usage();
        process::exit(1);
    }
    let args = Args::parse();

    if args.preview {
        return run_preview();
    }

    let converter = Converter::new(DocumentOptions::default().with_density(args.density));

    if let Some(dirs) = args.dir {
        let [input_dir, output_dir] = dirs.as_slice() else {
            print_usage();
            process::exit(1);
        };
        let reports = converter.convert_dir(input_dir, output_dir)?;
        for report in &reports {
            println!("  {}", describe(report));
        }
        let absolute = output_dir
            .canonicalize()
            .unwrap_or_else(|_| output_dir.clone());
        println!("Done. Output in: {}", absolute.display());
        return Ok(());
    }

    let Some(input) = args.input else {
        print_usage();
        process::exit(1);
    };
    let output = args.output.unwrap_or_else(|| default_output_path(&input));
    let report = converter.convert_file(&input, &output)?;
    println!("  {}", describe(&report));
    Ok(())
}

fn describe(report: &rclayout::ConversionReport) -> String {
    let name = |p: &PathBuf| {
        p.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| p.display().to_string())
    };
    format!(
        "{} -> {} ({} bytes)",
        name(&report.input),
        name(&report.output),
        report.bytes
    )
}

/// Treats stdin as the host message channel. Ends when stdin closes.
fn run_preview() -> Result<(), ConvertError> {
    let (sender, session) = rclayout_preview::channel(LayoutConfig::default())?;

    let reader = thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(message) => {
                    sender.ingest_message(&message);
                }
                Err(e) => {
                    log::warn!("Stopped reading preview messages: {}", e);
                    break;
                }
            }
        }
    });

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(session.run(DEFAULT_POLL_INTERVAL, |tree, version| {
        println!(
            "preview v{}: {} widgets, texts {:?}, actions {:?}",
            version,
            tree.count(),
            tree.texts(),
            tree.actions()
        );
    }));

    if reader.join().is_err() {
        return Err(ConvertError::InvalidInput(
            "preview message reader panicked".to_string(),
        ));
    }
    Ok(())
}
