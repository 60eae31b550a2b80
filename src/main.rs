use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use photocat_release::exec::SystemRunner;
use photocat_release::{config, release, ui};

#[derive(clap::Parser)]
#[command(
    name = "photocat-release",
    about = "Tag a release of the photocat tree and move it to the next snapshot version"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short = 'C', long, help = "Run as if started in this directory")]
    directory: Option<PathBuf>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() {
    let args = Args::parse();

    if args.version {
        println!("photocat-release {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if let Err(e) = run(&args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;

    let dir = match &args.directory {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    let runner = SystemRunner::new(&dir);
    release::run_release(&dir, &config, &runner, args.dry_run)?;

    Ok(())
}
