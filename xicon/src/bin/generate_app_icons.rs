use anyhow::Result;
use appicon::ios::DEFAULT_OUTPUT_DIR;
use appicon::{generate_icons, Progress, IOS_ICON_SIZES};
use clap::Parser;
use console::style;
use std::path::PathBuf;
use xicon::TaskRunner;

/// Generates every iOS app icon size from a source image.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Source image, ideally square and at least 1024x1024 px
    source: PathBuf,
    /// Output directory
    #[clap(default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
    /// Keep every progress line and log debug output to stderr
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            err.print().ok();
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };
    xicon::init_logging(args.verbose);

    let mut runner = TaskRunner::new(IOS_ICON_SIZES.len() as u32, args.verbose);
    generate_icons(&args.source, &args.output_dir, |event| match event {
        Progress::Loaded { width, height } => {
            println!("{} Loaded source image: {}x{}", style("✓").green(), width, height);
        }
        Progress::Category(category) => {
            println!("\nGenerating {} icons:", category.to_string().to_uppercase());
        }
        Progress::Started(icon) => {
            runner.start_task(format!("{} ({}x{})", icon.name, icon.size, icon.size));
        }
        Progress::Written(..) => runner.end_task(),
    })?;

    println!(
        "\n{} Successfully generated {} icon files in '{}/'",
        style("✓").green(),
        runner.completed(),
        args.output_dir.display(),
    );
    println!("\nDirectory structure:");
    print!("{}", xicon::tree_summary(&args.output_dir));
    Ok(())
}
