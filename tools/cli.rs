use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use giallo_fence::{Config, LogLogger};

/// Replace fenced code blocks in documents with highlighted HTML
#[derive(Parser, Debug)]
#[command(name = "giallo-fence", version)]
struct Args {
    /// Documents to process
    files: Vec<PathBuf>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only process files with one of these extensions
    #[arg(long = "ext", default_values_t = [String::from("md"), String::from("svx")])]
    extensions: Vec<String>,

    /// Write processed files in this directory instead of printing them
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Print the CSS switching between the two themes and exit
    #[arg(long)]
    stylesheet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };

    if args.stylesheet {
        print!(
            "{}",
            config.themes.stylesheet(
                &config.css_variable_prefix,
                "html.dark",
                "html.light"
            )
        );
        return Ok(());
    }

    let extensions = args.extensions.clone();
    let preprocessor = config
        .build_preprocessor()?
        .with_logger(Arc::new(LogLogger))
        .with_include(move |id| {
            Path::new(id)
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| extensions.iter().any(|e| e == ext))
        });

    if let Some(out_dir) = &args.out_dir {
        fs::create_dir_all(out_dir)?;
    }

    for path in &args.files {
        let content = fs::read_to_string(path)?;
        let id = path.to_string_lossy();
        let Some(output) = preprocessor.markup(&content, &id) else {
            log::info!("Skipping {id}");
            continue;
        };

        match &args.out_dir {
            Some(out_dir) => {
                let file_name = path.file_name().ok_or("input path has no file name")?;
                fs::write(out_dir.join(file_name), output)?;
            }
            None => println!("{output}"),
        }
    }

    Ok(())
}
