use anyhow::{Context, Result};
use mdhtml_config::Config;
use std::{
    env, fs,
    path::{Path, PathBuf},
    process,
};

const SET_OUTPUT_DIR: &str = "--set-output-dir";

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("mdhtml", String::as_str);

    match args.as_slice() {
        [_, flag, dir] if flag == SET_OUTPUT_DIR => {
            let config_path = Config::config_path();
            set_output_dir(&config_path, Path::new(dir))?;
            log::info!("Saved output_dir = {dir} to {}", config_path.display());
        }
        [_, input] => {
            let input = PathBuf::from(input);
            let config = Config::load()?.unwrap_or_default();
            let output = config
                .output_path_for(&input)
                .with_context(|| format!("Input path has no file name: {}", input.display()))?;
            convert_file(&input, &output)?;
            log::info!("Wrote {}", output.display());
        }
        [_, input, output] => {
            convert_file(Path::new(input), Path::new(output))?;
            log::info!("Wrote {output}");
        }
        _ => {
            eprintln!("Usage: {program} <input.md> [output.html]");
            eprintln!("       {program} {SET_OUTPUT_DIR} <dir>");
            process::exit(1);
        }
    }
    Ok(())
}

/// Stores `dir` as the default output directory, keeping any other settings.
fn set_output_dir(config_path: &Path, dir: &Path) -> Result<()> {
    let mut config = Config::load_from_path(config_path)?.unwrap_or_default();
    config.set_output_dir(dir);
    config.save_to_path(config_path)?;
    Ok(())
}

/// Reads `input`, converts it and writes the HTML to `output`.
fn convert_file(input: &Path, output: &Path) -> Result<()> {
    let markdown = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let html = mdhtml_engine::markdown_to_html(&markdown)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(output, html).with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}
