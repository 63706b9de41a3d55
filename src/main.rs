use anyhow::{Context, Result};
use assetpack::{Bundle, GeneratorConfig};
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Embed files into a generated Rust module served as a virtual filesystem
#[derive(Parser, Debug)]
#[command(name = "assetpack", version, about)]
struct Args {
    /// Files or directories to embed
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Name of the generated constructor function
    #[arg(long)]
    function: Option<String>,

    /// Gate the generated function behind this cargo feature
    #[arg(long)]
    cfg_feature: Option<String>,

    /// Emit a private function instead of `pub`
    #[arg(long)]
    private: bool,

    /// Byte literals per line
    #[arg(long)]
    block_width: Option<usize>,

    /// Path the generated code uses to reach the assetpack crate
    #[arg(long)]
    crate_path: Option<String>,

    /// Prefix removed from input paths to form logical paths
    #[arg(long, default_value = "")]
    strip: PathBuf,

    /// Print asset metadata as JSON instead of generating code
    #[arg(long)]
    list: bool,
}

impl Args {
    fn generator_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_json_file(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(function) = &self.function {
            config.function = function.clone();
        }
        if let Some(feature) = &self.cfg_feature {
            config.cfg_feature = Some(feature.clone());
        }
        if self.private {
            config.public = false;
        }
        if let Some(width) = self.block_width {
            config.block_width = width;
        }
        if let Some(crate_path) = &self.crate_path {
            config.crate_path = crate_path.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

fn logical_path(input: &Path, strip: &Path) -> Result<String> {
    let relative = input.strip_prefix(strip).unwrap_or(input);
    let logical = assetpack::PathResolver::sanitize(relative)
        .context(format!("Cannot embed {} (try --strip)", input.display()))?;
    Ok(logical)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let start_time = Instant::now();

    let mut bundle = Bundle::new(args.generator_config()?);

    for input in &args.inputs {
        if input.is_dir() {
            let added = bundle.add_dir(input, &args.strip)?;
            log::info!("[assetpack] {}: {} files", input.display(), added);
        } else {
            bundle.add_file(&logical_path(input, &args.strip)?, input)?;
        }
    }

    if args.list {
        let infos = bundle.infos()?;
        let listing: Vec<serde_json::Value> = infos
            .iter()
            .map(|(path, info)| serde_json::json!({ "path": path, "info": info }))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&listing).context("Failed to serialize listing")?
        );
        return Ok(());
    }

    match &args.output {
        Some(path) => bundle.write(path)?,
        None => {
            let mut rendered = Vec::new();
            bundle.build(&mut rendered)?;
            std::io::stdout()
                .write_all(&rendered)
                .context("Failed to write to stdout")?;
        }
    }

    log::info!(
        "[assetpack] ✓ Embedded {} assets [{:.2}s]",
        bundle.len(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
