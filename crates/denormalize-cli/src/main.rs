mod cli;
mod commands;

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use cli::Args;
use denormalize_core::{LangOptions, SfxOptions, TextEncoding};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; warn by default when RUST_LOG is unset
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("denormalize=warn,denormalize_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if !args.has_action() {
        Args::command().print_help()?;
        bail!("No action given; use --identify, --xlang or --xsfx");
    }

    let encoding = TextEncoding::for_label(&args.encoding)
        .with_context(|| format!("Invalid --encoding {:?}", args.encoding))?;

    if let Some(path) = &args.identify {
        commands::identify::run(path, args.json)?;
    }

    if let Some(path) = &args.xlang {
        let options = LangOptions::default().with_encoding(encoding);
        commands::lang::run(path, &options, args.json, args.color)?;
    }

    if let Some(path) = &args.xsfx {
        let options = SfxOptions::default()
            .with_encoding(encoding)
            .with_verify_magic(args.verify_magic)
            .with_strict_counts(args.strict);
        commands::sfx::run(path, &options, args.json, args.color)?;
    }

    Ok(())
}
