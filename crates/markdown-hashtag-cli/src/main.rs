use anyhow::{Context, Result, bail};
use markdown_hashtag_config::Config;
use markdown_hashtag_engine::{Markdown, Variant};
use std::{
    env,
    io::{self, Write},
    path::PathBuf,
    process,
};

const USAGE: &str = "Usage: markdown-hashtag <html|tags|dump> <file.md> [--variant default|obsidian] [--config path]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Render the file to HTML.
    Html,
    /// List every hashtag, one per line.
    Tags,
    /// Print the parsed structure as JSON.
    Dump,
}

#[derive(Debug)]
struct Args {
    command: Command,
    file: PathBuf,
    variant: Option<Variant>,
    config: Option<PathBuf>,
}

impl Args {
    fn parse(args: &[String]) -> Result<Self> {
        let mut rest = args.iter().skip(1);

        let command = match rest.next().map(String::as_str) {
            Some("html") => Command::Html,
            Some("tags") => Command::Tags,
            Some("dump") => Command::Dump,
            Some(other) => bail!("unknown command {other:?}"),
            None => bail!("missing command"),
        };

        let mut file = None;
        let mut variant = None;
        let mut config = None;
        while let Some(arg) = rest.next() {
            match arg.as_str() {
                "--variant" => {
                    let name = rest.next().context("--variant needs a value")?;
                    variant = Some(name.parse()?);
                }
                "--config" => {
                    let path = rest.next().context("--config needs a value")?;
                    config = Some(PathBuf::from(path));
                }
                _ if file.is_none() => file = Some(PathBuf::from(arg)),
                _ => bail!("unexpected argument {arg:?}"),
            }
        }

        Ok(Self {
            command,
            file: file.context("missing input file")?,
            variant,
            config,
        })
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.clone());
            let config = Config::load_from_path(&path)?;
            if config.is_none() {
                bail!("config file not found: {}", path.display());
            }
            config
        }
        None => Config::load()?,
    };

    match loaded {
        Some(config) => Ok(config),
        None => {
            log::debug!(
                "no config at {}, using defaults",
                Config::config_path().display()
            );
            Ok(Config::default())
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = load_config(args.config.as_ref())?;
    if let Some(variant) = args.variant {
        config.variant = variant;
    }
    log::info!("using {} hashtags", config.variant);

    let source = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let md = Markdown::new(config.options());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.command {
        Command::Html => {
            let doc = md.parse(&source);
            md.render(&doc, &mut out)?;
        }
        Command::Tags => {
            let doc = md.parse(&source);
            for tag in doc.tags() {
                writeln!(out, "{tag}")?;
            }
        }
        Command::Dump => {
            let doc = md.parse(&source);
            serde_json::to_writer_pretty(&mut out, &doc.snapshot())?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let args = match Args::parse(&args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
