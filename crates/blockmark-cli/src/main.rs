use anyhow::{Context, Result};
use blockmark_config::Config;
use blockmark_engine::{RenderOptions, SyntaxKind, render, stylesheet, tokenize};
use clap::Parser;
use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

/// Highlight WordPress block markup as escaped, classed HTML.
#[derive(Debug, Parser)]
#[command(name = "blockmark", version, about)]
struct Cli {
    /// File to highlight; reads stdin when absent or `-`
    file: Option<PathBuf>,

    /// Config file to use instead of ~/.config/blockmark/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Wrap each source line in a numbered line marker
    #[arg(long)]
    line_numbers: bool,

    /// Prefix for the generated class names
    #[arg(long, value_name = "PREFIX")]
    class_prefix: Option<String>,

    /// Emit a complete HTML document with a stylesheet
    #[arg(long)]
    standalone: bool,

    /// Print the token stream as JSON instead of markup
    #[arg(long)]
    tokens: bool,
}

/// Everything resolved from the command line and the config file.
#[derive(Debug, PartialEq)]
struct Settings {
    render: RenderOptions,
    standalone: bool,
    stylesheet: Option<PathBuf>,
}

impl Settings {
    /// Command-line flags win over config values; flags can only switch
    /// features on.
    fn resolve(cli: &Cli, config: Config) -> Result<Self> {
        let overridden = Config {
            class_prefix: cli.class_prefix.clone().unwrap_or(config.class_prefix),
            line_numbers: cli.line_numbers || config.line_numbers,
            standalone: cli.standalone || config.standalone,
            stylesheet: config.stylesheet,
        };
        overridden.validate()?;

        Ok(Self {
            render: RenderOptions {
                class_prefix: overridden.class_prefix,
                line_numbers: overridden.line_numbers,
            },
            standalone: overridden.standalone,
            stylesheet: overridden.stylesheet,
        })
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let settings = Settings::resolve(&cli, config)?;

    let source = read_input(cli.file.as_ref())?;
    log::debug!("Read {} bytes of input", source.len());

    let tokens = tokenize(&source);
    let errors = tokens.iter().filter(|t| t.kind == SyntaxKind::ERROR).count();
    log::debug!("Tokenized into {} tokens", tokens.len());
    if errors > 0 {
        log::warn!("Input contains {errors} malformed construct(s)");
    }

    let output = if cli.tokens {
        let mut json = serde_json::to_string_pretty(&tokens)?;
        json.push('\n');
        json
    } else {
        let body = render(&tokens, &settings.render);
        if settings.standalone {
            let css = match &settings.stylesheet {
                Some(path) => fs::read_to_string(path)
                    .with_context(|| format!("Failed to read stylesheet {}", path.display()))?,
                None => stylesheet(&settings.render.class_prefix),
            };
            document(&body, &css, &settings.render)
        } else {
            body
        }
    };

    io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .context("Failed to write output")?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    log::info!("Config path: {}", config_path.display());

    match Config::load_from_path(&config_path)? {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        }
        None if cli.config.is_some() => {
            anyhow::bail!("Config file not found: {}", config_path.display())
        }
        None => {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok(source)
        }
    }
}

/// Wrap rendered markup in a minimal HTML page.
fn document(body: &str, css: &str, options: &RenderOptions) -> String {
    // Line-numbered output already ends every line with a break.
    let separator = if options.line_numbers || body.is_empty() {
        ""
    } else {
        "\n"
    };
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>\n{css}</style>\n</head>\n<body>\n<pre class=\"{}code\">{body}{separator}</pre>\n</body>\n</html>\n",
        blockmark_engine::escape(&options.class_prefix)
    )
}
