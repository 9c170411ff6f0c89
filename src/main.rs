use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};

use css_compiler::{config::Config, styles::Filter, StyleRegistry};

#[derive(Parser)]
#[command(
    name = "css-compiler",
    version,
    about = "Compile collected style declarations into a stylesheet",
    long_about = "CSS-Compiler loads declarations from a TOML manifest into independent style instances, then prints the compiled CSS or a filtered view of the collected declarations."
)]
struct Cli {
    /// Manifest/configuration file (TOML)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Instance to render (defaults to the config's default_instance)
    #[arg(long)]
    instance: Option<String>,

    /// Render every instance, in creation order
    #[arg(long, conflicts_with = "instance")]
    all: bool,

    /// Emit minified CSS
    #[arg(short, long)]
    minify: bool,

    /// Only show declarations under this media query
    #[arg(long)]
    query: Option<String>,

    /// Only show declarations for this selector
    #[arg(long)]
    element: Option<String>,

    /// Only show declarations for this property
    #[arg(long)]
    property: Option<String>,

    /// Only show declarations with this value
    #[arg(long)]
    value: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn filter(&self) -> Filter {
        Filter {
            query: self.query.clone(),
            element: self.element.clone(),
            property: self.property.clone(),
            value: self.value.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the stylesheet
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting CSS-Compiler v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &cli.input {
        Some(path) => {
            info!("Loading manifest from {:?}", path);
            Config::from_file(path)?
        }
        None => {
            info!("No manifest given, using default configuration");
            Config::default()
        }
    };
    if cli.minify {
        config.generator.minify = true;
    }
    config.validate()?;

    let registry = StyleRegistry::from_config(&config);
    config.apply(&registry);
    info!(
        "Collected {} declarations into {} instance(s)",
        config.declarations.len(),
        registry.len()
    );

    if cli.all {
        print!("{}", registry.render_all()?);
        return Ok(());
    }

    let store = config.target_store(&registry, cli.instance.as_deref())?;
    info!("Rendering instance '{}'", store.id());

    let filter = cli.filter();
    if filter.is_empty() {
        print!("{}", store.render()?);
    } else {
        let matched = store.query(&filter);
        info!("{} declarations matched", matched.declaration_count());
        print!("{}", toml::to_string_pretty(&matched)?);
    }

    Ok(())
}
