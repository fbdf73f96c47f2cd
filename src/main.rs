use anyhow::Result;
use biomapa_core::classify::{classify, prioritize};
use biomapa_core::route::Route;
use biomapa_data::explorer::{regional_example, Climate, Environment, IucnCategory, Origin};
use biomapa_lib::app::App;
use biomapa_tui::Tui;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the presentation in
    #[arg(short, long, value_enum, default_value = "standard")]
    mode: Mode,

    /// Custom config file path
    #[arg(long, default_value = "biomapa.toml")]
    config: String,

    /// Initial view path (intro, mapa, capitulo/<id>, cero, ...)
    #[arg(long, default_value = "intro")]
    path: String,

    /// Environment selector for headless classification
    #[arg(long)]
    environment: Option<String>,

    /// Origin selector for headless classification
    #[arg(long)]
    origin: Option<String>,

    /// Climate selector for headless classification
    #[arg(long)]
    climate: Option<String>,

    /// IUCN ordering filter for headless classification
    #[arg(long)]
    filter: Option<String>,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    /// Full-screen terminal presentation
    Standard,
    /// Classify from the CLI flags and print JSON
    Headless,
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.mode {
        Mode::Headless => run_headless(&args),
        Mode::Standard => run_standard(&args),
    }
}

fn run_standard(args: &Args) -> Result<()> {
    // The TUI owns the terminal, so tracing writes to a side file.
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("biomapa.log")?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "biomapa=info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = App::load_config(&args.config);
    let mut app = App::new(config, &args.config);
    match Route::parse(&args.path) {
        Ok(route) => app.navigate(route),
        Err(e) => tracing::warn!("Ignoring initial path: {e}"),
    }

    let mut tui = Tui::new()?;
    tui.init()?;
    let res = app.run(&mut tui);
    tui.exit()?;

    if let Err(e) = res {
        eprintln!("Application error: {e}");
    }
    Ok(())
}

fn run_headless(args: &Args) -> Result<()> {
    let environment = parse_selector(args.environment.as_deref(), Environment::parse, "ambiente")?;
    let origin = parse_selector(args.origin.as_deref(), Origin::parse, "origen")?;
    let climate = parse_selector(args.climate.as_deref(), Climate::parse, "clima")?;
    let filter = parse_selector(args.filter.as_deref(), IucnCategory::parse, "filtro UICN")?;

    let results = prioritize(classify(environment, origin, climate), filter);
    let ecosystems: Vec<_> = results
        .iter()
        .map(|label| {
            serde_json::json!({
                "nombre": label,
                "ejemplo": regional_example(label),
            })
        })
        .collect();

    let output = serde_json::json!({
        "ambiente": environment.map(|e| e.label()),
        "origen": origin.map(|o| o.label()),
        "clima": climate.map(|c| c.label()),
        "filtro": filter.map(|f| f.label()),
        "ecosistemas": ecosystems,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn parse_selector<T>(
    raw: Option<&str>,
    parse: fn(&str) -> Option<T>,
    name: &str,
) -> Result<Option<T>> {
    match raw {
        None => Ok(None),
        Some(value) => match parse(value) {
            Some(parsed) => Ok(Some(parsed)),
            None => anyhow::bail!("valor de {name} desconocido: {value}"),
        },
    }
}
