//! `geosphere-cli`: great-circle arcs between points on a sphere, as CSV, OBJ or JSON.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::{info, LevelFilter};

use geosphere_core::{GeodesicSession, SphereConfig};
use geosphere_io::{
    add_point_from_text, read_point_list, write_session_json, ArcWriter, CsvArcWriter,
    ObjArcWriter,
};

#[derive(Parser)]
#[command(version, about = "Great-circle arcs between points on a sphere")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Sphere radius (overrides the config file)
    #[arg(long, global = true)]
    radius: Option<f64>,

    /// Points per arc, at least 2 (overrides the config file)
    #[arg(long, global = true)]
    resolution: Option<usize>,

    /// TOML file with `radius` and `resolution`
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long, global = true, value_name = "FILE")]
    output: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Arc between two points given as "x,y,z"
    Arc {
        #[arg(allow_hyphen_values = true)]
        from: String,
        #[arg(allow_hyphen_values = true)]
        to: String,
    },
    /// Arcs joining a sequence of points in order
    Path {
        /// Points given as "x,y,z", added after any from --file
        #[arg(allow_hyphen_values = true)]
        points: Vec<String>,

        /// Point list file, one "x,y,z" per line
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    Obj,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(&cli)?;
    let mut session = GeodesicSession::new(config)?;

    match &cli.command {
        Command::Arc { from, to } => {
            add_text(&mut session, from)?;
            add_text(&mut session, to)?;
        }
        Command::Path { points, file } => {
            if let Some(file) = file {
                let coords = read_point_list(file)
                    .with_context(|| format!("cannot read point list {}", file.display()))?;
                session.add_points(coords)?;
            }
            for text in points {
                add_text(&mut session, text)?;
            }
            if session.points().is_empty() {
                bail!("no points given");
            }
        }
    }

    info!(
        "{} points, {} arcs, total distance {:.6}",
        session.points().len(),
        session.arcs().len(),
        session.total_distance()
    );

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            write_output(cli.format, &session, BufWriter::new(file))?;
            info!("wrote {}", path.display());
        }
        None => write_output(cli.format, &session, io::stdout().lock())?,
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Config file first, then explicit flags on top
fn resolve_config(cli: &Cli) -> anyhow::Result<SphereConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SphereConfig::default(),
    };
    if let Some(radius) = cli.radius {
        config = config.with_radius(radius);
    }
    if let Some(resolution) = cli.resolution {
        config = config.with_resolution(resolution);
    }
    config.validate()?;
    Ok(config)
}

fn load_config(path: &Path) -> anyhow::Result<SphereConfig> {
    SphereConfig::load(path).with_context(|| format!("cannot load config {}", path.display()))
}

fn add_text(session: &mut GeodesicSession, text: &str) -> anyhow::Result<()> {
    add_point_from_text(session, text).with_context(|| format!("rejected point \"{text}\""))?;
    Ok(())
}

fn write_output<W: Write>(
    format: OutputFormat,
    session: &GeodesicSession,
    writer: W,
) -> anyhow::Result<()> {
    let points = session.points().as_slice();
    let arcs = session.arcs().as_slice();
    match format {
        OutputFormat::Csv => CsvArcWriter::write_arcs(points, arcs, writer)?,
        OutputFormat::Obj => ObjArcWriter::write_arcs(points, arcs, writer)?,
        OutputFormat::Json => {
            let mut writer = writer;
            write_session_json(session, &mut writer)?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}
