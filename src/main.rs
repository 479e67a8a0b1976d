use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use figsearch::{preview::render_preview, search_with_config, FoundShape, Grid, Mode, SearchConfig};
use std::{
    io::{self, IsTerminal, Write},
    path::{Path, PathBuf},
};
use tracing::*;
use tracing_subscriber::EnvFilter;

/// Find the longest lines and the largest border squares in binary grids.
#[derive(Parser, Debug)]
#[command(name = "figsearch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print the grid after the result with the found shape highlighted
    #[arg(long, global = true)]
    preview: bool,

    /// When to color the preview
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, global = true)]
    color: ColorChoice,

    /// Spread the search over all cores
    #[arg(long, global = true)]
    parallel: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Also save the grid and the found shape as an image
    #[cfg(feature = "drawing")]
    #[arg(long, global = true, value_name = "IMAGE")]
    render: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Longest horizontal line of 1s
    Hline { file: PathBuf },
    /// Longest vertical line of 1s
    Vline { file: PathBuf },
    /// Largest square with a border of 1s
    Square { file: PathBuf },
    /// Validate the file and print the grid
    #[command(alias = "inspect")]
    Test { file: PathBuf },
}

impl Command {
    fn mode(&self) -> Option<Mode> {
        match self {
            Command::Hline { .. } => Some(Mode::HLine),
            Command::Vline { .. } => Some(Mode::VLine),
            Command::Square { .. } => Some(Mode::Square),
            Command::Test { .. } => None,
        }
    }

    fn file(&self) -> &Path {
        match self {
            Command::Hline { file }
            | Command::Vline { file }
            | Command::Square { file }
            | Command::Test { file } => file,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => {
                io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(&cli)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let file = cli.command.file();
    let grid = Grid::from_path(file).context("Invalid grid")?;
    let mut stdout = io::stdout().lock();

    match cli.command.mode() {
        Some(mode) => {
            let config = SearchConfig::new(cli.parallel);
            let shape = search_with_config(&grid, mode, &config);
            if shape.is_found() {
                writeln!(stdout, "{shape}")?;
            } else {
                info!("No {} in {}", mode, file.display());
                writeln!(stdout, "Not found")?;
            }
            if cli.preview {
                render_preview(&mut stdout, &grid, &shape, cli.color.enabled())?;
            }
            #[cfg(feature = "drawing")]
            save_render(cli, &grid, &shape)?;
        }
        None => {
            let colored = cli.preview && cli.color.enabled();
            render_preview(&mut stdout, &grid, &FoundShape::NOT_FOUND, colored)?;
            #[cfg(feature = "drawing")]
            save_render(cli, &grid, &FoundShape::NOT_FOUND)?;
        }
    }

    Ok(())
}

#[cfg(feature = "drawing")]
fn save_render(cli: &Cli, grid: &Grid, shape: &FoundShape) -> Result<()> {
    let Some(path) = &cli.render else {
        return Ok(());
    };
    let config = figsearch::drawing::DrawingConfig::default();
    figsearch::debug::save_image_with_shape(grid, shape, path, &config)
        .with_context(|| format!("Failed to render {}", path.display()))?;
    debug!("Saved image to {}", path.display());
    Ok(())
}
