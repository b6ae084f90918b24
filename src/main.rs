// path-replay: step through traced light paths over a rendered image

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::Level;

use path_replay::config::{Overrides, RendererConfig, Settings};
use path_replay::error::VisualizerError;
use path_replay::load::{load_background, load_paths};
use path_replay::navigator::Navigator;
use path_replay::render::{RandomJitter, Renderer};
use path_replay::ui::App;

#[derive(Parser, Debug)]
#[command(name = "path-replay", version, about)]
struct Cli {
    /// 2D path-trace file written by the renderer.
    #[arg(long)]
    paths: Option<PathBuf>,

    /// Background image (PNG) the paths were traced over.
    #[arg(long)]
    image: Option<PathBuf>,

    /// Renderer config supplying default input locations.
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Replay frames per second.
    #[arg(long)]
    fps: Option<u32>,

    /// Trail jitter in pixels (0 disables it).
    #[arg(long)]
    jitter: Option<f64>,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Log level and writer choice.
///
/// Without a log file the level is capped at INFO so the frame loop (debug and
/// trace only) never writes over the TUI; the returned notice says so.
fn log_level(verbose: u8, to_file: bool) -> (Level, Option<&'static str>) {
    let requested = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    if to_file || verbose == 0 {
        (requested, None)
    } else {
        (
            Level::INFO,
            Some("-v has no effect without --log-file; logging at info level"),
        )
    }
}

fn init_logging(cli: &Cli) -> io::Result<()> {
    let (level, notice) = log_level(cli.verbose, cli.log_file.is_some());

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(io::stderr)
                .init();
        }
    }

    if let Some(notice) = notice {
        tracing::warn!("{}", notice);
    }
    Ok(())
}

/// Leave raw mode and the alternate screen, and show the cursor again
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, Show)
}

/// Restore the terminal before the default panic message is printed
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal(&mut io::stdout());
        default_hook(info);
    }));
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("Error: cannot open log file: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), VisualizerError> {
    let config = RendererConfig::load(&cli.config)?;
    let config_dir = cli
        .config
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let settings = Settings::resolve(
        Overrides {
            paths: cli.paths,
            image: cli.image,
            fps: cli.fps,
            jitter: cli.jitter,
        },
        config.as_ref(),
        config_dir,
    )?;
    tracing::info!(
        paths = %settings.paths_file.display(),
        image = %settings.image_file.display(),
        fps = settings.fps,
        "starting"
    );

    let paths = load_paths(&settings.paths_file)?;
    let background = load_background(&settings.image_file)?;

    let navigator = Navigator::new(paths).map_err(|_| VisualizerError::NoSelectablePath {
        path: settings.paths_file.clone(),
    })?;
    let renderer = Renderer::new(background);
    let jitter = RandomJitter::new(StdRng::from_entropy(), settings.jitter);
    let mut app = App::new(navigator, renderer, Box::new(jitter), settings.fps);

    // Set up terminal
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = restore_terminal(&mut io::stdout());
            return Err(e.into());
        }
    };

    let res = app.run(&mut terminal);

    // Restore terminal
    restore_terminal(terminal.backend_mut())?;

    res?;
    Ok(())
}
