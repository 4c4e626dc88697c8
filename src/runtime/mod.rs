use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::audio::RodioBackend;
use crate::catalog::build_catalog;
use crate::config;

mod event_loop;
mod logging;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--print-config") {
        println!("{}", config::Settings::default().to_toml()?);
        return Ok(());
    }

    let (mut settings, problem) = settings::load_settings();

    // An optional positional argument overrides the sounds directory.
    if let Some(dir) = args.iter().find(|a| !a.starts_with("--")) {
        settings.catalog.sounds_dir = PathBuf::from(dir);
    }

    match logging::init(&settings.log) {
        Ok(path) => log::debug!("logging to {}", path.display()),
        Err(e) => eprintln!("lull: cannot open log file, logging disabled: {e}"),
    }
    if let Some(msg) = problem {
        log::warn!("{msg}");
    }

    let catalog = build_catalog(&settings.catalog);
    log::info!(
        "{} tracks from {} ({:?} preset)",
        catalog.len(),
        settings.catalog.sounds_dir.display(),
        settings.catalog.preset
    );

    let backend = RodioBackend::new();
    let mut app = startup::build_app(backend, catalog, &settings, Instant::now());

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);

    app.player.teardown();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
