use anyhow::{Context, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use tabset::cli::{self, Command};
use tabset::store::{config_path, tab_config};
use tabset::{App, app, logging, session};

fn main() -> Result<()> {
    // 0. Handle CLI arguments
    let command = cli::parse_args(std::env::args().skip(1))?;
    let tabs_file = match command {
        Command::Help => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
        Command::Version => {
            println!("tabset {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Command::PrintConfig => {
            println!("{}", tab_config::demo_config_json()?);
            return Ok(());
        }
        Command::Run { tabs_file } => tabs_file,
    };

    // 1. Logging and tab definitions (before TUI)
    if let Some(log_config) = logging::LogConfig::from_env(config_path::log_file()) {
        logging::init_logging(&log_config)?;
    }

    let tab_set =
        tab_config::resolve_tab_set(tabs_file.as_deref(), &config_path::default_tabs_file())?;
    tracing::info!(tabs = tab_set.len(), "starting");

    // 2. Install panic hook so terminal is restored on panic
    install_panic_hook();

    // 3. Initialize TUI, run the event loop, restore the terminal
    let mut terminal = ratatui::init();
    let mut app = App::new(tab_set);

    let result = session::run_guarded(
        || {
            execute!(std::io::stdout(), EnableMouseCapture)
                .context("Failed to enable mouse capture")
        },
        || run(&mut terminal, &mut app),
        || {
            execute!(std::io::stdout(), DisableMouseCapture).ok();
            ratatui::restore();
        },
    );

    tracing::info!(active = app.active_index(), "exiting");
    result
}

fn run(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        let action = match crossterm::event::read()? {
            // Skip release/repeat events on some terminals
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => app::Action::Continue,
        };

        if let app::Action::Quit = action {
            return Ok(());
        }
    }
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        execute!(std::io::stdout(), DisableMouseCapture).ok();
        ratatui::restore();
        original_hook(panic_info);
    }));
}
