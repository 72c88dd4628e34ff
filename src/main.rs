#![warn(clippy::all, clippy::pedantic)]

use std::io;
use std::os::fd::AsRawFd;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gems::app::App;
use gems::components::Input;
use gems::config::{Config, loader};
use gems::systems;
use gems::ui::{self, TerminalPresenter};
use log::{debug, error, info};
use ratatui::{Terminal, prelude::*};

fn main() -> Result<()> {
    // Create log file and redirect stderr to it
    let log_path = "gems.log";
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
        .context("Failed to create log file")?;

    // Redirect stderr to the log file
    let stderr_handle = std::io::stderr();
    let stderr_fd = stderr_handle.as_raw_fd();
    let log_file_fd = log_file.as_raw_fd();

    // Safety: We're redirecting stderr to our log file using standard POSIX operations
    unsafe {
        libc::dup2(log_file_fd, stderr_fd);
    }

    // Configure the logger to use stderr (which is now redirected to our file)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    info!("Starting Gems");

    let config = match loader::load_config_from_file() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {e}");
            // Continue with default configuration
            Config::default()
        }
    };

    // Terminal initialization
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(33); // ~30 FPS

    let app = App::new(&config);
    let res = run_app(&mut terminal, app, tick_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("Game error: {err:?}");
        return Err(err);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App, tick_rate: Duration) -> Result<()> {
    loop {
        let cursor = app.world.resource::<Input>().cursor;
        terminal.draw(|f| ui::render(f, app.board(), app.game_state(), cursor))?;

        if app.should_quit {
            return Ok(());
        }

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    debug!("Key event: {key:?}");
                    handle_key(&mut app, key.code);
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    let size = terminal.size()?;
                    let frame_area = Rect::new(0, 0, size.width, size.height);
                    if let Some(position) = ui::tap_position(frame_area, mouse.column, mouse.row)
                    {
                        app.world.resource_mut::<Input>().tap = Some(position);
                    }
                }
                _ => {}
            }
        }

        let size = terminal.size()?;
        if !ui::fits(Rect::new(0, 0, size.width, size.height)) {
            // Keyboard taps are dropped too while the board is hidden
            app.world.resource_mut::<Input>().tap = None;
        }

        if app.world.resource::<Input>().tap.is_some() {
            let game_state = app.game_state().clone();
            let mut presenter = TerminalPresenter::new(terminal, game_state, cursor);
            systems::tap_system(&mut app.world, &mut presenter);

            // Clicks made while the cascade was animating are dropped
            while event::poll(Duration::from_millis(0))? {
                let _ = event::read()?;
            }
        }

        app.on_tick();
    }
}

fn handle_key(app: &mut App, code: KeyCode) {
    let mut input = app.world.resource_mut::<Input>();
    match code {
        KeyCode::Char('q' | 'x') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('w') => input.move_cursor(0, -1),
        KeyCode::Down | KeyCode::Char('s') => input.move_cursor(0, 1),
        KeyCode::Left | KeyCode::Char('a') => input.move_cursor(-1, 0),
        KeyCode::Right | KeyCode::Char('d') => input.move_cursor(1, 0),
        KeyCode::Enter | KeyCode::Char(' ') => input.tap_cursor(),
        KeyCode::Char('r') => input.restart = true,
        _ => {}
    }
}
