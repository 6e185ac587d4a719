pub mod app;
mod error;
mod event;
mod form;
mod renderer;

pub use error::UiError;

use std::io::{Stdout, stdout};
use std::time::Duration;

use crossterm::cursor;
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste,
    Event, KeyEventKind, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::Config;
use app::App;

pub fn run(config: Config) -> Result<(), UiError> {
    terminal::enable_raw_mode()?;
    crossterm::execute!(
        stdout(),
        EnterAlternateScreen,
        EnableBracketedPaste,
        cursor::Hide,
    )?;

    let keyboard_enhancement_enabled = terminal::supports_keyboard_enhancement()
        .unwrap_or(false);

    if keyboard_enhancement_enabled {
        crossterm::execute!(
            stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }

    let result = run_loop(config, keyboard_enhancement_enabled);

    // 루프가 실패해도 터미널 상태는 항상 복구한다.
    if keyboard_enhancement_enabled {
        crossterm::execute!(stdout(), PopKeyboardEnhancementFlags)?;
    }

    crossterm::execute!(
        stdout(),
        cursor::Show,
        DisableBracketedPaste,
        LeaveAlternateScreen,
    )?;
    terminal::disable_raw_mode()?;

    result
}

fn run_loop(config: Config, keyboard_enhancement_enabled: bool) -> Result<(), UiError> {
    let mut terminal: Terminal<CrosstermBackend<Stdout>> =
        Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(config);
    app.set_keyboard_enhancement_enabled(keyboard_enhancement_enabled);

    let size = terminal.size()?;
    app.terminal_width = size.width;
    app.terminal_height = size.height;

    loop {
        app.tick();
        terminal.draw(|frame| renderer::render(frame, &mut app))?;

        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    app.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    app.handle_paste(text);
                }
                Event::Resize(width, height) => {
                    app.terminal_width = width;
                    app.terminal_height = height;
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!("wizard closed");
    Ok(())
}
