//! Terminal user interface for the dashboard host

mod render;

use anyhow::Result;
use marquee::App;
use marquee::app::{Event, Events};
use ratatui::crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEventKind, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Run the dashboard until the user quits
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // First render event at mount so the banner reports its height.
    app.dispatch_current();

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let events = Events::new(app.config.poll_interval_ms);

    loop {
        app.pump_banner();
        terminal.draw(|frame| render::render(frame, app))?;

        match events.next()? {
            Event::Tick => {}
            Event::Key(key) => {
                if key.kind != KeyEventKind::Release {
                    handle_key(app, key.code);
                }
            }
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                let frame_area = Rect::new(0, 0, size.width, size.height);
                handle_mouse(app, mouse, frame_area);
            }
            Event::Resize(_, _) => {
                // A host-side change: re-dispatch so the banner redisplays.
                app.dispatch_current();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('r') => app.dispatch_next(),
        KeyCode::Char('c') => app.activate_close(),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, frame_area: Rect) {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        let banner_area = render::banner_area(app, frame_area);
        app.click(mouse.column, mouse.row, banner_area);
    }
}
