use inbox_copilot::adapters::{FileSessionStore, ReqwestHttpClient};
use inbox_copilot::api::ApiClient;
use inbox_copilot::app::{App, Envelope};
use inbox_copilot::auth::SessionContext;
use inbox_copilot::cli::{parse_args, run_cli_command};
use inbox_copilot::config::ClientConfig;
use inbox_copilot::shell::Route;
use inbox_copilot::{logging, ui};

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = ClientConfig::from_env();

    // Handle flags before touching the terminal
    if let Some(result) = run_cli_command(parse_args(std::env::args()), &config) {
        return result;
    }

    match logging::init(&config.log_dir) {
        Ok(path) => info!("Logging to {}", path.display()),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }
    info!("Starting copilot against {}", config.api_base_url);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut app = runtime.block_on(async {
        let store = Arc::new(FileSessionStore::at(&config.session_path));
        let session = match SessionContext::init(store.clone()).await {
            Ok(session) => session,
            Err(e) => {
                // A corrupt session file means starting logged out
                warn!("Ignoring stored session: {}", e);
                SessionContext::new(store)
            }
        };
        let api = ApiClient::new(
            config.api_base_url.clone(),
            session,
            Arc::new(ReqwestHttpClient::new()),
        );
        let mut app = App::new(api);
        // Redirects to Login when there is no stored session
        app.navigate(Route::Dashboard);
        app
    });

    setup_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = runtime.block_on(run_app(&mut terminal, &mut app, config.tick_rate()));

    restore_terminal(&mut terminal)?;
    info!("Exiting");

    result
}

/// Leave the alternate screen before the panic message prints.
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        original_hook(panic_info);
    }));
}

fn restore_terminal<B: ratatui::backend::Backend + io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Owned here so select! can poll it while `app` is borrowed mutably
    let mut message_rx: Option<mpsc::UnboundedReceiver<Envelope>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let tick = tokio::time::sleep(tick_rate);

        tokio::select! {
            _ = tick => {
                // Spinner frames
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        warn!("Terminal event error: {}", e);
                    }
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(envelope) = msg {
                    app.deliver(envelope);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
