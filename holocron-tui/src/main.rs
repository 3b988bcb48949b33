//! Holocron TUI entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use holocron_tui::config::TuiConfig;
use holocron_tui::error::TuiError;
use holocron_tui::events::TuiEvent;
use holocron_tui::keys::{map_key, map_search_key, Action, SearchInput};
use holocron_tui::notifications::NotificationLevel;
use holocron_tui::state::{App, InputMode};
use holocron_tui::views::render_view;
use holocron_client::{
    CatalogService, CatalogTransport, HomeworldResolver, HttpCatalog, PageLoad, PageRequest,
    ResolveTicket,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    init_logging(&config.log_path)?;
    tracing::info!(catalog = %config.catalog_base_url, "starting holocron tui");

    let transport: Arc<dyn CatalogTransport> = Arc::new(HttpCatalog::new(
        &config.catalog_base_url,
        Duration::from_millis(config.request_timeout_ms),
    )?);
    let catalog = Arc::new(CatalogService::new(
        Arc::clone(&transport),
        config.page_size,
    ));
    let resolver = Arc::new(HomeworldResolver::new(Arc::clone(&transport)));

    let mut app = App::new(config);

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx.clone());

    match app.gallery.request_page(1) {
        Ok(request) => spawn_page_fetch(Arc::clone(&catalog), request, event_tx.clone()),
        Err(err) => app.notify(
            NotificationLevel::Error,
            format!("Initial page request failed: {}", err),
        ),
    }

    let tick_rate = Duration::from_millis(app.config.tick_interval_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                let _ = event_tx.send(TuiEvent::Tick).await;
            }
            Some(event) = event_rx.recv() => {
                if handle_event(&mut app, &catalog, &resolver, &event_tx, event) {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn init_logging(path: &Path) -> Result<(), TuiError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let filter = tracing_subscriber::EnvFilter::try_from_env("HOLOCRON_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                match evt {
                    CrosstermEvent::Key(key) => {
                        let _ = sender.blocking_send(TuiEvent::Input(key));
                    }
                    CrosstermEvent::Resize(width, height) => {
                        let _ = sender.blocking_send(TuiEvent::Resize { width, height });
                    }
                    _ => {}
                }
            }
        }
    });
}

fn spawn_page_fetch(
    catalog: Arc<CatalogService>,
    request: PageRequest,
    events: mpsc::Sender<TuiEvent>,
) {
    tokio::spawn(async move {
        let outcome = catalog.page(request.page).await;
        let _ = events
            .send(TuiEvent::PageLoaded {
                page: request.page,
                outcome,
            })
            .await;
    });
}

fn spawn_homeworld_fetch(
    resolver: Arc<HomeworldResolver>,
    ticket: ResolveTicket,
    events: mpsc::Sender<TuiEvent>,
) {
    tokio::spawn(async move {
        let outcome = resolver.resolve(&ticket.url).await;
        let _ = events
            .send(TuiEvent::HomeworldResolved {
                generation: ticket.generation,
                outcome,
            })
            .await;
    });
}

fn handle_event(
    app: &mut App,
    catalog: &Arc<CatalogService>,
    resolver: &Arc<HomeworldResolver>,
    events: &mpsc::Sender<TuiEvent>,
    event: TuiEvent,
) -> bool {
    match event {
        TuiEvent::Input(key) => match app.input_mode {
            InputMode::Search => {
                if let Some(input) = map_search_key(key) {
                    match input {
                        SearchInput::Insert(c) => app.search_insert(c),
                        SearchInput::Backspace => app.search_backspace(),
                        SearchInput::Leave => app.input_mode = InputMode::Browse,
                    }
                }
            }
            InputMode::Browse => {
                if let Some(action) = map_key(key) {
                    return handle_action(app, catalog, resolver, events, action);
                }
            }
        },
        TuiEvent::PageLoaded { page, outcome } => {
            if app.gallery.apply_page(page, outcome) {
                app.clamp_cursor();
                if let PageLoad::Failed(error) = app.gallery.load() {
                    let message = format!("Page {} failed: {}", page, error);
                    app.notify(NotificationLevel::Error, message);
                }
            }
        }
        TuiEvent::HomeworldResolved {
            generation,
            outcome,
        } => {
            // Stale generations are discarded inside the gallery.
            let _ = app.gallery.apply_homeworld(generation, outcome);
        }
        TuiEvent::Resize { .. } | TuiEvent::Tick => {}
    }
    false
}

fn handle_action(
    app: &mut App,
    catalog: &Arc<CatalogService>,
    resolver: &Arc<HomeworldResolver>,
    events: &mpsc::Sender<TuiEvent>,
    action: Action,
) -> bool {
    match action {
        Action::Quit => return true,
        Action::MoveDown => app.move_cursor_down(),
        Action::MoveUp => app.move_cursor_up(),
        Action::NextPage => {
            let target = app.gallery.current_page().saturating_add(1);
            change_page(app, catalog, events, target);
        }
        Action::PrevPage => {
            let current = app.gallery.current_page();
            if current > 1 {
                change_page(app, catalog, events, current - 1);
            }
        }
        Action::Select => {
            if let Some(character) = app.cursor_character() {
                if let Some(ticket) = app.gallery.select(character) {
                    spawn_homeworld_fetch(Arc::clone(resolver), ticket, events.clone());
                }
            }
        }
        Action::Dismiss => {
            if app.gallery.session().selected().is_some() {
                app.gallery.dismiss();
            }
        }
        Action::OpenSearch => app.input_mode = InputMode::Search,
        Action::CycleFilter => {
            let next = app.gallery.filters().filter_mode.next();
            app.gallery.set_filter_mode(next);
            app.clamp_cursor();
        }
        Action::Refresh => {
            let current = app.gallery.current_page();
            change_page(app, catalog, events, current);
        }
    }
    false
}

/// Navigation clamps at the edges: a target outside the known range is a
/// no-op rather than an error surfaced to the user.
fn change_page(
    app: &mut App,
    catalog: &Arc<CatalogService>,
    events: &mpsc::Sender<TuiEvent>,
    target: u32,
) {
    if target == 0 {
        return;
    }
    if let Some(total) = app.gallery.total_pages() {
        if target > total {
            return;
        }
    }
    match app.gallery.request_page(target) {
        Ok(request) => {
            app.cursor = 0;
            spawn_page_fetch(Arc::clone(catalog), request, events.clone());
        }
        Err(err) => app.notify(NotificationLevel::Error, err.to_string()),
    }
}
