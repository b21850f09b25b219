use resume::adapters::{BundledDataFetcher, RemoteDataFetcher, ReqwestHttpClient};
use resume::cli::{parse_args, run_cli_command, USAGE};
use resume::config::{DocumentSource, ResumeConfig};
use resume::events::SizeCategoryNotifier;
use resume::logging;
use resume::theme::{self, DefaultTheme, ThemeChoice};
use resume::traits::DataFetcher;
use resume::ui::{self, action_for_key, action_for_mouse, ResumeScreen, ScreenAction};
use resume::view_model::{DescribedViewModel, ViewBindings};

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::Arc;

fn main() -> Result<()> {
    // Handle --version / --help before touching the terminal
    let options = match parse_args(std::env::args()) {
        Ok(command) => match run_cli_command(command) {
            Some(options) => options,
            None => return Ok(()),
        },
        Err(err) => {
            eprintln!("resume: {}\n\n{}", err, USAGE);
            std::process::exit(2);
        }
    };

    color_eyre::install()?;

    let config = options.apply(ResumeConfig::from_env());
    logging::init(&config);
    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }
    tracing::info!(source = %config.source, theme = ?config.theme, "Starting");

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config))
}

fn build_fetcher(source: &DocumentSource) -> Arc<dyn DataFetcher> {
    match source {
        DocumentSource::Remote { url } => Arc::new(RemoteDataFetcher::new(
            Arc::new(ReqwestHttpClient::new()),
            url.clone(),
        )),
        DocumentSource::Bundled { path } => Arc::new(BundledDataFetcher::new(path.clone())),
    }
}

async fn run(config: ResumeConfig) -> Result<()> {
    let fetcher = build_fetcher(&config.source);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    // Mouse capture is only used for the scroll wheel
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, fetcher, config.theme).await;

    restore_terminal(&mut terminal)?;
    if let Err(err) = &result {
        tracing::error!("Exited with error: {:?}", err);
    }
    result
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, Show);
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn bindings_for(screen: &Rc<RefCell<ResumeScreen>>) -> ViewBindings {
    let on_theme = Rc::clone(screen);
    let on_content = Rc::clone(screen);
    let on_failure = Rc::clone(screen);

    ViewBindings::new()
        .on_theme_did_change(move |theme| on_theme.borrow_mut().set_theme(theme))
        .on_content_view_did_change(move |element| on_content.borrow_mut().set_content(element))
        .on_content_load_did_fail(move |err| {
            on_failure
                .borrow_mut()
                .set_load_error(format!("{}\n{}", err.user_message(), err.recovery_hint()))
        })
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    fetcher: Arc<dyn DataFetcher>,
    initial_theme: ThemeChoice,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let screen = Rc::new(RefCell::new(ResumeScreen::new(Arc::new(DefaultTheme))));
    let notifier = SizeCategoryNotifier::new();

    let mut view_model = DescribedViewModel::new(bindings_for(&screen), fetcher, &notifier);
    if initial_theme != ThemeChoice::Default {
        view_model.set_theme(initial_theme.theme());
    }

    let mut event_stream = EventStream::new();

    // Take the message receiver from the view model (we need ownership for select!)
    let mut message_rx = view_model.take_message_receiver();

    loop {
        {
            let mut screen = screen.borrow_mut();
            if screen.should_quit {
                return Ok(());
            }
            if screen.needs_redraw {
                terminal.draw(|f| ui::render(f, &mut screen))?;
                screen.needs_redraw = false;
            }
        }

        tokio::select! {
            event_result = event_stream.next() => {
                let event = match event_result {
                    Some(Ok(event)) => event,
                    Some(Err(err)) => return Err(err.into()),
                    None => return Ok(()),
                };
                let action = match event {
                    Event::Resize(width, height) => {
                        tracing::debug!(width, height, "Terminal resized");
                        screen.borrow_mut().mark_dirty();
                        notifier.post();
                        None
                    }
                    Event::Key(key) if key.kind == KeyEventKind::Press => action_for_key(key),
                    Event::Mouse(mouse) => action_for_mouse(mouse),
                    _ => None,
                };
                if let Some(action) = action {
                    apply_action(action, &mut view_model, &screen);
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    view_model.handle_message(msg);
                }
            }
        }
    }
}

fn apply_action(
    action: ScreenAction,
    view_model: &mut DescribedViewModel,
    screen: &RefCell<ResumeScreen>,
) {
    match action {
        ScreenAction::ToggleTheme => {
            let next = theme::toggle(view_model.theme().as_ref());
            view_model.set_theme(next);
        }
        ScreenAction::Quit => screen.borrow_mut().should_quit = true,
        ScreenAction::ScrollDown => screen.borrow_mut().scroll_down(),
        ScreenAction::ScrollUp => screen.borrow_mut().scroll_up(),
        ScreenAction::PageDown => screen.borrow_mut().page_down(),
        ScreenAction::PageUp => screen.borrow_mut().page_up(),
        ScreenAction::ScrollToTop => screen.borrow_mut().scroll_to_top(),
    }
}
