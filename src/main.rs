use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use formwiz::app::{App, AppMessage};
use formwiz::cli::{api_override, parse_args, run_cli_command, CliCommand};
use formwiz::startup::{build_client, init_logging, FormsConfig};
use formwiz::terminal::{setup_panic_hook, TerminalManager};
use formwiz::ui;

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    let mut config = FormsConfig::from_env();
    if let Some(url) = api_override(&command) {
        config = config.with_api_url(url);
    }

    if let Some(result) = run_cli_command(&command, &config) {
        return result;
    }
    let CliCommand::Fill { form_id, .. } = command else {
        return Ok(());
    };

    let log_path = init_logging(&config);
    tracing::info!(
        "formwiz {} starting for form {} against {}",
        formwiz::cli::VERSION,
        form_id,
        config.api_url
    );

    let client = build_client(&config)?;

    // Restores the terminal before color-eyre prints the panic.
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(async {
        let mut manager = TerminalManager::new()?;
        let mut app = App::new(form_id, client);
        app.start_loading();
        let result = run_app(manager.terminal(), &mut app).await;
        manager.restore()?;
        result
    });

    if let Err(e) = &result {
        tracing::error!("formwiz exited with error: {}", e);
        if let Some(path) = log_path {
            eprintln!("Log written to {}", path.display());
        }
    }
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Owned here so select! can borrow it alongside `app`.
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
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
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
