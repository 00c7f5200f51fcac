use crate::config::Config;
use crate::events::submission::{Event as SubmissionEvent, Handler as SubmissionEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::LogBuffer;
use crate::state::State;
use crate::transport::SimulatedSubmitter;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type SubmissionEventSender = std::sync::mpsc::Sender<SubmissionEvent>;
type SubmissionEventReceiver = std::sync::mpsc::Receiver<SubmissionEvent>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config, log_buffer: LogBuffer) -> Result<()> {
        info!("Starting application...");
        let (tx, rx) = std::sync::mpsc::channel::<SubmissionEvent>();
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', falling back to the default.",
                config.theme_name
            );
            Theme::default()
        });
        let state = State::new(
            tx,
            log_buffer,
            theme,
            config.hotkeys.clone(),
            config.notification_ttl(),
        );
        let mut app = App {
            state: Arc::new(Mutex::new(state)),
            config,
        };
        app.start_submission(rx);
        app.start_ui().await?;
        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread that hands submissions to the submitter.
    ///
    fn start_submission(&self, receiver: SubmissionEventReceiver) {
        debug!("Creating new thread for asynchronous submission...");
        let cloned_state = Arc::clone(&self.state);
        let submitter =
            SimulatedSubmitter::new(self.config.submit_delay(), self.config.failure_rate);
        std::thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("Failed to build submission runtime: {}", e);
                    return;
                }
            };
            runtime.block_on(async {
                let mut handler = SubmissionEventHandler::new(&cloned_state, &submitter);
                while let Ok(event) = receiver.recv() {
                    if let Err(e) = handler.handle(event).await {
                        error!("Failed to handle submission event: {}", e);
                    }
                }
            })
        });
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run(&mut terminal).await;

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        terminal.show_cursor()?;

        result
    }

    async fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            if let Ok(size) = terminal.size() {
                state.set_terminal_size(size);
            };
            terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}
