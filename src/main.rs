use std::io::{Stdout, stdout};
use std::process::ExitCode;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use financescope::app::App;
use financescope::config::{self, Environment, ScopeConfig};
use financescope::input::handle_events;
use financescope::{gate, ui};

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let backend = CrosstermBackend::new(out);
        let terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let mut out = stdout();
                let _ = execute!(out, LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    config::load_dotenv();
    let environment = Environment::from_process();
    let settings = ScopeConfig::load();

    let key = match gate::check_credential(gate::CREDENTIAL_VAR, &environment, settings.as_ref()) {
        Ok(key) => key,
        Err(err) => {
            // Stay out of the alternate screen so the report survives
            // process exit.
            eprint!("{}", ui::halt_report(&err));
            return ExitCode::FAILURE;
        }
    };

    let mut app = App::new(key);
    let result = match TerminalSession::new() {
        Ok(mut session) => run_app(&mut session.terminal, &mut app),
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if handle_events(app)? {
            return Ok(());
        }
    }
}
