//! TUI application state and event loop.
//!
//! [`App`] wraps a [`ShellSession`] and connects it to the outside world:
//!
//! - **Key handling**: turns [`Action`]s into session transitions
//! - **Background refresh**: every closed→open transition spawns a fetch on the tokio
//!   runtime; results come back over a channel tagged with their [`RefreshTicket`]
//! - **Dirty state tracking**: the UI is redrawn only when state changes, plus a periodic
//!   redraw so resizes and relative timestamps stay current
//!
//! The loop itself stays synchronous. Only the fetches run on the runtime.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{debug, info};

use super::events::{Action, poll_event};
use super::rendering::render_ui;
use crate::api::{FetchError, FetchedRecords, RecordSource, fetch_all};
use crate::shell::{RefreshOutcome, RefreshTicket, ShellSession, SubmitOutcome};

/// Redraw at least this often even when nothing changed
const REDRAW_INTERVAL: Duration = Duration::from_millis(100);
/// How long one poll for keyboard input blocks
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

type RefreshResult = (RefreshTicket, Result<FetchedRecords, FetchError>);

pub struct App {
    session: ShellSession,
    source: Arc<dyn RecordSource>,
    runtime: Handle,
    refresh_tx: UnboundedSender<RefreshResult>,
    refresh_rx: UnboundedReceiver<RefreshResult>,
    should_quit: bool,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(session: ShellSession, source: Arc<dyn RecordSource>, runtime: Handle) -> Self {
        let (refresh_tx, refresh_rx) = unbounded_channel();
        Self {
            session,
            source,
            runtime,
            refresh_tx,
            refresh_rx,
            should_quit: false,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    pub fn session(&self) -> &ShellSession {
        &self.session
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.drain_refresh_results();

            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= REDRAW_INTERVAL {
                terminal.draw(|f| render_ui(f, &self.session))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(POLL_TIMEOUT, self.session.is_open())?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Apply every fetch that has finished since the last call. Returns how many were
    /// applied (stale ones included).
    fn drain_refresh_results(&mut self) -> usize {
        let mut drained = 0;
        while let Ok((ticket, result)) = self.refresh_rx.try_recv() {
            let outcome = self.session.apply_refresh(ticket, result);
            if outcome != RefreshOutcome::Stale {
                self.needs_redraw = true;
            }
            drained += 1;
        }
        drained
    }

    fn spawn_refresh(&self, ticket: RefreshTicket) {
        debug!(sequence = ticket.sequence(), "spawning record refresh");
        let source = Arc::clone(&self.source);
        let tx = self.refresh_tx.clone();
        self.runtime.spawn(async move {
            let result = fetch_all(source.as_ref()).await;
            // Receiver is gone only when the app has exited
            let _ = tx.send((ticket, result));
        });
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::OpenShell => {
                if let Some(ticket) = self.session.open() {
                    info!("shell opened");
                    self.spawn_refresh(ticket);
                    self.needs_redraw = true;
                }
            }
            Action::CloseShell => {
                if self.session.is_open() {
                    self.session.close();
                    self.needs_redraw = true;
                }
            }
            Action::Submit => {
                if let SubmitOutcome::Executed(builtin) = self.session.submit_input() {
                    debug!(command = builtin.name(), "command executed");
                }
                self.needs_redraw = true;
            }
            Action::HistoryUp => {
                self.session.history_up();
                self.needs_redraw = true;
            }
            Action::HistoryDown => {
                self.session.history_down();
                self.needs_redraw = true;
            }
            Action::InsertChar(c) => {
                self.session.push_char(c);
                self.needs_redraw = true;
            }
            Action::DeleteChar => {
                self.session.pop_char();
                self.needs_redraw = true;
            }
            Action::None => {}
        }
    }
}
