//! Session Loop
//!
//! One task owns the interpreter, the backend and the console. Interactive
//! lines and script runs arrive as messages on a channel and are handled one
//! at a time, so no two dispatches ever touch the cursor or the output at
//! once. Input is refused for the whole of a script run: the session closes a
//! shared gate and the input reader drops lines while it is closed.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use crate::interpreter::{Interpreter, Outcome};
use crate::shell::console::Console;
use crate::shell::script::Script;

/// Work delivered to the session
#[derive(Debug)]
pub enum SessionEvent {
    /// A completed line of interactive input
    Line(String),
    /// A batch to run without interleaving interactive input
    RunScript(Script),
}

pub struct Session<C: Console> {
    interpreter: Interpreter,
    console: C,
    input_gate: Option<watch::Sender<bool>>,
}

impl<C: Console> Session<C> {
    pub fn new(interpreter: Interpreter, console: C) -> Self {
        Self {
            interpreter,
            console,
            input_gate: None,
        }
    }

    /// Share input acceptance with an input reader (see [`forward_input`]).
    pub fn with_input_gate(mut self, gate: watch::Sender<bool>) -> Self {
        self.input_gate = Some(gate);
        self
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Show the initial label and prompt.
    pub async fn start(&mut self) {
        if let Some(gate) = &self.input_gate {
            let enabled = *gate.borrow();
            self.console.set_input_enabled(enabled);
        }
        let label = self.interpreter.label().await;
        self.console.set_label(&label);
        self.console.finish_dispatch();
    }

    /// Handle one event.
    pub async fn handle(&mut self, event: SessionEvent) -> Outcome {
        match event {
            SessionEvent::Line(line) => self.interpreter.dispatch(&line, &mut self.console).await,
            SessionEvent::RunScript(mut script) => {
                self.set_input_enabled(false);
                let outcome = script.run(&self.interpreter, &mut self.console).await;
                self.set_input_enabled(true);
                if outcome == Outcome::Continue {
                    self.console.finish_dispatch();
                }
                outcome
            }
        }
    }

    /// Process events until `exit` or until every sender is gone. Returns the console.
    pub async fn run(mut self, mut events: mpsc::Receiver<SessionEvent>) -> C {
        self.start().await;
        while let Some(event) = events.recv().await {
            debug!("Session event: {:?}", event);
            if self.handle(event).await == Outcome::Exit {
                info!("Session exited");
                break;
            }
        }
        self.console
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.console.set_input_enabled(enabled);
        if let Some(gate) = &self.input_gate {
            gate.send_replace(enabled);
        }
    }
}

/// Turn input lines into session events. Lines read while the gate is closed
/// are dropped. Returns when input ends or the session is gone.
pub async fn forward_input<R>(reader: R, events: mpsc::Sender<SessionEvent>, gate: watch::Receiver<bool>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let accepted = *gate.borrow();
        if !accepted {
            debug!("Input refused during script: {}", line);
            continue;
        }
        if events.send(SessionEvent::Line(line)).await.is_err() {
            break;
        }
    }
    debug!("Input closed");
}
