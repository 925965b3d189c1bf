use clap::Parser;
use tokio::io::BufReader;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use vfs_shell::config::{Cli, Settings};
use vfs_shell::interpreter::Interpreter;
use vfs_shell::shell::{
    forward_input, load_startup_script, select_backend, Session, SessionEvent, TerminalConsole,
};

const EVENT_QUEUE_DEPTH: usize = 32;

fn setup_tracing(cli: &Cli) {
    if let Some(level) = cli.log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .without_time()
            .compact()
            .with_writer(std::io::stderr)
            .init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    setup_tracing(&cli);

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    debug!("Settings: {:?}", settings);

    let mut console = TerminalConsole::stdout();
    let fs = select_backend(&settings, &mut console).await;
    let script = load_startup_script(&settings, &mut console).await;

    let (tx, rx) = mpsc::channel(EVENT_QUEUE_DEPTH);
    // Input stays refused until a queued script has finished.
    let (gate_tx, gate_rx) = watch::channel(script.is_none());
    if let Some(script) = script {
        if tx.send(SessionEvent::RunScript(script)).await.is_err() {
            debug!("Session closed before the startup script was queued");
        }
    }

    tokio::spawn(forward_input(BufReader::new(tokio::io::stdin()), tx, gate_rx));

    let session = Session::new(Interpreter::new(fs), console).with_input_gate(gate_tx);
    session.run(rx).await;
    info!("Shutting down");

    // The stdin reader may still be parked on a read.
    std::process::exit(0);
}
