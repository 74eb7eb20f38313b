use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use client_logging::{client_info, client_warn};
use lecture_core::{Artifact, Notification, ValidationError};

use super::commands::{self, Command, HELP};
use super::config::ClientConfig;
use super::controller::Controller;
use super::render;

const TICK: Duration = Duration::from_millis(75);

pub fn run_app(config: &ClientConfig) -> Result<()> {
    let settings = config.service_settings();
    client_info!(
        "Starting against {} (submit timeout {:?}, ask timeout {:?})",
        settings.base_url,
        settings.submit_timeout,
        settings.ask_timeout
    );
    let mut controller = Controller::new(settings).context("failed to start engine")?;

    // Stdin is read on its own thread so completions keep flowing while the
    // user is typing.
    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    client_warn!("stdin read failed: {}", err);
                    break;
                }
            }
        }
    });

    println!("AI Lecture Summary. Type `help` for commands.");
    prompt()?;

    loop {
        match line_rx.recv_timeout(TICK) {
            Ok(line) => {
                match commands::parse(&line) {
                    None => {}
                    Some(Err(err)) => println!("{err}"),
                    Some(Ok(Command::Quit)) => {
                        if controller.is_busy() {
                            client_warn!("Quitting with a request still in flight");
                        }
                        break;
                    }
                    Some(Ok(Command::Help)) => println!("{HELP}"),
                    Some(Ok(Command::Show)) => {
                        controller.take_dirty();
                        println!("{}", render::full(&controller.view()));
                    }
                    Some(Ok(command)) => execute(&mut controller, command),
                }
                print_if_dirty(&mut controller);
                prompt()?;
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                if controller.pump() > 0 && print_if_dirty(&mut controller) {
                    prompt()?;
                }
            }
            // stdin closed: let outstanding requests finish, then leave.
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                let budget = config.service_settings().submit_timeout + Duration::from_secs(5);
                if !controller.wait_idle(budget) {
                    client_warn!("Gave up waiting for the server");
                }
                // Clipboard completions do not count as busy.
                while controller.wait_next(Duration::from_millis(200)) {}
                print_if_dirty(&mut controller);
                break;
            }
        }
    }

    client_info!("Exiting");
    Ok(())
}

fn execute(controller: &mut Controller, command: Command) {
    match command {
        Command::Select(path) => match read_artifact(&path) {
            Ok(artifact) => controller.select_artifact(artifact),
            Err(err) => {
                client_warn!("{:#}", err);
                controller.notify(Notification::error(format!("{err:#}")));
            }
        },
        Command::Youtube(url) => {
            // Rejections surface through the notification.
            let _ = controller.select_youtube(&url);
        }
        Command::Submit => {
            // A missing artifact already shows up as a notification.
            if let Err(err @ ValidationError::UploadPending) = controller.submit() {
                println!("{err}");
            }
        }
        Command::Ask(question) => match controller.ask(&question) {
            Ok(()) => {}
            Err(ValidationError::EmptyQuestion) => println!("Type a question after `ask`."),
            Err(err) => println!("{err}"),
        },
        Command::Copy(target) => controller.copy_target(target),
        Command::Dismiss => controller.dismiss(),
        Command::Reset => controller.reset(),
        Command::Show | Command::Help | Command::Quit => {}
    }
}

fn read_artifact(path: &Path) -> Result<Artifact> {
    let bytes = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Artifact::audio(name, bytes))
}

fn print_if_dirty(controller: &mut Controller) -> bool {
    if !controller.take_dirty() {
        return false;
    }
    let view = controller.view();
    println!();
    if view.result.is_some() && !view.asking && view.phase == lecture_core::UploadPhase::Ready {
        println!("{}", render::full(&view));
    } else {
        println!("{}", render::status_line(&view));
        if let Some(text) = render::notification(&view) {
            println!("{text}");
        }
    }
    true
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush().context("failed to flush stdout")
}
