use std::io::{stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tokio::sync::mpsc::UnboundedSender;
use tracing::info;

use crate::error::AppResult;
use crate::ui::{Control, Presenter, Round, Slot};

pub static INPUT_BUFFER: RwLock<String> = RwLock::new(String::new());

pub static TERMINAL_CLOSED: AtomicBool = AtomicBool::new(false);

pub const PROMPT: &[u8] = b">> ";

/// Terminal implementation of the presenter port. Messages go through the
/// logging layer so the prompt and any half-typed input are redrawn under
/// each line.
pub struct TerminalPresenter {
    pending: String,
    guess_enabled: bool,
    restart_enabled: bool,
    speech: Option<UnboundedSender<String>>,
}

impl TerminalPresenter {
    pub fn new(speech: Option<UnboundedSender<String>>) -> Self {
        Self {
            pending: String::new(),
            guess_enabled: false,
            restart_enabled: false,
            speech,
        }
    }

    pub fn control_enabled(&self, control: Control) -> bool {
        match control {
            Control::Guess => self.guess_enabled,
            Control::Restart => self.restart_enabled,
        }
    }

    pub fn set_pending(&mut self, raw: String) {
        self.pending = raw;
    }
}

impl Presenter for TerminalPresenter {
    fn display(&mut self, slot: Slot, text: &str) {
        match slot {
            Slot::Headline => info!("== {} ==", text),
            Slot::Detail => info!("{}", text),
        }

        if let Some(tx) = &self.speech {
            let _ = tx.send(text.to_owned());
        }
    }

    fn read_guess(&self) -> String {
        self.pending.clone()
    }

    fn clear_guess(&mut self) {
        self.pending.clear();
    }

    fn set_control(&mut self, control: Control, enabled: bool) {
        match control {
            Control::Guess => self.guess_enabled = enabled,
            Control::Restart => self.restart_enabled = enabled,
        }
    }
}

/// Runs the interactive loop until the player leaves. Characters and
/// backspace edit the shared input buffer; Enter submits the line as a
/// command or a guess.
pub fn start_read_input(round: &mut Round<TerminalPresenter>) -> AppResult<()> {
    enable_raw_mode()?;

    while let Ok(e) = event::read() {
        let k = match e {
            Event::Key(k) if k.kind != KeyEventKind::Release => k,
            _ => continue,
        };

        match k.code {
            KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                info!("Leaving the game");
                break;
            }
            KeyCode::Char(c) => {
                INPUT_BUFFER.write()?.push(c);
                let mut stdout = stdout().lock();
                let mut buf = [0u8; 4];
                stdout.write_all(c.encode_utf8(&mut buf).as_bytes())?;
                stdout.flush()?;
            }
            KeyCode::Backspace => {
                if INPUT_BUFFER.write()?.pop().is_some() {
                    let mut stdout = stdout().lock();
                    stdout.write_all(&[8, b' ', 8])?;
                    stdout.flush()?;
                }
            }
            KeyCode::Enter => {
                let input = {
                    let mut wl = INPUT_BUFFER.write()?;
                    let s = wl.clone();
                    wl.clear();
                    s
                };

                let mut stdout = stdout().lock();
                stdout.write_all(b"\n")?;
                stdout.flush()?;

                let cmd = input.trim();
                match cmd {
                    "" => {
                        stdout.write_all(PROMPT)?;
                        stdout.flush()?;
                    }
                    "help" | "?" | "h" => {
                        static INFOS: &[&str] = &[
                            "help: show this help",
                            "new: start a new round",
                            "exit: leave the game",
                            "anything else counts as a guess",
                        ];

                        let mut s = String::from('\n');
                        for &info in INFOS {
                            s.push_str(info);
                            s.push('\n');
                        }
                        s.pop();
                        info!("{}", s);
                    }
                    "exit" | "quit" | "stop" | "e" => {
                        info!("Leaving the game");
                        break;
                    }
                    "new" | "again" | "restart" => {
                        if round.presenter().control_enabled(Control::Restart) {
                            round.restart();
                        } else {
                            info!("The round is still running, finish it first");
                        }
                    }
                    guess => {
                        if round.presenter().control_enabled(Control::Guess) {
                            round.presenter_mut().set_pending(guess.to_owned());
                            round.submit();
                        } else {
                            info!("The round is over, type 'new' to play again");
                        }
                    }
                }
            }
            _ => {}
        }
    }

    disable_raw_mode()?;
    TERMINAL_CLOSED.store(true, Ordering::Relaxed);

    Ok(())
}
