use tokio::process::Command;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing::warn;

use crate::config::speech::SpeechConfig;

/// Speaks game messages through an external text-to-speech program, one
/// at a time on a runtime worker. A program that cannot be spawned stops
/// the worker; the game itself is never affected.
pub struct SpeechService {
    tx: mpsc::UnboundedSender<String>,
}

impl SpeechService {
    pub fn start(runtime: &Runtime, config: SpeechConfig) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();

        let program = config.program().to_owned();
        let args = config.args;
        runtime.spawn(async move {
            while let Some(text) = rx.recv().await {
                match Command::new(&program).args(&args).arg(&text).spawn() {
                    Ok(mut child) => {
                        let _ = child.wait().await;
                    }
                    Err(e) => {
                        warn!("cannot run speech program '{}': {}", program, e);
                        break;
                    }
                }
            }
        });

        Self { tx }
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<String> {
        self.tx.clone()
    }
}
