use std::error::Error;

use tracing::info;

use secret_number::config::log::LogConfig;
use secret_number::config::speech::SpeechConfig;
use secret_number::config::{log, speech, ConfigFile};
use secret_number::game::UPPER_BOUND;
use secret_number::service::log::init_logger;
use secret_number::service::speech::SpeechService;
use secret_number::terminal::{start_read_input, TerminalPresenter};
use secret_number::ui::Round;
use secret_number::App;

type MainResult = Result<(), Box<dyn Error>>;

static WELCOME_INFO: &str = include_str!(concat!(env!("OUT_DIR"), "/welcome_info"));

fn main() -> MainResult {
    let log_config: LogConfig = ConfigFile::new("log", log::DEFAULT_CONFIG).read();
    let _log_guards = init_logger(&log_config);

    for line in WELCOME_INFO.lines() {
        info!("{}", line);
    }

    let app = App::new();

    let speech_config: SpeechConfig = ConfigFile::new("speech", speech::DEFAULT_CONFIG).read();
    let speech = if speech_config.enabled {
        Some(SpeechService::start(&app.runtime, speech_config))
    } else {
        None
    };

    let presenter = TerminalPresenter::new(speech.as_ref().map(SpeechService::sender));
    let mut round = Round::new(UPPER_BOUND, presenter);
    round.start();

    start_read_input(&mut round)?;

    Ok(())
}
