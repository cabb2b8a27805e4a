use tokio::runtime;
use tokio::runtime::Runtime;

pub mod config;
pub mod error;
pub mod game;
pub mod service;
pub mod terminal;
pub mod ui;

pub struct App {
    pub runtime: Runtime,
}

impl App {
    pub fn new() -> Self {
        let runtime = runtime::Builder::new_multi_thread()
            .thread_name("GlobalRuntime")
            .enable_all()
            .build()
            .unwrap();

        Self { runtime }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
