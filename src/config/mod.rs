use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::error;

pub mod log;
pub mod speech;

const CONFIG_PATH: &str = "config";

pub fn config_dir_path() -> &'static PathBuf {
    static PATH: OnceLock<PathBuf> = OnceLock::new();
    PATH.get_or_init(|| {
        let p = PathBuf::from(CONFIG_PATH);
        let _ = fs::create_dir(&p);
        p
    })
}

/// A typed TOML config file with embedded defaults. Missing files are
/// created from the embedded bytes; files that fail to parse are backed
/// up to `<name>.toml.bak` and replaced with the defaults.
pub struct ConfigFile<T> {
    path: PathBuf,
    name: &'static str,
    default_config: &'static [u8],
    _mark: PhantomData<T>,
}

impl<T> ConfigFile<T>
where
    for<'a> T: Serialize + Deserialize<'a>,
    T: Default,
{
    pub fn new(name: &'static str, default: &'static [u8]) -> Self {
        Self {
            path: config_dir_path().join(format!("{name}.toml")),
            name,
            default_config: default,
            _mark: PhantomData,
        }
    }

    pub fn read(&self) -> T {
        if self.path.is_file() {
            match fs::read(&self.path) {
                Ok(file) => toml::from_slice(&file).unwrap_or_else(|e| {
                    error!("cannot parse config file {}.toml: {}", self.name, e);
                    let mut path = self.path.clone();
                    path.pop();
                    let mut name = self.name.to_owned();
                    name.push_str(".toml.bak");
                    path.push(name);
                    let _ = fs::copy(&self.path, path);
                    self.write_default()
                }),
                Err(e) => {
                    error!("cannot read config file {}.toml: {}", self.name, e);
                    self.write_default()
                }
            }
        } else {
            self.write_default()
        }
    }

    fn write_default(&self) -> T {
        let _ = fs::write(&self.path, self.default_config);
        T::default()
    }
}
