use serde::Deserialize;
use std::env;
use std::error::Error;
use std::fs::{read_to_string, write};
use std::path::PathBuf;

fn main() {
    _main().unwrap();
}

#[derive(Deserialize)]
struct CargoConfig {
    package: Package,
}

#[derive(Deserialize)]
struct Package {
    version: String,
}

fn _main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=resources/welcome.txt");

    let welcome_info = read_to_string("resources/welcome.txt")?;
    let cargo = read_to_string("Cargo.toml")?;
    let config: CargoConfig = toml::from_str(&cargo)?;

    let env = env::var_os("OUT_DIR").unwrap();
    let mut path = PathBuf::from(env);
    path.push("welcome_info");

    write(
        path,
        welcome_info.replace("${{version}}", &config.package.version),
    )?;

    Ok(())
}
