use std::{error::Error, fs, io};

use serde::Deserialize;

const SETTINGS_FILENAME: &str = "settings.json";

/// Process configuration, read from `settings.json` in the working
/// directory. A missing file means defaults; a malformed one is a
/// startup error.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tcp_socket_binding: String,
    pub tcp_socket_port: u16,
    pub database_path: String,
    pub static_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            tcp_socket_binding: "0.0.0.0".to_string(),
            tcp_socket_port: 3000,
            database_path: "tasks.redb".to_string(),
            static_dir: "static".to_string(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Settings, Box<dyn Error>> {
        match fs::read_to_string(SETTINGS_FILENAME) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Settings::default()),
            Err(e) => Err(e.into()),
        }
    }
}
