use crate::*;
use std::{
    env, fs,
    io::Error,
    path::{Path, PathBuf},
};


/// Read text file contents
pub fn read_text_file(name: impl AsRef<Path>) -> Result<String, Error> {
    fs::read_to_string(name)
}


/// Resolve application config directory from given XDG_CONFIG_HOME and HOME values
pub fn config_dir_from(
    xdg_config_home: Option<String>,
    home: Option<String>,
) -> Result<PathBuf, ExpiryError> {
    let config_home = match xdg_config_home.filter(|value| !value.is_empty()) {
        Some(config_home) => PathBuf::from(config_home),
        None => {
            home.filter(|value| !value.is_empty())
                .map(|home| Path::new(&home).join(".config"))
                .ok_or(ExpiryError::NoHomeDirectory)?
        }
    };
    Ok(config_home.join(APP_NAME))
}


/// Application config directory following the XDG Base Directory Specification
pub fn config_dir() -> Result<PathBuf, ExpiryError> {
    config_dir_from(env::var("XDG_CONFIG_HOME").ok(), env::var("HOME").ok())
}


/// Default domain list path: $XDG_CONFIG_HOME/expirybot/expirybot.conf
pub fn domains_file_path() -> Result<PathBuf, ExpiryError> {
    config_dir().map(|dir| dir.join(DOMAINS_FILE_NAME))
}


/// Optional settings path: $XDG_CONFIG_HOME/expirybot/expirybot.json
pub fn settings_file_path() -> Result<PathBuf, ExpiryError> {
    config_dir().map(|dir| dir.join(SETTINGS_FILE_NAME))
}
