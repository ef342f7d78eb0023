//! Optional hook configuration, read from a JSON file.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    pub hooks: Hooks,
}

/// Shell commands fired at countdown lifecycle points. Entries that are
/// missing, empty, or start with '#' are skipped.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Hooks {
    pub start: Option<String>,
    pub expire: Option<String>,
    pub interrupt: Option<String>,
}

impl Config {
    fn empty() -> Self {
        Config {
            hooks: Hooks {
                start: None,
                expire: None,
                interrupt: None,
            },
        }
    }
}

/// Loads the config file, creating one with commented-out examples on first
/// run. Any failure degrades to defaults with a warning; configuration is
/// never fatal.
pub fn load_config() -> Config {
    let config_path = get_config_path();

    if config_path.exists() {
        let config_content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(_) => {
                eprintln!("Warning: Could not read config file, using defaults");
                return Config::empty();
            }
        };

        serde_json::from_str(&config_content).unwrap_or_else(|_| {
            eprintln!("Warning: Invalid config format, using defaults");
            Config::empty()
        })
    } else {
        if let Some(parent) = config_path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        create_default_config(&config_path)
    }
}

fn get_config_path() -> PathBuf {
    if let Some(home) = env::var_os("HOME") {
        PathBuf::from(home)
            .join(".config")
            .join("termcd")
            .join("config.json")
    } else {
        PathBuf::from("termcd-config.json")
    }
}

fn create_default_config(config_path: &PathBuf) -> Config {
    let default_config = Config {
        hooks: Hooks {
            start: Some("# afplay ~/Music/tick.mp3 &".to_string()),
            expire: Some("# pkill afplay".to_string()),
            interrupt: Some("# pkill afplay".to_string()),
        },
    };

    if let Ok(config_json) = serde_json::to_string_pretty(&default_config) {
        let _ = fs::write(config_path, config_json);
    }
    default_config
}

/// Fire-and-forget hook dispatch through the shell.
pub fn execute_hook(hook: &Option<String>) {
    if let Some(command) = hook {
        if hook_enabled(command) {
            let _ = Command::new("sh").arg("-c").arg(command).spawn();
        }
    }
}

fn hook_enabled(command: &str) -> bool {
    let command = command.trim();
    !command.is_empty() && !command.starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commented_and_empty_hooks_are_skipped() {
        assert!(!hook_enabled("# afplay ~/Music/tick.mp3 &"));
        assert!(!hook_enabled("  # spaced out comment"));
        assert!(!hook_enabled(""));
        assert!(!hook_enabled("   "));
        assert!(hook_enabled("pkill afplay"));
    }

    #[cfg(unix)]
    #[test]
    fn enabled_hook_runs_through_the_shell() {
        let marker = env::temp_dir().join(format!("termcd-hook-test-{}", std::process::id()));
        let _ = fs::remove_file(&marker);

        execute_hook(&Some(format!("touch {}", marker.display())));

        // Dispatch is fire-and-forget; poll briefly for the shell to run.
        for _ in 0..50 {
            if marker.exists() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(20));
        }
        assert!(marker.exists());
        let _ = fs::remove_file(&marker);
    }

    #[test]
    fn parses_a_full_hook_config() {
        let config: Config = serde_json::from_str(
            r#"{"hooks": {"start": "echo go", "expire": "echo done", "interrupt": null}}"#,
        )
        .unwrap();
        assert_eq!(config.hooks.start.as_deref(), Some("echo go"));
        assert_eq!(config.hooks.expire.as_deref(), Some("echo done"));
        assert_eq!(config.hooks.interrupt, None);
    }

    #[test]
    fn missing_hook_keys_default_to_none() {
        let config: Config = serde_json::from_str(r#"{"hooks": {}}"#).unwrap();
        assert_eq!(config.hooks.start, None);
        assert_eq!(config.hooks.expire, None);
        assert_eq!(config.hooks.interrupt, None);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = serde_json::to_string(&Config::empty()).unwrap();
        let config: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config.hooks.start, None);
    }
}
