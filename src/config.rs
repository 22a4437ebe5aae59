use super::{
    common::{DEFAULT_PREFIX, DEFAULT_TICK_MS},
    metro::interval_from_bpm,
};
use std::{path::PathBuf, str::FromStr, time::Duration};

pub const TICK_MS_VAR: &str = "GRID_SEQ_TICK_MS";
pub const BPM_VAR: &str = "GRID_SEQ_BPM";
pub const SAMPLE_VAR: &str = "GRID_SEQ_SAMPLE";
pub const PREFIX_VAR: &str = "GRID_SEQ_PREFIX";
pub const HIGHLIGHT_VAR: &str = "GRID_SEQ_HIGHLIGHT";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub tick: Duration,
    pub sample: Option<PathBuf>,
    pub prefix: String,
    pub highlight: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            sample: None,
            prefix: DEFAULT_PREFIX.to_string(),
            highlight: false,
        }
    }
}

fn parse<T: FromStr>(var: &str, value: &str) -> Option<T> {
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            log::warn!("ignoring {var}={value:?}");
            None
        }
    }
}

fn parse_flag(var: &str, value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => {
            log::warn!("ignoring {var}={value:?}");
            None
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from any variable source. Bad values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(ms) = lookup(TICK_MS_VAR).and_then(|v| parse::<u64>(TICK_MS_VAR, &v)) {
            if ms == 0 {
                log::warn!("{TICK_MS_VAR} must be positive");
            } else {
                config.tick = Duration::from_millis(ms);
            }
        }

        if let Some(bpm) = lookup(BPM_VAR).and_then(|v| parse::<u32>(BPM_VAR, &v)) {
            if bpm == 0 {
                log::warn!("{BPM_VAR} must be positive");
            } else {
                config.tick = interval_from_bpm(bpm);
            }
        }

        if let Some(path) = lookup(SAMPLE_VAR).filter(|v| !v.trim().is_empty()) {
            config.sample = Some(PathBuf::from(path));
        }

        if let Some(prefix) = lookup(PREFIX_VAR).filter(|v| !v.trim().is_empty()) {
            config.prefix = prefix;
        }

        if let Some(highlight) = lookup(HIGHLIGHT_VAR).and_then(|v| parse_flag(HIGHLIGHT_VAR, &v)) {
            config.highlight = highlight;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults_to_hundred_millis() {
        let config = from_vars(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.tick, Duration::from_millis(100));
        assert!(!config.highlight);
    }

    #[test]
    fn reads_every_variable() {
        let config = from_vars(&[
            (TICK_MS_VAR, "250"),
            (SAMPLE_VAR, "amen.wav"),
            (PREFIX_VAR, "/seq"),
            (HIGHLIGHT_VAR, "true"),
        ]);
        assert_eq!(config.tick, Duration::from_millis(250));
        assert_eq!(config.sample, Some(PathBuf::from("amen.wav")));
        assert_eq!(config.prefix, "/seq");
        assert!(config.highlight);
    }

    #[test]
    fn bpm_overrides_tick() {
        let config = from_vars(&[(TICK_MS_VAR, "250"), (BPM_VAR, "150")]);
        assert_eq!(config.tick, Duration::from_millis(100));
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = from_vars(&[
            (TICK_MS_VAR, "fast"),
            (BPM_VAR, "0"),
            (HIGHLIGHT_VAR, "maybe"),
            (PREFIX_VAR, " "),
        ]);
        assert_eq!(config, Config::default());
        assert_eq!(from_vars(&[(TICK_MS_VAR, "0")]).tick, Duration::from_millis(100));
    }
}
