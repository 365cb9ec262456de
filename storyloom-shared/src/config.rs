use std::sync::RwLock;
use std::path::Path;
use std::fs;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use toml::Table;

static GLOBAL_CONFIG: OnceCell<RwLock<Table>> = OnceCell::new();

/// Loads `path` into the process-wide store. A missing or broken file is not
/// fatal: every section then falls back to its defaults.
pub fn init<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
    let path = path.as_ref();

    let content = if path.exists() {
        log::info!("Loading config from {:?}", path);
        fs::read_to_string(path)?
    } else {
        log::warn!("Config file not found at {:?}, using defaults.", path);
        String::new()
    };

    install(parse_table(&content))
}

/// Reads section `[key]`. Uninitialised store, missing section or a type
/// mismatch all yield `T::default()`.
pub fn get<T: DeserializeOwned + Default>(key: &str) -> T {
    let Some(store) = GLOBAL_CONFIG.get() else {
        log::debug!("Config not initialized, section '[{}]' uses defaults.", key);
        return T::default();
    };
    match store.read() {
        Ok(guard) => section(&guard, key),
        Err(_) => {
            log::error!("Config store poisoned, section '[{}]' uses defaults.", key);
            T::default()
        }
    }
}

/// Deserialises one section of an already parsed table.
pub fn section<T: DeserializeOwned + Default>(table: &Table, key: &str) -> T {
    if let Some(value) = table.get(key) {
        value.clone().try_into().unwrap_or_else(|e| {
            log::warn!("Config section '[{}]' mismatch: {}. Using default.", key, e);
            T::default()
        })
    } else {
        T::default()
    }
}

fn parse_table(content: &str) -> Table {
    toml::from_str(content).unwrap_or_else(|e| {
        log::error!("Config syntax error: {}, using empty config.", e);
        Table::new()
    })
}

fn install(table: Table) -> anyhow::Result<()> {
    GLOBAL_CONFIG.set(RwLock::new(table))
        .map_err(|_| anyhow::anyhow!("Config already initialized"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(default)]
    struct Player {
        reveal_interval_ms: u64,
        frame_ms: u64,
    }

    impl Default for Player {
        fn default() -> Self {
            Self { reveal_interval_ms: 30, frame_ms: 15 }
        }
    }

    #[test]
    fn partial_section_keeps_defaults() {
        let table = parse_table("[player]\nreveal_interval_ms = 50\n");
        let player: Player = section(&table, "player");
        assert_eq!(player, Player { reveal_interval_ms: 50, frame_ms: 15 });
    }

    #[test]
    fn missing_or_mismatched_section_is_default() {
        let table = parse_table("[player]\nreveal_interval_ms = \"fast\"\n");
        assert_eq!(section::<Player>(&table, "player"), Player::default());
        assert_eq!(section::<Player>(&table, "absent"), Player::default());
    }

    #[test]
    fn syntax_error_yields_empty_table() {
        assert!(parse_table("[player\nbroken").is_empty());
    }
}
