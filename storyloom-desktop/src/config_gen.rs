use std::fs;
use std::path::Path;
use anyhow::Context;
use serde::Serialize;
use storyloom_core::config::{PlayerConfig, SystemConfig};
use storyloom_core::{Character, Scene};

pub const DEMO_SCRIPT: &str = r#"scene Bedroom
show Alice
Alice "Ugh, another Monday morning. I wish I could just stay in bed forever."
"The sun streamed through the window, offering no sympathy for her plight."
show Bob
Bob "Morning, sleepyhead! I made coffee."
Alice "You're a lifesaver, Bob. Seriously."
hide Bob
Alice "Okay, world. Let's do this... I guess."
"#;

#[derive(Serialize)]
struct FullConfig {
    system: SystemConfig,
    player: PlayerConfig,
    characters: Vec<Character>,
    scenes: Vec<Scene>,
}

fn asset<T: storyloom_core::runtime::Asset>(name: &str, image: &str) -> T {
    T::new(name.to_string(), name.to_string(), image.to_string())
}

fn default_config() -> FullConfig {
    FullConfig {
        system: SystemConfig::default(),
        player: PlayerConfig::default(),
        characters: vec![
            asset("Alice", "https://picsum.photos/seed/alice/400/600"),
            asset("Bob", "https://picsum.photos/seed/bob/400/600"),
        ],
        scenes: vec![
            asset("Bedroom", "https://picsum.photos/seed/bedroom/1280/720"),
            asset("Cafe", "https://picsum.photos/seed/cafe/1280/720"),
        ],
    }
}

/// Writes the demo configuration (and its script) when `path` is missing.
pub fn ensure_config_exists(path: &str) {
    if Path::new(path).exists() {
        return;
    }

    println!("Creating default configuration at '{}'...", path);

    let default_config = default_config();
    let toml_str = match toml::to_string_pretty(&default_config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to serialize default config: {}", e);
            return;
        }
    };

    if let Err(e) = fs::write(path, toml_str) {
        eprintln!("Failed to write config file: {}", e);
        return;
    }
    println!("Config file created successfully.");

    if let Err(e) = write_demo_script(Path::new(&default_config.system.script_path)) {
        eprintln!("{:#}", e);
    }
}

/// Writes [`DEMO_SCRIPT`] to `path` unless a file is already there.
fn write_demo_script(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create script dir {:?}", dir))?;
    }
    fs::write(path, DEMO_SCRIPT)
        .with_context(|| format!("Failed to write demo script {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_sections() {
        let text = toml::to_string_pretty(&default_config()).unwrap();
        let table: toml::Table = toml::from_str(&text).unwrap();

        let player: PlayerConfig = storyloom_shared::config::section(&table, "player");
        assert_eq!(player.reveal_interval_ms, 30);

        let characters: Vec<Character> = storyloom_shared::config::section(&table, "characters");
        assert_eq!(characters.len(), 2);
        assert_eq!(characters[1].name, "Bob");
    }

    #[test]
    fn demo_script_dir_failure_is_reported() {
        let base = std::env::temp_dir().join(format!("storyloom-gen-{}", std::process::id()));
        fs::write(&base, "not a directory").unwrap();

        let err = write_demo_script(&base.join("game").join("story.loom")).unwrap_err();
        assert!(err.to_string().contains("Failed to create script dir"));

        fs::remove_file(&base).unwrap();
        let ok_path = base.join("story.loom");
        write_demo_script(&ok_path).unwrap();
        assert_eq!(fs::read_to_string(&ok_path).unwrap(), DEMO_SCRIPT);
        fs::remove_dir_all(&base).unwrap();
    }

    #[test]
    fn demo_script_parses() {
        let script = loomscript_core::parse(DEMO_SCRIPT);
        assert_eq!(script.len(), 9);
    }
}
