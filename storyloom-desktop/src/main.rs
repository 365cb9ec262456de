mod setup;
mod config_gen;

use std::env;
use std::process::ExitCode;
use anyhow::Result;
use storyloom_core::config::{PlayerConfig, SystemConfig};
use storyloom_core::renderer::driver::Driver;
use storyloom_core::{Character, Executor, Library, Project, Scene, TerminalRenderer};

const CONFIG_PATH: &str = "config.toml";

fn main() -> ExitCode {
    setup::init(CONFIG_PATH);
    log::info!(">>> Storyloom Launcher Started <<<");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let sys_cfg = SystemConfig::from_global();
    let player_cfg = PlayerConfig::from_global();

    let characters: Vec<Character> = storyloom_shared::config::get("characters");
    let scenes: Vec<Scene> = storyloom_shared::config::get("scenes");
    log::info!("Registered {} characters, {} scenes", characters.len(), scenes.len());

    // first positional argument overrides the configured script
    let script_path = env::args().nth(1).unwrap_or(sys_cfg.script_path);
    log::info!("Loading script: {}", script_path);

    let mut project = Project::new(Library::from_lists(characters, scenes));
    project.load_script(&script_path)?;

    let script = project.parse();
    log::info!("Parsing complete: {} instructions", script.len());
    log::debug!("Script: {:#?}", script);

    let exe = Executor::with_config(script, project.library().clone(), &player_cfg);
    let mut driver = Driver::new(exe, TerminalRenderer::stdio(), player_cfg.frame());
    driver.run();

    log::info!("Session finished at cursor {}", driver.executor().cursor());
    Ok(())
}
