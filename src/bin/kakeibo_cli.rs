use std::{env, path::PathBuf, process};

use kakeibo::{
    errors::AppError, init, report, scenario::ScenarioFile, system_clock::clock_from_env,
    utils::build_info,
};
use kakeibo_config::{Config, ConfigManager};
use kakeibo_core::ProjectionService;

fn main() {
    init();

    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when the command ran but the projection was rejected.
fn run() -> Result<bool, AppError> {
    let mut args = env::args().skip(1);
    let command = args.next().ok_or_else(usage)?;

    match command.as_str() {
        "project" => {
            let path = args.next().map(PathBuf::from).ok_or_else(usage)?;
            let config = load_config()?;
            let clock = clock_from_env();
            let request = ScenarioFile::load(&path)?.into_request(clock.as_ref(), &config)?;
            let outcome = ProjectionService::run(&request);
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            Ok(outcome.success)
        }
        "summary" => {
            let path = args.next().map(PathBuf::from).ok_or_else(usage)?;
            let config = load_config()?;
            let clock = clock_from_env();
            let request = ScenarioFile::load(&path)?.into_request(clock.as_ref(), &config)?;
            let trajectory = ProjectionService::project(&request)?;
            print!(
                "{}",
                report::render_summary(&trajectory, &config.currency, config.highlight_limit)
            );
            Ok(true)
        }
        "sample" => {
            let config = load_config()?;
            let clock = clock_from_env();
            let template = ScenarioFile::template(clock.as_ref(), &config)?;
            match args.next().map(PathBuf::from) {
                Some(path) => {
                    template.save(&path)?;
                    println!("Saved sample scenario to {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&template)?),
            }
            Ok(true)
        }
        "version" => {
            println!("{}", build_info::current().describe());
            Ok(true)
        }
        other => Err(AppError::Usage(format!(
            "unknown command `{other}`\n{}",
            usage_text()
        ))),
    }
}

fn load_config() -> Result<Config, AppError> {
    let manager = ConfigManager::with_base_dir(Config::resolve_base_dir())?;
    Ok(manager.load()?)
}

fn usage() -> AppError {
    AppError::Usage(usage_text())
}

fn usage_text() -> String {
    "Usage: kakeibo_cli <command>\n\
     Commands:\n  \
     project <scenario.json>\n  \
     summary <scenario.json>\n  \
     sample [scenario.json]\n  \
     version"
        .to_string()
}
