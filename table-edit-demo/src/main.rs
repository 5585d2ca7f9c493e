mod scenario;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use table_edit::{DispatchResult, SubmitOutcome};

use scenario::{Scenario, ScenarioError};

const BUNDLED: &str = include_str!("../scenarios/compare.json");

fn run(path: Option<String>) -> Result<(), ScenarioError> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => BUNDLED.to_string(),
    };
    let scenario = Scenario::parse(&json)?;
    let mut page = scenario.attach()?;
    log::info!("Attached {} tables", page.len());

    for (i, step) in scenario.steps.iter().enumerate() {
        let event = step.event(&page, i)?;
        match page.dispatch(event)? {
            DispatchResult::NotHandled => println!("step {i}: ignored"),
            DispatchResult::Handled(_) => println!("step {i}: ok"),
            DispatchResult::Submitted(id, SubmitOutcome::Rejected(tables)) => {
                println!("step {i}: submit from {id} rejected, {} incomplete", tables.len());
            }
            DispatchResult::Submitted(id, SubmitOutcome::Saved(data)) => {
                let json = serde_json::to_string_pretty(&data)?;
                println!("step {i}: submit from {id} saved\n{json}");
            }
        }
    }

    for element in page.elements() {
        println!("{}", tabledom::to_html(&element));
    }
    Ok(())
}

fn main() {
    let log_file = File::create("table-edit-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run(std::env::args().nth(1)) {
        log::error!("{e}");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
