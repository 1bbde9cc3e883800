//! zentodo binary entry point.
//!
//! # Responsibility
//! - Wire configuration, logging, the file slot and the task store.
//! - Dispatch parsed commands and map outcomes to exit codes.
//!
//! # Invariants
//! - Logging or config failures never block a task-list command.

mod cli;
mod config;
mod render;

use cli::{parse, resolve_id, Command, IdMatch};
use std::process::ExitCode;
use zentodo_core::{core_version, init_logging, FileSlot, StorageSlot, TaskStore};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse(&args) {
        Ok(command) => command,
        Err(err) => {
            render::error(&err.to_string());
            render::usage();
            return ExitCode::from(2);
        }
    };

    match command {
        Command::Help => {
            render::usage();
            return ExitCode::SUCCESS;
        }
        Command::Version => {
            render::info(&format!("zentodo {}", core_version()));
            return ExitCode::SUCCESS;
        }
        _ => {}
    }

    let (config, warnings) = config::load();
    if let Err(err) = init_logging(&config.log_level, &config.log_dir.to_string_lossy()) {
        render::warn(&format!("logging disabled: {err}"));
    }
    for warning in &warnings {
        log::warn!("event=config_load module=cli status=degraded detail={warning}");
        render::warn(warning);
    }

    let store = TaskStore::open(FileSlot::in_dir(&config.data_dir));
    run(command, store)
}

fn run<S: StorageSlot>(command: Command, mut store: TaskStore<S>) -> ExitCode {
    match command {
        Command::Add { text } => {
            store.add(&text);
            render::task_list(store.tasks(), &store.progress());
            ExitCode::SUCCESS
        }
        Command::List => {
            render::task_list(store.tasks(), &store.progress());
            ExitCode::SUCCESS
        }
        Command::Done { id } => match resolve_id(store.tasks(), &id) {
            IdMatch::One(task_id) => {
                store.toggle(task_id);
                render::task_list(store.tasks(), &store.progress());
                ExitCode::SUCCESS
            }
            IdMatch::None => {
                render::error(&format!("no task matches id `{id}`"));
                ExitCode::FAILURE
            }
            IdMatch::Ambiguous(count) => {
                render::error(&format!(
                    "id `{id}` matches {count} tasks; use more characters"
                ));
                ExitCode::FAILURE
            }
        },
        Command::Remove { id } => match resolve_id(store.tasks(), &id) {
            IdMatch::One(task_id) => {
                store.delete(task_id);
                render::task_list(store.tasks(), &store.progress());
                ExitCode::SUCCESS
            }
            IdMatch::None => {
                render::error(&format!("no task matches id `{id}`"));
                ExitCode::FAILURE
            }
            IdMatch::Ambiguous(count) => {
                render::error(&format!(
                    "id `{id}` matches {count} tasks; use more characters"
                ));
                ExitCode::FAILURE
            }
        },
        Command::Stats => {
            render::info(&render::progress_line(&store.progress()));
            ExitCode::SUCCESS
        }
        // Handled before the store is opened.
        Command::Help | Command::Version => ExitCode::SUCCESS,
    }
}
