//! Stdout rendering for the zentodo binary.
//!
//! # Responsibility
//! - Format task rows, the progress readout and status lines.
//! - Keep row/readout formatting pure so it stays unit-testable.

use zentodo_core::{Progress, Task};

const SHORT_ID_LEN: usize = 8;

/// Prints the task list followed by the progress readout.
pub fn task_list(tasks: &[Task], progress: &Progress) {
    if tasks.is_empty() {
        println!("No tasks. Add one with `zentodo add <text>`.");
        return;
    }
    for task in tasks {
        println!("{}", task_row(task));
    }
    println!("{}", progress_line(progress));
}

/// One list row: checkbox, short id, text, creation date.
pub fn task_row(task: &Task) -> String {
    let mark = if task.completed { "x" } else { " " };
    let id = task.id.to_string();
    format!(
        "[{mark}] {}  {}  ({})",
        &id[..SHORT_ID_LEN],
        task.text,
        task.created_at.format("%Y-%m-%d %H:%M")
    )
}

/// The aggregate completion readout.
pub fn progress_line(progress: &Progress) -> String {
    format!(
        "{}/{} done ({:.0}%)",
        progress.completed,
        progress.total,
        progress.ratio() * 100.0
    )
}

pub fn info(message: &str) {
    println!("{message}");
}

pub fn warn(message: &str) {
    eprintln!("warning: {message}");
}

pub fn error(message: &str) {
    eprintln!("error: {message}");
}

pub fn usage() {
    println!("zentodo - a small persistent task list");
    println!();
    println!("Usage:");
    println!("  zentodo                 List tasks (default)");
    println!("  zentodo add <text>      Add a task");
    println!("  zentodo list            List tasks");
    println!("  zentodo done <id>       Toggle completion (id or unique prefix)");
    println!("  zentodo rm <id>         Delete a task (id or unique prefix)");
    println!("  zentodo stats           Show completion progress");
    println!("  zentodo help            Show this help");
    println!("  zentodo version         Show version");
    println!();
    println!("Environment:");
    println!("  ZENTODO_DATA_DIR        Override the data directory");
    println!("  ZENTODO_LOG_LEVEL       Override the log level");
    println!("  ZENTODO_LOG_DIR         Override the log directory");
}
