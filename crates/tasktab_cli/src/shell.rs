//! Interactive menu shell over the task service.
//!
//! # Responsibility
//! - Drive the menu loop on stdin/stdout.
//! - Keep prompt parsing and list rendering out of core.
//!
//! # Invariants
//! - Invalid menu or index input is reported locally and never
//!   reaches the repository.
//! - Category prefixes are composed here; core stores final text only.
//! - Storage failures are reported and the loop continues.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use tasktab_core::{OwnerSummary, RepoError, TaskEntry, TaskRepository, TaskService};

/// Runs the interactive loop until the user quits or stdin closes.
pub fn run<R: TaskRepository>(service: &TaskService<R>, task_file: &str) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Task file: {task_file}");

    loop {
        println!();
        println!("--- tasktab ---");
        match service.list_tasks() {
            Ok(entries) => print_task_list(&entries),
            Err(err) => println!("error: {err}"),
        }
        print_menu();

        let Some(choice) = prompt(&mut input, "Choose an option: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => add_task_flow(service, &mut input)?,
            "2" => mark_done_flow(service, &mut input)?,
            "3" => delete_task_flow(service, &mut input)?,
            "4" => owner_list_flow(service, &mut input)?,
            "5" => summary_flow(service),
            "q" | "Q" => break,
            _ => println!("Invalid choice."),
        }
    }

    Ok(())
}

fn add_task_flow<R: TaskRepository>(
    service: &TaskService<R>,
    input: &mut impl BufRead,
) -> io::Result<()> {
    let Some(owner) = prompt(input, "Owner (blank for Unassigned): ")? else {
        return Ok(());
    };
    let Some(category) = prompt(input, "Category (optional): ")? else {
        return Ok(());
    };
    let Some(task) = prompt(input, "New task: ")? else {
        return Ok(());
    };
    if task.is_empty() {
        return Ok(());
    }

    let text = compose_task_text(&category, &task);
    match service.add_task(&text, &owner) {
        Ok(added) => println!("Added: {} (total: {})", added.task.text, added.total),
        Err(err) => report_repo_error(err),
    }

    Ok(())
}

fn mark_done_flow<R: TaskRepository>(
    service: &TaskService<R>,
    input: &mut impl BufRead,
) -> io::Result<()> {
    let Some(raw) = prompt(input, "Task number to mark as done: ")? else {
        return Ok(());
    };

    match parse_index(&raw) {
        Some(index) => match service.complete_task(index) {
            Ok(task) => println!("Marked as done: {}", task.text),
            Err(err) => report_repo_error(err),
        },
        None => println!("Please enter a valid number."),
    }

    Ok(())
}

fn delete_task_flow<R: TaskRepository>(
    service: &TaskService<R>,
    input: &mut impl BufRead,
) -> io::Result<()> {
    let Some(raw) = prompt(input, "Task number to delete: ")? else {
        return Ok(());
    };

    match parse_index(&raw) {
        Some(index) => match service.remove_task(index) {
            Ok(task) => println!("Deleted: {}", task.text),
            Err(err) => report_repo_error(err),
        },
        None => println!("Please enter a valid number."),
    }

    Ok(())
}

fn owner_list_flow<R: TaskRepository>(
    service: &TaskService<R>,
    input: &mut impl BufRead,
) -> io::Result<()> {
    let Some(owner) = prompt(input, "Owner to list: ")? else {
        return Ok(());
    };

    match service.tasks_for_owner(&owner) {
        Ok(entries) if entries.is_empty() => println!("No tasks for that owner."),
        Ok(entries) => {
            println!("Tasks for {owner}:");
            for entry in &entries {
                println!("{}", render_entry(entry));
            }
        }
        Err(err) => report_repo_error(err),
    }

    Ok(())
}

fn summary_flow<R: TaskRepository>(service: &TaskService<R>) {
    match service.owner_summary() {
        Ok(summary) if summary.is_empty() => println!("No tasks yet."),
        Ok(summary) => print_owner_summary(&summary),
        Err(err) => report_repo_error(err),
    }
}

fn print_task_list(entries: &[TaskEntry]) {
    if entries.is_empty() {
        println!("No tasks yet.");
        return;
    }

    println!("Current tasks:");
    for entry in entries {
        println!("{}", render_entry(entry));
    }
}

fn print_owner_summary(summary: &BTreeMap<String, OwnerSummary>) {
    println!("Summary by owner:");
    for (owner, counts) in summary {
        println!("{owner}: {}/{} done", counts.done, counts.total);
    }
}

fn print_menu() {
    println!();
    println!("Options:");
    println!("1) Add task");
    println!("2) Mark task as done");
    println!("3) Delete task");
    println!("4) List tasks for an owner");
    println!("5) Summary by owner");
    println!("q) Quit");
}

/// Prints a prompt and reads one trimmed line.
///
/// Returns `None` when stdin has closed, which callers treat as a
/// cancelled flow; the main loop then exits on its next read.
fn prompt(input: &mut impl BufRead, message: &str) -> io::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

/// Composes the stored text, prefixing `[category]` when one was given.
fn compose_task_text(category: &str, task: &str) -> String {
    if category.is_empty() {
        task.to_string()
    } else {
        format!("[{category}] {task}")
    }
}

/// Parses a 1-based task number typed by the user.
///
/// Only plain digit strings are accepted, matching the menu's
/// rendered numbering; anything else asks the user to retry.
fn parse_index(raw: &str) -> Option<usize> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Renders one list line, for example `3. [x] ship release (Rana)`.
fn render_entry(entry: &TaskEntry) -> String {
    let marker = if entry.task.done { "x" } else { " " };
    format!(
        "{}. [{marker}] {} ({})",
        entry.index, entry.task.text, entry.task.owner
    )
}

fn report_repo_error(err: RepoError) {
    match err {
        RepoError::InvalidIndex { .. } => println!("Invalid task number."),
        other => println!("error: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{compose_task_text, parse_index, render_entry};
    use tasktab_core::{Task, TaskEntry};

    #[test]
    fn compose_task_text_prefixes_category() {
        assert_eq!(compose_task_text("errands", "buy milk"), "[errands] buy milk");
        assert_eq!(compose_task_text("", "buy milk"), "buy milk");
    }

    #[test]
    fn parse_index_accepts_digit_strings_only() {
        assert_eq!(parse_index("7"), Some(7));
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("+5"), None);
        assert_eq!(parse_index("two"), None);
        assert_eq!(parse_index("1 2"), None);
    }

    #[test]
    fn render_entry_shows_position_status_text_and_owner() {
        let mut task = Task::new("ship release", "Rana");
        let entry = TaskEntry {
            index: 3,
            task: task.clone(),
        };
        assert_eq!(render_entry(&entry), "3. [ ] ship release (Rana)");

        task.mark_done();
        let entry = TaskEntry { index: 3, task };
        assert_eq!(render_entry(&entry), "3. [x] ship release (Rana)");
    }
}
