use std::io::{self, Write as _};
use std::path::PathBuf;

use crate::cli::commands::{AddArgs, Cli, Commands, ListArgs, RmArgs};
use crate::cli::output;
use crate::io::config_io;
use crate::model::task::{DueDate, TaskFields};
use crate::store::{SortKey, TaskFilter, TaskStore};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let path = data_file_path(cli.file.as_deref());

    match cli.command {
        // No subcommand is handled in main.rs (launches the TUI)
        None => Ok(()),
        Some(Commands::List(args)) => cmd_list(args, json, path),
        Some(Commands::Add(args)) => cmd_add(args, path),
        Some(Commands::Rm(args)) => cmd_rm(args, path),
    }
}

/// Resolve the data file path: the --file flag beats taskdeck.toml, which
/// beats the `tasks.json` default.
pub fn data_file_path(flag: Option<&str>) -> PathBuf {
    if let Some(f) = flag {
        return PathBuf::from(f);
    }
    let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = config_io::load_or_default(&dir);
    dir.join(config.data.file)
}

fn open_store(path: PathBuf) -> TaskStore {
    let (store, warning) = TaskStore::open(path);
    if let Some(w) = warning {
        eprintln!("warning: {} (starting with an empty list)", w);
    }
    store
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_list(args: ListArgs, json: bool, path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(path);

    if let Some(key) = args.sort.as_deref() {
        let key = SortKey::parse(key).ok_or_else(|| {
            format!(
                "unknown sort key '{}' (expected: name, description, priority, due_date)",
                key
            )
        })?;
        store.sort(key);
    }

    let filter = TaskFilter {
        name: args.name.unwrap_or_default(),
        priority: args.priority.unwrap_or_default(),
        due_date: args.due.unwrap_or_default(),
    };
    let tasks = store.filter(&filter);

    if json {
        println!("{}", output::tasks_to_json(&tasks)?);
    } else {
        for line in output::format_task_table(&tasks) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_add(args: AddArgs, path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let due = match args.due {
        Some(due) => due,
        None => DueDate::today().to_string(),
    };
    let fields = TaskFields::parse(&args.name, &args.desc, &args.priority, &due)?;

    let mut store = open_store(path);
    let id = store.add(fields);
    store.save()?;

    if let Some(task) = store.get(id) {
        println!("added \"{}\" due {}", task.name, task.due_date);
    }
    Ok(())
}

fn cmd_rm(args: RmArgs, path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(path);

    if args.number == 0 || args.number > store.len() {
        return Err(format!("no task number {} (have {})", args.number, store.len()).into());
    }
    let task = &store.tasks()[args.number - 1];
    let id = task.id;
    let name = task.name.clone();

    if !args.force && !confirm(&format!("Delete \"{}\"? [y/N] ", name))? {
        println!("cancelled");
        return Ok(());
    }

    store.remove(id);
    store.save()?;
    println!("deleted \"{}\"", name);
    Ok(())
}

/// Prompt on stdout and read a y/N answer from stdin.
fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
