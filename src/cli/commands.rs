use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "td", about = concat!("taskdeck v", env!("CARGO_PKG_VERSION"), " - your personal task manager"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different data file (default: from taskdeck.toml, else tasks.json)
    #[arg(long = "file", global = true)]
    pub file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks, optionally filtered and sorted
    List(ListArgs),
    /// Add a task
    Add(AddArgs),
    /// Delete a task by its list position
    Rm(RmArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter: name substring (case-insensitive)
    #[arg(long)]
    pub name: Option<String>,
    /// Filter: exact priority (Low, Medium, High)
    #[arg(long)]
    pub priority: Option<String>,
    /// Filter: exact due date (DD/MM/YYYY)
    #[arg(long)]
    pub due: Option<String>,
    /// Sort by column (name, description, priority, due_date)
    #[arg(long)]
    pub sort: Option<String>,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task name
    pub name: String,
    /// Description
    #[arg(long, default_value = "")]
    pub desc: String,
    /// Priority (Low, Medium, High)
    #[arg(long, default_value = "Medium")]
    pub priority: String,
    /// Due date (DD/MM/YYYY; default: today)
    #[arg(long)]
    pub due: Option<String>,
}

#[derive(Args)]
pub struct RmArgs {
    /// 1-based task number, as shown by an unfiltered `td list`
    pub number: usize,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}
