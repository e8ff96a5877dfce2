use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::task::Filter;

#[derive(Parser)]
#[command(name = "tk", about = concat!("[x] tick v", env!("CARGO_PKG_VERSION"), " - a single-user todo list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different store file
    #[arg(short = 's', long = "store", global = true)]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task to the end of the list
    Add(AddArgs),
    /// List tasks
    List(ListArgs),
    /// Toggle a task between active and completed
    Toggle(IdArg),
    /// Change a task's text
    Edit(EditArgs),
    /// Delete a task
    Rm(IdArg),
    /// Delete all completed tasks
    Clear,
    /// Show active/completed counts
    Stats,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text (words are joined with spaces)
    #[arg(required = true)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Show only this view
    #[arg(short, long, value_enum, default_value = "all")]
    pub filter: Filter,
}

#[derive(Args)]
pub struct IdArg {
    /// Task id (any unique prefix works)
    pub id: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task id (any unique prefix works)
    pub id: String,
    /// Replacement text (words are joined with spaces)
    #[arg(required = true)]
    pub text: Vec<String>,
}
