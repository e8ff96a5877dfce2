use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::store::JsonFileStore;
use crate::model::task::Filter;
use crate::ops::list::TodoList;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let store_path = config_io::resolve_store_path(cli.store)?;
    let mut list = TodoList::open(Box::new(JsonFileStore::new(store_path)));

    match cli.command {
        // No subcommand → list everything
        None => cmd_list(ListArgs { filter: Filter::All }, &mut list, json),
        Some(cmd) => match cmd {
            Commands::Add(args) => cmd_add(args, &mut list, json),
            Commands::List(args) => cmd_list(args, &mut list, json),
            Commands::Toggle(args) => cmd_toggle(args, &mut list, json),
            Commands::Edit(args) => cmd_edit(args, &mut list, json),
            Commands::Rm(args) => cmd_rm(args, &mut list, json),
            Commands::Clear => cmd_clear(&mut list, json),
            Commands::Stats => cmd_stats(&list, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve a user-supplied id prefix to a full task id. The manager itself
/// only matches full ids; prefix convenience lives here.
fn resolve_id(list: &TodoList, prefix: &str) -> Result<String, String> {
    let mut matches = list.tasks().iter().filter(|t| t.id.starts_with(prefix));
    let Some(first) = matches.next() else {
        return Err(format!("no task matching '{}'", prefix));
    };
    if matches.next().is_some() {
        return Err(format!("'{}' is ambiguous, give more of the id", prefix));
    }
    Ok(first.id.clone())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_add(
    args: AddArgs,
    list: &mut TodoList,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = args.text.join(" ");
    // The manager rejects empty text silently; the user-facing message is
    // this layer's job.
    let Some(task) = list.add(&text) else {
        return Err("cannot add an empty task".into());
    };
    if json {
        println!("{}", serde_json::to_string_pretty(task)?);
    } else {
        println!("added {}", format_task_row(task));
    }
    Ok(())
}

fn cmd_list(
    args: ListArgs,
    list: &mut TodoList,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    list.set_filter(args.filter);
    let tasks = list.filtered();
    if json {
        let out = TaskListJson {
            filter: list.filter(),
            tasks,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if tasks.is_empty() {
        println!("{}", empty_view_message(list.filter()));
    } else {
        for task in &tasks {
            println!("{}", format_task_row(task));
        }
        println!();
        println!(
            "{} active, {} completed",
            list.active_count(),
            list.completed_count()
        );
    }
    Ok(())
}

fn cmd_toggle(
    args: IdArg,
    list: &mut TodoList,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = resolve_id(list, &args.id)?;
    list.toggle(&id);
    let task = list
        .tasks()
        .iter()
        .find(|t| t.id == id)
        .expect("toggled task is still in the list");
    if json {
        println!("{}", serde_json::to_string_pretty(task)?);
    } else {
        println!("{}", format_task_row(task));
    }
    Ok(())
}

fn cmd_edit(
    args: EditArgs,
    list: &mut TodoList,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = args.text.join(" ");
    if text.trim().is_empty() {
        return Err("cannot set an empty task text".into());
    }
    let id = resolve_id(list, &args.id)?;
    list.edit(&id, &text);
    let task = list
        .tasks()
        .iter()
        .find(|t| t.id == id)
        .expect("edited task is still in the list");
    if json {
        println!("{}", serde_json::to_string_pretty(task)?);
    } else {
        println!("{}", format_task_row(task));
    }
    Ok(())
}

fn cmd_rm(
    args: IdArg,
    list: &mut TodoList,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = resolve_id(list, &args.id)?;
    let text = list
        .tasks()
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.text.clone())
        .expect("resolved id is in the list");
    list.delete(&id);
    if json {
        println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "deleted": id }))?);
    } else {
        println!("deleted: {}", text);
    }
    Ok(())
}

fn cmd_clear(list: &mut TodoList, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let cleared = list.clear_completed();
    if json {
        println!("{}", serde_json::to_string_pretty(&ClearedJson { cleared })?);
    } else if cleared == 0 {
        println!("nothing to clear");
    } else {
        println!("cleared {} completed", cleared);
    }
    Ok(())
}

fn cmd_stats(list: &TodoList, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let stats = StatsJson {
        total: list.tasks().len(),
        active: list.active_count(),
        completed: list.completed_count(),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!(
            "{} total, {} active, {} completed",
            stats.total, stats.active, stats.completed
        );
    }
    Ok(())
}
