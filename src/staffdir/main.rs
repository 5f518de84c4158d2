use clap::Parser;
use colored::Colorize;
use staffdir::api::DirectoryApi;
use staffdir::commands::{CmdResult, EmployeeForm};
use staffdir::error::Result;
use std::io::{self, BufRead, IsTerminal, Write};

mod args;
mod cli;

use args::Cli;
use cli::{print, render};

const HELP: &str = "\
Commands:
  add <id>, <name>, <address>   create a record
  edit <id>                     begin editing a record
  save <name>, <address>        apply the edit in progress
  cancel                        abandon the edit in progress
  delete <id>                   remove a record (alias: rm)
  show <id>                     display one record
  list                          display all records (alias: ls)
  json                          dump all records as JSON
  count                         number of records
  help                          this message (alias: ?)
  quit                          exit (aliases: exit, q)";

fn main() {
    let cli = Cli::parse();
    if cli.plain {
        colored::control::set_override(false);
    }
    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> io::Result<()> {
    let mut api = DirectoryApi::new();
    if cli.demo {
        seed_demo(&mut api);
    }

    // Only decorate the session when a human is typing; piped input gets
    // clean output.
    let interactive = io::stdin().is_terminal();
    if interactive {
        println!("{}", "staffdir — type 'help' for commands".dimmed());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        if interactive {
            match api.editing() {
                Some(id) => print!("edit {}> ", id),
                None => print!("staffdir> "),
            }
            stdout.flush()?;
        }

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if dispatch(&mut api, line.trim()) == Flow::Quit {
            break;
        }
    }
    Ok(())
}

#[derive(PartialEq)]
enum Flow {
    Continue,
    Quit,
}

fn dispatch(api: &mut DirectoryApi, input: &str) -> Flow {
    if input.is_empty() {
        return Flow::Continue;
    }
    let (verb, rest) = match input.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (input, ""),
    };

    match verb {
        "add" | "a" => handle_add(api, rest),
        "edit" | "e" => handle_edit(api, rest),
        "save" | "s" => handle_save(api, rest),
        "cancel" => report(api.cancel_edit(), false),
        "delete" | "rm" => handle_delete(api, rest),
        "show" => handle_show(api, rest),
        "list" | "ls" => report(api.list(), true),
        "json" => handle_json(api),
        "count" => println!("{}", render::count_badge(api.count())),
        "help" | "?" => println!("{}", HELP),
        "quit" | "exit" | "q" => return Flow::Quit,
        other => print::print_error(format!(
            "Unknown command: {} (type 'help' for commands)",
            other
        )),
    }
    Flow::Continue
}

/// Print a command's messages and, for results that carry one, the refreshed
/// table. Errors never end the session; they are shown and the loop goes on.
fn report(outcome: Result<CmdResult>, with_table: bool) {
    match outcome {
        Ok(result) => {
            print::print_messages(&result.messages);
            if with_table {
                render::render_table(&result.listed, result.count);
            }
        }
        Err(err) => print::print_error(err),
    }
}

fn handle_add(api: &mut DirectoryApi, rest: &str) {
    if api.editing().is_some() {
        print::print_error("An edit is in progress; 'save' or 'cancel' it first");
        return;
    }
    let fields = split_fields(rest);
    let [id, name, address] = fields.as_slice() else {
        print::print_error("Usage: add <id>, <name>, <address>");
        return;
    };
    report(api.submit(&EmployeeForm::new(*id, *name, *address)), true);
}

fn handle_save(api: &mut DirectoryApi, rest: &str) {
    if api.editing().is_none() {
        print::print_error("No edit in progress; use 'add' to create a record");
        return;
    }
    let fields = split_fields(rest);
    // A leading id is tolerated but carries no weight; the session's id is
    // authoritative during an edit.
    let form = match fields.as_slice() {
        [name, address] => EmployeeForm::new("", *name, *address),
        [id, name, address] => EmployeeForm::new(*id, *name, *address),
        _ => {
            print::print_error("Usage: save <name>, <address>");
            return;
        }
    };
    report(api.submit(&form), true);
}

fn handle_edit(api: &mut DirectoryApi, rest: &str) {
    if rest.is_empty() {
        print::print_error("Usage: edit <id>");
        return;
    }
    match api.begin_edit(rest) {
        Ok(result) => {
            print::print_messages(&result.messages);
            if let Some(employee) = result.affected.first() {
                render::render_record(employee);
            }
        }
        Err(err) => print::print_error(err),
    }
}

fn handle_delete(api: &mut DirectoryApi, rest: &str) {
    if rest.is_empty() {
        print::print_error("Usage: delete <id>");
        return;
    }
    report(api.delete(rest), true);
}

fn handle_show(api: &mut DirectoryApi, rest: &str) {
    if rest.is_empty() {
        print::print_error("Usage: show <id>");
        return;
    }
    match api.find(rest) {
        Some(employee) => render::render_record(employee),
        None => print::print_error(format!("Employee not found: {}", rest)),
    }
}

fn handle_json(api: &DirectoryApi) {
    match api.list() {
        Ok(result) => render::render_json(&result.listed),
        Err(err) => print::print_error(err),
    }
}

fn split_fields(rest: &str) -> Vec<&str> {
    if rest.is_empty() {
        return Vec::new();
    }
    rest.split(',').map(str::trim).collect()
}

fn seed_demo(api: &mut DirectoryApi) {
    let samples = [
        ("E1", "Ada Lovelace", "12 Analytical Way"),
        ("E2", "Grace Hopper", "7 Harbor Lane"),
        ("E3", "Alan Turing", "23 Bletchley Rd"),
    ];
    for (id, name, address) in samples {
        // Ids are fixed and distinct, so this cannot fail
        let _ = api.submit(&EmployeeForm::new(id, name, address));
    }
}
