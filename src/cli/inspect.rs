//! Table and hook inspection commands

use super::util::positional_args;
use side_export::{generate_hooks, render_lines, Command, CommandTable, LevelTracker, Result};

/// Emit one command and print its statements
pub fn cmd_command(args: &[String]) -> Result<()> {
    let positional = positional_args(args);
    let Some(name) = positional.first() else {
        return Err("Usage: side-export command <name> [target] [value]".into());
    };
    let mut command = Command::new(*name);
    if let Some(target) = positional.get(1) {
        command = command.with_target(*target);
    }
    if let Some(value) = positional.get(2) {
        command = command.with_value(*value);
    }

    let table = CommandTable::new();
    let emission = table.emit(&command)?;
    let (starting, ending) = emission.level_adjustments();
    // A lone closer would drive the level negative; show it unplaced
    let lines = if starting < 0 {
        emission.lines()
    } else {
        LevelTracker::new().place(&command.name, &emission)?
    };
    println!("{}", render_lines(&lines, &table.config().indent));
    if starting != 0 || ending != 0 {
        eprintln!("level adjustments: start {:+}, end {:+}", starting, ending);
    }
    Ok(())
}

pub fn cmd_commands() -> Result<()> {
    let table = CommandTable::new();
    for name in table.commands() {
        println!("{}", name);
    }
    Ok(())
}

pub fn cmd_hooks() -> Result<()> {
    let indent = CommandTable::new().config().indent.clone();
    for (name, hook) in generate_hooks() {
        println!("# {} (registration level {})", name, hook.effective_registration_level());
        let mut lines = hook.starting_syntax.clone();
        lines.extend(hook.ending_syntax.iter().cloned());
        if lines.is_empty() {
            println!("(empty)");
        } else {
            println!("{}", render_lines(&lines, &indent));
        }
        println!();
    }
    Ok(())
}
