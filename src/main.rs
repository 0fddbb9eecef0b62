//! side-export CLI - Command-line interface
//!
//! Commands:
//!   export    - Export a .side project as a Codeception Cest file
//!   command   - Emit a single command
//!   commands  - List supported commands
//!   hooks     - Show the hook definitions

mod cli;

use side_export::VERSION;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "SIDE_EXPORT_LOG";

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "export" => cli::cmd_export(&args[2..]),
        "command" => cli::cmd_command(&args[2..]),
        "commands" => cli::cmd_commands(),
        "hooks" => cli::cmd_hooks(),
        "version" | "--version" | "-v" => {
            println!("side-export {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"
side-export - Selenium IDE recordings as Codeception tests

USAGE:
    side-export <COMMAND> [OPTIONS]

COMMANDS:
    export <project.side>            Export tests as a Cest class
    command <name> [target] [value]  Emit one command
    commands                         List supported commands
    hooks                            Show hook definitions
    version                          Print version

OPTIONS:
    --suite <name>                   Export one suite (default: every test)
    --output <file>                  Output file (default: stdout)
    --config <file>                  Config file (default: .side-export.yaml next to the project)
    --template-dir <dir>             Directory with a cest.php.jinja override

ENVIRONMENT:
    SIDE_EXPORT_LOG                  Log filter, e.g. debug (default: warn)

EXAMPLES:
    side-export export shop.side --output tests/acceptance/ShopCest.php
    side-export export shop.side --suite "Smoke" --config ci.yaml
    side-export command click css=#submit
    side-export command type id=q "hello ${{name}}"
"#
    );
}
