//! Stoke CLI
//!
//! Bootstraps a loader from `stoke.toml` and resolves identifiers with it.

use std::io::IsTerminal;
use std::path::Path;

use stoke::commands::{
    explain_code, print_paths, resolve_identifiers, scan_file, LoaderOptions,
};
use stoke::{init_tracing, ManifestError, Overrides};
use stoke_diagnostic::emitter::{ColorMode, TerminalEmitter};
use stoke_diagnostic::{Diagnostic, TracingSink};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "resolve" => {
            let options = parse_options(&args[2..]);
            if options.identifiers.is_empty() {
                eprintln!("Usage: stoke resolve <identifier>... [options]");
                std::process::exit(1);
            }

            let report = match resolve_identifiers(&options, &Overrides::from_env()) {
                Ok(report) => report,
                Err(err) => exit_with_manifest_error(&err),
            };

            let mut emitter = stderr_emitter();
            let stdout = std::io::stdout();
            if let Err(err) = report.render(&mut stdout.lock(), &mut emitter, options.trace) {
                exit_with_write_error(&err);
            }

            if !report.is_success() {
                std::process::exit(1);
            }
        }
        "paths" => {
            let options = parse_options(&args[2..]);
            if options.identifiers.is_empty() {
                eprintln!("Usage: stoke paths <identifier>... [options]");
                std::process::exit(1);
            }

            let loader = match options.build_loader(&Overrides::from_env(), TracingSink) {
                Ok(loader) => loader,
                Err(err) => exit_with_manifest_error(&err),
            };

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for identifier in &options.identifiers {
                if let Err(err) = print_paths(&loader, identifier, &mut out) {
                    exit_with_write_error(&err);
                }
            }
        }
        "scan" => {
            if args.len() < 3 {
                eprintln!("Usage: stoke scan <file>...");
                std::process::exit(1);
            }

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let mut emitter = stderr_emitter();
            let mut failures = 0;
            for file in &args[2..] {
                match scan_file(Path::new(file)) {
                    Ok(unit) => {
                        if let Err(err) = unit.render(&mut out) {
                            exit_with_write_error(&err);
                        }
                    }
                    Err(err) => {
                        emitter.emit(&err.to_diagnostic());
                        failures += 1;
                    }
                }
            }
            emitter.flush();

            if failures > 0 {
                std::process::exit(1);
            }
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: stoke explain <CODE>");
                eprintln!("Example: stoke explain L0004");
                std::process::exit(1);
            }
            match explain_code(&args[2]) {
                Ok(doc) => println!("{doc}"),
                Err(msg) => {
                    eprintln!("{msg}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("stoke {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn parse_options(args: &[String]) -> LoaderOptions {
    match LoaderOptions::parse(args) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

fn stderr_emitter() -> TerminalEmitter<std::io::Stderr> {
    TerminalEmitter::stderr(ColorMode::Auto, std::io::stderr().is_terminal())
}

fn exit_with_manifest_error(err: &ManifestError) -> ! {
    let mut emitter = stderr_emitter();
    emitter.emit(&Diagnostic::error(err.code(), err.to_string()));
    emitter.flush();
    std::process::exit(1);
}

fn exit_with_write_error(err: &std::io::Error) -> ! {
    eprintln!("error: cannot write output: {err}");
    std::process::exit(1);
}

fn print_usage() {
    println!("Stoke - namespace-driven unit loader");
    println!();
    println!("Usage: stoke <command> [options]");
    println!();
    println!("Commands:");
    println!("  resolve <id>...      Resolve identifiers and report how each was found");
    println!("  paths <id>...        List the paths each identifier would be looked for at");
    println!("  scan <file>...       Show the definitions a unit declares");
    println!("  explain <code>       Explain a diagnostic code (e.g., L0004)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Loader options (resolve, paths):");
    println!("  --manifest <file>   Manifest to read (default: ./stoke.toml)");
    println!("  --app-path <dir>    Application root, overrides manifest and STOKE_APP_PATH");
    println!("  --trace             Show every resolution step, not only warnings");
    println!();
    println!("Environment:");
    println!("  STOKE_APP_PATH      Application root, overrides the manifest");
    println!("  STOKE_EXTENSION     Unit file extension, overrides the manifest");
    println!("  RUST_LOG            Enable tracing output (e.g., RUST_LOG=stoke_loader=debug)");
    println!();
    println!("Examples:");
    println!("  stoke resolve 'App\\Models\\User'");
    println!("  stoke resolve Arr --trace");
    println!("  stoke paths 'Model_Crud' --app-path ./app");
    println!("  stoke scan classes/App/Models/User.unit");
    println!("  stoke explain L0004");
}
