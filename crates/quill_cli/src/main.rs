//! Quill CLI
//!
//! Highlights and re-indents ECMAScript, TypeScript and JSON files.

use quill_cli::commands::{list_mimes, run_check_indent, run_highlight, run_indent};
use quill_cli::{init_tracing, Options};

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let result = match command.as_str() {
        "highlight" => Options::parse(&args[2..]).and_then(|options| run_highlight(&options)),
        "indent" => Options::parse(&args[2..]).and_then(|options| run_indent(&options)),
        "check-indent" => match Options::parse(&args[2..]).and_then(|o| run_check_indent(&o)) {
            Ok(0) => Ok(()),
            Ok(count) => {
                eprintln!("{count} line(s) with unexpected indentation");
                std::process::exit(1);
            }
            Err(e) => Err(e),
        },
        "mimes" => {
            print!("{}", list_mimes());
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("quill {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Quill: highlighting and indentation for JavaScript, TypeScript and JSON");
    println!();
    println!("Usage: quill <command> [options] <files...>");
    println!();
    println!("Commands:");
    println!("  highlight <files...>     Print `line:col style text` for every token");
    println!("  indent <files...>        Print the files re-indented");
    println!("  check-indent <files...>  Report lines whose indentation differs");
    println!("  mimes                    List supported MIME types");
    println!("  help                     Show this help message");
    println!("  version                  Show version information");
    println!();
    println!("Options:");
    println!("  --mime=<type>              MIME type or mode name (default: by extension)");
    println!("  --indent-unit=<n>          Columns per indentation level (default: 4)");
    println!("  --tab-size=<n>             Tab width (default: 4)");
    println!("  --statement-indent=<n>     Indent for continued statements");
    println!("  --no-double-indent-switch  Indent `case` bodies one level, not two");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=quill_mode=trace  Trace the parser and indentation oracle");
    println!();
    println!("Examples:");
    println!("  quill highlight app.js");
    println!("  quill indent --indent-unit=2 src/*.ts");
    println!("  quill check-indent --mime=application/json package.json");
}
