use std::{
    env,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use toyfront::{
    analyze,
    errors::errors::{Error, ErrorTip},
    init_tracing,
    lexer::tokens::UNKNOWN_CHARACTERS_WARNING,
};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: {} [FILE]", args[0]);
        return ExitCode::FAILURE;
    }

    let source = match read_source(args.get(1).map(PathBuf::from)) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read source: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let analysis = analyze(&source);

    print!("{}", analysis.scan.buckets);

    if analysis.scan.had_unknown {
        println!("{}", UNKNOWN_CHARACTERS_WARNING);
    }

    let status = match analysis.tree {
        Ok(tree) => {
            print!("{}", tree);
            ExitCode::SUCCESS
        }
        Err(error) => {
            display_error(&error);
            ExitCode::FAILURE
        }
    };

    tracing::debug!(elapsed = ?start.elapsed(), "analysis finished");

    status
}

fn read_source(file: Option<PathBuf>) -> io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn display_error(error: &Error) {
    /*
        Error: ValidationFailed
          - code must start with `int` or `float`, found void
          - unbalanced parentheses: 1 `(` against 0 `)`
    */

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }

    if error.is_validation() {
        for issue in error.issues() {
            println!("  - {}", issue);
        }
    } else {
        println!("  - {}", error);
    }
}
