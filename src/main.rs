use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use log::{error, info};
use monkey_front::{display_error, parse};

const PROMPT: &str = ">> ";

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let result = match args.len() {
        1 => repl(),
        2 => check_file(PathBuf::from(&args[1])),
        _ => {
            eprintln!("usage: {} [file]", args[0]);
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Parses one file and prints either its syntax tree or its diagnostics.
/// Returns whether the file parsed cleanly.
fn check_file(path: PathBuf) -> io::Result<bool> {
    let file_contents = read_to_string(&path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    let start = Instant::now();
    let (program, errors) = parse(&file_contents, file_name);
    info!("Parsed {} statements in {:?}", program.len(), start.elapsed());

    if errors.is_empty() {
        println!("{}", program);
        return Ok(true);
    }

    for error in &errors {
        display_error(error, &file_contents);
    }

    Ok(false)
}

/// Reads a line, parses it and prints the re-rendered program or the
/// diagnostics. Evaluation is left to whoever embeds the parser.
fn repl() -> io::Result<bool> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(true);
        }

        let (program, errors) = parse(&line, None);

        if errors.is_empty() {
            println!("{}", program);
            continue;
        }

        println!("parser errors:");
        for error in &errors {
            println!("\t{}", error);
        }
    }
}
