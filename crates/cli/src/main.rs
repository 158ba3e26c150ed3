use buildrun::{Cli, Entry, exit_status, init_tracing};
use clap::Parser;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    // Invoked through a `buildsln` or `run` link: everything after argv[0] is flag tokens
    let code = match args.first().and_then(|argv0| Entry::from_program_name(argv0)) {
        Some(entry) => exit_status(entry.execute(&args[1..])),
        None => exit_status(Cli::parse().execute()),
    };

    std::process::exit(code);
}
