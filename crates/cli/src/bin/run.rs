//! Run entry point: `run [-c config] [-p project] [-t unit|all]`
use buildrun::{Entry, exit_status, init_tracing};

fn main() {
    init_tracing();
    let tokens: Vec<String> = std::env::args().skip(1).collect();
    std::process::exit(exit_status(Entry::Run.execute(&tokens)));
}
