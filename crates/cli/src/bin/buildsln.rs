//! Build entry point: `buildsln [-c debug|release]`
use buildrun::{Entry, exit_status, init_tracing};

fn main() {
    init_tracing();
    let tokens: Vec<String> = std::env::args().skip(1).collect();
    std::process::exit(exit_status(Entry::Build.execute(&tokens)));
}
