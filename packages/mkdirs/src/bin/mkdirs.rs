use std::env;
use std::process;

fn main() {
    mkdirs::logging::init();

    if let Err(e) = mkdirs::run(env::args_os()) {
        eprintln!("{e}");
        process::exit(1);
    }
}
