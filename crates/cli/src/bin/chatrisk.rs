//! chatrisk CLI binary entrypoint.

fn main() {
    if let Err(err) = chatrisk_cli::app::run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
