fn main() {
    if let Err(err) = udfbackup::cli::run() {
        eprintln!("udfbackup: {:#}", err);
        std::process::exit(udfbackup::error::EXIT_USAGE);
    }
}
