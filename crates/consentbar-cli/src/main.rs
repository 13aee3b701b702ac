#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = consentbar_cli::run_from_env() {
        eprintln!("consentbar: {error}");
        std::process::exit(error.exit_code());
    }
}
