//! Binary entrypoint for typcat-cli (made by FontLab https://www.fontlab.com/)

fn main() {
    if let Err(err) = typcat_cli::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
