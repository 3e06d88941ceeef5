use std::io;

fn main() {
    cardplay_cli::logging::init_logging();
    let code = cardplay_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
