fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    kickoff::cli::run()
}
