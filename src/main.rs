mod app;
mod cli;

fn main() {
    let cli = cli::parse();
    dailynote::logging::init(cli.verbose);
    app::run(cli);
}
