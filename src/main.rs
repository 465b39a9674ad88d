mod app;
mod logging;

fn main() {
    let args = labelmv::cli::parse();
    std::process::exit(app::run(args));
}
