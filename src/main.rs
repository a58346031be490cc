fn main() {
    env_logger::init();

    if let Err(error) = virtual_stack::run_cli() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
