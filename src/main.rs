fn main() {
    if let Err(e) = zoom_template::cli::main() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
