fn main() {
    if let Err(err) = label_annealer::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
