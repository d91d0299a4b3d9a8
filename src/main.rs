fn main() {
    if let Err(err) = kintuni_chart::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
