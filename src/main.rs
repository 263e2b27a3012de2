fn main() {
    if let Err(err) = invoice_flatten::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
