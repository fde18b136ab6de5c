fn main() {
    // Run the CLI
    tocer::cli::run();
}
