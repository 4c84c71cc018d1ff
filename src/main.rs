fn main() {
    kaleido::cli::run();
}
