fn main() {
    landing_frontend::start();
}
