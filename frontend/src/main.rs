fn main() {
    money_manager_frontend::run();
}
