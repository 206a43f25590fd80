fn main() {
    barrage::game::run();
}
