fn main() {
    arngren_storefront::start();
}
