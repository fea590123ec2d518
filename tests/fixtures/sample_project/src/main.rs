fn main() {
    println!("Hello from sample project!");
}
