mod canvas;
mod compositor;
mod corner_mask;
mod frame;

fn main() {
    env_logger::init(); // Initialize logger

    match compositor::combine() {
        Ok(path) => println!("Saved combined image to {}", path.display()),
        Err(e) => {
            eprintln!("❌ Failed to combine images: {}", e);
            std::process::exit(1);
        }
    }
}
