//! Entry point for the WASM application

pub fn main() {
    mintlockr::start()
}
