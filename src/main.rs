#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod config;
mod contact;
mod content;
mod debounce;
mod effects;
mod filter;
mod logging;
mod nav;
mod notice;
mod sync;
mod theme;

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
