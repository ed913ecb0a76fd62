mod api;
mod app;
mod components;
mod hooks;
mod utils;

fn main() {
    dioxus::launch(app::App);
}
