mod animation;
mod components;
mod config;
mod error;
mod game;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    yew::start_app::<components::app::App>();
}
