use log::{info, Level};
use renovation_frontend::App;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
