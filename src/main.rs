use gallery_lightbox_ui::{logger, App};
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Info);
    leptos::mount::mount_to_body(App);
}
