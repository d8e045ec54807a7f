#[cfg(feature = "yew")]
fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Starting calorie tracker");

    let config = calorie_tracker::config::Config::from_env();
    yew::Renderer::<calorie_tracker::app::App>::with_props(calorie_tracker::app::AppProps {
        config,
    })
    .render();
}

#[cfg(not(feature = "yew"))]
fn main() {
    println!("Please enable the 'yew' feature to run the app.");
}
