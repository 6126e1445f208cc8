mod app;
mod drag;
mod hand;
mod overlay;
mod surface;

use app::App;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    yew::Renderer::<App>::new().render();
}
