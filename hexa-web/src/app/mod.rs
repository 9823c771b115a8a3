use yew::prelude::*;

pub mod state;
pub mod view;

pub use state::{AppState, Screen};

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    state::use_persist_state(&app_state);
    view::render_app(&app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn app_renders_roster_without_browser_storage() {
        let html = block_on(LocalServerRenderer::<App>::new().render());
        assert!(html.contains("HEXA Tracker"));
        assert!(html.contains("No characters yet"));
        assert!(html.contains("data-open-btn"));
    }
}
