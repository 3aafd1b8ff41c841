use leptos::*;
use leptos_router::*;

mod components;
mod config;
mod pages;

use self::{config::Config, pages::*};

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    let config = Config::load_from_document_or_default();
    log::debug!("Quick select cities: {:?}", config.search.quick_cities);

    view! {
      <Router>
        <main class="min-h-screen bg-background">
          <Routes>
            <Route
              path=Page::Index.path()
              view=move || view! { <Index config = config.clone() /> }
            />
          </Routes>
        </main>
      </Router>
    }
}
