use leptos::*;

use crate::{components::*, config::Config};

#[component]
pub fn Index(config: Config) -> impl IntoView {
    let Config { search, map } = config;
    view! {
      <Hero search />
      <MapSection map />
    }
}
