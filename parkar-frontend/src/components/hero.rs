use leptos::*;

use super::SearchBar;
use crate::config;

struct Feature {
    icon_class: &'static str,
    title: &'static str,
    description: &'static str,
}

#[rustfmt::skip]
static FEATURES: [Feature; 4] = [
    Feature { icon_class: "icon-map-pin text-success",     title: "Real-time Availability", description: "Live updates on parking spots" },
    Feature { icon_class: "icon-clock text-warning",       title: "Reserve in Advance",     description: "Book your spot ahead of time" },
    Feature { icon_class: "icon-credit-card text-primary", title: "Seamless Payment",       description: "Pay directly through the app" },
    Feature { icon_class: "icon-car text-white",           title: "All Vehicle Types",      description: "Cars, motorcycles, and more" },
];

#[component]
pub fn Hero(search: config::Search) -> impl IntoView {
    let config::Search {
        placeholder,
        quick_cities,
    } = search;

    // There is no search backend: the request is only logged.
    let on_search = move |location: String| {
        log::info!("Searching for parking in: {location}");
    };

    view! {
      <div class="relative min-h-screen flex items-center justify-center overflow-hidden">
        <div class="absolute inset-0 bg-cover bg-center bg-no-repeat bg-hero-image">
          <div class="absolute inset-0 bg-black/40"></div>
        </div>
        <div class="relative z-10 w-full max-w-6xl mx-auto px-4 py-20 text-center">
          // Brand
          <div class="mb-8">
            <h1 class="text-5xl md:text-7xl font-bold text-white mb-4">
              "Par"<span class="text-transparent bg-gradient-hero bg-clip-text">"kar"</span>
            </h1>
            <p class="text-xl md:text-2xl text-white/90 max-w-2xl mx-auto">
              "Find and pay for parking anywhere in Europe and USA"
            </p>
          </div>
          <div class="mb-12">
            <SearchBar placeholder quick_cities on_search />
          </div>
          <div class="grid grid-cols-1 md:grid-cols-4 gap-6 max-w-4xl mx-auto">
            { FEATURES.iter().map(|feature| view! { <FeatureCard feature /> }).collect_view() }
          </div>
          <div class="mt-12">
            <button
              type="button"
              class="btn btn-hero btn-lg text-lg px-8 py-4"
            >
              "Start Finding Parking"
            </button>
          </div>
        </div>
      </div>
    }
}

#[component]
fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    view! {
      <div class="bg-white/10 backdrop-blur-sm rounded-lg p-6 text-white">
        <i class=format!("icon w-8 h-8 mx-auto mb-3 {}", feature.icon_class)></i>
        <h3 class="font-semibold mb-2">{ feature.title }</h3>
        <p class="text-sm text-white/80">{ feature.description }</p>
      </div>
    }
}
