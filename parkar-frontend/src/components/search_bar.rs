use leptos::{ev, *};

use parkar_core::search::SearchInput;

#[component]
pub fn SearchBar(
    placeholder: String,
    quick_cities: Vec<String>,
    #[prop(into)] on_search: Callback<String>,
) -> impl IntoView {
    let input = RwSignal::new(SearchInput::default());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit_search(input, on_search);
    };

    view! {
      <div class="w-full max-w-4xl mx-auto">
        <form on:submit=on_submit class="flex flex-col sm:flex-row gap-3">
          <div class="relative flex-1">
            <i class="icon icon-map-pin absolute left-3 top-1/2 transform -translate-y-1/2 text-muted-foreground w-5 h-5"></i>
            <input
              type="text"
              placeholder=placeholder
              class="w-full pl-10 pr-4 py-3 border border-input rounded-lg bg-background text-foreground placeholder:text-muted-foreground focus:outline-none focus:ring-2 focus:ring-ring focus:border-transparent shadow-card"
              prop:value=move || input.with(|input| input.value().to_owned())
              on:input=move |ev| {
                let value = event_target_value(&ev);
                input.update(|input| input.set_value(value));
              }
            />
          </div>
          <div class="flex gap-2">
            // Filters are not implemented yet.
            <button type="button" class="btn btn-outline btn-lg px-4">
              <i class="icon icon-filter w-4 h-4"></i>
              <span class="hidden sm:inline">"Filters"</span>
            </button>
            <button type="submit" class="btn btn-hero btn-lg px-6">
              <i class="icon icon-search w-4 h-4"></i>
              <span class="hidden sm:inline">"Find Parking"</span>
            </button>
          </div>
        </form>
        // Quick location buttons
        <div class="flex flex-wrap gap-2 mt-4 justify-center">
          {
            quick_cities
              .into_iter()
              .map(|city| view! { <QuickCityButton city input on_search /> })
              .collect_view()
          }
        </div>
      </div>
    }
}

#[component]
fn QuickCityButton(
    city: String,
    input: RwSignal<SearchInput>,
    on_search: Callback<String>,
) -> impl IntoView {
    let label = city.clone();
    view! {
      <button
        type="button"
        class="px-3 py-1 text-sm bg-secondary text-secondary-foreground rounded-full hover:bg-secondary/80 transition-colors"
        on:click=move |_| {
          search_quick_city(input, &city, on_search);
        }
      >
        { label }
      </button>
    }
}

fn submit_search(input: RwSignal<SearchInput>, on_search: Callback<String>) {
    let location = input.with_untracked(SearchInput::submit);
    on_search.call(location);
}

// The callback runs after the update so it may read the input signal.
fn search_quick_city(input: RwSignal<SearchInput>, city: &str, on_search: Callback<String>) {
    let Some(location) = input.try_update(|input| input.quick_select(city)) else {
        log::warn!("Search input is no longer available");
        return;
    };
    on_search.call(location);
}
