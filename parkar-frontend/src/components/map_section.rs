use leptos::*;

use parkar_core::display::legend;

use super::Map;
use crate::config;

#[rustfmt::skip]
const STATS: [(&str, &str, &str); 3] = [
    // value, label, color
    ("50,000+", "Parking Spots",  "text-primary"),
    ("100+",    "Cities Covered", "text-success"),
    ("1M+",     "Happy Drivers",  "text-warning"),
];

#[component]
pub fn MapSection(map: config::MapSection) -> impl IntoView {
    let config::MapSection { title, description } = map;
    view! {
      <section class="w-full py-12 bg-background">
        <div class="container mx-auto px-4">
          <div class="text-center mb-8">
            <h2 class="text-3xl md:text-4xl font-bold mb-4">{ title }</h2>
            <p class="text-lg text-muted-foreground max-w-2xl mx-auto">{ description }</p>
          </div>
          <div class="relative">
            <div class="w-full h-[600px] rounded-lg overflow-hidden shadow-elegant">
              <Map />
            </div>
            // These controls are decorative only.
            <div class="absolute top-4 left-4 flex flex-col gap-2">
              <button type="button" class="btn btn-secondary btn-icon shadow-card" title="Navigation">
                <i class="icon icon-navigation w-4 h-4"></i>
              </button>
              <button type="button" class="btn btn-secondary btn-icon shadow-card" title="List">
                <i class="icon icon-list w-4 h-4"></i>
              </button>
              <button type="button" class="btn btn-secondary btn-icon shadow-card" title="Settings">
                <i class="icon icon-settings w-4 h-4"></i>
              </button>
            </div>
            <Legend />
          </div>
          <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-12">
            {
              STATS
                .iter()
                .map(|(value, label, color)| view! {
                  <div class="text-center p-6 bg-card rounded-lg shadow-card">
                    <div class=format!("text-3xl font-bold mb-2 {color}")>{ *value }</div>
                    <div class="text-muted-foreground">{ *label }</div>
                  </div>
                })
                .collect_view()
            }
          </div>
        </div>
      </section>
    }
}

#[component]
fn Legend() -> impl IntoView {
    view! {
      <div class="absolute bottom-4 right-4 bg-card p-4 rounded-lg shadow-elegant border">
        <h4 class="font-semibold mb-3 text-sm">"Availability Legend"</h4>
        <div class="space-y-2">
          {
            legend()
              .into_iter()
              .map(|entry| view! {
                <div class="flex items-center gap-2">
                  <div class=format!("w-3 h-3 rounded-full {}", entry.dot_class)></div>
                  <span class="text-xs">{ entry.label }</span>
                </div>
              })
              .collect_view()
          }
        </div>
      </div>
    }
}
