use leptos::*;

use parkar_core::{
    display::{info_rows, marker_class, marker_position_style, reserve_action_label},
    entities::{ParkingSpot, SpotId},
    map::{MarkerMap, MockMap},
};

// Markers are absolutely positioned in percent of this element.
const MAP_CANVAS_CLASS: &str =
    "relative w-full h-full overflow-hidden rounded-lg shadow-card bg-map-water";

// Decorative land masses, positioned in percent of the canvas.
#[rustfmt::skip]
const LAND_SHAPES: [(f64, f64, f64, f64); 4] = [
    // left, top, width, height
    ( 4.0, 18.0, 34.0, 48.0), // North America
    (56.0, 14.0, 30.0, 40.0), // Europe
    (22.0, 66.0, 14.0, 28.0), // South America
    (60.0, 58.0, 18.0, 34.0), // Africa
];

#[component]
pub fn Map() -> impl IntoView {
    let map = RwSignal::new(MockMap::default());
    let marker_scale = Signal::derive(move || map.with(MockMap::marker_scale));

    let on_select = move |id: SpotId| {
        map.update(|map| {
            if let Err(err) = map.select_spot(id.as_str()) {
                log::warn!("Unable to select marker: {err}");
            }
        });
    };

    let on_reserve = move |id: SpotId| {
        if let Err(err) = map.with_untracked(|map| map.reserve(id.as_str())) {
            log::warn!("Unable to reserve: {err}");
        }
    };

    let markers = map.with_untracked(|map| map.markers().to_vec());

    view! {
      <div class=MAP_CANVAS_CLASS>
        <MapBackground />
        {
          markers
            .into_iter()
            .map(|spot| view! { <SpotMarker spot scale = marker_scale on_select /> })
            .collect_view()
        }
        <div class="absolute top-4 right-4 flex flex-col gap-2">
          <button
            type="button"
            class="btn btn-secondary btn-icon shadow-card"
            title="Zoom in"
            prop:disabled=move || !map.with(MockMap::can_zoom_in)
            on:click=move |_| map.update(MockMap::zoom_in)
          >
            "+"
          </button>
          <button
            type="button"
            class="btn btn-secondary btn-icon shadow-card"
            title="Zoom out"
            prop:disabled=move || !map.with(MockMap::can_zoom_out)
            on:click=move |_| map.update(MockMap::zoom_out)
          >
            "−"
          </button>
        </div>
        {move || map.with(|map| map.selected_spot().copied()).map(|spot| view! {
          <SpotInfo
            spot
            on_dismiss = move |()| map.update(MockMap::dismiss)
            on_reserve
          />
        })}
      </div>
    }
}

#[component]
fn MapBackground() -> impl IntoView {
    view! {
      <div class="absolute inset-0 map-grid"></div>
      {
        LAND_SHAPES
          .iter()
          .map(|(left, top, width, height)| {
            let style = format!("left: {left}%; top: {top}%; width: {width}%; height: {height}%;");
            view! { <div class="absolute rounded-[40%] bg-map-land opacity-70" style=style></div> }
          })
          .collect_view()
      }
    }
}

#[component]
fn SpotMarker(
    spot: ParkingSpot,
    #[prop(into)] scale: Signal<String>,
    #[prop(into)] on_select: Callback<SpotId>,
) -> impl IntoView {
    let id = spot.id;
    view! {
      <button
        type="button"
        class=marker_class(spot.availability)
        style=marker_position_style(spot.pos)
        title=spot.city
        on:click=move |_| on_select.call(id)
      >
        <div class="parking-marker__body" style:transform=move || scale.get()>
          <div class="parking-marker__icon">"P"</div>
          <div class="parking-marker__price">{ spot.price }</div>
        </div>
      </button>
    }
}

#[component]
fn SpotInfo(
    spot: ParkingSpot,
    #[prop(into)] on_dismiss: Callback<()>,
    #[prop(into)] on_reserve: Callback<SpotId>,
) -> impl IntoView {
    let id = spot.id;
    view! {
      <div class="absolute bottom-4 left-4 right-4 bg-card p-4 rounded-lg shadow-elegant border max-w-sm mx-auto">
        <div class="flex items-start justify-between">
          <div class="flex items-center gap-2 mb-2">
            <i class="icon icon-car w-5 h-5 text-primary"></i>
            <span class="font-semibold">"Parking Spot"</span>
          </div>
          <button
            type="button"
            class="text-muted-foreground hover:text-foreground"
            on:click=move |_| on_dismiss.call(())
          >
            "×"
          </button>
        </div>
        <div class="space-y-2">
          {
            info_rows(&spot)
              .into_iter()
              .map(|row| view! {
                <div class="flex items-center justify-between">
                  <span class="text-sm text-muted-foreground">{ row.label }</span>
                  <span class=format!("text-sm font-medium {}", row.value_class)>{ row.value }</span>
                </div>
              })
              .collect_view()
          }
        </div>
        { reserve_action_label(&spot).map(|label| view! {
          <button
            type="button"
            class="w-full mt-3 bg-primary text-primary-foreground py-2 rounded-md text-sm font-medium hover:bg-primary-hover transition-colors"
            on:click=move |_| on_reserve.call(id)
          >
            { label }
          </button>
        })}
      </div>
    }
}
