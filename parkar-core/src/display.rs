//! Mapping of domain values onto labels and style classes.

use strum::IntoEnumIterator;

use crate::entities::*;

pub const fn availability_label(availability: Availability) -> &'static str {
    match availability {
        Availability::Available => "Available",
        Availability::Limited => "Limited spots",
        Availability::Full => "Full",
    }
}

pub const fn availability_text_class(availability: Availability) -> &'static str {
    match availability {
        Availability::Available => "text-success",
        Availability::Limited => "text-warning",
        Availability::Full => "text-destructive",
    }
}

pub const fn marker_class(availability: Availability) -> &'static str {
    match availability {
        Availability::Available => "parking-marker parking-marker--available",
        Availability::Limited => "parking-marker parking-marker--limited",
        Availability::Full => "parking-marker parking-marker--full",
    }
}

pub const fn spot_type_label(spot_type: SpotType) -> &'static str {
    match spot_type {
        SpotType::Street => "Street",
        SpotType::Garage => "Garage",
        SpotType::Lot => "Lot",
    }
}

/// Label of the reservation control, if the spot offers one.
///
/// Full spots offer no reservation at all.
pub const fn reserve_action_label(spot: &ParkingSpot) -> Option<&'static str> {
    if spot.is_reservable() {
        Some("Reserve Spot")
    } else {
        None
    }
}

/// Absolute position of a marker on the canvas.
pub fn marker_position_style(pos: CanvasPos) -> String {
    format!("left: {}%; top: {}%;", pos.x(), pos.y())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry {
    pub dot_class: &'static str,
    pub label: &'static str,
}

pub fn legend() -> Vec<LegendEntry> {
    Availability::iter()
        .map(|availability| {
            let (dot_class, label) = match availability {
                Availability::Available => ("bg-success", "Available"),
                Availability::Limited => ("bg-warning", "Limited"),
                Availability::Full => ("bg-destructive", "Full"),
            };
            LegendEntry { dot_class, label }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: &'static str,
    pub value_class: &'static str,
}

/// Rows of the info panel of a selected spot.
pub fn info_rows(spot: &ParkingSpot) -> Vec<InfoRow> {
    let mut rows = vec![
        InfoRow {
            label: "Status:",
            value: availability_label(spot.availability),
            value_class: availability_text_class(spot.availability),
        },
        InfoRow {
            label: "City:",
            value: spot.city,
            value_class: "",
        },
        InfoRow {
            label: "Price:",
            value: spot.price,
            value_class: "",
        },
        InfoRow {
            label: "Type:",
            value: spot_type_label(spot.spot_type),
            value_class: "",
        },
    ];
    if let Some(time_limit) = spot.time_limit {
        rows.push(InfoRow {
            label: "Time limit:",
            value: time_limit,
            value_class: "",
        });
    }
    rows
}
