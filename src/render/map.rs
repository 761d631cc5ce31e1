//! Customer Map
//!
//! Renders a Leaflet map with one marker per customer. Marker data is
//! serialized into the page script; the popup carries an embedded video
//! frame followed by the customer's name, city and coordinates.

use serde::Serialize;

use super::error::RenderResult;
use crate::data::CustomerRecord;

/// Tooltip shown when hovering a marker
pub const MAP_TOOLTIP: &str = "Ver cliente";

const POPUP_MAX_WIDTH: u32 = 300;
const LEAFLET_VERSION: &str = "1.9.4";

/// Fixed map presentation settings
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub center: (f64, f64),
    pub zoom: u8,
    pub tile_url: String,
    pub video_url: String,
    pub element_id: String,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: (20.0, -40.0),
            zoom: 2,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            video_url: "https://www.youtube.com/embed/dQw4w9WgXcQ".to_string(),
            element_id: "customer-map".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct MarkerData {
    lat: f64,
    lng: f64,
    popup: String,
    tooltip: &'static str,
}

/// Popup body for a single customer marker
pub fn popup_html(customer: &CustomerRecord, video_url: &str) -> String {
    format!(
        "<iframe width=\"250\" height=\"150\" src=\"{}\" frameborder=\"0\" allowfullscreen></iframe>\
         <br><b>Nombre:</b> {} <br>\
         <b>Ciudad:</b> {} <br>\
         <b>Latitud:</b> {:.2} <br>\
         <b>Longitud:</b> {:.2}",
        ammonia::clean_text(video_url),
        ammonia::clean_text(&customer.name),
        ammonia::clean_text(customer.city),
        customer.latitude,
        customer.longitude
    )
}

/// Map container plus the script that builds the map and its markers
pub fn render_map(customers: &[CustomerRecord], options: &MapOptions) -> RenderResult<String> {
    let markers: Vec<MarkerData> = customers
        .iter()
        .map(|c| MarkerData {
            lat: c.latitude,
            lng: c.longitude,
            popup: popup_html(c, &options.video_url),
            tooltip: MAP_TOOLTIP,
        })
        .collect();

    let markers_json = script_safe(&serde_json::to_string(&markers)?);
    let tile_url = script_safe(&serde_json::to_string(&options.tile_url)?);
    let element_id = ammonia::clean_text(&options.element_id);

    Ok(format!(
        r#"<link rel="stylesheet" href="https://unpkg.com/leaflet@{v}/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@{v}/dist/leaflet.js"></script>
<div id="{id}" class="map" style="height: 480px;"></div>
<script>
(function () {{
  var map = L.map("{id}").setView([{lat}, {lng}], {zoom});
  L.tileLayer({tiles}, {{ attribution: "&copy; OpenStreetMap contributors" }}).addTo(map);
  var markers = {markers};
  markers.forEach(function (m) {{
    L.marker([m.lat, m.lng])
      .bindPopup(m.popup, {{ maxWidth: {max_width} }})
      .bindTooltip(m.tooltip)
      .addTo(map);
  }});
}})();
</script>
"#,
        v = LEAFLET_VERSION,
        id = element_id,
        lat = options.center.0,
        lng = options.center.1,
        zoom = options.zoom,
        tiles = tile_url,
        markers = markers_json,
        max_width = POPUP_MAX_WIDTH,
    ))
}

/// Keep serialized JSON from closing the surrounding script element
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataGenerator;

    fn customer() -> CustomerRecord {
        CustomerRecord {
            latitude: 12.3456,
            longitude: -45.6789,
            name: "Cliente 3".to_string(),
            city: "Valencia",
        }
    }

    #[test]
    fn test_popup_contents() {
        let html = popup_html(&customer(), "https://example.com/embed/x");

        assert!(html.starts_with("<iframe width=\"250\" height=\"150\""));
        assert!(html.contains("<b>Nombre:</b> Cliente&#32;3"));
        assert!(html.contains("<b>Ciudad:</b> Valencia"));
        assert!(html.contains("<b>Latitud:</b> 12.35"));
        assert!(html.contains("<b>Longitud:</b> -45.68"));
    }

    #[test]
    fn test_map_has_marker_per_customer() {
        let data = DataGenerator::default().generate();
        let html = render_map(&data.customers, &MapOptions::default()).unwrap();

        assert_eq!(html.matches("\"tooltip\":\"Ver cliente\"").count(), 10);
        assert!(html.contains("setView([20, -40], 2)"));
        assert!(html.contains("maxWidth: 300"));
    }

    #[test]
    fn test_marker_json_cannot_close_script() {
        let html = render_map(&[customer()], &MapOptions::default()).unwrap();
        let script_start = html.find("var markers").unwrap();
        let script_end = html[script_start..].find("</script>").unwrap() + script_start;

        assert!(html[script_start..script_end].contains("<\\/iframe>"));
        assert!(html[script_end..].contains("</script>"));
    }

    #[test]
    fn test_no_customers_renders_empty_marker_list() {
        let html = render_map(&[], &MapOptions::default()).unwrap();
        assert!(html.contains("var markers = [];"));
    }
}
