//! Offline HTML map rendering.
//!
//! The map is drawn as inline SVG in a Web Mercator projection around the
//! mean of all stays. Popups, wheel zoom and drag panning are handled by a
//! small inline script, so the page needs no network access at all.

use std::f64::consts::PI;

use chrono::DateTime;
use geo::{BoundingRect, Centroid, MultiPoint, Point};
use geostay_lib::{route::Route, stay::Stay};
use serde_json::Value;

use crate::{GeostayError, GeostayResult};

pub const DEFAULT_TITLE: &str = "Stay map";
const TILE_SIZE: f64 = 256.;
const MAX_MERCATOR_LAT: f64 = 85.051_128_78;
const ROUTE_COLOR: &str = "#ff4757";
const SUMMARY_COLOR: &str = "#2e7d32";

/// Marker colors, cycled in stop order.
pub const PALETTE: [&str; 17] = [
    "#d63e2a", // red
    "#38aadd", // blue
    "#72b026", // green
    "#d252b9", // purple
    "#f69730", // orange
    "#a23336", // darkred
    "#ff8e7f", // lightred
    "#ffcb92", // beige
    "#0067a3", // darkblue
    "#728224", // darkgreen
    "#436978", // cadetblue
    "#5b396b", // darkpurple
    "#ff91ea", // pink
    "#8adaff", // lightblue
    "#bbf970", // lightgreen
    "#575757", // gray
    "#303030", // black
];

/// Record fields shown in a stay popup, with their labels.
const POPUP_FIELDS: [(&str, &str); 7] = [
    ("stayNumber", "Stay #"),
    ("start", "Start"),
    ("end", "End"),
    ("duration", "Duration"),
    ("dataPoints", "Points"),
    ("averageSpeed", "Avg Speed"),
    ("searchRadius", "Radius"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.into(),
            width: 1024,
            height: 640,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    /// x = longitude, y = latitude
    pub center: Point,
    pub zoom: u8,
}

impl MapView {
    /// Center on the mean position, zoom from the bounding box diagonal.
    pub fn fit(stays: &[Stay]) -> Self {
        let points: MultiPoint = stays.iter().map(|stay| stay.position).collect::<Vec<_>>().into();

        let Some(center) = points.centroid() else {
            return Self {
                center: Point::new(0., 0.),
                zoom: 2,
            };
        };

        let span = points
            .bounding_rect()
            .map(|rect| rect.width().hypot(rect.height()))
            .unwrap_or(0.);

        Self {
            center,
            zoom: zoom_for_span(span),
        }
    }
}

/// Larger spread gives a lower zoom level. `span` is in degrees.
pub fn zoom_for_span(span: f64) -> u8 {
    if span > 10. {
        5
    } else if span > 1. {
        9
    } else if span > 0.1 {
        12
    } else if span > 0.01 {
        14
    } else {
        16
    }
}

pub fn format_km(distance_km: f64) -> String {
    format!("{:.1} km", distance_km)
}

pub fn marker_color(number: usize) -> &'static str {
    PALETTE[(number.saturating_sub(1)) % PALETTE.len()]
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Web Mercator pixel projection, translated so the view center lands in the middle of the viewport.
struct Projection {
    world_size: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Projection {
    fn new(view: &MapView, width: f64, height: f64) -> Self {
        let world_size = TILE_SIZE * 2f64.powi(view.zoom as i32);
        let (cx, cy) = Self::world(world_size, view.center);
        Self {
            world_size,
            offset_x: width / 2. - cx,
            offset_y: height / 2. - cy,
        }
    }

    fn world(world_size: f64, point: Point) -> (f64, f64) {
        let lat = point.y().clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
        let x = (point.x() + 180.) / 360. * world_size;
        let y = (1. - (lat.tan() + 1. / lat.cos()).ln() / PI) / 2. * world_size;
        (x, y)
    }

    fn project(&self, point: Point) -> (f64, f64) {
        let (x, y) = Self::world(self.world_size, point);
        (x + self.offset_x, y + self.offset_y)
    }

    fn unproject_lng(&self, x: f64) -> f64 {
        (x - self.offset_x) / self.world_size * 360. - 180.
    }

    fn unproject_lat(&self, y: f64) -> f64 {
        let n = PI * (1. - 2. * (y - self.offset_y) / self.world_size);
        n.sinh().atan().to_degrees()
    }
}

/// Pick a grid spacing giving a handful of lines across `extent` degrees.
fn grid_step(extent: f64) -> f64 {
    const STEPS: [f64; 15] = [
        0.0005, 0.001, 0.002, 0.005, 0.01, 0.02, 0.05, 0.1, 0.2, 0.5, 1., 2., 5., 10., 30.,
    ];
    STEPS
        .into_iter()
        .find(|step| extent / step <= 8.)
        .unwrap_or(30.)
}

fn grid_decimals(step: f64) -> usize {
    if step >= 1. {
        0
    } else {
        (-step.log10() - 1e-9).ceil() as usize
    }
}

fn display_value(key: &str, value: &Value) -> String {
    match value {
        Value::String(s) if key == "start" || key == "end" => DateTime::parse_from_rfc3339(s)
            .map(|t| t.format("%d/%m/%Y %H:%M").to_string())
            .unwrap_or_else(|_| s.clone()),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn stay_popup_html(stay: &Stay) -> String {
    let color = marker_color(stay.number);
    let mut html = format!(
        "<div class=\"popup-content\"><h3 style=\"color:{}\">Location #{}</h3><p><strong>Coords:</strong> {:.6}, {:.6}</p>",
        color,
        stay.number,
        stay.latitude(),
        stay.longitude()
    );

    for (key, label) in POPUP_FIELDS {
        if let Some(value) = stay.field(key) {
            html.push_str(&format!(
                "<p><strong>{}:</strong> {}</p>",
                label,
                escape_html(&display_value(key, value))
            ));
        }
    }

    html.push_str("</div>");
    html
}

pub fn summary_popup_html(stays: &[Stay], route: &Route) -> String {
    format!(
        "<div class=\"popup-content\"><h4 style=\"color:{}\">Route</h4><p><strong>Total:</strong> {}</p><p><strong>Points:</strong> {}</p><p class=\"note\">Straight-line only</p></div>",
        SUMMARY_COLOR,
        format_km(route.total_km),
        stays.len()
    )
}

/// Render the full self-contained HTML document.
pub fn render_html(stays: &[Stay], route: &Route, options: &RenderOptions) -> GeostayResult<String> {
    if stays.is_empty() {
        return Err(GeostayError::EmptyCoordinates);
    }

    let view = MapView::fit(stays);
    tracing::debug!(
        "Map view centered on ({:.6}, {:.6}) at zoom {}",
        view.center.y(),
        view.center.x(),
        view.zoom
    );

    let title = escape_html(&options.title);
    let svg = render_svg(stays, route, &view, options);
    let templates = render_popup_templates(stays, route);

    Ok(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n<title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<div id=\"map\">\n{svg}<div id=\"popup\" hidden><button id=\"popup-close\" type=\"button\">&times;</button><div id=\"popup-body\"></div></div>\n</div>\n{templates}<script>{SCRIPT}</script>\n</body>\n</html>\n"
    ))
}

fn render_svg(stays: &[Stay], route: &Route, view: &MapView, options: &RenderOptions) -> String {
    let (w, h) = (options.width as f64, options.height as f64);
    let projection = Projection::new(view, w, h);
    let positions: Vec<(f64, f64)> = stays.iter().map(|stay| projection.project(stay.position)).collect();

    let mut s = String::new();
    s.push_str(&format!(
        "<svg id=\"canvas\" xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\" preserveAspectRatio=\"xMidYMid meet\">\n<title>{}</title>\n",
        escape_html(&options.title)
    ));

    // Background and graticule extend one viewport past each edge so panning stays on the map
    let (x0, y0, x1, y1) = (-w, -h, 2. * w, 2. * h);
    s.push_str(&format!(
        "<rect class=\"land\" x=\"{x0}\" y=\"{y0}\" width=\"{}\" height=\"{}\"/>\n",
        x1 - x0,
        y1 - y0
    ));
    render_graticule(&mut s, &projection, (x0, y0, x1, y1), w);

    // Route
    s.push_str(&format!("<g class=\"route\" stroke=\"{ROUTE_COLOR}\">\n"));
    for (i, segment) in route.segments.iter().enumerate() {
        let (ax, ay) = positions[i];
        let (bx, by) = positions[i + 1];
        s.push_str(&format!(
            "<line class=\"segment\" data-popup=\"segment-{}\" x1=\"{ax:.1}\" y1=\"{ay:.1}\" x2=\"{bx:.1}\" y2=\"{by:.1}\"><title>Segment {}-&gt;{}</title></line>\n",
            segment.from, segment.from, segment.to
        ));
    }
    s.push_str("</g>\n");

    // Distance labels at segment midpoints
    s.push_str("<g class=\"distances\">\n");
    for (i, segment) in route.segments.iter().enumerate() {
        let (ax, ay) = positions[i];
        let (bx, by) = positions[i + 1];
        let label = format_km(segment.distance_km);
        let width = 10. + 7. * label.len() as f64;
        s.push_str(&format!(
            "<g class=\"distance\" data-popup=\"segment-{}\" transform=\"translate({:.1},{:.1})\"><rect x=\"{:.1}\" y=\"-10\" width=\"{width:.1}\" height=\"20\" rx=\"4\" fill=\"{ROUTE_COLOR}\"/><text text-anchor=\"middle\" y=\"4\">{label}</text></g>\n",
            segment.from,
            (ax + bx) / 2.,
            (ay + by) / 2.,
            -width / 2.
        ));
    }
    s.push_str("</g>\n");

    // Summary marker sits just above and right of the first stop
    let (fx, fy) = positions[0];
    s.push_str(&format!(
        "<g class=\"summary-marker\" data-popup=\"summary\" transform=\"translate({:.1},{:.1})\"><title>Route summary</title><rect x=\"-9\" y=\"-9\" width=\"18\" height=\"18\" rx=\"3\" fill=\"{SUMMARY_COLOR}\"/><text text-anchor=\"middle\" y=\"4\">R</text></g>\n",
        fx + 18.,
        fy - 22.
    ));

    // Numbered markers on top
    s.push_str("<g class=\"markers\">\n");
    for (stay, (x, y)) in stays.iter().zip(&positions) {
        s.push_str(&format!(
            "<g class=\"marker\" data-popup=\"stay-{n}\" transform=\"translate({x:.1},{y:.1})\"><title>Location #{n}</title><circle r=\"12\" fill=\"{}\"/><text text-anchor=\"middle\" y=\"5\">{n}</text></g>\n",
            marker_color(stay.number),
            n = stay.number
        ));
    }
    s.push_str("</g>\n");

    s.push_str("</svg>\n");
    s
}

fn render_graticule(s: &mut String, projection: &Projection, bounds: (f64, f64, f64, f64), width: f64) {
    let (x0, y0, x1, y1) = bounds;
    let (west, east) = (projection.unproject_lng(x0), projection.unproject_lng(x1));
    let (north, south) = (projection.unproject_lat(y0), projection.unproject_lat(y1));

    let visible = (projection.unproject_lng(width) - projection.unproject_lng(0.)).abs();
    let step = grid_step(visible);
    let decimals = grid_decimals(step);

    s.push_str("<g class=\"graticule\">\n");

    let mut lng = (west / step).ceil() * step;
    while lng <= east {
        let (x, _) = projection.project(Point::new(lng, 0.));
        s.push_str(&format!(
            "<line x1=\"{x:.1}\" y1=\"{y0:.1}\" x2=\"{x:.1}\" y2=\"{y1:.1}\"/><text x=\"{:.1}\" y=\"{:.1}\">{lng:.decimals$}</text>\n",
            x + 3.,
            y1 - 4.
        ));
        lng += step;
    }

    let mut lat = (south / step).ceil() * step;
    while lat <= north {
        let (_, y) = projection.project(Point::new(0., lat));
        s.push_str(&format!(
            "<line x1=\"{x0:.1}\" y1=\"{y:.1}\" x2=\"{x1:.1}\" y2=\"{y:.1}\"/><text x=\"{:.1}\" y=\"{:.1}\">{lat:.decimals$}</text>\n",
            x0 + 3.,
            y - 3.
        ));
        lat += step;
    }

    s.push_str("</g>\n");
}

fn render_popup_templates(stays: &[Stay], route: &Route) -> String {
    let mut s = String::from("<div id=\"popups\" hidden>\n");

    for stay in stays {
        s.push_str(&format!(
            "<template id=\"popup-stay-{}\">{}</template>\n",
            stay.number,
            stay_popup_html(stay)
        ));
    }

    for segment in &route.segments {
        s.push_str(&format!(
            "<template id=\"popup-segment-{}\"><div class=\"popup-content\">Segment {}-&gt;{}: {}</div></template>\n",
            segment.from,
            segment.from,
            segment.to,
            format_km(segment.distance_km)
        ));
    }

    s.push_str(&format!(
        "<template id=\"popup-summary\">{}</template>\n",
        summary_popup_html(stays, route)
    ));

    s.push_str("</div>\n");
    s
}

const STYLE: &str = r#"
html, body { margin: 0; height: 100%; font-family: Arial, sans-serif; }
#map { position: relative; width: 100%; height: 100%; overflow: hidden; background: #aad3df; }
#canvas { width: 100%; height: 100%; cursor: grab; user-select: none; }
#canvas.dragging { cursor: grabbing; }
.land { fill: #f2efe9; }
.graticule line { stroke: #d4cfc4; stroke-width: 1; vector-effect: non-scaling-stroke; }
.graticule text { fill: #9a9488; font-size: 10px; }
.route line { stroke-width: 4; stroke-opacity: 0.8; stroke-linecap: round; cursor: pointer; }
.distance, .marker, .summary-marker { cursor: pointer; }
.distance text { fill: #fff; font-size: 12px; font-weight: bold; }
.marker circle { stroke: #fff; stroke-width: 2; filter: drop-shadow(0 2px 2px rgba(0, 0, 0, 0.3)); }
.marker text { fill: #fff; font-size: 14px; font-weight: bold; }
.summary-marker rect { stroke: #fff; stroke-width: 2; }
.summary-marker text { fill: #fff; font-size: 12px; font-weight: bold; }
#popup { position: absolute; max-width: 300px; min-width: 180px; padding: 8px 24px 8px 12px; background: #fff; border-radius: 8px; box-shadow: 0 3px 14px rgba(0, 0, 0, 0.4); font-size: 13px; }
#popup-close { position: absolute; top: 2px; right: 4px; border: none; background: none; font-size: 18px; color: #757575; cursor: pointer; }
.popup-content h3, .popup-content h4 { margin: 0 0 8px; }
.popup-content p { margin: 4px 0; }
.popup-content .note { font-size: 11px; color: #666; }
"#;

const SCRIPT: &str = r#"
(function () {
  var svg = document.getElementById('canvas');
  var popup = document.getElementById('popup');
  var body = document.getElementById('popup-body');
  var base = svg.viewBox.baseVal;
  var view = { x: base.x, y: base.y, w: base.width, h: base.height };
  var drag = null;

  function apply() {
    svg.setAttribute('viewBox', view.x + ' ' + view.y + ' ' + view.w + ' ' + view.h);
  }

  function toSvg(e) {
    var p = svg.createSVGPoint();
    p.x = e.clientX;
    p.y = e.clientY;
    return p.matrixTransform(svg.getScreenCTM().inverse());
  }

  function hidePopup() {
    popup.hidden = true;
  }

  function showPopup(id, e) {
    var template = document.getElementById('popup-' + id);
    if (!template) return;
    body.innerHTML = '';
    body.appendChild(template.content.cloneNode(true));
    var rect = svg.parentNode.getBoundingClientRect();
    popup.style.left = (e.clientX - rect.left + 12) + 'px';
    popup.style.top = (e.clientY - rect.top + 12) + 'px';
    popup.hidden = false;
  }

  svg.addEventListener('wheel', function (e) {
    e.preventDefault();
    var p = toSvg(e);
    var f = e.deltaY < 0 ? 0.8 : 1.25;
    view.x = p.x - (p.x - view.x) * f;
    view.y = p.y - (p.y - view.y) * f;
    view.w *= f;
    view.h *= f;
    apply();
    hidePopup();
  }, { passive: false });

  svg.addEventListener('mousedown', function (e) {
    drag = { start: toSvg(e), moved: false };
    svg.classList.add('dragging');
  });

  window.addEventListener('mousemove', function (e) {
    if (!drag) return;
    var p = toSvg(e);
    var dx = drag.start.x - p.x;
    var dy = drag.start.y - p.y;
    if (Math.abs(dx) + Math.abs(dy) > 0) {
      drag.moved = true;
      view.x += dx;
      view.y += dy;
      apply();
      hidePopup();
    }
  });

  window.addEventListener('mouseup', function () {
    svg.classList.remove('dragging');
    setTimeout(function () { drag = null; }, 0);
  });

  svg.addEventListener('click', function (e) {
    if (drag && drag.moved) return;
    var target = e.target.closest('[data-popup]');
    if (target) {
      showPopup(target.getAttribute('data-popup'), e);
    } else {
      hidePopup();
    }
  });

  document.getElementById('popup-close').addEventListener('click', hidePopup);
  svg.addEventListener('dblclick', function () {
    view = { x: base.x, y: base.y, w: base.width, h: base.height };
    apply();
  });
})();
"#;

#[cfg(test)]
mod tests {
    use serde_json::{json, Map};

    use super::*;

    fn stay(number: usize, lat: f64, lng: f64) -> Stay {
        Stay::new(number, lat, lng, Map::new())
    }

    #[test]
    fn zoom_steps() {
        assert_eq!(zoom_for_span(0.), 16);
        assert_eq!(zoom_for_span(0.005), 16);
        assert_eq!(zoom_for_span(0.05), 14);
        assert_eq!(zoom_for_span(0.5), 12);
        assert_eq!(zoom_for_span(5.), 9);
        assert_eq!(zoom_for_span(50.), 5);
    }

    #[test]
    fn zoom_never_increases_with_span() {
        let mut previous = u8::MAX;
        for i in 0..2000 {
            let zoom = zoom_for_span(i as f64 * 0.01);
            assert!(zoom <= previous);
            previous = zoom;
        }
    }

    #[test]
    fn view_centers_on_mean() {
        let stays = [stay(1, 10., 20.), stay(2, 12., 26.), stay(3, 14., 20.)];
        let view = MapView::fit(&stays);
        assert!((view.center.y() - 12.).abs() < 1e-9);
        assert!((view.center.x() - 22.).abs() < 1e-9);
        // Diagonal of a 4 x 6 degree box
        assert_eq!(view.zoom, 9);
    }

    #[test]
    fn single_stay_zooms_in() {
        let view = MapView::fit(&[stay(1, 48.1, 11.5)]);
        assert_eq!(view.zoom, 16);
        assert_eq!(view.center, Point::new(11.5, 48.1));
    }

    #[test]
    fn no_stays_falls_back_to_world_view() {
        let view = MapView::fit(&[]);
        assert_eq!(view.zoom, 2);
        assert_eq!(view.center, Point::new(0., 0.));
    }

    #[test]
    fn projection_puts_center_in_the_middle() {
        let view = MapView {
            center: Point::new(11.5, 48.1),
            zoom: 12,
        };
        let projection = Projection::new(&view, 1024., 640.);
        let (x, y) = projection.project(view.center);
        assert!((x - 512.).abs() < 1e-6);
        assert!((y - 320.).abs() < 1e-6);
        assert!((projection.unproject_lng(x) - 11.5).abs() < 1e-9);
        assert!((projection.unproject_lat(y) - 48.1).abs() < 1e-9);

        // North is up, east is right
        let (nx, ny) = projection.project(Point::new(11.6, 48.2));
        assert!(nx > x && ny < y);
    }

    #[test]
    fn popup_lists_known_fields() {
        let fields = json!({
            "stayNumber": 4,
            "start": "2024-05-01T08:00:00Z",
            "end": "tomorrow <maybe>",
            "averageSpeed": 1.5,
            "ignored": "not shown"
        });
        let stay = Stay::new(2, 48.1351, 11.582, fields.as_object().cloned().unwrap());

        let html = stay_popup_html(&stay);

        assert!(html.contains("Location #2"));
        assert!(html.contains("48.135100, 11.582000"));
        assert!(html.contains("<strong>Stay #:</strong> 4"));
        assert!(html.contains("<strong>Start:</strong> 01/05/2024 08:00"));
        assert!(html.contains("<strong>End:</strong> tomorrow &lt;maybe&gt;"));
        assert!(html.contains("<strong>Avg Speed:</strong> 1.5"));
        assert!(!html.contains("not shown"));
        assert!(html.contains(PALETTE[1]));
    }

    #[test]
    fn colors_cycle() {
        assert_eq!(marker_color(1), PALETTE[0]);
        assert_eq!(marker_color(17), PALETTE[16]);
        assert_eq!(marker_color(18), PALETTE[0]);
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("<a href='x'>&\"</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&quot;&lt;/a&gt;");
    }

    #[test]
    fn grid_step_scales_with_extent() {
        assert_eq!(grid_step(0.0035), 0.0005);
        assert_eq!(grid_step(0.05), 0.01);
        assert_eq!(grid_step(40.), 5.);
        assert_eq!(grid_step(1000.), 30.);
        assert_eq!(grid_decimals(0.01), 2);
        assert_eq!(grid_decimals(0.0005), 4);
        assert_eq!(grid_decimals(5.), 0);
    }

    #[test]
    fn renders_markers_segments_and_summary() {
        let stays = vec![stay(1, 48.1351, 11.582), stay(2, 48.1551, 11.595), stay(3, 48.16, 11.61)];
        let route = Route::from_stays(&stays);

        let html = render_html(&stays, &route, &RenderOptions::default()).unwrap();

        assert_eq!(html.matches("class=\"marker\"").count(), 3);
        assert_eq!(html.matches("class=\"segment\"").count(), 2);
        assert_eq!(html.matches("class=\"distance\"").count(), 2);
        assert_eq!(html.matches("id=\"popup-summary\"").count(), 1);
        assert!(html.contains("Segment 1-&gt;2: "));
        assert!(html.contains("Segment 2-&gt;3: "));
        assert!(html.contains(&format_km(route.total_km)));
        assert!(html.contains("<strong>Points:</strong> 3"));
    }

    #[test]
    fn output_is_self_contained() {
        let stays = vec![stay(1, 48.1351, 11.582), stay(2, 48.1551, 11.595)];
        let route = Route::from_stays(&stays);

        let html = render_html(&stays, &route, &RenderOptions::default()).unwrap();

        // The only URL allowed is the SVG namespace, which is never fetched
        let without_namespace = html.replace("xmlns=\"http://www.w3.org/2000/svg\"", "");
        assert!(!without_namespace.contains("http://"));
        assert!(!without_namespace.contains("https://"));
        assert!(!html.contains("<link"));
        assert!(!html.contains("src="));
    }

    #[test]
    fn title_is_escaped() {
        let stays = vec![stay(1, 0., 0.)];
        let options = RenderOptions {
            title: "Tom & Jerry's <trip>".into(),
            ..Default::default()
        };
        let html = render_html(&stays, &Route::from_stays(&stays), &options).unwrap();
        assert!(html.contains("<title>Tom &amp; Jerry&#39;s &lt;trip&gt;</title>"));
    }

    #[test]
    fn nothing_to_render() {
        let err = render_html(&[], &Route::default(), &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, GeostayError::EmptyCoordinates));
    }
}
