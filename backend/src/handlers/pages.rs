//! Server-rendered weather page

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use shared::{validate_coordinates, Coordinates, WeatherSnapshot};

use crate::AppState;

const WEATHER_TEMPLATE: &str = include_str!("../../templates/weather.html");

/// Optional location for seeding the page
#[derive(Debug, Deserialize)]
pub struct WeatherPageQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl WeatherPageQuery {
    fn coordinates(&self) -> Option<Coordinates> {
        let coords = Coordinates::new(self.lat?, self.lon?);
        validate_coordinates(&coords).ok().map(|_| coords)
    }
}

/// Render the weather page seeded with live data for `?lat=&lon=`, or the
/// placeholder snapshot when no usable location was given
pub async fn weather_page(
    State(state): State<AppState>,
    Query(query): Query<WeatherPageQuery>,
) -> Html<String> {
    let snapshot = match query.coordinates() {
        Some(coords) => state.weather.current_or_default(coords).await,
        None => WeatherSnapshot::placeholder(),
    };
    Html(render_weather_page(&snapshot))
}

pub fn render_weather_page(snapshot: &WeatherSnapshot) -> String {
    // Safe inside <script>: no raw '<' can close the tag
    let seed = serde_json::to_string(snapshot)
        .unwrap_or_else(|_| "null".to_string())
        .replace('<', "\\u003c");

    let place = escape_html(&snapshot.name);
    let country = escape_html(&snapshot.country);
    let description = escape_html(&snapshot.description);
    let temp = snapshot.temp.to_string();

    fill_template(WEATHER_TEMPLATE, |key| match key {
        "snapshot_json" => Some(seed.as_str()),
        "place" => Some(place.as_str()),
        "country" => Some(country.as_str()),
        "description" => Some(description.as_str()),
        "temp" => Some(temp.as_str()),
        _ => None,
    })
}

/// Replace each `{{key}}` in one left-to-right pass; substituted text is
/// never scanned again. Unknown keys are left as they are.
fn fill_template<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = &after[..end];
                match lookup(key) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(key);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
