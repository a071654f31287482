//! Standalone HTML page for a [`Screen`].
//!
//! Region ids: `background-gradient`, `weather-info`, `city-name`,
//! `country-name`, `temperature`, `wind-speed`, `description`,
//! `weather-icon-container`, `error-message`, `forecast-list`.

use crate::{classify::Condition, controller::Screen, render::WeatherView};

const HIDDEN: &str = r#" style="display:none""#;

pub fn to_html(screen: &Screen) -> String {
    // The theme of the last render stays in place while the weather is hidden.
    let theme = screen.weather.as_ref().map_or(Condition::Unknown, |w| w.theme);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>skyglance</title>\n</head>\n<body>\n");
    html.push_str(&format!(r#"<div id="background-gradient" class="background-gradient {theme}">"#));
    html.push('\n');

    match &screen.error {
        Some(message) => {
            html.push_str(&format!("<p id=\"error-message\">{}</p>\n", escape(message)));
        }
        None => html.push_str(&format!("<p id=\"error-message\"{HIDDEN}></p>\n")),
    }

    match &screen.weather {
        Some(view) => {
            let hidden = if screen.weather_visible { "" } else { HIDDEN };
            html.push_str(&format!("<section id=\"weather-info\"{hidden}>\n"));
            write_weather(&mut html, view);
            html.push_str("</section>\n");
        }
        None => html.push_str(&format!("<section id=\"weather-info\"{HIDDEN}></section>\n")),
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn write_weather(html: &mut String, view: &WeatherView) {
    html.push_str(&format!("<h1 id=\"city-name\">{}</h1>\n", escape(&view.city_name)));
    html.push_str(&format!("<p id=\"country-name\">{}</p>\n", escape(&view.country_name)));
    html.push_str(&format!("<div id=\"weather-icon-container\">{}</div>\n", view.icon_svg));
    html.push_str(&format!(
        "<p><span id=\"temperature\">{}</span>°</p>\n",
        escape(&view.temperature)
    ));
    html.push_str(&format!("<p id=\"description\">{}</p>\n", escape(&view.description)));
    html.push_str(&format!(
        "<p><span id=\"wind-speed\">{}</span> km/h</p>\n",
        escape(&view.wind_speed)
    ));

    html.push_str("<div id=\"forecast-list\">\n");
    for item in &view.forecast {
        html.push_str(&format!(
            concat!(
                r#"<div class="forecast-item"><span class="day">{}</span>"#,
                r#"<div class="forecast-icon">{}</div>"#,
                r#"<div class="temps"><span class="max">{}°</span><span class="min">{}°</span></div>"#,
                "</div>\n",
            ),
            escape(&item.day),
            item.icon_svg,
            escape(&item.max),
            escape(&item.min),
        ));
    }
    html.push_str("</div>\n");
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ForecastItem;

    fn view() -> WeatherView {
        WeatherView {
            city_name: "Saint-Étienne".into(),
            country_name: "France".into(),
            temperature: "4.2".into(),
            wind_speed: "11".into(),
            description: "Snow".into(),
            icon_svg: "<svg class=\"icon snow\"></svg>".into(),
            theme: Condition::Snow,
            forecast: vec![ForecastItem {
                day: "Today".into(),
                condition: Condition::Snow,
                icon_svg: "<svg class=\"icon tiny snow\"></svg>".into(),
                max: "5".into(),
                min: "-1.5".into(),
            }],
        }
    }

    #[test]
    fn visible_weather_sets_theme_and_regions() {
        let screen = Screen { weather: Some(view()), weather_visible: true, error: None };
        let html = to_html(&screen);

        assert!(html.contains(r#"class="background-gradient snow""#));
        assert!(html.contains(r#"<h1 id="city-name">Saint-Étienne</h1>"#));
        assert!(html.contains(r#"<section id="weather-info">"#));
        assert!(html.contains(r#"<p id="error-message" style="display:none"></p>"#));
        assert!(html.contains(r#"<span class="min">-1.5°</span>"#));
        assert!(html.contains(r#"<svg class="icon tiny snow">"#));
    }

    #[test]
    fn error_hides_weather() {
        let screen = Screen {
            weather: Some(view()),
            weather_visible: false,
            error: Some("City not found.".into()),
        };
        let html = to_html(&screen);

        assert!(html.contains(r#"<p id="error-message">City not found.</p>"#));
        assert!(html.contains(r#"<section id="weather-info" style="display:none">"#));
        assert!(html.contains(r#"class="background-gradient snow""#));
    }

    #[test]
    fn text_is_escaped() {
        let screen = Screen {
            weather: None,
            weather_visible: false,
            error: Some("<b>bad</b> & \"worse\"".into()),
        };

        let html = to_html(&screen);
        assert!(html.contains("&lt;b&gt;bad&lt;/b&gt; &amp; &quot;worse&quot;"));
        assert!(html.contains(r#"class="background-gradient unknown""#));
    }

    #[test]
    fn forecast_items_render_in_order() {
        let mut weather = view();
        weather.forecast.push(ForecastItem {
            day: "Mon".into(),
            condition: Condition::Unknown,
            icon_svg: String::new(),
            max: "-".into(),
            min: "0".into(),
        });
        let screen = Screen { weather: Some(weather), weather_visible: true, error: None };
        let html = to_html(&screen);

        let today = html.find(r#"<span class="day">Today</span>"#).expect("today item");
        let monday = html.find(r#"<span class="day">Mon</span>"#).expect("monday item");
        assert!(today < monday);
        assert_eq!(html.matches(r#"class="forecast-item""#).count(), 2);
        assert!(html.contains(r#"<span class="max">-°</span><span class="min">0°</span></div></div>"#));
    }
}
