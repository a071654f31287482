//! Terminal rendering of the screen.

use skyglance_core::{Condition, Screen, WeatherView};

fn glyph(condition: Condition) -> &'static str {
    match condition {
        Condition::Clear => "☀",
        Condition::Cloudy => "☁",
        Condition::Rain => "☂",
        Condition::Snow => "❄",
        Condition::Thunder => "⚡",
        Condition::Unknown => "?",
    }
}

fn format_weather(view: &WeatherView) -> String {
    let mut out = String::new();

    if view.country_name.is_empty() {
        out.push_str(&format!("{}\n", view.city_name));
    } else {
        out.push_str(&format!("{}, {}\n", view.city_name, view.country_name));
    }
    out.push_str(&format!(
        "  {} {}°  {}  wind {} km/h\n\n",
        glyph(view.theme),
        view.temperature,
        view.description,
        view.wind_speed
    ));

    for item in &view.forecast {
        out.push_str(&format!(
            "  {:<10} {}  {}° / {}°\n",
            item.day,
            glyph(item.condition),
            item.max,
            item.min
        ));
    }

    out
}

pub fn print_weather(screen: &Screen) {
    if let Some(view) = screen.visible_weather() {
        print!("{}", format_weather(view));
    }
}

/// Print whatever is currently visible: the error, or the weather.
pub fn print_screen(screen: &Screen) {
    if let Some(message) = &screen.error {
        eprintln!("error: {message}");
    }
    print_weather(screen);
}
