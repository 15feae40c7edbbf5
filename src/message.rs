use serde_json::{Value as JsonValue, json};
use std::fmt;

/// Statistics of one finished workout.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoMessage {
    pub training_type: &'static str,
    /// Hours.
    pub duration: f64,
    /// Kilometres.
    pub distance: f64,
    /// km/h.
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    #[must_use]
    pub fn get_message(&self) -> String {
        self.to_string()
    }

    /// Single-line JSON rendering with the same three-decimal rounding as the sentence.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        json!({
            "training_type": self.training_type,
            "duration": round3(self.duration),
            "distance": round3(self.distance),
            "speed": round3(self.speed),
            "calories": round3(self.calories),
        })
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

// Rounded through the same formatter as the sentence.
fn round3(value: f64) -> JsonValue {
    format!("{value:.3}")
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map_or(JsonValue::Null, JsonValue::Number)
}
