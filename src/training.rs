use crate::message::InfoMessage;
use std::fmt;

/// Step length in metres for land workouts.
pub const LEN_STEP: f64 = 0.65;
pub const M_IN_KM: f64 = 1000.0;
pub const MINUTES_IN_HOUR: f64 = 60.0;

/// Sensor values every workout carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    /// Steps or strokes.
    pub action: u32,
    /// Hours.
    pub duration: f64,
    /// Kilograms.
    pub weight: f64,
}

impl Session {
    #[must_use]
    pub const fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }

    fn duration_in_min(&self) -> f64 {
        self.duration * MINUTES_IN_HOUR
    }
}

/// A workout able to report distance, speed and calories.
///
/// `spent_calories` has no default: each workout kind brings its own formula.
pub trait Training: fmt::Debug {
    fn session(&self) -> &Session;

    /// Label used in the summary line.
    fn training_type(&self) -> &'static str;

    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in km.
    fn distance(&self) -> f64 {
        f64::from(self.session().action) * self.len_step() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.session().duration
    }

    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        let info = InfoMessage {
            training_type: self.training_type(),
            duration: self.session().duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        };
        tracing::trace!(?info, "computed training info");
        info
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    session: Session,
}

impl Running {
    const COEFF_CALORIE_1: f64 = 18.0;
    const COEFF_CALORIE_2: f64 = 20.0;

    #[must_use]
    pub const fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            session: Session::new(action, duration, weight),
        }
    }
}

impl Training for Running {
    fn session(&self) -> &Session {
        &self.session
    }

    fn training_type(&self) -> &'static str {
        "Running"
    }

    fn spent_calories(&self) -> f64 {
        (Self::COEFF_CALORIE_1 * self.mean_speed() - Self::COEFF_CALORIE_2) * self.session.weight
            / M_IN_KM
            * self.session.duration_in_min()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    session: Session,
    /// Centimetres.
    height: f64,
}

impl SportsWalking {
    const COEFF_CALORIE_3: f64 = 0.035;
    const COEFF_CALORIE_4: i32 = 2;
    const COEFF_CALORIE_5: f64 = 0.029;

    #[must_use]
    pub const fn new(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            session: Session::new(action, duration, weight),
            height,
        }
    }
}

impl Training for SportsWalking {
    fn session(&self) -> &Session {
        &self.session
    }

    fn training_type(&self) -> &'static str {
        "SportsWalking"
    }

    // The squared speed is floor-divided by height, not divided.
    fn spent_calories(&self) -> f64 {
        let weight = self.session.weight;
        (Self::COEFF_CALORIE_3 * weight
            + floor_div(self.mean_speed().powi(Self::COEFF_CALORIE_4), self.height)
                * Self::COEFF_CALORIE_5
                * weight)
            * self.session.duration_in_min()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    session: Session,
    /// Metres.
    length_pool: f64,
    count_pool: u32,
}

impl Swimming {
    const LEN_STEP: f64 = 1.38;
    const COEFF_CALORIE_6: f64 = 1.1;
    const COEFF_CALORIE_7: f64 = 2.0;

    #[must_use]
    pub const fn new(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> Self {
        Self {
            session: Session::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    fn session(&self) -> &Session {
        &self.session
    }

    fn training_type(&self) -> &'static str {
        "Swimming"
    }

    fn len_step(&self) -> f64 {
        Self::LEN_STEP
    }

    /// Pool based; the stroke distance is not used here.
    fn mean_speed(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.session.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::COEFF_CALORIE_6) * Self::COEFF_CALORIE_7 * self.session.weight
    }
}

/// Floor division of floats: the fmod-based quotient rounded toward negative
/// infinity, with the sign of a zero result taken from `x / y`.
///
/// A zero divisor yields NaN.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn floor_div(x: f64, y: f64) -> f64 {
    let rem = x % y;
    let mut div = (x - rem) / y;
    if rem != 0.0 && ((y < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(x / y);
    }
    let floor = div.floor();
    if div - floor > 0.5 { floor + 1.0 } else { floor }
}
