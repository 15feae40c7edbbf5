use crate::error::PackageError;
use crate::training::{Running, SportsWalking, Swimming, Training};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutCode {
    Swm,
    Run,
    Wlk,
}

impl WorkoutCode {
    pub const ALL: [Self; 3] = [Self::Swm, Self::Run, Self::Wlk];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Swm => "SWM",
            Self::Run => "RUN",
            Self::Wlk => "WLK",
        }
    }

    /// Number of positional values the workout is built from.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Swm => 5,
            Self::Run => 3,
            Self::Wlk => 4,
        }
    }

    /// Builds the workout from positional sensor values.
    ///
    /// Counts (`action`, `count_pool`) are truncated to integers.
    pub fn build(self, data: &[f64]) -> Result<Box<dyn Training>, PackageError> {
        let training: Box<dyn Training> = match (self, data) {
            (Self::Swm, &[action, duration, weight, length_pool, count_pool]) => Box::new(
                Swimming::new(count(action), duration, weight, length_pool, count(count_pool)),
            ),
            (Self::Run, &[action, duration, weight]) => {
                Box::new(Running::new(count(action), duration, weight))
            }
            (Self::Wlk, &[action, duration, weight, height]) => {
                Box::new(SportsWalking::new(count(action), duration, weight, height))
            }
            _ => {
                return Err(PackageError::ArgumentCount {
                    code: self.as_str(),
                    expected: self.arity(),
                    got: data.len(),
                });
            }
        };
        Ok(training)
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCode {
    type Err = PackageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| PackageError::UnknownWorkoutCode(s.to_string()))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count(value: f64) -> u32 {
    value as u32
}

/// Reads one sensor package and returns the matching workout.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Box<dyn Training>, PackageError> {
    let code: WorkoutCode = workout_type.parse()?;
    tracing::debug!(%code, values = data.len(), "read package");
    code.build(data)
}

/// A workout code with its raw sensor values.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    #[must_use]
    pub fn new(workout_type: &str, data: &[f64]) -> Self {
        Self {
            workout_type: workout_type.to_string(),
            data: data.to_vec(),
        }
    }

    pub fn read(&self) -> Result<Box<dyn Training>, PackageError> {
        read_package(&self.workout_type, &self.data)
    }
}

/// Parses `CODE:n1,n2,...`. The code itself is checked by [`read_package`].
impl FromStr for Package {
    type Err = PackageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((code, values)) = s.split_once(':') else {
            return Err(PackageError::InvalidPackage(s.to_string()));
        };

        let data = values
            .split(',')
            .map(str::trim)
            .map(|v| {
                v.parse::<f64>().map_err(|_| PackageError::InvalidNumber {
                    package: s.to_string(),
                    value: v.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            workout_type: code.trim().to_string(),
            data,
        })
    }
}

/// Packages processed when none are given on the command line.
#[must_use]
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}
