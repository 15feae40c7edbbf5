use crate::dlog;
use crate::message::InfoMessage;
use crate::package::Package;
use anyhow::{Context, Result};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn render(self, info: &InfoMessage) -> String {
        match self {
            Self::Text => info.get_message(),
            Self::Json => info.to_json().to_string(),
        }
    }
}

/// Writes one line per package, in input order.
///
/// Stops at the first package that cannot be read; lines already written stay.
pub fn report<W: Write>(packages: &[Package], format: OutputFormat, out: &mut W) -> Result<usize> {
    for (i, package) in packages.iter().enumerate() {
        let training = package
            .read()
            .with_context(|| format!("reading package #{} ({})", i + 1, package.workout_type))?;

        let info = training.show_training_info();
        dlog!(
            "package={} type={} calories={:.3}",
            i + 1,
            info.training_type,
            info.calories
        );

        writeln!(out, "{}", format.render(&info)).context("writing summary line")?;
    }

    tracing::info!(packages = packages.len(), "workouts processed");
    Ok(packages.len())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::PackageError;
    use crate::package::demo_packages;

    fn run(packages: &[Package], format: OutputFormat) -> (Result<usize>, String) {
        let mut out = Vec::new();
        let result = report(packages, format, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_report_text() {
        let (result, out) = run(&demo_packages(), OutputFormat::Text);
        assert_eq!(result.unwrap(), 3);
        assert_eq!(
            out.lines().collect::<Vec<_>>(),
            [
                "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
                 Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
                "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
                 Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.",
                "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
                 Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.",
            ]
        );
    }

    #[test]
    fn test_report_json() {
        let (result, out) = run(
            &[Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])],
            OutputFormat::Json,
        );
        assert_eq!(result.unwrap(), 1);
        assert_eq!(
            out,
            "{\"calories\":336.0,\"distance\":0.994,\"duration\":1.0,\"speed\":1.0,\"training_type\":\"Swimming\"}\n"
        );
    }

    #[test]
    fn test_report_stops_at_unknown_code() {
        let packages = [
            Package::new("RUN", &[15000.0, 1.0, 75.0]),
            Package::new("BIK", &[1.0, 1.0, 1.0]),
            Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
        ];
        let (result, out) = run(&packages, OutputFormat::Text);

        let err = result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<PackageError>(),
            Some(&PackageError::UnknownWorkoutCode("BIK".to_string()))
        );
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("Тип тренировки: Running;"));
    }

    #[test]
    fn test_report_empty() {
        let (result, out) = run(&[], OutputFormat::Text);
        assert_eq!(result.unwrap(), 0);
        assert_eq!(out, "");
    }
}
