#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PackageError {
    #[error("unknown workout code: {0}")]
    UnknownWorkoutCode(String),
    #[error("{code} expects {expected} values, got {got}")]
    ArgumentCount {
        code: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("package must look like CODE:n1,n2,...: {0}")]
    InvalidPackage(String),
    #[error("invalid number {value:?} in package {package}")]
    InvalidNumber { package: String, value: String },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            PackageError::UnknownWorkoutCode("BIKE".to_string()).to_string(),
            "unknown workout code: BIKE"
        );
        assert_eq!(
            PackageError::ArgumentCount {
                code: "WLK",
                expected: 4,
                got: 3
            }
            .to_string(),
            "WLK expects 4 values, got 3"
        );
    }
}
