use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::attrition::AttritionServiceError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Service(AttritionServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Service(err) => write!(f, "attrition service error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Service(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<AttritionServiceError> for AppError {
    fn from(value: AttritionServiceError) -> Self {
        Self::Service(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::attrition::IntakeError;
    use std::error::Error;

    #[test]
    fn service_failures_keep_their_source() {
        let err = AppError::from(AttritionServiceError::Intake(IntakeError::NoData));

        assert_eq!(
            err.to_string(),
            "attrition service error: no valid data found in employee upload"
        );
        let source = err.source().expect("service error source");
        assert_eq!(source.to_string(), "no valid data found in employee upload");
    }

    #[test]
    fn config_and_io_failures_convert_with_question_mark() {
        fn load() -> Result<(), AppError> {
            let port: Result<u16, ConfigError> = Err(ConfigError::InvalidPort);
            port?;
            Ok(())
        }
        fn open() -> Result<(), AppError> {
            std::fs::File::open("./missing-attrition-export.csv")?;
            Ok(())
        }

        assert!(matches!(load(), Err(AppError::Config(ConfigError::InvalidPort))));
        assert!(matches!(open(), Err(AppError::Io(_))));
    }
}
