use std::fmt;

#[derive(Debug)]
pub enum BotError {
    Config(String),
    Database(sea_orm::DbErr),
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Database(e) => write!(f, "Database error: {e}"),
        }
    }
}

impl std::error::Error for BotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Database(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}

impl From<sea_orm::DbErr> for BotError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Database(e)
    }
}

pub type Result<T> = std::result::Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display() {
        let err = BotError::Config("Invalid PORT".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid PORT");

        let err = BotError::from(sea_orm::DbErr::Custom("boom".to_string()));
        assert!(err.to_string().starts_with("Database error:"));
        assert!(err.source().is_some());
    }
}
