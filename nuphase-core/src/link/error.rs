use derive_more::Display;
use derive_new::new;
use thiserror::Error;

#[derive(new, Error, Debug, Display, PartialEq, Clone)]
#[display("{}", msg)]
/// An error produced by the link.
pub struct LinkError {
    #[new(into)]
    msg: String,
}

impl LinkError {
    /// The error returned when a transaction is attempted on a closed link.
    #[must_use]
    pub fn closed() -> Self {
        Self::new("Link is closed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!("broken", LinkError::new("broken").to_string());
        assert_eq!("Link is closed", LinkError::closed().to_string());
    }
}
