use super::TagKind;

/// Why a compound field could not be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldErrorKind {
	#[error("missing")]
	Missing,
	#[error("expected {expected}, found {found}")]
	WrongKind { expected: TagKind, found: TagKind },
	#[error("{0}")]
	Invalid(String),
}

/// A required compound field was missing or held the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("field {key:?}: {kind}")]
pub struct FieldError {
	pub key: String,
	pub kind: FieldErrorKind,
}

impl FieldError {
	pub fn missing(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			kind: FieldErrorKind::Missing,
		}
	}

	pub fn wrong_kind(key: &str, expected: TagKind, found: TagKind) -> Self {
		Self {
			key: key.to_owned(),
			kind: FieldErrorKind::WrongKind { expected, found },
		}
	}

	/// The field was present and well-typed but its value is unusable.
	pub fn invalid(key: &str, reason: impl Into<String>) -> Self {
		Self {
			key: key.to_owned(),
			kind: FieldErrorKind::Invalid(reason.into()),
		}
	}
}
