use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Longest accepted profile name.
pub const MAX_PROFILE_LEN: usize = 64;

#[greeter_derive::greeter_error]
pub enum ProfileError {
    #[error("Invalid profile name{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Name of a configuration override layer (e.g. `dev3`, `dev4`).
///
/// The name ends up in a file path, so only ASCII alphanumerics, `-` and `_` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Profile(String);

impl Profile {
    /// Validates `name` as a profile.
    ///
    /// # Errors
    /// Returns [`ProfileError::Invalid`] for empty, overlong or non-path-safe names.
    pub fn parse(name: impl AsRef<str>) -> Result<Self, ProfileError> {
        let name = name.as_ref();

        if name.is_empty() {
            return Err(ProfileError::Invalid { message: "name is empty".into(), context: None });
        }
        if name.len() > MAX_PROFILE_LEN {
            return Err(ProfileError::Invalid {
                message: format!("name exceeds {MAX_PROFILE_LEN} characters").into(),
                context: None,
            });
        }
        if let Some(bad) = name.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_')) {
            return Err(ProfileError::Invalid {
                message: format!("'{name}' contains unsupported character {bad:?}").into(),
                context: None,
            });
        }

        Ok(Self(name.to_owned()))
    }

    /// Treats an absent or blank selection as "no active profile".
    ///
    /// # Errors
    /// Returns [`ProfileError::Invalid`] when a non-blank name fails [`Profile::parse`].
    pub fn from_selection(selection: Option<&str>) -> Result<Option<Self>, ProfileError> {
        selection.map(str::trim).filter(|s| !s.is_empty()).map(Self::parse).transpose()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Profile {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Profile {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
