//! Interaction events recorded by the annotation client.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of the file a user was annotating when an event was logged.
///
/// Unlike most IDs this one may be empty: events constructed without a file
/// default to the empty identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(String);

impl FileId {
    /// Creates a file identifier, taken verbatim.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FileId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for FileId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<FileId> for String {
    fn from(id: FileId) -> Self {
        id.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Name of a logged event.
///
/// The vocabulary is open. Only mouse presses and releases take part in
/// duration estimation; everything else is carried through as [`EventName::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventName {
    MousePress,
    MouseRelease,
    Other(String),
}

impl EventName {
    /// Returns the name as it appears in the log.
    pub fn as_str(&self) -> &str {
        match self {
            Self::MousePress => "mouse_press",
            Self::MouseRelease => "mouse_release",
            Self::Other(name) => name,
        }
    }

    /// Whether this name is one of the press/release interaction markers.
    pub const fn is_interaction(&self) -> bool {
        matches!(self, Self::MousePress | Self::MouseRelease)
    }
}

impl From<&str> for EventName {
    fn from(s: &str) -> Self {
        match s {
            "mouse_press" => Self::MousePress,
            "mouse_release" => Self::MouseRelease,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/// A single logged UI interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// What happened.
    pub name: EventName,
    /// Seconds, as recorded by the client clock.
    pub time: f64,
    /// The file open at the time of the event.
    #[serde(default)]
    pub file_id: FileId,
}

impl Event {
    pub fn new(name: impl Into<EventName>, time: f64, file_id: impl Into<FileId>) -> Self {
        Self {
            name: name.into(),
            time,
            file_id: file_id.into(),
        }
    }

    /// Whether this event is a press or release on the given file.
    pub fn is_interaction_on(&self, file_id: &FileId) -> bool {
        self.name.is_interaction() && self.file_id == *file_id
    }
}
