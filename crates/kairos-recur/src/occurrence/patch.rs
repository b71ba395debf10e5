use kairos_core::{Event, RepeatRule};
use serde::{Deserialize, Serialize};

/// Field-wise replacement for one occurrence. `None` keeps the current value.
///
/// The identifier is not patchable; it ties the occurrence to its series.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<RepeatRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_time: Option<i32>,
}

impl EventPatch {
    /// Patch that only changes the title.
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Whether applying the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow merge: returns `event` with every set field replaced.
    #[must_use]
    pub fn apply(&self, event: &Event) -> Event {
        let mut patched = event.clone();
        replace(&mut patched.title, self.title.as_ref());
        replace(&mut patched.date, self.date.as_ref());
        replace(&mut patched.start_time, self.start_time.as_ref());
        replace(&mut patched.end_time, self.end_time.as_ref());
        replace(&mut patched.description, self.description.as_ref());
        replace(&mut patched.location, self.location.as_ref());
        replace(&mut patched.category, self.category.as_ref());
        replace(&mut patched.repeat, self.repeat.as_ref());
        replace(&mut patched.notification_time, self.notification_time.as_ref());
        patched
    }

    /// Combines two patches; fields set in `later` win.
    #[must_use]
    pub fn merge(self, later: Self) -> Self {
        Self {
            title: later.title.or(self.title),
            date: later.date.or(self.date),
            start_time: later.start_time.or(self.start_time),
            end_time: later.end_time.or(self.end_time),
            description: later.description.or(self.description),
            location: later.location.or(self.location),
            category: later.category.or(self.category),
            repeat: later.repeat.or(self.repeat),
            notification_time: later.notification_time.or(self.notification_time),
        }
    }
}

fn replace<T: Clone>(field: &mut T, value: Option<&T>) {
    if let Some(value) = value {
        field.clone_from(value);
    }
}
