use super::{Result, StoreError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task priority
///
/// A closed enumeration validated at the store boundary. The serialized
/// form uses the capitalized labels found in previously persisted data,
/// so collections written by older versions of the application load
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl FromStr for Priority {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "High" => Ok(Priority::High),
            "Medium" => Ok(Priority::Medium),
            "Low" => Ok(Priority::Low),
            other => Err(StoreError::Validation(format!(
                "Unknown priority '{other}' (expected High, Medium or Low)"
            ))),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One to-do item
///
/// Status is a transient presentation-layer selection and is deliberately
/// not part of the persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

/// One registered identity
///
/// The password is stored and compared verbatim; the display name is
/// serialized under the field name `user` to match the on-device format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub email: String,
    pub password: String,
    #[serde(rename = "user")]
    pub display_name: String,
}

/// Filter criterion for the task list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Priority(Priority),
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Priority(p) => task.priority == *p,
        }
    }
}

impl FromStr for TaskFilter {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "All" {
            Ok(TaskFilter::All)
        } else {
            s.parse().map(TaskFilter::Priority)
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskFilter::All => f.write_str("All"),
            TaskFilter::Priority(p) => p.fmt(f),
        }
    }
}

/// The two pages the route guard knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Login/registration landing page
    Landing,
    /// Task list page
    Tasks,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_round_trips_through_labels() {
        for priority in Priority::ALL {
            assert_eq!(priority.label().parse::<Priority>().unwrap(), priority);
        }
    }

    #[test]
    fn priority_rejects_unknown_text() {
        assert!("urgent".parse::<Priority>().is_err());
        assert!("high".parse::<Priority>().is_err());
        assert!("".parse::<Priority>().is_err());
    }

    #[test]
    fn task_serializes_with_on_device_field_names() {
        let task = Task {
            id: 1700000000000,
            title: "Buy milk".into(),
            description: "Two liters".into(),
            priority: Priority::High,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["id"], 1700000000000u64);
        assert_eq!(json["priority"], "High");
    }

    #[test]
    fn account_display_name_serializes_as_user() {
        let account = Account {
            email: "a@b.c".into(),
            password: "secret".into(),
            display_name: "Ada".into(),
        };
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["user"], "Ada");
        assert!(json.get("display_name").is_none());
    }

    #[test]
    fn filter_parses_all_and_priorities() {
        assert_eq!("All".parse::<TaskFilter>().unwrap(), TaskFilter::All);
        assert_eq!(
            "Low".parse::<TaskFilter>().unwrap(),
            TaskFilter::Priority(Priority::Low)
        );
        assert!("Everything".parse::<TaskFilter>().is_err());
    }
}
