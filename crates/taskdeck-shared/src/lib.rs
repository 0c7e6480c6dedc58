use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
  Low,
  Medium,
  High
}

impl TaskPriority {
  pub fn all() -> [Self; 3] {
    [Self::Low, Self::Medium, Self::High]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Low => "low",
      | Self::Medium => "medium",
      | Self::High => "high"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Low => "Low",
      | Self::Medium => "Medium",
      | Self::High => "High"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key {
      | "low" => Some(Self::Low),
      | "medium" => Some(Self::Medium),
      | "high" => Some(Self::High),
      | _ => None
    }
  }
}

impl Default for TaskPriority {
  fn default() -> Self {
    Self::Medium
  }
}

// Single authoritative option set, shared by the form's own select and the
// standalone category widget.
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
  Work,
  Study,
  Personal,
  Shopping,
  Other
}

impl TaskCategory {
  pub fn all() -> [Self; 5] {
    [
      Self::Work,
      Self::Study,
      Self::Personal,
      Self::Shopping,
      Self::Other
    ]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Work => "work",
      | Self::Study => "study",
      | Self::Personal => "personal",
      | Self::Shopping => "shopping",
      | Self::Other => "other"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Work => "Work",
      | Self::Study => "Study",
      | Self::Personal => "Personal",
      | Self::Shopping => "Shopping",
      | Self::Other => "Other"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key {
      | "work" => Some(Self::Work),
      | "study" => Some(Self::Study),
      | "personal" => {
        Some(Self::Personal)
      }
      | "shopping" => {
        Some(Self::Shopping)
      }
      | "other" => Some(Self::Other),
      | _ => None
    }
  }
}

impl Default for TaskCategory {
  fn default() -> Self {
    Self::Work
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
  pub id:          String,
  #[serde(default)]
  pub title:       String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub priority:    TaskPriority,
  #[serde(default)]
  pub category:    TaskCategory,
  #[serde(default)]
  pub completed:   bool,
  #[serde(default)]
  pub created_at:  String
}

#[derive(
  Debug, Clone, PartialEq, Default,
)]
pub struct TaskDraft {
  pub title:       String,
  pub description: String,
  pub priority:    TaskPriority,
  pub category:    TaskCategory
}

impl TaskDraft {
  pub fn into_create(
    self,
    created_at: String
  ) -> TaskCreate {
    TaskCreate {
      title: self.title,
      description: self.description,
      priority: self.priority,
      category: self.category,
      completed: false,
      created_at
    }
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreate {
  pub title:       String,
  pub description: String,
  pub priority:    TaskPriority,
  pub category:    TaskCategory,
  pub completed:   bool,
  pub created_at:  String
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct TaskPatch {
  pub completed: bool
}

#[cfg(test)]
mod wire_tests {
  use super::*;

  fn draft() -> TaskDraft {
    TaskDraft {
      title:       "Buy milk"
        .to_string(),
      description: String::new(),
      priority:    TaskPriority::Low,
      category:
        TaskCategory::Shopping
    }
  }

  #[test]
  fn create_payload_is_uncompleted_and_carries_timestamp()
  {
    let payload = draft().into_create(
      "2026-08-06T10:00:00.000Z"
        .to_string()
    );
    assert!(!payload.completed);
    assert_eq!(
      payload.created_at,
      "2026-08-06T10:00:00.000Z"
    );
    assert_eq!(
      payload.title, "Buy milk"
    );
  }

  #[test]
  fn create_payload_serializes_camel_case_and_lowercase_keys()
  {
    let payload = draft().into_create(
      "2026-08-06T10:00:00.000Z"
        .to_string()
    );
    let json =
      serde_json::to_value(&payload)
        .expect("serialize payload");

    assert_eq!(
      json["createdAt"],
      "2026-08-06T10:00:00.000Z"
    );
    assert_eq!(json["priority"], "low");
    assert_eq!(
      json["category"],
      "shopping"
    );
    assert_eq!(
      json["completed"], false
    );
    assert!(
      json.get("created_at").is_none()
    );
  }

  #[test]
  fn task_dto_defaults_fill_missing_fields()
  {
    let task =
      serde_json::from_str::<TaskDto>(
        r#"{"id":"42","title":"Buy milk"}"#
      )
      .expect("deserialize task");

    assert_eq!(task.id, "42");
    assert_eq!(
      task.priority,
      TaskPriority::Medium
    );
    assert_eq!(
      task.category,
      TaskCategory::Work
    );
    assert!(!task.completed);
    assert!(task.created_at.is_empty());
  }

  #[test]
  fn task_dto_reads_backend_fields() {
    let task =
      serde_json::from_str::<TaskDto>(
        r#"{"id":"7","title":"Ship","priority":"high","category":"study","completed":true,"createdAt":"2026-08-06T10:00:00.000Z"}"#
      )
      .expect("deserialize task");

    assert_eq!(
      task.priority,
      TaskPriority::High
    );
    assert_eq!(
      task.category,
      TaskCategory::Study
    );
    assert!(task.completed);
    assert_eq!(
      task.created_at,
      "2026-08-06T10:00:00.000Z"
    );
  }

  #[test]
  fn priority_keys_round_trip() {
    for priority in TaskPriority::all()
    {
      assert_eq!(
        TaskPriority::from_key(
          priority.as_key()
        ),
        Some(priority)
      );
    }
    assert_eq!(
      TaskPriority::from_key("urgent"),
      None
    );
  }

  #[test]
  fn category_keys_round_trip() {
    for category in TaskCategory::all()
    {
      assert_eq!(
        TaskCategory::from_key(
          category.as_key()
        ),
        Some(category)
      );
    }
    assert_eq!(
      TaskCategory::from_key("Chores"),
      None
    );
  }

  #[test]
  fn completion_patch_matches_contract()
  {
    let json = serde_json::to_value(
      &TaskPatch {
        completed: true
      }
    )
    .expect("serialize patch");
    assert_eq!(
      json,
      serde_json::json!({
        "completed": true
      })
    );
  }
}
