//! # Domain Model
//!
//! Plain records held by the store. Every record carries a string `id` that is
//! unique within its own collection; ids are never reused across a collection's
//! lifetime because the store draws fresh ones on collision.
//!
//! Field names serialize in camelCase so JSON output matches what dashboard
//! clients already consume.
//!
//! ## Stage Cycles
//!
//! Candidates and pipeline entries both move through a 4-stage cycle, but the
//! stage labels differ. They are deliberately two separate enums,
//! [`CandidateStatus`] and [`PipelineStage`], so one can never be fed to the
//! other's collection.
//!
//! ## Inputs and Patches
//!
//! Creation goes through typed inputs ([`NewTemplate`], [`NewExercise`],
//! [`NewPlayer`]) that expose `validate()` for the UI boundary. The store itself
//! trusts its caller and never validates. Partial updates go through
//! [`TemplatePatch`] / [`ExercisePatch`], whose `Some` fields overwrite the record.

use crate::error::{Result, TalentError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Exercise name recorded when a flagged video is reviewed; flagged entries
/// carry no exercise of their own.
pub const UNKNOWN_EXERCISE: &str = "N/A";

/// `lastActive` value for freshly added players.
pub const ACTIVE_TODAY: &str = "Today";

macro_rules! labeled_enum {
    ($name:ident, $what:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = TalentError;

            fn from_str(s: &str) -> Result<Self> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| TalentError::Validation(format!("Unknown {}: {}", $what, s)))
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    Assessment,
    Training,
    Skills,
    Fitness,
}

labeled_enum!(TemplateType, "template type", {
    Assessment => "assessment",
    Training => "training",
    Skills => "skills",
    Fitness => "fitness",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

labeled_enum!(Difficulty, "difficulty", {
    Beginner => "beginner",
    Intermediate => "intermediate",
    Advanced => "advanced",
});

/// Talent-pool status of a [`Candidate`]. Advances cyclically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandidateStatus {
    Shortlisted,
    Interview,
    Trials,
    Selected,
}

labeled_enum!(CandidateStatus, "candidate status", {
    Shortlisted => "Shortlisted",
    Interview => "Interview",
    Trials => "Trials",
    Selected => "Selected",
});

impl CandidateStatus {
    /// The following stage; `Selected` wraps to `Shortlisted`.
    pub fn next(self) -> Self {
        match self {
            Self::Shortlisted => Self::Interview,
            Self::Interview => Self::Trials,
            Self::Trials => Self::Selected,
            Self::Selected => Self::Shortlisted,
        }
    }
}

/// Recruitment-pipeline stage of a [`PipelineEntry`]. Advances cyclically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PipelineStage {
    Screening,
    Interview,
    Trials,
    Selected,
}

labeled_enum!(PipelineStage, "pipeline stage", {
    Screening => "Screening",
    Interview => "Interview",
    Trials => "Trials",
    Selected => "Selected",
});

impl PipelineStage {
    /// The following stage; `Selected` wraps to `Screening`.
    pub fn next(self) -> Self {
        match self {
            Self::Screening => Self::Interview,
            Self::Interview => Self::Trials,
            Self::Trials => Self::Selected,
            Self::Selected => Self::Screening,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub template_type: TemplateType,
    pub sport: String,
    /// Number of exercises bundled in the template.
    pub exercises: u32,
    /// Minutes.
    pub duration: u32,
    pub assignments: i64,
    pub avg_score: f64,
    pub created_by: String,
    pub created_at: String,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub sport: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub metrics: BTreeSet<String>,
    pub submissions: u64,
    pub avg_score: f64,
    pub created_by: String,
    pub created_at: String,
    pub video_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub sport: String,
    pub score: f64,
    pub status: CandidateStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineEntry {
    pub id: String,
    pub name: String,
    pub sport: String,
    pub score: f64,
    pub status: PipelineStage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub location: String,
    pub primary_sport: String,
    pub join_date: String,
    pub total_videos: u32,
    pub average_score: f64,
    pub in_talent_pool: bool,
    pub last_active: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPending {
    pub id: String,
    pub player: String,
    pub exercise: String,
    pub submitted: String,
    pub video_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoCompleted {
    pub id: String,
    pub player: String,
    pub exercise: String,
    pub score: f64,
    pub reviewed_on: String,
    pub video_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoFlagged {
    pub id: String,
    pub player: String,
    pub reason: String,
    pub flagged_on: String,
    pub video_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub message: String,
    /// Local time of day, `HH:MM:SS`.
    pub created_at: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub read: bool,
}

// --- Inputs ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTemplate {
    pub name: String,
    #[serde(rename = "type")]
    pub template_type: TemplateType,
    pub sport: String,
    pub exercises: u32,
    pub duration: u32,
    pub created_by: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewTemplate {
    pub fn new(
        name: impl Into<String>,
        template_type: TemplateType,
        sport: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            template_type,
            sport: sport.into(),
            exercises: 1,
            duration: 10,
            created_by: String::new(),
            description: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_non_empty("Template name", &self.name)?;
        require_non_empty("Sport", &self.sport)?;
        if self.duration == 0 {
            return Err(TalentError::Validation(
                "Duration must be at least one minute".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExercise {
    pub name: String,
    pub sport: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub metrics: Vec<String>,
    pub created_by: String,
    pub video_url: String,
    #[serde(default)]
    pub poster_url: Option<String>,
}

impl NewExercise {
    pub fn new(name: impl Into<String>, sport: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            sport: sport.into(),
            difficulty,
            description: String::new(),
            metrics: Vec::new(),
            created_by: String::new(),
            video_url: String::new(),
            poster_url: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_non_empty("Exercise name", &self.name)?;
        require_non_empty("Sport", &self.sport)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: String,
    pub age: u32,
    pub location: String,
    pub primary_sport: String,
    pub in_talent_pool: bool,
}

impl NewPlayer {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("Player name", &self.name)?;
        require_non_empty("Primary sport", &self.primary_sport)?;
        if !(5..=100).contains(&self.age) {
            return Err(TalentError::Validation(format!(
                "Age {} is out of range (5-100)",
                self.age
            )));
        }
        Ok(())
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TalentError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(())
}

// --- Patches ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub template_type: Option<TemplateType>,
    pub sport: Option<String>,
    pub exercises: Option<u32>,
    pub duration: Option<u32>,
    pub created_by: Option<String>,
    pub is_active: Option<bool>,
    pub description: Option<String>,
}

impl TemplatePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&self, template: &mut Template) {
        if let Some(name) = &self.name {
            template.name = name.clone();
        }
        if let Some(template_type) = self.template_type {
            template.template_type = template_type;
        }
        if let Some(sport) = &self.sport {
            template.sport = sport.clone();
        }
        if let Some(exercises) = self.exercises {
            template.exercises = exercises;
        }
        if let Some(duration) = self.duration {
            template.duration = duration;
        }
        if let Some(created_by) = &self.created_by {
            template.created_by = created_by.clone();
        }
        if let Some(is_active) = self.is_active {
            template.is_active = is_active;
        }
        if let Some(description) = &self.description {
            template.description = Some(description.clone());
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePatch {
    pub name: Option<String>,
    pub sport: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub description: Option<String>,
    pub metrics: Option<Vec<String>>,
    pub created_by: Option<String>,
    pub video_url: Option<String>,
    pub poster_url: Option<String>,
}

impl ExercisePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&self, exercise: &mut Exercise) {
        if let Some(name) = &self.name {
            exercise.name = name.clone();
        }
        if let Some(sport) = &self.sport {
            exercise.sport = sport.clone();
        }
        if let Some(difficulty) = self.difficulty {
            exercise.difficulty = difficulty;
        }
        if let Some(description) = &self.description {
            exercise.description = description.clone();
        }
        if let Some(metrics) = &self.metrics {
            exercise.metrics = metrics.iter().cloned().collect();
        }
        if let Some(created_by) = &self.created_by {
            exercise.created_by = created_by.clone();
        }
        if let Some(video_url) = &self.video_url {
            exercise.video_url = video_url.clone();
        }
        if let Some(poster_url) = &self.poster_url {
            exercise.poster_url = Some(poster_url.clone());
        }
    }
}
