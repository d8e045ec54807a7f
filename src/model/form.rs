use crate::model::{Activity, ActivityAction, ActivityState, Category};
use std::str::FromStr;

/// Editable fields of the activity form, keyed by their element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityField {
    Category,
    Name,
    Calories,
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("Unknown form field: {0}")]
pub struct UnknownField(pub String);

impl ActivityField {
    pub fn id(self) -> &'static str {
        match self {
            ActivityField::Category => "category",
            ActivityField::Name => "name",
            ActivityField::Calories => "calories",
        }
    }
}

impl FromStr for ActivityField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" => Ok(ActivityField::Category),
            "name" => Ok(ActivityField::Name),
            "calories" => Ok(ActivityField::Calories),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

impl Activity {
    /// Returns a copy of the draft with `field` set from raw input text.
    ///
    /// Numeric fields read their leading integer, so `"2.5"` is 2. Calories
    /// without digits or below zero become 0 and values past `u32::MAX`
    /// saturate. A category id outside the table leaves the category unchanged.
    pub fn with_field(&self, field: ActivityField, value: &str) -> Activity {
        let mut draft = self.clone();
        match field {
            ActivityField::Category => {
                match leading_integer(value)
                    .and_then(|id| u8::try_from(id).ok())
                    .map(Category::try_from)
                {
                    Some(Ok(category)) => draft.category = category,
                    _ => log::debug!("Ignoring category value {:?}", value),
                }
            }
            ActivityField::Name => draft.name = value.to_string(),
            ActivityField::Calories => {
                draft.calories = leading_integer(value)
                    .map(|calories| calories.clamp(0, i64::from(u32::MAX)) as u32)
                    .unwrap_or(0)
            }
        }
        draft
    }

    /// Label of the submit control for this draft.
    pub fn save_label(&self) -> &'static str {
        match self.category {
            Category::Food => "Guardar Comida",
            Category::Exercise => "Guardar Ejercicio",
        }
    }
}

/// Leading integer of form input: optional whitespace and sign, then digits
/// up to the first other character. Magnitudes past `i64` saturate.
fn leading_integer(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, rest) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .parse::<u64>()
        .ok()
        .and_then(|n| i64::try_from(n).ok())
        .unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Activity to load into the form for the current `active_id`.
///
/// A dangling id is logged and yields `None`, leaving the draft as it was.
pub fn load_active_draft(state: &ActivityState) -> Option<Activity> {
    let active_id = state.active_id.as_deref()?;
    match state.get_activity(active_id) {
        Some(activity) => Some(activity.clone()),
        None => {
            log::warn!("No activity found with id {}", active_id);
            None
        }
    }
}

/// Builds the save action for a draft, or `None` when the draft is invalid.
pub fn submit_draft(draft: &Activity) -> Option<ActivityAction> {
    draft.is_valid().then(|| ActivityAction::SaveActivity {
        new_activity: draft.clone(),
    })
}
