use crate::model::{Activity, ActivityId};
use serde::{Deserialize, Deserializer, Serialize};

/// State transitions requested by the views.
///
/// Serialized as `{"type": ..., "payload": {...}}`. Tags this build does not
/// know decode to [`ActivityAction::Unknown`] whatever their payload, and the
/// reducer ignores them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum ActivityAction {
    #[serde(rename = "save-activity")]
    SaveActivity {
        #[serde(rename = "newActivity")]
        new_activity: Activity,
    },
    #[serde(rename = "set-activeId")]
    SetActiveId { id: ActivityId },
    #[serde(rename = "delete-activity")]
    DeleteActivity { id: ActivityId },
    #[serde(rename = "restart-activity")]
    RestartActivity,
    #[serde(rename = "unknown")]
    Unknown,
}

#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct SavePayload {
    #[serde(rename = "newActivity")]
    new_activity: Activity,
}

#[derive(Deserialize)]
struct IdPayload {
    id: ActivityId,
}

fn payload<T, E>(kind: &str, payload: Option<serde_json::Value>) -> Result<T, E>
where
    T: for<'de> Deserialize<'de>,
    E: serde::de::Error,
{
    let value = payload.ok_or_else(|| E::custom(format!("missing payload for {}", kind)))?;
    serde_json::from_value(value).map_err(E::custom)
}

impl<'de> Deserialize<'de> for ActivityAction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let RawAction { kind, payload: raw } = RawAction::deserialize(deserializer)?;
        let action = match kind.as_str() {
            "save-activity" => {
                let SavePayload { new_activity } = payload(&kind, raw)?;
                ActivityAction::SaveActivity { new_activity }
            }
            "set-activeId" => {
                let IdPayload { id } = payload(&kind, raw)?;
                ActivityAction::SetActiveId { id }
            }
            "delete-activity" => {
                let IdPayload { id } = payload(&kind, raw)?;
                ActivityAction::DeleteActivity { id }
            }
            "restart-activity" => ActivityAction::RestartActivity,
            other => {
                log::debug!("Ignoring unknown action {:?}", other);
                ActivityAction::Unknown
            }
        };
        Ok(action)
    }
}
