use serde::Deserialize;
use serde_json::Value;

use crate::error::BotError;

/// Review states the Practicum API reports for a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(HomeworkStatus::Approved),
            "reviewing" => Some(HomeworkStatus::Reviewing),
            "rejected" => Some(HomeworkStatus::Rejected),
            _ => None,
        }
    }

    fn verdict(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// One entry of the `homeworks` list. Field validation happens in
/// `parse_status`, so both fields stay optional here.
#[derive(Debug, Clone, Deserialize)]
pub struct Homework {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub homework_name: Option<String>,
}

/// Validate the response shape and pull out the homework records.
pub fn check_response(response: &Value) -> Result<Vec<Homework>, BotError> {
    let object = response
        .as_object()
        .ok_or_else(|| BotError::Shape("response is not a JSON object".to_string()))?;

    let homeworks = object
        .get("homeworks")
        .and_then(Value::as_array)
        .ok_or_else(|| BotError::Shape("homeworks is missing or not a list".to_string()))?;

    homeworks
        .iter()
        .map(|entry| {
            serde_json::from_value(entry.clone())
                .map_err(|e| BotError::Shape(format!("homework entry: {}", e)))
        })
        .collect()
}

/// Format the notification message for one homework record.
pub fn parse_status(homework: &Homework) -> Result<String, BotError> {
    let code = homework
        .status
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| BotError::Parse("status is missing".to_string()))?;

    let status = HomeworkStatus::from_code(code)
        .ok_or_else(|| BotError::Parse(format!("unknown status '{}'", code)))?;

    let name = homework
        .homework_name
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| BotError::Parse("homework_name is missing".to_string()))?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}
