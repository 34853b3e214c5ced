//! AI coach boundary.
//!
//! The core hands the coach a read-only textual summary of the habit
//! collection and receives a response string back. Service failures of
//! any kind (network, HTTP status, malformed body) resolve to a fixed
//! supportive fallback string; the coach never surfaces a hard error to
//! the caller.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::model::Habit;

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const MODEL: &str = "gemini-3-flash-preview";

/// Coaching rules sent as the system instruction on every request.
pub const SYSTEM_INSTRUCTION: &str = "\
You are \"Habit Coach\", a supportive and kind AI mentor.
Your goal is to help users build consistency through \"Tiny Habits\".
RULES:
1. Never use guilt or shaming.
2. If a user misses a day, encourage them and suggest an even smaller version of the habit (e.g., \"instead of 20 mins, just 1 min today\").
3. Be short, friendly, and respectful.
4. Focus on progress over perfection.
5. Do not make medical claims.";

/// Returned when the service answers but with an empty body.
pub const EMPTY_RESPONSE_FALLBACK: &str =
    "I'm here to support you! Let's keep moving forward one tiny step at a time.";

/// Returned when the service cannot be reached at all.
pub const CONNECTION_FALLBACK: &str =
    "I'm having a little trouble connecting, but remember: you're doing great just by showing up!";

/// Flatten the habit collection into the context line the coach sees.
pub fn habits_context(habits: &[Habit]) -> String {
    habits
        .iter()
        .map(|h| {
            format!(
                "{}: {} (Difficulty: {}, Current Streak: {})",
                h.name,
                h.goal,
                h.difficulty.as_str(),
                h.streak
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// A tiny-version suggestion for one habit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitImprovement {
    pub tiny_goal: String,
    pub encouragement: String,
}

/// Thin HTTP client for the hosted coach model.
pub struct CoachClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl CoachClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Point the client at an alternate endpoint (used by tests).
    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Ask the coach for a reply to the user's message, with the habit
    /// collection as read-only context. Never fails: any service problem
    /// yields a fallback encouragement string.
    pub async fn respond(&self, user_message: &str, habits: &[Habit]) -> String {
        let contents = format!(
            "Context: User's current habits: {}. User says: {}",
            habits_context(habits),
            user_message
        );
        let body = json!({
            "systemInstruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
            "contents": [{ "parts": [{ "text": contents }] }],
            "generationConfig": { "temperature": 0.7 },
        });

        match self.generate(&body).await {
            Ok(Some(text)) => text,
            Ok(None) => EMPTY_RESPONSE_FALLBACK.to_string(),
            Err(_) => CONNECTION_FALLBACK.to_string(),
        }
    }

    /// Ask for a tiny version of the habit plus an encouragement line.
    /// Falls back to the habit's own goal on any failure.
    pub async fn suggest_improvement(&self, habit: &Habit) -> HabitImprovement {
        let body = json!({
            "systemInstruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
            "contents": [{ "parts": [{ "text": format!(
                "Suggest a \"tiny\" version and a \"positive encouragement\" for this habit: {} with goal {}. \
                 Reply as JSON with keys tinyGoal and encouragement.",
                habit.name, habit.goal
            ) }] }],
            "generationConfig": { "responseMimeType": "application/json" },
        });

        let fallback = HabitImprovement {
            tiny_goal: habit.goal.clone(),
            encouragement: "You got this!".to_string(),
        };

        match self.generate(&body).await {
            Ok(Some(text)) => serde_json::from_str(text.trim()).unwrap_or(fallback),
            _ => fallback,
        }
    }

    async fn generate(
        &self,
        body: &serde_json::Value,
    ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, MODEL, self.api_key
        );
        let resp = self.client.post(&url).json(body).send().await?;
        if !resp.status().is_success() {
            return Err(format!("coach API error: HTTP {}", resp.status()).into());
        }
        let value: serde_json::Value = resp.json().await?;
        Ok(extract_text(&value))
    }
}

/// Pull the first candidate's text out of a generateContent response.
fn extract_text(value: &serde_json::Value) -> Option<String> {
    let text = value
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()?;
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
