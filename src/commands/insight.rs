use crate::error::{Error, Result};
use crate::services::gemini::{self, InsightClient};

/// Advisory commands behind the Sangini screens. Responses are advisory
/// text only; the presentation layer appends `gemini::MEDICAL_DISCLAIMER`
/// to everything it displays.

fn symptom_query(symptoms: &str) -> String {
    format!("My symptoms are: \"{symptoms}\". What could this be related to?")
}

fn pregnancy_query(question: &str) -> String {
    format!("My question is: \"{question}\".")
}

/// General overview of what the described symptoms could relate to.
pub async fn analyze_symptoms(client: &InsightClient, symptoms: &str) -> Result<String> {
    let symptoms = symptoms.trim();
    if symptoms.is_empty() {
        return Err(Error::invalid_input(
            "symptoms",
            "describe at least one symptom",
        ));
    }
    client
        .ask(gemini::SYMPTOM_ANALYZER_PROMPT, &symptom_query(symptoms))
        .await
}

/// Answer to a non-urgent, general pregnancy question.
pub async fn ask_pregnancy_question(client: &InsightClient, question: &str) -> Result<String> {
    let question = question.trim();
    if question.is_empty() {
        return Err(Error::invalid_input("question", "a question is required"));
    }
    client
        .ask(gemini::PREGNANCY_QUERY_PROMPT, &pregnancy_query(question))
        .await
}
