//! Compare Flow
//!
//! Two names and a region go in, exactly one `/api/compare` call goes out.
//! Nothing here is shared with the dashboard flow.

use crate::api::RiftApi;
use crate::config::DEFAULT_REGION;
use crate::error::ClientError;
use crate::models::ComparisonResult;

pub const MISSING_NAMES_MESSAGE: &str = "Please enter both summoner names";
pub const COMPARE_SUCCESS_MESSAGE: &str = "Comparison complete!";
pub const COMPARE_FAILURE_MESSAGE: &str = "Failed to compare players";

/// Compare form as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareForm {
    pub player1: String,
    pub player2: String,
    pub region: String,
}

impl Default for CompareForm {
    fn default() -> Self {
        Self {
            player1: String::new(),
            player2: String::new(),
            region: DEFAULT_REGION.to_string(),
        }
    }
}

impl CompareForm {
    pub fn new(player1: &str, player2: &str, region: &str) -> Self {
        Self {
            player1: player1.to_string(),
            player2: player2.to_string(),
            region: region.to_string(),
        }
    }

    /// Trimmed copy of the form, rejected when either name is blank
    pub fn validate(&self) -> Result<CompareForm, ClientError> {
        let player1 = self.player1.trim();
        let player2 = self.player2.trim();
        if player1.is_empty() || player2.is_empty() {
            return Err(ClientError::Validation(MISSING_NAMES_MESSAGE.to_string()));
        }
        Ok(CompareForm::new(player1, player2, self.region.trim()))
    }
}

/// Validate and issue the comparison
pub async fn compare(
    api: &dyn RiftApi,
    form: &CompareForm,
    match_count: u32,
) -> Result<ComparisonResult, ClientError> {
    let form = form.validate()?;
    tracing::info!(
        player1 = %form.player1,
        player2 = %form.player2,
        region = %form.region,
        "Comparing players"
    );
    api.compare_players(&form.player1, &form.player2, &form.region, match_count)
        .await
}

/// Toast text for a failed comparison
pub fn failure_message(err: &ClientError) -> String {
    match err {
        ClientError::Validation(message) => message.clone(),
        other if other.to_string().trim().is_empty() => COMPARE_FAILURE_MESSAGE.to_string(),
        other => other.user_message(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::tests::ScriptedApi;

    #[tokio::test]
    async fn test_issues_exactly_one_call() {
        let api = ScriptedApi::default();
        let form = CompareForm::new(" Faker", "Keria ", "kr");

        compare(&api, &form, 15).await.unwrap();

        assert_eq!(*api.calls.borrow(), vec!["compare Faker Keria kr 15".to_string()]);
    }

    #[tokio::test]
    async fn test_blank_name_issues_nothing() {
        let api = ScriptedApi::default();
        let form = CompareForm::new("Faker", "   ", "kr");

        let err = compare(&api, &form, 15).await.unwrap_err();

        assert_eq!(failure_message(&err), MISSING_NAMES_MESSAGE);
        assert!(api.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_backend_failure_message() {
        let api = ScriptedApi::failing_first(vec![ClientError::from_response(
            404,
            r#"{"detail": "One or both summoners not found"}"#,
        )]);
        let err = compare(&api, &CompareForm::new("a", "b", "na1"), 15)
            .await
            .unwrap_err();
        assert_eq!(failure_message(&err), "One or both summoners not found");
    }

    #[test]
    fn test_default_region() {
        assert_eq!(CompareForm::default().region, DEFAULT_REGION);
    }
}
