//! Daily recommendation handler

use axum::Json;
use rand::Rng;
use serde::Serialize;

const RECOMMENDATIONS: &[&str] = &[
    "Ship one small thing today.",
    "Read the error message twice before reaching for the debugger.",
    "Delete the code you were keeping just in case.",
    "Write the test you wish had caught yesterday's bug.",
    "Take a walk before the third coffee.",
    "Rename that variable you keep tripping over.",
    "Close five tabs you are never going back to.",
    "Leave the codebase a little clearer than you found it.",
];

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    text: &'static str,
    // 1-based position in the list, handy for "3 of 8" display
    index: usize,
    total: usize,
}

/// Returns one line picked uniformly at random from the fixed list.
pub async fn recommend() -> Json<RecommendResponse> {
    let index = rand::thread_rng().gen_range(0..RECOMMENDATIONS.len());

    Json(RecommendResponse {
        text: RECOMMENDATIONS[index],
        index: index + 1,
        total: RECOMMENDATIONS.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pick_comes_from_the_list() {
        for _ in 0..20 {
            let Json(response) = recommend().await;
            assert!(RECOMMENDATIONS.contains(&response.text));
            assert!((1..=response.total).contains(&response.index));
            assert_eq!(response.total, RECOMMENDATIONS.len());
        }
    }
}
