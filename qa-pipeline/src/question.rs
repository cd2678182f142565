//! Client-form question contract.
//!
//! The web form concatenates the free-text question with the selected city
//! and rating into one question string before posting it to `/predict`. The
//! exact phrasing matters: the extraction model is prompted against it.

/// Builds the combined question the client form sends.
///
/// Mirrors the form's concatenation verbatim, including the missing space
/// before `ở` and the one-decimal rating rendering.
pub fn compose_question(question: &str, city: &str, rating: f64) -> String {
    format!("{question}ở {city} với rating là {rating:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_form_concatenation() {
        assert_eq!(
            compose_question("Tôi muốn tìm khách sạn 4 sao", "Đà Lạt", 4.0),
            "Tôi muốn tìm khách sạn 4 saoở Đà Lạt với rating là 4.0"
        );
    }

    #[test]
    fn half_ratings_keep_one_decimal() {
        assert_eq!(
            compose_question("khách sạn gần biển", "Nha Trang", 4.5),
            "khách sạn gần biểnở Nha Trang với rating là 4.5"
        );
    }
}
