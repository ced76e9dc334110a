//! Property-based tests for statement classification
//!
//! The classifying entry point of the query executor routes on the leading
//! keyword of the statement text. These tests verify that:
//! - Classification ignores leading whitespace and letter case
//! - Every routing keyword maps to its kind
//! - Unknown leading keywords fall through to `Other`

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use project_updates::core::db::StatementKind;

    fn arb_padding() -> impl Strategy<Value = String> {
        "[ \t\r\n]{0,8}".prop_map(|s: String| s)
    }

    /// Random case variant of a keyword, e.g. "sElEcT".
    fn mixed_case(keyword: &str, mask: u32) -> String {
        keyword
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if mask & (1 << (i % 32)) != 0 {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect()
    }

    proptest! {
        #[test]
        fn select_detected_regardless_of_case_and_padding(
            padding in arb_padding(),
            mask in any::<u32>(),
            rest in " [a-z0-9_*, ]{0,40}",
        ) {
            let sql = format!("{}{}{}", padding, mixed_case("SELECT", mask), rest);
            prop_assert_eq!(StatementKind::from_sql(&sql), StatementKind::Select);
        }

        #[test]
        fn routing_keywords_map_to_their_kind(
            padding in arb_padding(),
            mask in any::<u32>(),
            keyword_index in 0usize..7,
            rest in " [a-z0-9_ ]{0,40}",
        ) {
            let expectations = [
                ("SELECT", StatementKind::Select),
                ("INSERT", StatementKind::Insert),
                ("UPDATE", StatementKind::Update),
                ("DELETE", StatementKind::Delete),
                ("CREATE", StatementKind::Create),
                ("DROP", StatementKind::Drop),
                ("ALTER", StatementKind::Alter),
            ];
            let (keyword, expected) = expectations[keyword_index];
            let sql = format!("{}{}{}", padding, mixed_case(keyword, mask), rest);
            prop_assert_eq!(StatementKind::from_sql(&sql), expected);
        }

        #[test]
        fn unknown_keywords_classify_as_other(
            padding in arb_padding(),
            keyword in "(SHOW|SET|BEGIN|COMMIT|ROLLBACK|EXPLAIN|USE)",
            rest in " [a-z0-9_ ]{0,40}",
        ) {
            let sql = format!("{}{}{}", padding, keyword, rest);
            prop_assert_eq!(StatementKind::from_sql(&sql), StatementKind::Other);
        }

        #[test]
        fn classification_is_trim_insensitive(
            padding in arb_padding(),
            sql in "[a-zA-Z][a-zA-Z0-9_ *,=?]{0,60}",
        ) {
            let padded = format!("{}{}", padding, sql);
            prop_assert_eq!(
                StatementKind::from_sql(&padded),
                StatementKind::from_sql(&sql)
            );
        }
    }
}
