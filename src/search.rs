use crate::essentials::*;

#[derive(Debug, PartialEq, Eq)]
pub struct SearchName {
    pub first: String,
    pub last: String,
}

/// Parse a free-text "first last" query into a normalized name pair
///
/// Tokens beyond the first two are ignored, each kept token is normalized to
/// "Xxxx" casing. Empty, whitespace-only, numeric, and single-token queries
/// are rejected.
pub fn sanitize_search_query(query: &str) -> Result<SearchName> {
    let trimmed = query.trim();

    if trimmed.is_empty() || trimmed.parse::<f64>().is_ok() {
        return Err(invalid(query));
    }

    let mut tokens = trimmed.split_whitespace();
    let (Some(first), Some(last)) = (tokens.next(), tokens.next()) else {
        return Err(invalid(query));
    };

    Ok(SearchName {
        first: capitalize(first),
        last: capitalize(last),
    })
}

fn invalid(query: &str) -> Error {
    Error::InvalidInput(format!(
        "Search term ({query}) is invalid. Please search by first and last name."
    ))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::prelude::{assert_eq, Result, *};

    #[test]
    fn two_tokens_are_capitalized() -> Result<()> {
        let name = sanitize_search_query("john smith")?;
        assert_eq!("John", name.first);
        assert_eq!("Smith", name.last);

        let name = sanitize_search_query("JOHN SMITH")?;
        assert_eq!("John", name.first);
        assert_eq!("Smith", name.last);

        Ok(())
    }

    #[test]
    fn extra_tokens_are_ignored() -> Result<()> {
        let name = sanitize_search_query("mary ann smith")?;
        assert_eq!("Mary", name.first);
        assert_eq!("Ann", name.last);

        Ok(())
    }

    #[test]
    fn invalid_queries() {
        for query in ["", " ", "   ", "42", " 42 ", "3.14", "john"] {
            let result = sanitize_search_query(query);

            assert!(
                matches!(result, Err(Error::InvalidInput(_))),
                "expected {query:?} to be rejected, got {result:?}"
            );
            assert_eq!(400, result.unwrap_err().status());
        }
    }
}
