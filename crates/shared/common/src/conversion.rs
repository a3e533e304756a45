//! Text-to-words conversion shared by the console and HTTP front ends.

use serde::{Deserialize, Serialize};

use crate::error::AppResult;

/// Result of converting one amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Conversion {
    /// Input text with surrounding whitespace removed
    #[cfg_attr(feature = "openapi", schema(example = "25,1"))]
    pub input: String,
    /// Amount in cents
    #[cfg_attr(feature = "openapi", schema(example = 2510))]
    pub cents: i64,
    /// Amount in dollars, as typed in: space groups, comma decimals
    #[cfg_attr(feature = "openapi", schema(example = "25,10"))]
    pub dollars: String,
    /// Amount in English words
    #[cfg_attr(feature = "openapi", schema(example = "twenty-five dollars and ten cents"))]
    pub words: String,
}

/// Parse `input` and render it in words.
pub fn convert(input: &str) -> AppResult<Conversion> {
    let amount = domain::parse(input)?;

    Ok(Conversion {
        input: input.trim().to_string(),
        cents: amount.minor_units(),
        dollars: amount.to_string(),
        words: amount.to_words(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;

    #[test]
    fn test_convert_success() {
        let conversion = convert(" 45 100 ").unwrap();
        assert_eq!(
            conversion,
            Conversion {
                input: "45 100".to_string(),
                cents: 4_510_000,
                dollars: "45 100,00".to_string(),
                words: "forty-five thousand one hundred dollars".to_string(),
            }
        );
    }

    #[test]
    fn test_convert_maps_domain_errors() {
        assert!(matches!(convert("xyz"), Err(AppError::InvalidFormat(_))));
        assert!(matches!(convert("1,234"), Err(AppError::Granularity(_))));
        assert!(matches!(
            convert("100 000 000 000"),
            Err(AppError::OutOfRange(_))
        ));
    }
}
