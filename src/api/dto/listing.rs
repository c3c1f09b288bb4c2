//! Query parameters for the artwork listing endpoint.

use crate::domain::entities::ArtworkFilters;
use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// Pagination and filtering query parameters for `GET /api/artworks`.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListArtworksParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,

    #[serde(default)]
    pub gallery_id: Option<String>,

    #[serde(default)]
    pub user_id: Option<String>,

    #[serde(default)]
    pub tag: Option<String>,
}

impl ListArtworksParams {
    /// Validates pagination parameters.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `page_size`: 10
    ///
    /// # Validation
    ///
    /// - Page must be > 0
    /// - Page size must be between 1 and 100
    ///
    /// # Returns
    ///
    /// `(page, page_size)` tuple.
    pub fn validate_and_get(&self) -> Result<(u32, u32), String> {
        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(10);

        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }

        if !(1..=100).contains(&page_size) {
            return Err("Page size must be between 1 and 100".to_string());
        }

        Ok((page, page_size))
    }

    /// Extracts the filter portion of the parameters.
    pub fn filters(&self) -> ArtworkFilters {
        ArtworkFilters {
            gallery_id: self.gallery_id.clone(),
            user_id: self.user_id.clone(),
            tag: self.tag.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<u32>, page_size: Option<u32>) -> ListArtworksParams {
        ListArtworksParams {
            page,
            page_size,
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let (page, page_size) = params(None, None).validate_and_get().unwrap();
        assert_eq!(page, 1);
        assert_eq!(page_size, 10);
    }

    #[test]
    fn test_page_zero_is_error() {
        assert!(params(Some(0), None).validate_and_get().is_err());
    }

    #[test]
    fn test_page_size_bounds() {
        assert!(params(None, Some(0)).validate_and_get().is_err());
        assert!(params(None, Some(1)).validate_and_get().is_ok());
        assert!(params(None, Some(100)).validate_and_get().is_ok());
        assert!(params(None, Some(101)).validate_and_get().is_err());
    }

    #[test]
    fn test_parses_from_query_strings() {
        let parsed: ListArtworksParams =
            serde_json::from_str(r#"{"page": "2", "page_size": "25", "tag": "oil"}"#).unwrap();

        assert_eq!(parsed.page, Some(2));
        assert_eq!(parsed.page_size, Some(25));
        assert_eq!(parsed.tag.as_deref(), Some("oil"));
    }

    #[test]
    fn test_filters_extraction() {
        let parsed: ListArtworksParams =
            serde_json::from_str(r#"{"user_id": "u1"}"#).unwrap();

        let filters = parsed.filters();
        assert_eq!(filters.user_id.as_deref(), Some("u1"));
        assert!(filters.gallery_id.is_none());
        assert!(filters.tag.is_none());
    }
}
