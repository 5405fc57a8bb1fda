// SPDX-License-Identifier: MPL-2.0
//! Wire format of the Pixabay search endpoint.

use crate::domain::search::{ImageResult, SearchPage};
use serde::Deserialize;

/// Body of a successful `GET /api/` response.
#[derive(Debug, Clone, Deserialize)]
pub struct PixabayResponse {
    /// Number of matches in the whole catalogue.
    pub total: u64,
    /// Number of matches the API will actually page through.
    #[serde(rename = "totalHits")]
    pub total_hits: u64,
    pub hits: Vec<PixabayHit>,
}

/// One entry of `hits`.
#[derive(Debug, Clone, Deserialize)]
pub struct PixabayHit {
    pub id: u64,
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,
    #[serde(default)]
    pub tags: String,
}

impl From<PixabayHit> for ImageResult {
    fn from(hit: PixabayHit) -> Self {
        ImageResult {
            id: hit.id,
            thumbnail_url: hit.webformat_url,
            full_url: hit.large_image_url,
            alt: hit.tags,
        }
    }
}

impl PixabayResponse {
    /// Converts the response into a domain page.
    ///
    /// The reported total is `totalHits`: pages beyond it are refused by the
    /// API, so offering them would only produce failed fetches.
    #[must_use]
    pub fn into_search_page(self) -> SearchPage {
        SearchPage {
            total: self.total_hits.min(self.total),
            items: self.hits.into_iter().map(ImageResult::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "total": 4692,
        "totalHits": 500,
        "hits": [
            {
                "id": 195893,
                "pageURL": "https://pixabay.com/en/blossom-bloom-flower-195893/",
                "type": "photo",
                "tags": "blossom, bloom, flower",
                "previewURL": "https://cdn.pixabay.com/photo/2013/10/15/09/12/flower-195893_150.jpg",
                "webformatURL": "https://pixabay.com/get/35bbf209e13e39d2_640.jpg",
                "largeImageURL": "https://pixabay.com/get/ed6a99fd0a76647_1280.jpg",
                "views": 7671,
                "likes": 5
            }
        ]
    }"#;

    #[test]
    fn decodes_pixabay_payload() {
        let response: PixabayResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.total, 4692);
        assert_eq!(response.total_hits, 500);
        assert_eq!(response.hits.len(), 1);
    }

    #[test]
    fn maps_hits_to_image_results() {
        let response: PixabayResponse = serde_json::from_str(SAMPLE).unwrap();
        let page = response.into_search_page();

        assert_eq!(page.total, 500);
        let first = &page.items[0];
        assert_eq!(first.id, 195893);
        assert!(first.thumbnail_url.ends_with("_640.jpg"));
        assert!(first.full_url.ends_with("_1280.jpg"));
        assert_eq!(first.alt, "blossom, bloom, flower");
    }

    #[test]
    fn empty_result_maps_to_zero_total() {
        let response: PixabayResponse =
            serde_json::from_str(r#"{"total": 0, "totalHits": 0, "hits": []}"#).unwrap();
        let page = response.into_search_page();
        assert_eq!(page.total, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn missing_hits_is_a_decode_error() {
        let result = serde_json::from_str::<PixabayResponse>(r#"{"total": 3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_tags_defaults_to_empty_alt() {
        let response: PixabayResponse = serde_json::from_str(
            r#"{"total": 1, "totalHits": 1, "hits": [
                {"id": 7, "webformatURL": "a", "largeImageURL": "b"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(response.into_search_page().items[0].alt, "");
    }
}
