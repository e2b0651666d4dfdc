//! Google Books `/v1/volumes` response shape
//!
//! Only the fields the service projects are modelled. Every field decodes
//! to its empty value when missing or `null`, so a sparse volume still
//! yields a book.

use serde::{Deserialize, Deserializer};

use super::types::Book;

/// Treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VolumesResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub total_items: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<VolumeItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VolumeItem {
    #[serde(deserialize_with = "null_as_default")]
    pub volume_info: VolumeInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub sale_info: SaleInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub access_info: AccessInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VolumeInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtitle: String,
    #[serde(deserialize_with = "null_as_default")]
    pub authors: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub publisher: String,
    #[serde(deserialize_with = "null_as_default")]
    pub published_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub page_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SaleInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub is_ebook: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub buy_link: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccessInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub public_domain: bool,
}

impl VolumesResponse {
    /// Project every item into a [`Book`], keeping upstream order
    pub fn into_books(self) -> Vec<Book> {
        self.items.into_iter().map(Book::from).collect()
    }
}

impl From<VolumeItem> for Book {
    fn from(item: VolumeItem) -> Self {
        let VolumeItem {
            volume_info,
            sale_info,
            access_info,
        } = item;

        Book {
            language: volume_info.language,
            tittle: volume_info.title,
            authors: volume_info.authors,
            subjects: volume_info.categories,
            publisher: volume_info.publisher,
            published_date: volume_info.published_date,
            number_of_pages: volume_info.page_count,
            description: volume_info.description,
            ebook: sale_info.is_ebook,
            public_domain: access_info.public_domain,
            link_to_buy: sale_info.buy_link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "kind": "books#volumes",
        "totalItems": 2,
        "items": [
            {
                "id": "B1hSG45JCX4C",
                "volumeInfo": {
                    "title": "Dune",
                    "subtitle": "Deluxe Edition",
                    "authors": ["Frank Herbert"],
                    "publisher": "Penguin",
                    "publishedDate": "2003-08-26",
                    "description": "Set on the desert planet Arrakis",
                    "pageCount": 896,
                    "categories": ["Fiction"],
                    "language": "en"
                },
                "saleInfo": {
                    "country": "BR",
                    "isEbook": true,
                    "buyLink": "https://play.google.com/store/books/details?id=B1hSG45JCX4C"
                },
                "accessInfo": {
                    "publicDomain": false
                }
            },
            {
                "volumeInfo": { "title": "Dune Messiah" }
            }
        ]
    }"#;

    #[test]
    fn decodes_and_maps_items_in_order() {
        let response: VolumesResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.total_items, 2);
        assert_eq!(response.items[0].volume_info.subtitle, "Deluxe Edition");

        let books = response.into_books();
        assert_eq!(books.len(), 2);

        let dune = &books[0];
        assert_eq!(dune.tittle, "Dune");
        assert_eq!(dune.authors, vec!["Frank Herbert"]);
        assert_eq!(dune.subjects, vec!["Fiction"]);
        assert_eq!(dune.publisher, "Penguin");
        assert_eq!(dune.published_date, "2003-08-26");
        assert_eq!(dune.number_of_pages, 896);
        assert_eq!(dune.language, "en");
        assert!(dune.ebook);
        assert!(!dune.public_domain);
        assert_eq!(
            dune.link_to_buy,
            "https://play.google.com/store/books/details?id=B1hSG45JCX4C"
        );

        assert_eq!(books[1].tittle, "Dune Messiah");
    }

    #[test]
    fn sparse_item_maps_to_empty_values() {
        let response: VolumesResponse = serde_json::from_str(SAMPLE).unwrap();
        let messiah = response.into_books().remove(1);

        assert!(messiah.authors.is_empty());
        assert!(messiah.subjects.is_empty());
        assert_eq!(messiah.number_of_pages, 0);
        assert!(!messiah.ebook);
        assert!(messiah.link_to_buy.is_empty());
    }

    #[test]
    fn missing_items_yield_no_books() {
        let response: VolumesResponse =
            serde_json::from_str(r#"{"kind": "books#volumes", "totalItems": 0}"#).unwrap();
        assert!(response.into_books().is_empty());
    }

    #[test]
    fn null_values_decode_as_empty() {
        let body = r#"{
            "totalItems": 1,
            "items": [
                {
                    "volumeInfo": {
                        "title": "Dune",
                        "authors": null,
                        "categories": null,
                        "publisher": null,
                        "pageCount": null
                    },
                    "saleInfo": null,
                    "accessInfo": { "publicDomain": null }
                },
                { "volumeInfo": null }
            ]
        }"#;

        let books = serde_json::from_str::<VolumesResponse>(body)
            .unwrap()
            .into_books();
        assert_eq!(books.len(), 2);

        let dune = &books[0];
        assert_eq!(dune.tittle, "Dune");
        assert!(dune.authors.is_empty());
        assert!(dune.subjects.is_empty());
        assert!(dune.publisher.is_empty());
        assert_eq!(dune.number_of_pages, 0);
        assert!(!dune.ebook);
        assert!(dune.link_to_buy.is_empty());
        assert!(!dune.public_domain);

        assert_eq!(books[1], Book::default());
    }

    #[test]
    fn null_items_yield_no_books() {
        let response: VolumesResponse =
            serde_json::from_str(r#"{"totalItems": null, "items": null}"#).unwrap();
        assert_eq!(response.total_items, 0);
        assert!(response.into_books().is_empty());
    }

    #[test]
    fn negative_page_count_is_kept() {
        let response: VolumesResponse =
            serde_json::from_str(r#"{"items": [{"volumeInfo": {"pageCount": -1}}]}"#).unwrap();
        assert_eq!(response.into_books()[0].number_of_pages, -1);
    }

    #[test]
    fn malformed_body_is_rejected() {
        let result = serde_json::from_str::<VolumesResponse>(r#"{"items": "nope"}"#);
        assert!(result.is_err());
    }
}
