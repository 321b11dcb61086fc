//! Integration tests for the by-language rows service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use bridge_traits::{
    BookSearch, BookSearchResults, LanguageCatalogSource, Readiness, SearchOptions,
    StaticLanguageCatalog,
};
use core_library::{BasicBookInfo, BookFilter, Language};
use core_service::LanguageRowsService;

mock! {
    Search {}

    #[async_trait]
    impl BookSearch for Search {
        async fn search_books(
            &self,
            filter: &BookFilter,
            options: &SearchOptions,
        ) -> bridge_traits::error::Result<BookSearchResults>;

        async fn count_books(&self, filter: &BookFilter) -> bridge_traits::error::Result<u64>;
    }
}

struct PendingCatalog;

impl LanguageCatalogSource for PendingCatalog {
    fn languages_by_book_count(&self) -> Readiness<Vec<Language>> {
        Readiness::Pending
    }
}

fn book(id: &str, phash: Option<&str>, langs: &[&str]) -> BasicBookInfo {
    let mut book = BasicBookInfo::new(id, format!("Book {id}"));
    book.phash_of_first_content_image = phash.map(str::to_string);
    book.languages = langs.iter().map(|l| l.to_string()).collect();
    book
}

fn search_returning(books: Vec<BasicBookInfo>) -> MockSearch {
    let mut search = MockSearch::new();
    search.expect_search_books().returning(move |_, options| {
        // This view always needs the embedded language lists.
        assert!(options.include_language_details);
        Ok(BookSearchResults {
            total_count: books.len() as u64,
            books: books.clone(),
        })
    });
    search
}

fn catalog() -> StaticLanguageCatalog {
    StaticLanguageCatalog::new(vec![
        Language::new("fr", "français").with_english_name("French"),
        Language::new("en", "English").with_english_name("English"),
    ])
}

#[tokio::test]
async fn rows_group_books_and_report_counts() {
    let books = vec![
        book("a", Some("a"), &["en", "fr"]),
        book("b", Some("b"), &["en"]),
        book("c", None, &["en"]),
    ];
    let service = LanguageRowsService::new(
        Arc::new(search_returning(books)),
        Arc::new(catalog()),
    );

    let rows = service.rows_for_filter(&BookFilter::default()).await.unwrap();

    let en: Vec<&str> = rows.groups.bucket("en").unwrap().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(en, vec!["a", "b", "c"]);
    assert_eq!(rows.groups.bucket("fr").unwrap().len(), 1);
    // "3 books in 2 languages" style summary counts placements, not books.
    assert_eq!(rows.summary(), (4, 2));

    // Display order: English before French, regardless of catalog order.
    let codes: Vec<&str> = rows.languages.iter().map(|l| l.iso_code.as_str()).collect();
    assert_eq!(codes, vec!["en", "fr"]);
}

#[tokio::test]
async fn pending_catalog_groups_but_lists_no_languages() {
    let books = vec![book("a", Some("a"), &["en"])];
    let service = LanguageRowsService::new(
        Arc::new(search_returning(books)),
        Arc::new(PendingCatalog),
    );

    let rows = service.rows_for_filter(&BookFilter::default()).await.unwrap();

    assert_eq!(rows.groups.language_count(), 1);
    assert!(rows.languages.is_empty());
}

#[tokio::test]
async fn rows_recompute_from_scratch_each_call() {
    let service = LanguageRowsService::new(
        Arc::new(search_returning(vec![book("a", Some("a"), &["en"])])),
        Arc::new(catalog()),
    );

    let first = service.rows_for_filter(&BookFilter::default()).await.unwrap();
    let second = service.rows_for_filter(&BookFilter::default()).await.unwrap();
    assert_eq!(first.groups, second.groups);
    assert_eq!(first.summary(), second.summary());
}
