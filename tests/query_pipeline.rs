use bookhaven::{
    book::BookRecord,
    query::{self, CatalogQuery},
    seed,
    types::SortKey,
};

fn book(
    id: &str,
    title: &str,
    author: &str,
    genre: &str,
    price_cents: u32,
    rating_tenths: Option<u8>,
) -> BookRecord {
    BookRecord {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        genre: genre.to_string(),
        price_cents,
        description: String::new(),
        stock: 1,
        cover_url: String::new(),
        rating_tenths,
        isbn: String::new(),
    }
}

fn titles<'a>(hits: &[&'a BookRecord]) -> Vec<&'a str> {
    hits.iter().map(|b| b.title.as_str()).collect()
}

#[test]
fn empty_query_returns_whole_catalog_in_title_order() {
    let books = seed::sample_books();
    let hits = query::apply(&books, &CatalogQuery::all());

    assert_eq!(
        titles(&hits),
        [
            "1984",
            "Harry Potter and the Sorcerer's Stone",
            "Pride and Prejudice",
            "The Catcher in the Rye",
            "The Great Gatsby",
            "To Kill a Mockingbird",
        ]
    );
}

#[test]
fn text_search_matches_title_and_author_substrings() {
    let books = seed::sample_books();
    let hits = query::apply(
        &books,
        &CatalogQuery {
            search_term: "the".to_string(),
            ..CatalogQuery::default()
        },
    );

    // "the" also hits "Harry Potter and the Sorcerer's Stone".
    assert_eq!(
        titles(&hits),
        [
            "Harry Potter and the Sorcerer's Stone",
            "The Catcher in the Rye",
            "The Great Gatsby",
        ]
    );

    let by_author = query::apply(
        &books,
        &CatalogQuery {
            search_term: "rowling".to_string(),
            ..CatalogQuery::default()
        },
    );
    assert_eq!(titles(&by_author), ["Harry Potter and the Sorcerer's Stone"]);

    let shouted = query::apply(
        &books,
        &CatalogQuery {
            search_term: "GATSBY".to_string(),
            ..CatalogQuery::default()
        },
    );
    assert_eq!(titles(&shouted), ["The Great Gatsby"]);
}

#[test]
fn genre_filter_is_exact_and_case_sensitive() {
    let books = seed::sample_books();

    let fantasy = query::apply(
        &books,
        &CatalogQuery {
            genre: "Fantasy".to_string(),
            sort_key: SortKey::PriceAsc,
            ..CatalogQuery::default()
        },
    );
    assert_eq!(titles(&fantasy), ["Harry Potter and the Sorcerer's Stone"]);

    let lowercase = query::apply(
        &books,
        &CatalogQuery {
            genre: "fantasy".to_string(),
            ..CatalogQuery::default()
        },
    );
    assert!(lowercase.is_empty());
}

#[test]
fn rating_sort_descends_with_missing_rating_as_zero() {
    let books = seed::sample_books();
    let hits = query::apply(
        &books,
        &CatalogQuery {
            sort_key: SortKey::RatingDesc,
            ..CatalogQuery::default()
        },
    );

    assert_eq!(
        titles(&hits),
        [
            "Harry Potter and the Sorcerer's Stone",
            "To Kill a Mockingbird",
            "1984",
            "Pride and Prejudice",
            "The Great Gatsby",
            "The Catcher in the Rye",
        ]
    );
}

#[test]
fn no_matches_is_an_empty_result_not_an_error() {
    let books = seed::sample_books();
    let hits = query::apply(
        &books,
        &CatalogQuery {
            search_term: "zzz".to_string(),
            ..CatalogQuery::default()
        },
    );
    assert!(hits.is_empty());
}

#[test]
fn whitespace_search_terms_are_literal_substrings() {
    let books = seed::sample_books();

    // Every title or author in the seed catalog contains a single space,
    // including "1984" via its author.
    let single = query::apply(
        &books,
        &CatalogQuery {
            search_term: " ".to_string(),
            ..CatalogQuery::default()
        },
    );
    assert_eq!(single.len(), books.len());

    // Nothing contains two consecutive spaces.
    let double = query::apply(
        &books,
        &CatalogQuery {
            search_term: "  ".to_string(),
            ..CatalogQuery::default()
        },
    );
    assert!(double.is_empty());
}

#[test]
fn title_sort_folds_case_instead_of_byte_order() {
    let books = vec![
        book("1", "zebra facts", "A", "Reference", 100, None),
        book("2", "Apple Songs", "B", "Reference", 100, None),
    ];

    let hits = query::apply(&books, &CatalogQuery::all());
    assert_eq!(titles(&hits), ["Apple Songs", "zebra facts"]);

    let books = vec![
        book("1", "apple songs", "A", "Reference", 100, None),
        book("2", "Zebra Facts", "B", "Reference", 100, None),
    ];
    let hits = query::apply(&books, &CatalogQuery::all());
    // Under byte order "Zebra Facts" ('Z' = 0x5A) would precede
    // "apple songs" ('a' = 0x61); the fold keeps alphabetical order.
    assert_eq!(titles(&hits), ["apple songs", "Zebra Facts"]);
}

#[test]
fn equal_sort_keys_preserve_catalog_order() {
    let books = vec![
        book("1", "First", "A", "G", 999, Some(40)),
        book("2", "Second", "B", "G", 999, Some(40)),
        book("3", "Third", "C", "G", 999, Some(40)),
    ];

    for sort_key in [SortKey::PriceAsc, SortKey::PriceDesc, SortKey::RatingDesc] {
        let hits = query::apply(
            &books,
            &CatalogQuery {
                sort_key,
                ..CatalogQuery::default()
            },
        );
        assert_eq!(titles(&hits), ["First", "Second", "Third"], "{sort_key:?}");
    }
}

#[test]
fn missing_rating_ties_with_explicit_zero_stably() {
    let books = vec![
        book("1", "Unrated", "A", "G", 100, None),
        book("2", "Zero", "B", "G", 100, Some(0)),
        book("3", "Rated", "C", "G", 100, Some(10)),
    ];

    let hits = query::apply(
        &books,
        &CatalogQuery {
            sort_key: SortKey::RatingDesc,
            ..CatalogQuery::default()
        },
    );
    // None compares as zero, so "Unrated" and "Zero" tie and keep catalog
    // order behind the rated title.
    assert_eq!(titles(&hits), ["Rated", "Unrated", "Zero"]);
}

#[test]
fn apply_is_deterministic_for_identical_inputs() {
    let books = seed::sample_books();
    let request = CatalogQuery {
        search_term: "a".to_string(),
        sort_key: SortKey::PriceDesc,
        ..CatalogQuery::default()
    };

    let first = query::apply_cloned(&books, &request);
    let second = query::apply_cloned(&books, &request);
    assert_eq!(first, second);
}

#[test]
fn available_genres_lists_all_then_first_seen_order() {
    let books = seed::sample_books();
    assert_eq!(
        query::available_genres(&books),
        [
            "all",
            "Classic Literature",
            "Fiction",
            "Dystopian Fiction",
            "Romance",
            "Coming of Age",
            "Fantasy",
        ]
    );
}

#[test]
fn available_genres_follows_the_live_catalog() {
    let mut books = seed::sample_books();
    books.retain(|b| b.genre != "Fantasy");

    let genres = query::available_genres(&books);
    assert!(!genres.iter().any(|g| g == "Fantasy"));

    books.push(book("9", "New Arrival", "N", "Poetry", 899, None));
    let genres = query::available_genres(&books);
    assert_eq!(genres.last().map(String::as_str), Some("Poetry"));
}

#[test]
fn genre_named_all_does_not_duplicate_the_sentinel() {
    let books = vec![
        book("1", "Catchall", "A", "all", 100, None),
        book("2", "Other", "B", "G", 100, None),
    ];

    assert_eq!(query::available_genres(&books), ["all", "G"]);
}

#[test]
fn sort_key_strings_round_trip_and_unknown_keys_fail() {
    let keys: Vec<String> = [
        SortKey::Title,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::RatingDesc,
    ]
    .iter()
    .map(|k| serde_json::to_string(k).expect("serialize"))
    .collect();
    assert_eq!(
        keys,
        ["\"title\"", "\"price-asc\"", "\"price-desc\"", "\"rating-desc\""]
    );

    assert!(serde_json::from_str::<SortKey>("\"newest\"").is_err());
}
