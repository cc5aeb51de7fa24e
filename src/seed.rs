//! The starter catalog: six well-known titles used by demos and tests.

use crate::book::{BookRecord, PLACEHOLDER_COVER_URL};

/// Returns the starter catalog in curation order, ids `"1"` through `"6"`.
pub fn sample_books() -> Vec<BookRecord> {
    vec![
        BookRecord {
            id: "1".to_string(),
            title: "The Great Gatsby".to_string(),
            author: "F. Scott Fitzgerald".to_string(),
            genre: "Classic Literature".to_string(),
            price_cents: 1299,
            description: "A classic American novel set in the Jazz Age, exploring themes of \
                          wealth, love, and the American Dream."
                .to_string(),
            stock: 15,
            cover_url: PLACEHOLDER_COVER_URL.to_string(),
            rating_tenths: Some(42),
            isbn: "978-0-7432-7356-5".to_string(),
        },
        BookRecord {
            id: "2".to_string(),
            title: "To Kill a Mockingbird".to_string(),
            author: "Harper Lee".to_string(),
            genre: "Fiction".to_string(),
            price_cents: 1499,
            description: "A gripping tale of racial injustice and childhood innocence in the \
                          American South."
                .to_string(),
            stock: 8,
            cover_url: PLACEHOLDER_COVER_URL.to_string(),
            rating_tenths: Some(45),
            isbn: "978-0-06-112008-4".to_string(),
        },
        BookRecord {
            id: "3".to_string(),
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            genre: "Dystopian Fiction".to_string(),
            price_cents: 1399,
            description: "A dystopian social science fiction novel exploring surveillance, \
                          truth, and individuality."
                .to_string(),
            stock: 22,
            cover_url: PLACEHOLDER_COVER_URL.to_string(),
            rating_tenths: Some(44),
            isbn: "978-0-452-28423-4".to_string(),
        },
        BookRecord {
            id: "4".to_string(),
            title: "Pride and Prejudice".to_string(),
            author: "Jane Austen".to_string(),
            genre: "Romance".to_string(),
            price_cents: 1199,
            description: "A witty and romantic novel about love, class, and social expectations \
                          in 19th-century England."
                .to_string(),
            stock: 12,
            cover_url: PLACEHOLDER_COVER_URL.to_string(),
            rating_tenths: Some(43),
            isbn: "978-0-14-143951-8".to_string(),
        },
        BookRecord {
            id: "5".to_string(),
            title: "The Catcher in the Rye".to_string(),
            author: "J.D. Salinger".to_string(),
            genre: "Coming of Age".to_string(),
            price_cents: 1349,
            description: "A controversial novel about teenage rebellion and alienation in \
                          post-war America."
                .to_string(),
            stock: 0,
            cover_url: PLACEHOLDER_COVER_URL.to_string(),
            rating_tenths: Some(38),
            isbn: "978-0-316-76948-0".to_string(),
        },
        BookRecord {
            id: "6".to_string(),
            title: "Harry Potter and the Sorcerer's Stone".to_string(),
            author: "J.K. Rowling".to_string(),
            genre: "Fantasy".to_string(),
            price_cents: 1599,
            description: "The magical beginning of Harry Potter's journey at Hogwarts School of \
                          Witchcraft and Wizardry."
                .to_string(),
            stock: 25,
            cover_url: PLACEHOLDER_COVER_URL.to_string(),
            rating_tenths: Some(47),
            isbn: "978-0-439-70818-8".to_string(),
        },
    ]
}
