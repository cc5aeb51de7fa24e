use bookhaven::{
    book::{BookRecord, PLACEHOLDER_COVER_URL},
    seed,
    session::{CardActions, Session, card_actions},
    types::Role,
};

fn find<'a>(books: &'a [BookRecord], id: &str) -> &'a BookRecord {
    books.iter().find(|b| b.id == id).expect("seed id")
}

#[test]
fn admins_manage_every_card_regardless_of_stock() {
    let books = seed::sample_books();
    for book in &books {
        assert_eq!(card_actions(Role::Admin, book), CardActions::Manage);
    }
    // Out-of-stock titles still get edit and delete controls.
    let sold_out = find(&books, "5");
    assert_eq!(sold_out.stock, 0);
    assert_eq!(card_actions(Role::Admin, sold_out), CardActions::Manage);
}

#[test]
fn customer_cards_offer_purchase_only_while_stocked() {
    let books = seed::sample_books();
    for book in &books {
        let expected = if book.in_stock() {
            CardActions::AddToCart
        } else {
            CardActions::OutOfStock
        };
        assert_eq!(card_actions(Role::Customer, book), expected);
    }

    let session = Session::new(Role::Customer);
    assert_eq!(session.card_actions(find(&books, "1")), CardActions::AddToCart);
    assert_eq!(session.card_actions(find(&books, "5")), CardActions::OutOfStock);
}

#[test]
fn add_to_cart_counts_only_stocked_titles() {
    let books = seed::sample_books();
    let mut session = Session::new(Role::Customer);

    assert!(session.add_to_cart(find(&books, "1")));
    assert_eq!(session.cart_count, 1);

    assert!(!session.add_to_cart(find(&books, "5")));
    assert_eq!(session.cart_count, 1);

    assert!(session.add_to_cart(find(&books, "6")));
    assert_eq!(session.cart_count, 2);
}

#[test]
fn cart_count_saturates_instead_of_wrapping() {
    let books = seed::sample_books();
    let mut session = Session::new(Role::Customer);
    session.cart_count = u32::MAX;

    assert!(session.add_to_cart(find(&books, "1")));
    assert_eq!(session.cart_count, u32::MAX);
}

#[test]
fn visible_books_run_the_sessions_current_query() {
    let books = seed::sample_books();
    let mut session = Session::new(Role::Customer);

    session.query.search_term = "the".to_string();
    let titles: Vec<&str> = session
        .visible_books(&books)
        .into_iter()
        .map(|b| b.title.as_str())
        .collect();
    assert_eq!(
        titles,
        [
            "Harry Potter and the Sorcerer's Stone",
            "The Catcher in the Rye",
            "The Great Gatsby",
        ]
    );

    session.query.search_term.clear();
    session.query.genre = "Fantasy".to_string();
    let hits = session.visible_books(&books);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "6");
}

#[test]
fn price_and_rating_render_as_fixed_point_decimals() {
    let books = seed::sample_books();
    let gatsby = find(&books, "1");
    assert_eq!(gatsby.price_display(), "12.99");
    assert_eq!(gatsby.rating_display().as_deref(), Some("4.2"));

    let mut cheap = gatsby.clone();
    cheap.price_cents = 5;
    cheap.rating_tenths = None;
    assert_eq!(cheap.price_display(), "0.05");
    assert_eq!(cheap.rating_display(), None);

    cheap.price_cents = 500;
    assert_eq!(cheap.price_display(), "5.00");
}

#[test]
fn blank_cover_urls_fall_back_to_the_placeholder() {
    let mut book = seed::sample_books().remove(0);
    book.cover_url.clear();
    assert_eq!(book.cover_url_or_placeholder(), PLACEHOLDER_COVER_URL);
    assert_eq!(book.cover_url_or_placeholder(), "/placeholder.svg");

    book.cover_url = "https://covers.example/gatsby.jpg".to_string();
    assert_eq!(
        book.cover_url_or_placeholder(),
        "https://covers.example/gatsby.jpg"
    );
}
