//! Built-in sample dataset: 10 products, two reviews each.
//!
//! Small enough to eyeball, varied enough to produce interesting rank
//! disagreement: star ratings, sentiment, helpfulness, and age all pull in
//! different directions across the set.

use chrono::NaiveDate;

use crate::types::Review;

fn review(
    id: u64,
    product_id: u64,
    rating: u8,
    text: &str,
    helpful_votes: u32,
    total_votes: u32,
    year: i32,
    month: u32,
    day: u32,
) -> Review {
    Review {
        id,
        product_id,
        rating,
        text: text.into(),
        helpful_votes,
        total_votes,
        // Dates are compile-time constants in this table
        date: NaiveDate::from_ymd_opt(year, month, day).expect("valid sample date"),
    }
}

/// The demo review set. Deterministic: every call returns the same records.
pub fn sample_reviews() -> Vec<Review> {
    vec![
        review(1, 101, 5, "Great product, loved the quality.", 9, 10, 2024, 6, 1),
        review(2, 101, 4, "Worked well, but battery drains fast.", 3, 5, 2024, 5, 15),
        review(3, 102, 3, "Average experience, not as expected.", 4, 6, 2024, 4, 20),
        review(4, 102, 2, "Poor build, broke easily.", 0, 2, 2024, 4, 1),
        review(5, 103, 5, "Perfect for my needs.", 8, 8, 2024, 3, 15),
        review(6, 103, 5, "Amazing features and usability.", 10, 12, 2024, 3, 1),
        review(7, 104, 4, "Good value for money.", 5, 6, 2024, 2, 20),
        review(8, 104, 1, "Not worth the price.", 1, 3, 2024, 2, 1),
        review(9, 105, 3, "Fair quality, okay for casual use.", 3, 5, 2024, 1, 15),
        review(10, 105, 2, "Too small and weak.", 0, 1, 2024, 1, 1),
        review(11, 106, 4, "Works flawlessly, very happy.", 6, 7, 2023, 12, 15),
        review(12, 106, 5, "Excellent design and feel.", 7, 7, 2023, 12, 1),
        review(13, 107, 2, "Doesn't match the listing.", 0, 1, 2023, 11, 20),
        review(14, 107, 3, "Satisfactory performance.", 2, 3, 2023, 11, 1),
        review(15, 108, 4, "Quite comfortable and durable.", 5, 6, 2023, 10, 15),
        review(16, 108, 4, "Stylish and functional.", 6, 8, 2023, 10, 1),
        review(17, 109, 5, "Highly recommend it.", 9, 10, 2023, 9, 15),
        review(18, 109, 1, "Terrible purchase.", 0, 1, 2023, 9, 1),
        review(19, 110, 3, "Meets basic requirements.", 4, 6, 2023, 8, 15),
        review(20, 110, 5, "Exceeded expectations.", 10, 11, 2023, 8, 1),
    ]
}
