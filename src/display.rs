//! Display Helpers
//!
//! Formatting for product rows: star rating, price and vote count.

/// Number of stars in a rating row
pub const MAX_STARS: usize = 5;

/// Filled stars for an average score, rounded to the nearest whole star.
pub fn filled_stars(rate: f64) -> usize {
    if !rate.is_finite() || rate <= 0.0 {
        return 0;
    }
    (rate.round() as usize).min(MAX_STARS)
}

/// Filled/empty state for each of the five star glyphs
pub fn star_states(rate: f64) -> [bool; MAX_STARS] {
    let filled = filled_stars(rate);
    let mut states = [false; MAX_STARS];
    for (index, state) in states.iter_mut().enumerate() {
        *state = index < filled;
    }
    states
}

pub fn format_price(price: f64) -> String {
    format!("Rs.{:.2}", price)
}

pub fn format_rating_count(count: u32) -> String {
    format!("({})", count)
}
