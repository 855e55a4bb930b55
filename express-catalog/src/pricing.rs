/// Fare for a group of seats in one class: plain integer multiplication, no rounding.
/// Saturates instead of wrapping on absurd seat counts.
pub fn total_price(seat_count: usize, unit_price: i32) -> i32 {
    i32::try_from(seat_count)
        .map(|count| count.saturating_mul(unit_price))
        .unwrap_or(i32::MAX)
}
