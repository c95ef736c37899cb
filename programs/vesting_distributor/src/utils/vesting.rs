/// Amount of `initial_locked` unlocked at `now` for an allocation registered at `registered_at`.
///
/// Unlocking is linear over `vesting_period` seconds: 0 at registration,
/// `initial_locked` once the period has fully elapsed, floored in between.
/// The product is taken in u128 so it cannot overflow for any u64 amount.
pub fn vested_amount(initial_locked: u64, registered_at: i64, vesting_period: i64, now: i64) -> u64 {
    if vesting_period <= 0 {
        return initial_locked;
    }

    let elapsed = now.saturating_sub(registered_at).max(0);
    if elapsed >= vesting_period {
        return initial_locked;
    }

    let vested = u128::from(initial_locked) * elapsed as u128 / vesting_period as u128;

    // elapsed < vesting_period keeps vested strictly below initial_locked
    u64::try_from(vested).unwrap_or(initial_locked)
}
