use crate::state::ClaimStatus;
use crate::utils::vested_amount;

const DAY: i64 = 24 * 60 * 60;
const START: i64 = 1_700_000_000;

#[test]
fn test_vesting_bounds() {
    assert_eq!(vested_amount(1000, START, DAY, START), 0);
    assert_eq!(vested_amount(1000, START, DAY, START + DAY / 2), 500);
    assert_eq!(vested_amount(1000, START, DAY, START + DAY), 1000);
    assert_eq!(vested_amount(1000, START, DAY, START + 200_000), 1000);
}

#[test]
fn test_time_before_registration_vests_nothing() {
    assert_eq!(vested_amount(1000, START, DAY, START - 1), 0);
    assert_eq!(vested_amount(1000, START, DAY, i64::MIN), 0);
}

#[test]
fn test_vesting_rounds_down() {
    // 1000 * 1 / 86400 < 1
    assert_eq!(vested_amount(1000, START, DAY, START + 1), 0);
    assert_eq!(vested_amount(10, START, 3, START + 1), 3);
    assert_eq!(vested_amount(10, START, 3, START + 2), 6);
    assert_eq!(vested_amount(10, START, 3, START + 3), 10);
}

#[test]
fn test_vesting_is_monotonic() {
    let mut previous = 0;
    for elapsed in (0..=DAY + 10).step_by(997) {
        let vested = vested_amount(123_456_789, START, DAY, START + elapsed);
        assert!(vested >= previous, "vesting decreased at elapsed {}", elapsed);
        assert!(vested <= 123_456_789);
        previous = vested;
    }
}

#[test]
fn test_large_amounts_do_not_overflow() {
    assert_eq!(vested_amount(u64::MAX, 0, 3, 1), u64::MAX / 3);
    assert_eq!(vested_amount(u64::MAX, 0, i64::MAX, i64::MAX - 1), u64::MAX - 3);
    assert_eq!(vested_amount(u64::MAX, 0, i64::MAX, i64::MAX), u64::MAX);
}

#[test]
fn test_non_positive_period_is_fully_vested() {
    assert_eq!(vested_amount(1000, START, 0, START), 1000);
    assert_eq!(vested_amount(1000, START, -5, START), 1000);
}

#[test]
fn test_incremental_payouts_sum_to_allocation() {
    let initial_locked = 1_000_003;
    let period = 7 * DAY;
    let mut status = ClaimStatus::default();
    let mut paid = 0;

    for elapsed in (0..=period).step_by(3_607) {
        let vested = vested_amount(initial_locked, START, period, START + elapsed);
        let payable = status.pending(vested);
        status.total_claimed += payable;
        paid += payable;
    }
    let payable = status.pending(vested_amount(initial_locked, START, period, START + period));
    paid += payable;

    assert_eq!(paid, initial_locked);
}
