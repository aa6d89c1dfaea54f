//! Pool allocation (FIFO deduction)
//!
//! Deficit members are zeroed. Their combined deficit is then deducted from
//! the surplus members in input order, each surplus member giving at most its
//! own balance. Members with a zero balance are left alone.
//!
//! When deficit exceeds total surplus, every surplus member ends at zero and
//! the remainder is dropped: the output sum is then greater than the input
//! sum. Use [`pool_totals`] to see how much went uncovered.

use crate::model::{AllocatedMember, PoolMember, PoolTotals};

pub fn allocate_pool(members: &[PoolMember]) -> Vec<AllocatedMember> {
    let mut remaining: f64 = members
        .iter()
        .filter(|m| m.cb_before < 0.0)
        .map(|m| m.cb_before.abs())
        .sum();

    members
        .iter()
        .map(|m| {
            let cb_after = if m.cb_before < 0.0 {
                0.0
            } else if m.cb_before > 0.0 && remaining > 0.0 {
                let give = m.cb_before.min(remaining);
                remaining -= give;
                m.cb_before - give
            } else {
                m.cb_before
            };
            AllocatedMember {
                ship_id: m.ship_id.clone(),
                cb_before: m.cb_before,
                cb_after,
            }
        })
        .collect()
}

pub fn pool_totals(allocated: &[AllocatedMember]) -> PoolTotals {
    let surplus: f64 = allocated
        .iter()
        .filter(|m| m.cb_before > 0.0)
        .map(|m| m.cb_before)
        .sum();
    let deficit: f64 = allocated
        .iter()
        .filter(|m| m.cb_before < 0.0)
        .map(|m| m.cb_before.abs())
        .sum();

    PoolTotals {
        cb_before: allocated.iter().map(|m| m.cb_before).sum(),
        cb_after: allocated.iter().map(|m| m.cb_after).sum(),
        uncovered_deficit: (deficit - surplus).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(values: &[(&str, f64)]) -> Vec<PoolMember> {
        values.iter().map(|(id, cb)| PoolMember::new(*id, *cb)).collect()
    }

    fn after(allocated: &[AllocatedMember]) -> Vec<f64> {
        allocated.iter().map(|m| m.cb_after).collect()
    }

    #[test]
    fn test_surplus_covers_deficit() {
        let res = allocate_pool(&members(&[("S1", 50.0), ("S2", -30.0)]));
        assert_eq!(after(&res), vec![20.0, 0.0]);
        let totals = pool_totals(&res);
        assert!((totals.cb_after - totals.cb_before).abs() < 1e-9);
        assert_eq!(totals.uncovered_deficit, 0.0);
    }

    #[test]
    fn test_deficit_exceeds_surplus() {
        let res = allocate_pool(&members(&[("S1", 10.0), ("S2", -50.0)]));
        assert_eq!(after(&res), vec![0.0, 0.0]);
        let totals = pool_totals(&res);
        assert_eq!(totals.cb_before, -40.0);
        assert_eq!(totals.cb_after, 0.0);
        assert_eq!(totals.uncovered_deficit, 40.0);
    }

    #[test]
    fn test_fifo_order() {
        let res = allocate_pool(&members(&[("S1", 10.0), ("S2", 20.0), ("S3", -15.0)]));
        assert_eq!(after(&res), vec![0.0, 15.0, 0.0]);

        let reordered = allocate_pool(&members(&[("S2", 20.0), ("S1", 10.0), ("S3", -15.0)]));
        assert_eq!(after(&reordered), vec![5.0, 10.0, 0.0]);
        assert_eq!(pool_totals(&res).cb_after, pool_totals(&reordered).cb_after);
    }

    #[test]
    fn test_deficit_before_surplus_in_input() {
        let res = allocate_pool(&members(&[("D1", -5.0), ("S1", 8.0), ("D2", -2.0)]));
        assert_eq!(after(&res), vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_untouched_surplus_after_exhaustion() {
        let res = allocate_pool(&members(&[("S1", 30.0), ("S2", 40.0), ("D1", -30.0)]));
        assert_eq!(after(&res), vec![0.0, 40.0, 0.0]);
    }

    #[test]
    fn test_zero_members_pass_through() {
        let res = allocate_pool(&members(&[("Z1", 0.0), ("S1", 5.0), ("Z2", 0.0), ("D1", -3.0)]));
        assert_eq!(res[0].ship_id, "Z1");
        assert_eq!(res[0].cb_after, 0.0);
        assert_eq!(res[2].ship_id, "Z2");
        assert_eq!(res[2].cb_after, 0.0);
        assert_eq!(res[1].cb_after, 2.0);
    }

    #[test]
    fn test_order_and_ids_preserved() {
        let input = members(&[("A", -1.0), ("B", 3.0), ("C", 0.0), ("D", 2.0)]);
        let res = allocate_pool(&input);
        let ids: Vec<_> = res.iter().map(|m| m.ship_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C", "D"]);
        for (m, r) in input.iter().zip(&res) {
            assert_eq!(m.cb_before, r.cb_before);
        }
    }

    #[test]
    fn test_empty_and_single() {
        assert!(allocate_pool(&[]).is_empty());

        let single = allocate_pool(&members(&[("S1", 12.5)]));
        assert_eq!(after(&single), vec![12.5]);
    }

    #[test]
    fn test_single_deficit_member_is_zeroed() {
        let single = allocate_pool(&members(&[("D1", -7.0)]));
        assert_eq!(after(&single), vec![0.0]);
    }

    #[test]
    fn test_idempotent() {
        let input = members(&[("S1", 10.0), ("S2", 20.0), ("S3", -15.0), ("S4", -1.0)]);
        assert_eq!(allocate_pool(&input), allocate_pool(&input));
    }

    #[test]
    fn test_input_not_mutated() {
        let input = members(&[("S1", 10.0), ("S2", -10.0)]);
        let snapshot = input.clone();
        let _ = allocate_pool(&input);
        assert_eq!(input, snapshot);
    }
}
