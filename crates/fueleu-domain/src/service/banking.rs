//! Banking rules
//!
//! Both operations return the balance left after the movement.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankingError {
    #[error("Amount must be positive (got {0})")]
    NonPositiveAmount(f64),

    #[error("Insufficient surplus to bank: requested {requested}, available {available}")]
    InsufficientSurplus { requested: f64, available: f64 },

    #[error("Cannot apply more than available: requested {requested}, available {available}")]
    ExceedsAvailable { requested: f64, available: f64 },
}

/// Bank `amount` out of an `available` surplus
pub fn bank_surplus(available: f64, amount: f64) -> Result<f64, BankingError> {
    if amount.is_nan() || amount <= 0.0 {
        return Err(BankingError::NonPositiveAmount(amount));
    }
    if amount > available {
        return Err(BankingError::InsufficientSurplus {
            requested: amount,
            available,
        });
    }
    Ok(available - amount)
}

/// Apply `to_apply` out of an `available` bank balance
pub fn apply_bank(available: f64, to_apply: f64) -> Result<f64, BankingError> {
    if to_apply.is_nan() || to_apply <= 0.0 {
        return Err(BankingError::NonPositiveAmount(to_apply));
    }
    if to_apply > available {
        return Err(BankingError::ExceedsAvailable {
            requested: to_apply,
            available,
        });
    }
    Ok(available - to_apply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_within_surplus() {
        assert_eq!(bank_surplus(10.0, 4.0), Ok(6.0));
        assert_eq!(bank_surplus(10.0, 10.0), Ok(0.0));
    }

    #[test]
    fn test_bank_rejects_non_positive() {
        assert_eq!(bank_surplus(10.0, 0.0), Err(BankingError::NonPositiveAmount(0.0)));
        assert!(matches!(bank_surplus(10.0, -1.0), Err(BankingError::NonPositiveAmount(_))));
        assert!(matches!(bank_surplus(10.0, f64::NAN), Err(BankingError::NonPositiveAmount(_))));
    }

    #[test]
    fn test_bank_rejects_over_surplus() {
        assert!(matches!(
            bank_surplus(3.0, 5.0),
            Err(BankingError::InsufficientSurplus { .. })
        ));
    }

    #[test]
    fn test_apply_rules() {
        assert_eq!(apply_bank(8.0, 3.0), Ok(5.0));
        assert!(matches!(apply_bank(8.0, 0.0), Err(BankingError::NonPositiveAmount(_))));
        assert!(matches!(
            apply_bank(2.0, 3.0),
            Err(BankingError::ExceedsAvailable { .. })
        ));
    }
}
