//! Dispatches payments to their payment method.

use crate::error::Result;
use crate::money::Money;
use crate::payment::PaymentMethod;
use log::debug;
use std::io::Write;

/// Stateless coordinator that confirms payments through whichever
/// [`PaymentMethod`] it is handed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentProcessor;

impl PaymentProcessor {
    /// Creates a new processor.
    pub fn new() -> Self {
        PaymentProcessor
    }

    /// Confirms a payment of `amount` using `method`, writing the
    /// confirmation to `out`.
    pub fn make_payment<W: Write>(
        &self,
        method: &PaymentMethod,
        amount: Money,
        out: &mut W,
    ) -> Result<()> {
        debug!("Dispatching {} payment of {}", method, amount);
        method.process_payment(amount, out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pay(method: PaymentMethod, amount: Money) -> String {
        let processor = PaymentProcessor::new();
        let mut out = Vec::new();
        processor.make_payment(&method, amount, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_dispatches_credit_card() {
        let output = pay(PaymentMethod::CreditCard, Money::from_cents(10_000));
        assert!(output.contains("Credit Card"));
        assert!(output.contains("100.00"));
    }

    #[test]
    fn test_dispatches_paypal() {
        let output = pay(PaymentMethod::PayPal, Money::from_cents(20_000));
        assert!(output.contains("PayPal"));
        assert!(output.contains("200.00"));
        assert!(!output.contains("Credit Card"));
    }

    #[test]
    fn test_processor_is_reusable() {
        let processor = PaymentProcessor::default();
        let mut out = Vec::new();

        for method in [PaymentMethod::CreditCard, PaymentMethod::PayPal] {
            processor
                .make_payment(&method, Money::from_cents(1), &mut out)
                .unwrap();
        }

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Processed $0.01 using Credit Card.\nProcessed $0.01 using PayPal.\n"
        );
    }
}
