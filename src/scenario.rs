//! Payment scenarios: an opening balance and the payments to attempt.

use crate::error::{PaymentError, Result};
use crate::money::Money;
use crate::payment::{PaymentMethod, PaymentRequest};
use crate::processor::PaymentProcessor;
use crate::wallet::Wallet;
use log::debug;
use std::io::Write;

/// An opening balance and an ordered list of payments.
///
/// Neither the opening balance nor any payment amount is negative, so a
/// constructed scenario always runs to completion unless writing fails.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scenario {
    initial_balance: Money,
    payments: Vec<PaymentRequest>,
}

impl Scenario {
    /// Creates a scenario, rejecting a negative opening balance or a
    /// negative payment amount.
    pub fn new(initial_balance: Money, payments: Vec<PaymentRequest>) -> Result<Self> {
        if initial_balance.is_negative() {
            return Err(PaymentError::NegativeBalance(initial_balance));
        }

        if let Some(request) = payments.iter().find(|r| r.amount.is_negative()) {
            return Err(PaymentError::NegativeAmount(request.amount));
        }

        Ok(Scenario {
            initial_balance,
            payments,
        })
    }

    /// The built-in run: open with 500.00, pay 100.00 by credit card, then
    /// 200.00 by PayPal.
    pub fn demo() -> Self {
        Scenario {
            initial_balance: Money::from_cents(50_000),
            payments: vec![
                PaymentRequest::new(PaymentMethod::CreditCard, Money::from_cents(10_000)),
                PaymentRequest::new(PaymentMethod::PayPal, Money::from_cents(20_000)),
            ],
        }
    }

    /// Returns the opening balance.
    pub fn initial_balance(&self) -> Money {
        self.initial_balance
    }

    /// Returns the payments in the order they are attempted.
    pub fn payments(&self) -> &[PaymentRequest] {
        &self.payments
    }

    /// Runs the scenario, writing every notice and confirmation to `out`.
    ///
    /// Each payment is dispatched only if its deduction succeeded. The
    /// remaining balance is written last and the final wallet returned.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Wallet> {
        let mut wallet = Wallet::new(self.initial_balance)?;
        let processor = PaymentProcessor::new();

        for request in &self.payments {
            if wallet.deduct(request.amount, out)? {
                processor.make_payment(&request.method, request.amount, out)?;
            } else {
                debug!(
                    "Skipped {} payment of {}, insufficient funds",
                    request.method, request.amount
                );
            }
        }

        writeln!(out, "Remaining Wallet Balance: ${}", wallet.balance())?;
        out.flush()?;
        Ok(wallet)
    }
}
