//! Payment methods and payment requests.

use crate::money::Money;
use std::fmt;
use std::io::{self, Write};

/// The ways a payment can be confirmed.
///
/// The set is closed: every method the system supports is a variant here,
/// and none of them carry state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    /// Charged to a credit card.
    CreditCard,

    /// Charged through a PayPal account.
    PayPal,
}

impl PaymentMethod {
    /// Human-readable channel name used in confirmations.
    pub fn channel(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
        }
    }

    /// Writes the confirmation line for a payment of `amount`.
    pub fn process_payment<W: Write>(&self, amount: Money, out: &mut W) -> io::Result<()> {
        writeln!(out, "Processed ${} using {}.", amount, self.channel())
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.channel())
    }
}

/// A single charge: which method to confirm it with and how much to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentRequest {
    /// Method used to confirm the payment
    pub method: PaymentMethod,

    /// Amount deducted from the wallet
    pub amount: Money,
}

impl PaymentRequest {
    /// Creates a request to charge `amount` through `method`.
    pub fn new(method: PaymentMethod, amount: Money) -> Self {
        PaymentRequest { method, amount }
    }
}
