//! # Payment System
//!
//! Charges payments against a wallet and confirms each one through its
//! payment method.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: Amounts use 2 decimal places via `rust_decimal`
//! - **Encapsulated balance**: `Wallet` never drops below zero
//! - **Closed dispatch**: `PaymentMethod` is an enum, `PaymentProcessor` the one dispatch point
//! - **Writer-based output**: Every notice goes to a caller-supplied `Write`
//!
//! ## Example
//!
//! ```
//! use payment_system::Scenario;
//!
//! let mut out = Vec::new();
//! let wallet = Scenario::demo().run(&mut out).unwrap();
//! assert_eq!(wallet.balance().to_string(), "200.00");
//! ```

pub mod error;
pub mod money;
pub mod payment;
pub mod processor;
pub mod scenario;
pub mod wallet;

pub use error::{PaymentError, Result};
pub use money::Money;
pub use payment::{PaymentMethod, PaymentRequest};
pub use processor::PaymentProcessor;
pub use scenario::Scenario;
pub use wallet::Wallet;
