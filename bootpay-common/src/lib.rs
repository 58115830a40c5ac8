//! Bootpay Common Types
//!
//! Wire types shared by the Bootpay client and its test fixtures.

pub mod cancel;
pub mod envelope;
pub mod receipt;
pub mod token;

pub use cancel::{CancelRequest, CancelResult};
pub use envelope::{Envelope, ENVELOPE_STATUS_OK};
pub use receipt::{PaymentData, Receipt, RECEIPT_STATUS_COMPLETE};
pub use token::{AccessToken, TokenRequest};
