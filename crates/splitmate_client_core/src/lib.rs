//! Splitmate client core: join-form validation, submission sequencing, and
//! session management for the Dioxus frontend. No UI code lives here, so the
//! whole login flow is testable without a browser.

pub mod api;
pub mod error;
pub mod models;
pub mod session;
pub mod submit;
pub mod validate;

pub use error::AuthError;
pub use models::{FederatedUser, FieldErrors, FormValues, ParticipantSelection};
pub use session::{Clock, MemoryTokenStore, Session, SessionClaims, SystemClock, TokenStore, TOKEN_KEY};
pub use submit::{federated_sign_in, submit_join, InFlightSlot, SubmitOutcome};
pub use validate::validate;
