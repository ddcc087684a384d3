//! Submission sequencing for both authentication paths.
//!
//! Ordering is strict: validation precedes any remote call, the session opens
//! only after a successful remote call, and the caller navigates only after
//! the session is open. Re-entrancy is enforced by a single-slot in-flight
//! token rather than a disabled button.

use std::future::Future;
use std::sync::{Arc, Mutex};

use crate::error::AuthError;
use crate::models::{FederatedUser, FieldErrors, FormValues};
use crate::session::Session;
use crate::validate::validate;

/// Single-slot in-flight token. A submission that cannot take the slot is
/// rejected outright; the guard frees the slot on drop in every exit path.
#[derive(Clone, Default)]
pub struct InFlightSlot(Arc<Mutex<bool>>);

pub struct InFlightGuard(Arc<Mutex<bool>>);

impl InFlightSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self) -> Option<InFlightGuard> {
        let mut busy = self.0.lock().unwrap();
        if *busy {
            return None;
        }
        *busy = true;
        Some(InFlightGuard(Arc::clone(&self.0)))
    }

    pub fn is_busy(&self) -> bool {
        *self.0.lock().unwrap()
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        *self.0.lock().unwrap() = false;
    }
}

/// How one submit attempt ended. The UI maps this onto field messages, the
/// error banner, or navigation.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing left the client.
    Invalid(FieldErrors),
    /// A prior attempt still holds the in-flight slot.
    Busy,
    /// Document written and session opened; clear the form and navigate.
    Completed,
    /// Remote call failed; form state is preserved for retry.
    Failed(AuthError),
}

/// Password path: validate, write the user document, open a session.
///
/// `create_user` is the remote write, injected so tests can stub the store.
pub async fn submit_join<F, Fut>(
    values: FormValues,
    slot: InFlightSlot,
    session: Session,
    create_user: F,
) -> SubmitOutcome
where
    F: FnOnce(FormValues) -> Fut,
    Fut: Future<Output = Result<(), AuthError>>,
{
    let errors = validate(&values);
    if !errors.is_empty() {
        return SubmitOutcome::Invalid(errors);
    }

    let Some(_guard) = slot.try_acquire() else {
        return SubmitOutcome::Busy;
    };

    let subject = values.name.trim().to_string();
    match create_user(values).await {
        Ok(()) => {
            session.open(&subject);
            SubmitOutcome::Completed
        }
        Err(err) => {
            log::error!("join submission failed: {}", err);
            SubmitOutcome::Failed(err)
        }
    }
}

/// Federated path: no field validation, same in-flight slot, and provider
/// errors surface exactly like password-path errors.
pub async fn federated_sign_in<F, Fut>(
    slot: InFlightSlot,
    session: Session,
    provider: F,
) -> SubmitOutcome
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<FederatedUser, AuthError>>,
{
    let Some(_guard) = slot.try_acquire() else {
        return SubmitOutcome::Busy;
    };

    match provider().await {
        Ok(user) => {
            session.open_federated(&user.refresh_token);
            SubmitOutcome::Completed
        }
        Err(err) => {
            log::error!("federated sign-in failed: {}", err);
            SubmitOutcome::Failed(err)
        }
    }
}
