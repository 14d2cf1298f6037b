use crate::{AccessGate, ClientError, ClientResult, CodeLedger, LandingUrl, Session};

use invite_core::{Access, ClaimOutcome};

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use googletest::prelude::*;
use tokio::sync::watch;

/// In-memory ledger: code id -> token of the holder that claimed it
#[derive(Clone, Default)]
struct FakeLedger {
    codes: Arc<Mutex<HashMap<String, Option<String>>>>,
    unreachable: bool,
}

impl FakeLedger {
    fn with_codes(ids: &[&str]) -> Self {
        let ledger = Self::default();
        {
            let mut codes = ledger.codes.lock().unwrap();
            for id in ids {
                codes.insert(id.to_string(), None);
            }
        }
        ledger
    }

    fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl CodeLedger for FakeLedger {
    async fn claim(&self, token: &str, code: &str) -> ClientResult<ClaimOutcome> {
        if self.unreachable {
            return Err(ClientError::api_error(500, "unreachable"));
        }
        let mut codes = self.codes.lock().unwrap();
        match codes.get_mut(code) {
            Some(holder) if holder.is_none() => {
                *holder = Some(token.to_string());
                Ok(ClaimOutcome::Claimed)
            }
            _ => Ok(ClaimOutcome::Unavailable),
        }
    }

    async fn has_access(&self, token: &str) -> ClientResult<bool> {
        if self.unreachable {
            return Err(ClientError::api_error(500, "unreachable"));
        }
        let codes = self.codes.lock().unwrap();
        Ok(codes.values().any(|holder| holder.as_deref() == Some(token)))
    }
}

fn landing(url: &str) -> LandingUrl {
    LandingUrl::parse(url).unwrap()
}

#[tokio::test]
async fn given_signed_out_mid_login_when_derived_then_unset() {
    // Given
    let mut gate = AccessGate::new(
        FakeLedger::default(),
        landing("https://thavma.club/#access_token=abc"),
    );

    // When
    let access = gate.derive(&Session::signed_out()).await;

    // Then
    assert_that!(access, eq(Access::Unset));
}

#[tokio::test]
async fn given_signed_out_when_derived_then_denied() {
    // Given
    let mut gate = AccessGate::new(FakeLedger::default(), landing("https://thavma.club/"));

    // When
    let access = gate.derive(&Session::signed_out()).await;

    // Then
    assert_that!(access, eq(Access::Denied));
}

#[tokio::test]
async fn given_unknown_code_when_derived_then_denied() {
    // Given
    let mut gate = AccessGate::new(
        FakeLedger::with_codes(&["abc123"]),
        landing("https://thavma.club/?code=doesnotexist"),
    );

    // When
    let access = gate.derive(&Session::signed_in("user-a")).await;

    // Then
    assert_that!(access, eq(Access::Denied));
}

#[tokio::test]
async fn given_code_redeemed_by_a_when_b_redeems_then_a_granted_b_denied() {
    // Given
    let ledger = FakeLedger::with_codes(&["abc123"]);
    let mut gate_a = AccessGate::new(ledger.clone(), landing("https://thavma.club/?code=abc123"));
    let mut gate_b = AccessGate::new(ledger.clone(), landing("https://thavma.club/?code=abc123"));

    // When
    let access_a = gate_a.derive(&Session::signed_in("user-a")).await;
    let access_b = gate_b.derive(&Session::signed_in("user-b")).await;

    // Then
    assert_that!(access_a, eq(Access::Granted));
    assert_that!(access_b, eq(Access::Denied));
}

#[tokio::test]
async fn given_redeemed_code_when_token_refreshes_then_still_granted() {
    // Given
    let ledger = FakeLedger::with_codes(&["abc123"]);
    let mut gate = AccessGate::new(ledger, landing("https://thavma.club/?code=abc123"));
    let first = gate.derive(&Session::signed_in("user-a")).await;

    // When
    let second = gate.derive(&Session::signed_in("user-a")).await;

    // Then
    assert_that!(first, eq(Access::Granted));
    assert_that!(second, eq(Access::Granted));
    assert_that!(gate.landing().code(), none());
}

#[tokio::test]
async fn given_no_code_when_derived_repeatedly_then_access_check_is_idempotent() {
    // Given
    let ledger = FakeLedger::with_codes(&["abc123"]);
    ledger.claim("user-a", "abc123").await.unwrap();
    let mut gate = AccessGate::new(ledger, landing("https://thavma.club/"));

    // When
    let results = [
        gate.derive(&Session::signed_in("user-a")).await,
        gate.derive(&Session::signed_in("user-a")).await,
        gate.derive(&Session::signed_in("user-a")).await,
    ];

    // Then
    assert_that!(results, each(eq(Access::Granted)));
}

#[tokio::test]
async fn given_unreachable_ledger_when_derived_then_denied() {
    // Given
    let mut gate = AccessGate::new(FakeLedger::unreachable(), landing("https://thavma.club/"));

    // When
    let access = gate.derive(&Session::signed_in("user-a")).await;

    // Then
    assert_that!(access, eq(Access::Denied));
}

#[tokio::test]
async fn given_running_gate_when_session_changes_then_access_channel_follows() {
    // Given
    let ledger = FakeLedger::with_codes(&["abc123"]);
    ledger.claim("user-a", "abc123").await.unwrap();
    let gate = AccessGate::new(ledger, landing("https://thavma.club/"));

    let (session_tx, session_rx) = watch::channel(Session::signed_out());
    let (access_tx, mut access_rx) = watch::channel(Access::Unset);
    let handle = tokio::spawn(gate.run(session_rx, access_tx));

    // When / Then: signed out
    tokio::time::timeout(Duration::from_secs(5), access_rx.changed())
        .await
        .unwrap()
        .unwrap();
    assert_that!(*access_rx.borrow_and_update(), eq(Access::Denied));

    // When / Then: login
    session_tx.send(Session::signed_in("user-a")).unwrap();
    tokio::time::timeout(Duration::from_secs(5), access_rx.changed())
        .await
        .unwrap()
        .unwrap();
    assert_that!(*access_rx.borrow_and_update(), eq(Access::Granted));

    // When / Then: logout
    session_tx.send(Session::signed_out()).unwrap();
    tokio::time::timeout(Duration::from_secs(5), access_rx.changed())
        .await
        .unwrap()
        .unwrap();
    assert_that!(*access_rx.borrow_and_update(), eq(Access::Denied));

    // Closing the session channel stops the gate
    drop(session_tx);
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .unwrap()
        .unwrap();
}
