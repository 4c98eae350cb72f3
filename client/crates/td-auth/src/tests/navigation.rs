use crate::tests::{PASSWORD, machine, seed};
use crate::{AuthState, Navigator, Screen, route};

use td_core::SignInForm;

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_each_state_then_routes_to_expected_screen() {
    assert_that!(route(&AuthState::SignedOut), eq(Screen::Credentials));
    assert_that!(route(&AuthState::Authenticating), eq(Screen::Credentials));
    assert_that!(
        route(&AuthState::SignedInIncompleteProfile),
        eq(Screen::Profile)
    );
    assert_that!(route(&AuthState::SignedInComplete), eq(Screen::Dashboard));
}

#[test]
fn given_error_state_then_routes_from_previous() {
    let state = AuthState::error("boom", AuthState::SignedInComplete);

    assert_that!(route(&state), eq(Screen::Dashboard));
}

#[test]
fn given_error_on_error_then_previous_does_not_nest() {
    let first = AuthState::error("first", AuthState::SignedInIncompleteProfile);
    let second = AuthState::error("second", first);

    match second {
        AuthState::Error { message, previous } => {
            assert_that!(message, eq("second"));
            assert_that!(*previous, eq(&AuthState::SignedInIncompleteProfile));
        }
        other => panic!("expected error state, got {other:?}"),
    }
}

#[test]
fn given_screens_then_only_signed_in_screens_have_tabs() {
    assert!(Screen::Credentials.tabs().is_empty());
    assert_that!(
        Screen::Dashboard.tabs(),
        eq(&[Screen::Dashboard, Screen::Profile][..])
    );
    assert_that!(Screen::Profile.tabs(), eq(Screen::Dashboard.tabs()));
}

#[tokio::test]
async fn given_signed_in_navigator_when_sign_out_then_routes_to_credentials() {
    let (remote, machine) = machine();
    seed(&remote, "carol", true).await;
    machine
        .sign_in(&SignInForm::new("carol", PASSWORD))
        .await
        .unwrap();

    let mut navigator = Navigator::new(machine.subscribe());
    assert_that!(navigator.current(), eq(Screen::Dashboard));

    machine.sign_out().await.unwrap();

    assert_that!(navigator.follow().await, eq(Some(Screen::Credentials)));
    assert_that!(navigator.current(), eq(Screen::Credentials));
}

#[tokio::test]
async fn given_signed_out_navigator_when_incomplete_sign_in_then_routes_to_profile() {
    let (remote, machine) = machine();
    seed(&remote, "dave", false).await;
    let mut navigator = Navigator::new(machine.subscribe());

    machine
        .sign_in(&SignInForm::new("dave", PASSWORD))
        .await
        .unwrap();

    assert_that!(navigator.follow().await, eq(Some(Screen::Profile)));
}

#[tokio::test]
async fn given_machine_dropped_when_following_then_none() {
    let (_remote, machine) = machine();
    let mut navigator = Navigator::new(machine.subscribe());

    drop(machine);

    assert_that!(navigator.follow().await, eq(None));
}
