// Rust guideline compliant 2026-10-14

//! Property-based tests for the moderation state machine.

mod common;

use common::{post, RecordingApi};
use proptest::prelude::*;
use samachar_core::{
    Error, ModerationStatus, Moderator, PostAction, PostPatch, QueryCache, Role, Viewer,
};

fn arb_status() -> impl Strategy<Value = ModerationStatus> {
    prop_oneof![
        Just(ModerationStatus::Pending),
        Just(ModerationStatus::Approved),
        Just(ModerationStatus::Rejected),
    ]
}

fn arb_action() -> impl Strategy<Value = PostAction> {
    prop_oneof![
        Just(PostAction::Approve),
        Just(PostAction::Reject),
        Just(PostAction::Verify),
        Just(PostAction::Delete),
        Just(PostAction::Update(PostPatch::default())),
    ]
}

fn arb_role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Guest), Just(Role::Reporter), Just(Role::Admin)]
}

proptest! {
    /// For any item state, action and role, the server is contacted
    /// exactly when both guards pass, and a rejected transition leaves the
    /// server-side item unchanged.
    #[test]
    fn prop_guard_failure_makes_zero_calls(
        status in arb_status(),
        is_verified in any::<bool>(),
        action in arb_action(),
        role in arb_role(),
    ) {
        let mut item = post("item", status);
        item.is_verified = is_verified;
        let mut api = RecordingApi::with_posts(&[item.clone()]);
        let mut cache = QueryCache::new();

        let allowed = role == Role::Admin && status.can_apply(&action, is_verified).is_ok();
        let result = Moderator::new(Viewer::new(role), &mut cache).transition(&item, &action, &mut api);

        if allowed {
            prop_assert!(result.is_ok());
            prop_assert_eq!(api.calls.len(), 1);
        } else {
            prop_assert!(matches!(result, Err(Error::InvalidTransition(_))));
            prop_assert!(api.calls.is_empty());
            prop_assert_eq!(&api.posts["item"], &item);
        }
    }

    /// Delete and update are valid from every status.
    #[test]
    fn prop_delete_always_valid(status in arb_status(), is_verified in any::<bool>()) {
        prop_assert!(status.can_apply(&PostAction::Delete, is_verified).is_ok());
        prop_assert!(status.can_apply(&PostAction::Update(PostPatch::default()), is_verified).is_ok());
    }

    /// Every action listed by `valid_actions` passes `can_apply`.
    #[test]
    fn prop_valid_actions_are_applicable(status in arb_status(), is_verified in any::<bool>()) {
        for action in status.valid_actions(is_verified) {
            prop_assert!(status.can_apply(&action, is_verified).is_ok());
        }
    }
}
