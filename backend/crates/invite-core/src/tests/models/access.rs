use crate::{Access, ClaimOutcome};

#[test]
fn test_access_default_is_unset() {
    assert_eq!(Access::default(), Access::Unset);
}

#[test]
fn test_access_option_mapping() {
    assert_eq!(Access::Unset.as_option(), None);
    assert_eq!(Access::Granted.as_option(), Some(true));
    assert_eq!(Access::Denied.as_option(), Some(false));

    assert_eq!(Access::from(None), Access::Unset);
    assert_eq!(Access::from(Some(true)), Access::Granted);
    assert_eq!(Access::from(Some(false)), Access::Denied);
}

#[test]
fn test_claim_outcome_maps_rows_affected() {
    assert_eq!(ClaimOutcome::from_rows_affected(1), ClaimOutcome::Claimed);
    assert_eq!(ClaimOutcome::from_rows_affected(0), ClaimOutcome::Unavailable);
    assert_eq!(Access::from(ClaimOutcome::Claimed), Access::Granted);
    assert_eq!(Access::from(ClaimOutcome::Unavailable), Access::Denied);
}
