use crate::{CoreError, Identity};

#[test]
fn test_identity_accepts_opaque_ids() {
    let id = Identity::new("8d3f0c1e-5a7b-4c2d-9e1f-0a1b2c3d4e5f").unwrap();

    assert_eq!(id.as_str(), "8d3f0c1e-5a7b-4c2d-9e1f-0a1b2c3d4e5f");
    assert_eq!(id.to_string(), "8d3f0c1e-5a7b-4c2d-9e1f-0a1b2c3d4e5f");
}

#[test]
fn test_identity_rejects_blank_and_oversized() {
    assert!(matches!(
        Identity::new("  "),
        Err(CoreError::InvalidIdentity { .. })
    ));
    assert!(matches!(
        Identity::new("x".repeat(129)),
        Err(CoreError::InvalidIdentity { .. })
    ));
}
