use bst_mass::{AddOutcome, Bst};

#[test]
fn bst_with_one_key() {
    let mut tree = Bst::new();

    let res = tree.add(10);
    assert_eq!(res.code(), 1);

    let res = tree.add(10);
    assert_eq!(res.code(), 0);
}

#[test]
fn bst_with_three_keys() {
    let mut tree = Bst::new();

    assert_eq!(tree.add(100), AddOutcome::Inserted);
    assert_eq!(tree.mass(), 1);
    assert_eq!(tree.add(300), AddOutcome::Inserted);
    assert_eq!(tree.mass(), 2);
    assert_eq!(tree.add(50), AddOutcome::Inserted);
    assert_eq!(tree.mass(), 3);

    assert_eq!(tree.add(100), AddOutcome::AlreadyPresent);
    assert_eq!(tree.mass(), 3);
    assert_eq!(tree.add(300), AddOutcome::AlreadyPresent);
    assert_eq!(tree.mass(), 3);
    assert_eq!(tree.add(50), AddOutcome::AlreadyPresent);
    assert_eq!(tree.mass(), 3);
}

#[test]
fn result_code_round_trips_through_i32() {
    let mut tree = Bst::new();
    let code: i32 = tree.add(7).into();
    assert_eq!(AddOutcome::try_from(code), Ok(AddOutcome::Inserted));
    let code: i32 = tree.add(7).into();
    assert_eq!(AddOutcome::try_from(code), Ok(AddOutcome::AlreadyPresent));
}
