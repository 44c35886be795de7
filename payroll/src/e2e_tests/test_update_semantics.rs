//! Test update through the shell: same id, new id, and id collisions.

use crate::e2e_tests::helpers::*;

#[test]
fn test_update_same_id_replaces_attributes() {
    let mut shell = TestShell::new();
    shell.add_all(&[10, 5, 15]);

    assert!(is_ok(&shell.send("update 5 5, Renamed, 42")));
    assert_eq!(
        text(&shell.send("find 5")),
        "Employee found: Employee [id=5, name=Renamed, salary=42.00]"
    );
    assert_eq!(shell.ids(), vec![5, 10, 15]);
}

#[test]
fn test_update_new_id_moves_record() {
    let mut shell = TestShell::new();
    shell.add_all(&[10, 5, 15]);

    assert!(is_ok(&shell.send("update 10 12, Moved, 1")));
    assert_eq!(text(&shell.send("find 10")), "Employee not found!");
    assert_eq!(shell.ids(), vec![5, 12, 15]);
}

#[test]
fn test_update_onto_taken_id_loses_old_record() {
    let mut shell = TestShell::new();
    shell.add_all(&[10, 5, 15]);

    // Remove-then-insert: 10 goes away, and 15 already exists so the
    // replacement is ignored.
    assert!(is_ok(&shell.send("update 10 15, Clash, 1")));
    assert_eq!(shell.ids(), vec![5, 15]);
    assert_eq!(
        text(&shell.send("find 15")),
        "Employee found: Employee [id=15, name=Employee 15, salary=1500.00]"
    );
}

#[test]
fn test_update_unknown_id_is_rejected() {
    let mut shell = TestShell::new();
    shell.add_all(&[1]);

    let reply = shell.send("update 2 2, Nobody, 1");
    assert!(!is_ok(&reply));
    assert_eq!(text(&reply), "Employee not found!");
    assert_eq!(shell.ids(), vec![1]);
}
