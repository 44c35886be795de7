//! Test removing a node that has two children.

use crate::e2e_tests::helpers::*;
use crate::types::EmployeeId;

#[test]
fn test_remove_root_with_two_children() {
    let mut shell = TestShell::new();
    shell.add_all(&[50, 30, 70, 20, 40, 60, 80]);
    assert_eq!(shell.root_id(), Some(EmployeeId(50)));

    let reply = shell.send("remove 50");
    assert!(is_ok(&reply));

    // The in-order successor takes over the root position.
    assert_eq!(shell.root_id(), Some(EmployeeId(60)));
    assert_eq!(shell.ids(), vec![20, 30, 40, 60, 70, 80]);
    assert_eq!(text(&shell.send("count")), "6");
}

#[test]
fn test_remove_every_node_in_insertion_order() {
    let mut shell = TestShell::new();
    let ids = [50, 30, 70, 20, 40, 60, 80];
    shell.add_all(&ids);

    for id in ids {
        assert!(is_ok(&shell.send(&format!("remove {id}"))));
        assert!(shell.session.employees().check_invariants().is_ok());
    }
    assert_eq!(text(&shell.send("list")), "No employees.");
}
