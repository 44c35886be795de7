//! Test that adding an existing id leaves the stored record alone.

use crate::e2e_tests::helpers::*;

#[test]
fn test_duplicate_add_keeps_first_record() {
    let mut shell = TestShell::new();
    assert!(is_ok(&shell.send("add 7, Ada, 100")));
    let reply = shell.send("add 7, Grace, 999");

    assert_eq!(text(&reply), "Employee 7 already exists; record left unchanged.");
    assert_eq!(
        text(&shell.send("find 7")),
        "Employee found: Employee [id=7, name=Ada, salary=100.00]"
    );
    assert_eq!(text(&shell.send("count")), "1");
}
