//! Test listing and counting after mixed operations.

use crate::e2e_tests::helpers::*;

#[test]
fn test_list_is_sorted_and_repeatable() {
    let mut shell = TestShell::new();
    shell.add_all(&[3, -1, 2]);

    let first = text(&shell.send("list")).to_string();
    let second = text(&shell.send("list")).to_string();

    assert_eq!(
        first,
        "Employee [id=-1, name=Employee -1, salary=-100.00]\n\
         Employee [id=2, name=Employee 2, salary=200.00]\n\
         Employee [id=3, name=Employee 3, salary=300.00]"
    );
    assert_eq!(first, second);
}

#[test]
fn test_count_after_failed_operations() {
    let mut shell = TestShell::new();
    shell.add_all(&[1, 2]);

    assert!(!is_ok(&shell.send("remove 9")));
    assert!(!is_ok(&shell.send("add 3, Missing salary")));
    assert!(!is_ok(&shell.send("find x")));
    assert_eq!(text(&shell.send("count")), "2");
}
