use crate::either::{optional_list, Either, NonEmptyIteratorExt, NonEmptyVec};

#[test]
fn test_optional_list() {
    assert_eq!(optional_list::<i32>(vec![]), None);

    let list = optional_list(vec![1, 2, 3]).unwrap();
    assert_eq!(*list.head(), 1);
    assert_eq!(*list.last_item(), 3);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_to_optional_list_from_iterator() {
    assert!(std::iter::empty::<u8>().to_optional_list().is_none());
    let evens = (1..=6).filter(|n| n % 2 == 0).to_optional_list();
    assert_eq!(evens.map(NonEmptyVec::into_vec), Some(vec![2, 4, 6]));
}

#[test]
fn test_optional_list_drives_filter() {
    let password = "short";
    let checked: Either<NonEmptyVec<&str>, &str> = Either::right(password).filter(|p| {
        let mut problems = Vec::new();
        if p.len() < 8 {
            problems.push("too short");
        }
        if !p.chars().any(|c| c.is_ascii_digit()) {
            problems.push("needs a digit");
        }
        optional_list(problems)
    });

    let problems = checked.into_left().unwrap();
    assert_eq!(problems.into_vec(), vec!["too short", "needs a digit"]);
}

#[test]
fn test_append_and_map() {
    let mut list = NonEmptyVec::new("a");
    list.push("b");
    list.append(NonEmptyVec::new("c"));
    let upper = list.map(|s| s.to_uppercase());
    assert_eq!(upper.into_vec(), vec!["A", "B", "C"]);
}

#[test]
fn test_deserialize_rejects_empty_list() {
    let empty: Result<NonEmptyVec<u8>, _> = serde_json::from_str("[]");
    assert!(empty.is_err());

    let filled: NonEmptyVec<u8> = serde_json::from_str("[1,2]").unwrap();
    assert_eq!(filled.into_vec(), vec![1, 2]);
}
