use petclinic_macros::entity_id;
use std::collections::HashSet;

#[entity_id]
struct OwnerId(i64);

fn main() {
    let id = OwnerId::new(42);
    assert_eq!(id.into_inner(), 42);
    assert_eq!(id.to_string(), "42");
    assert_eq!("42".parse::<OwnerId>().unwrap(), id);
    assert!("forty-two".parse::<OwnerId>().is_err());

    let raw: i64 = id.into();
    assert_eq!(OwnerId::from(raw), id);

    let mut set = HashSet::new();
    set.insert(id);
    assert!(set.contains(&OwnerId::new(42)));
    assert!(OwnerId::new(1) < OwnerId::new(2));
}
