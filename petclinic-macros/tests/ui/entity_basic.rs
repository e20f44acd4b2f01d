use petclinic_domain::entity::Entity;
use petclinic_macros::{entity, entity_id};

#[entity_id]
struct RoomId(i64);

#[entity(id = RoomId)]
struct Room {
    label: String,
}

#[entity]
struct Cage {
    size: u8,
}

#[entity(id = RoomId, debug = false)]
struct Quiet {
    note: String,
}

impl std::fmt::Debug for Quiet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Quiet(..)")
    }
}

fn main() {
    let mut room = Room {
        id: None,
        label: "exam-1".to_string(),
    };
    assert!(room.is_new());
    room.assign_id(RoomId::new(7));
    assert_eq!(room.id(), Some(&RoomId::new(7)));
    let _ = format!("{:?}", room.clone());

    // 未指定 id 类型时默认 i64
    let cage = Cage { id: Some(3_i64), size: 2 };
    assert_eq!(cage.id().copied(), Some(3));

    let quiet = Quiet { id: None, note: String::new() };
    let _ = format!("{:?}", quiet);
}
