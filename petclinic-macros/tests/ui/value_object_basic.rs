use petclinic_macros::value_object;

#[value_object]
struct Address {
    street: String,
    city: String,
}

#[value_object(debug = false)]
struct Secret(String);

#[value_object(default = false)]
struct Code(String);

impl Default for Code {
    fn default() -> Self {
        Code("000".to_string())
    }
}

#[value_object]
enum Channel {
    #[default]
    Phone,
    Email,
}

fn main() {
    let a = Address::default();
    let _ = format!("{:?}", a.clone());
    assert!(a == Address { street: String::new(), city: String::new() });

    let _ = Secret("x".to_string());
    assert!(Code::default() == Code("000".to_string()));

    let ch: Channel = Default::default();
    assert!(ch == Channel::Phone);
    assert!(Channel::Email != ch);
}
