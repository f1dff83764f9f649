//! Checks every record type against the shared `Record` contract.

use backoffice_model::{
    Banner, BlogPost, Career, Certification, Client, ContactRequest, Domain, Faq, Partner,
    Project, Record, Service, Solution, Stat, TeamMember, Testimonial,
};
use serde_json::{Value, json};

fn merge<T: Record>(record: &T, input: &T::Input) -> T {
    let Value::Object(mut object) = serde_json::to_value(record).unwrap() else {
        panic!("records serialize as objects");
    };
    let Value::Object(changes) = serde_json::to_value(input).unwrap() else {
        panic!("inputs serialize as objects");
    };
    object.extend(changes);
    serde_json::from_value(Value::Object(object)).unwrap()
}

fn check<T: Record + Default>(seen: &mut Vec<Domain>) {
    let record = T::default();
    assert_eq!(
        record.csv_row().len(),
        T::COLUMNS.len(),
        "{} row and header differ",
        T::DOMAIN
    );
    assert!(T::FIELDS.split_whitespace().any(|f| f == "id"), "{} selects no id", T::DOMAIN);

    let ordered = serde_json::to_value(T::order_input(3)).unwrap();
    assert_eq!(ordered, json!({ "order": 3 }), "{} order input", T::DOMAIN);

    let toggled = merge(&record, &record.toggle_input());
    assert_ne!(toggled.is_active(), record.is_active(), "{} toggle", T::DOMAIN);
    let restored = merge(&toggled, &toggled.toggle_input());
    assert_eq!(restored.is_active(), record.is_active(), "{} toggle back", T::DOMAIN);

    seen.push(T::DOMAIN);
}

#[test]
fn every_domain_honours_the_contract() {
    let mut seen = Vec::new();
    check::<Banner>(&mut seen);
    check::<BlogPost>(&mut seen);
    check::<Career>(&mut seen);
    check::<Certification>(&mut seen);
    check::<Client>(&mut seen);
    check::<ContactRequest>(&mut seen);
    check::<Faq>(&mut seen);
    check::<Partner>(&mut seen);
    check::<Project>(&mut seen);
    check::<Service>(&mut seen);
    check::<Solution>(&mut seen);
    check::<Stat>(&mut seen);
    check::<TeamMember>(&mut seen);
    check::<Testimonial>(&mut seen);
    assert_eq!(seen, Domain::ALL);
}
