use std::sync::Arc;

use family_linker::{Couple, Family, FamilyNetwork, KeyVariant, LinkKind, Person, PersonKey};

fn family(id: &str) -> Arc<Family> {
    Arc::new(Family::new(
        id,
        Couple::new(Person::new("Husband"), Person::new("Wife")),
    ))
}

fn main_family() -> Family {
    Family::new(
        "KORPI 6",
        Couple::new(
            Person::new("Matti")
                .with_patronymic("Matinpoika")
                .with_birth_date("15.02.1730"),
            Person::new("Liisa"),
        ),
    )
}

#[test]
fn test_partial_keys_reach_a_full_resolution() {
    let main = main_family();
    let matti = main.couples[0].husband.clone();
    let mut network = FamilyNetwork::new(main);
    let key = network.key_for(&matti);
    network.insert(LinkKind::AsChild, &key, family("KORPI 2"));

    for partial in [
        PersonKey::from_name("Matti").with_birth_year(1730),
        PersonKey::from_name("matti").with_family_id("KORPI 6"),
        PersonKey::from_name("MATTI").with_patronymic("Matinpoika"),
        PersonKey::from_name("Matti"),
    ] {
        assert_eq!(
            network.as_child_family_by_key(&partial).unwrap().id,
            "KORPI 2",
            "lookup by {partial}"
        );
    }
}

#[test]
fn test_tables_are_independent() {
    let main = main_family();
    let matti = main.couples[0].husband.clone();
    let mut network = FamilyNetwork::new(main);
    let key = network.key_for(&matti);
    network.insert(LinkKind::AsChild, &key, family("KORPI 2"));

    assert!(network.as_parent_family(&matti).is_none());
    assert!(network.spouse_as_child_family(&matti, "KORPI 6").is_none());
    assert_eq!(network.link_counts(), (1, 0, 0));
}

#[test]
fn test_spouse_keys_use_the_adult_family_as_origin() {
    let erkki = Person::new("Erkki").with_birth_date("1758");
    let mut network = FamilyNetwork::new(main_family());
    network.insert(
        LinkKind::SpouseAsChild,
        &PersonKey::for_person(&erkki, Some("KORVELA 2")),
        family("KORVELA 1"),
    );

    assert_eq!(
        network
            .lookup_variant(
                LinkKind::SpouseAsChild,
                &KeyVariant::Family {
                    name: "erkki".to_string(),
                    family_id: "KORVELA 2".to_string(),
                },
            )
            .unwrap()
            .id,
        "KORVELA 1"
    );
    assert!(
        network
            .lookup_variant(
                LinkKind::SpouseAsChild,
                &KeyVariant::Family {
                    name: "erkki".to_string(),
                    family_id: "KORPI 6".to_string(),
                },
            )
            .is_none()
    );
}
