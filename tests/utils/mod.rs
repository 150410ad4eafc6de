use std::sync::Arc;

use family_linker::{
    Couple, CrossReferenceResolver, Family, JsonFamilyParser, MemoryTextSource,
    NameEquivalenceIndex, Person,
};

/// Main family of the fixture register
///
/// Anna married into KORVELA 2, which knows her death date; Kaisa's adult
/// family NIEMI 9 does not exist.
#[must_use]
pub fn korpi_6() -> Family {
    Family::new(
        "KORPI 6",
        Couple::new(
            Person::new("Matti")
                .with_patronymic("Matinpoika")
                .with_birth_date("15.02.1730")
                .with_death_date("1790")
                .with_birth_family("KORPI 2"),
            Person::new("Liisa")
                .with_patronymic("Juhontytär")
                .with_birth_date("1735")
                .with_birth_family("MÄKI 3"),
        )
        .with_marriage_date("1755")
        .with_child(Person::new("Juho").with_birth_date("03.01.1756"))
        .with_child(
            Person::new("Anna")
                .with_patronymic("Matintytär")
                .with_birth_date("02.05.1760")
                .with_marriage_date("1782")
                .with_spouse("Erkki")
                .with_adult_family("KORVELA 2"),
        )
        .with_child(
            Person::new("Kaisa")
                .with_birth_date("1763")
                .with_spouse("Pekka")
                .with_adult_family("NIEMI 9"),
        ),
    )
    .with_page("112")
}

/// Anna's adult family
#[must_use]
pub fn korvela_2() -> Family {
    Family::new(
        "KORVELA 2",
        Couple::new(
            Person::new("Erkki")
                .with_patronymic("Pekanpoika")
                .with_birth_date("1758")
                .with_birth_family("KORVELA 1"),
            Person::new("Anna")
                .with_patronymic("Matintytär")
                .with_birth_date("02.05.1760")
                .with_death_date("05.03.1820"),
        )
        .with_marriage_date("12.06.1782")
        .with_child(Person::new("Matti").with_birth_date("1784")),
    )
    .with_page("45")
}

/// Matti's birth family
#[must_use]
pub fn korpi_2() -> Family {
    Family::new(
        "KORPI 2",
        Couple::new(
            Person::new("Matti").with_birth_date("1700"),
            Person::new("Maria").with_birth_date("1705"),
        )
        .with_child(
            Person::new("Matti")
                .with_patronymic("Matinpoika")
                .with_birth_date("15.02.1730"),
        ),
    )
    .with_page("98")
}

/// Liisa's birth family
#[must_use]
pub fn maki_3() -> Family {
    Family::new(
        "MÄKI 3",
        Couple::new(
            Person::new("Juho").with_birth_date("1705"),
            Person::new("Kreeta").with_birth_date("1710"),
        )
        .with_child(Person::new("Liisa").with_birth_date("1735")),
    )
    .with_page("101")
}

/// Erkki's birth family
#[must_use]
pub fn korvela_1() -> Family {
    Family::new(
        "KORVELA 1",
        Couple::new(
            Person::new("Pekka").with_birth_date("1725"),
            Person::new("Beata").with_birth_date("1730"),
        )
        .with_child(Person::new("Erkki").with_birth_date("1758")),
    )
    .with_page("44")
}

/// JSON text of a family, as the text source would hold it
#[must_use]
pub fn to_text(family: &Family) -> String {
    serde_json::to_string(family).unwrap()
}

/// Source holding the given families
#[must_use]
pub fn source_with(families: &[Family]) -> MemoryTextSource {
    families
        .iter()
        .fold(MemoryTextSource::new(), |source, family| {
            source.with_family(&family.id, to_text(family))
        })
}

/// Source holding the whole fixture register
#[must_use]
pub fn register() -> MemoryTextSource {
    source_with(&[korpi_6(), korvela_2(), korpi_2(), maki_3(), korvela_1()])
}

/// Resolver over a source with the default name equivalences
#[must_use]
pub fn resolver(source: MemoryTextSource) -> CrossReferenceResolver {
    resolver_with_names(source, NameEquivalenceIndex::with_defaults())
}

/// Resolver over a source with a given name index
#[must_use]
pub fn resolver_with_names(
    source: MemoryTextSource,
    names: NameEquivalenceIndex,
) -> CrossReferenceResolver {
    CrossReferenceResolver::new(
        Arc::new(source),
        Arc::new(JsonFamilyParser::new()),
        Arc::new(names),
    )
}

/// Child of a family by name
#[must_use]
pub fn child<'a>(family: &'a Family, name: &str) -> &'a Person {
    family
        .children()
        .find(|child| child.name == name)
        .unwrap_or_else(|| panic!("{name} is not a child of {}", family.id))
}
