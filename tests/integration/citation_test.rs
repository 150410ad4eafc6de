use family_linker::utils::format_date;
use family_linker::{
    CitationConfig, CitationGenerator, Couple, Family, NameEquivalenceIndex, Person,
    render_as_child_family, render_main_family,
};

use crate::utils::{child, korpi_6, register, resolver, source_with};

#[tokio::test]
async fn test_main_family_enhances_married_target() -> family_linker::Result<()> {
    let network = resolver(register()).extract("KORPI 6").await?;
    let anna = child(network.main(), "Anna");

    let citation = render_main_family(network.main(), Some(anna), Some(&network));
    let expected = [
        "KORPI 6, page 112",
        "Husband: Matti Matinpoika (15 February 1730–1790)",
        "Wife: Liisa Juhontytär (b. 1735)",
        "Married: 1755",
        "Children:",
        "  Juho (b. 3 January 1756)",
        "→ Anna Matintytär (2 May 1760–5 March 1820), m. 12 June 1782 Erkki Pekanpoika (b. 1758) [KORVELA 2]",
        "  Kaisa (b. 1763), m. Pekka",
        "Additional Information:",
        "  Death date: 5 March 1820 (from KORVELA 2, page 45)",
        "  Marriage date: 12 June 1782 (from KORVELA 2, page 45)",
    ]
    .join("\n");
    assert_eq!(citation, expected);
    Ok(())
}

#[tokio::test]
async fn test_target_linked_through_equivalent_name_is_enhanced() -> family_linker::Result<()> {
    let main = Family::new(
        "TALO 5",
        Couple::new(
            Person::new("Antti").with_birth_date("1720"),
            Person::new("Kaarina").with_birth_date("1725"),
        )
        .with_child(
            Person::new("Juho")
                .with_birth_date("1756")
                .with_marriage_date("1782")
                .with_spouse("Maria")
                .with_adult_family("TALO 8"),
        ),
    )
    .with_page("12");
    let adult = Family::new(
        "TALO 8",
        Couple::new(
            Person::new("Johan")
                .with_birth_date("n 1756")
                .with_death_date("05.03.1820"),
            Person::new("Maria").with_birth_date("1760"),
        )
        .with_marriage_date("1782"),
    )
    .with_page("45");

    let network = resolver(source_with(&[main, adult])).extract("TALO 5").await?;
    let juho = child(network.main(), "Juho");
    assert_eq!(network.as_parent_family(juho).unwrap().id, "TALO 8");
    assert!(network.names().is_some());

    let citation = render_main_family(network.main(), Some(juho), Some(&network));
    assert!(citation.contains("→ Juho (1756–5 March 1820), m. 1782 Maria (b. 1760) [TALO 8]"));
    assert!(citation.contains("Additional Information:"));
    assert!(citation.contains("  Death date: 5 March 1820 (from TALO 8, page 45)"));
    Ok(())
}

#[tokio::test]
async fn test_rendering_is_idempotent() -> family_linker::Result<()> {
    let network = resolver(register()).extract("KORPI 6").await?;
    let anna = child(network.main(), "Anna");

    let first = render_main_family(network.main(), Some(anna), Some(&network));
    let second = render_main_family(network.main(), Some(anna), Some(&network));
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn test_as_child_citation_reports_linked_death_date() -> family_linker::Result<()> {
    let names = NameEquivalenceIndex::with_defaults();
    let network = resolver(register()).extract("KORPI 6").await?;
    let anna = child(network.main(), "Anna");

    let citation = render_as_child_family(anna, network.main(), Some(&network), Some(&names));
    assert!(citation.contains("→ Anna Matintytär"));
    assert!(citation.contains("Additional Information:"));
    assert!(citation.contains("Death date: 5 March 1820 (from KORVELA 2, page 45)"));
    Ok(())
}

#[tokio::test]
async fn test_unmarried_target_is_marked_but_not_enhanced() -> family_linker::Result<()> {
    let network = resolver(register()).extract("KORPI 6").await?;
    let juho = child(network.main(), "Juho");

    let citation = render_main_family(network.main(), Some(juho), Some(&network));
    assert!(citation.contains("→ Juho (b. 3 January 1756)"));
    assert!(!citation.contains("Additional Information"));
    Ok(())
}

#[tokio::test]
async fn test_unresolved_adult_family_omits_enhancement() -> family_linker::Result<()> {
    let network = resolver(register()).extract("KORPI 6").await?;
    let kaisa = child(network.main(), "Kaisa");

    let citation = render_main_family(network.main(), Some(kaisa), Some(&network));
    assert!(citation.contains("→ Kaisa (b. 1763), m. Pekka"));
    assert!(!citation.contains("Additional Information"));
    Ok(())
}

#[test]
fn test_person_missing_from_children_gets_a_warning() {
    let stranger = Person::new("Heikki").with_birth_date("1770");
    let citation = render_as_child_family(&stranger, &korpi_6(), None, None);

    assert!(citation.starts_with("KORPI 6, page 112"));
    assert!(citation.ends_with(
        "Warning: Heikki (b. 1770) was not found among the children of KORPI 6"
    ));
    assert!(!citation.contains('→'));
}

#[tokio::test]
async fn test_parent_birth_family_is_enhanced_from_the_main_family() -> family_linker::Result<()> {
    let network = resolver(register()).extract("KORPI 6").await?;
    let matti = &network.main().couples[0].husband;

    let citation = CitationGenerator::default().render_person_birth_family(matti, &network, None);
    assert!(citation.starts_with("KORPI 2, page 98"));
    assert!(citation.contains("→ Matti Matinpoika"));
    assert!(citation.contains("Death date: 1790 (from KORPI 6, page 112)"));
    assert!(citation.contains("Marriage date: 1755 (from KORPI 6, page 112)"));
    Ok(())
}

#[tokio::test]
async fn test_unresolved_birth_family_renders_only_the_warning() -> family_linker::Result<()> {
    let main = Family::new(
        "TALO 1",
        Couple::new(
            Person::new("Antti")
                .with_birth_date("1740")
                .with_birth_family("TALO 0"),
            Person::new("Brita"),
        ),
    );
    let network = resolver(source_with(&[main])).extract("TALO 1").await?;
    let antti = &network.main().couples[0].husband;

    let citation = CitationGenerator::default().render_person_birth_family(antti, &network, None);
    assert_eq!(
        citation,
        "Warning: Antti (b. 1740) was not found among the children of TALO 0"
    );
    Ok(())
}

#[test]
fn test_remarriage_blocks_and_widow_notes() {
    let family = Family::new(
        "KOSKI 4",
        Couple::new(
            Person::new("Matti").with_birth_date("1730"),
            Person::new("Liisa").with_birth_date("1735").with_death_date("1768"),
        )
        .with_marriage_date("1755")
        .with_child(Person::new("Juho").with_birth_date("1756"))
        .with_died_in_infancy(2),
    )
    .with_couple(
        Couple::new(
            Person::new("Matti").with_birth_date("1730"),
            Person::new("Kaisa").with_birth_date("1740"),
        )
        .with_marriage_date("70")
        .with_child(Person::new("Pekka").with_birth_date("1772")),
    )
    .with_note("Moved to Oulu 1790")
    .with_note("Leski Juho Korven jälkeen")
    .with_footnote("1", "See also KOSKI 5");

    let citation = render_main_family(&family, None, None);
    let expected = [
        "KOSKI 4, page unknown",
        "Husband: Matti (b. 1730)",
        "Wife: Liisa (1735–1768)",
        "Married: 1755",
        "Children:",
        "  Juho (b. 1756)",
        "Additional spouse: Kaisa (b. 1740)",
        "  Leski Juho Korven jälkeen",
        "  Married: 1770",
        "  Children:",
        "    Pekka (b. 1772)",
        "Notes:",
        "  Moved to Oulu 1790",
        "Children died in infancy: 2",
        "Footnotes:",
        "  [1] See also KOSKI 5",
    ]
    .join("\n");
    assert_eq!(citation, expected);
}

#[test]
fn test_target_marker_is_configurable() {
    let family = korpi_6();
    let juho = child(&family, "Juho");
    let generator = CitationGenerator::new(CitationConfig::default().with_target_marker("*"));

    let citation = generator.render_main_family(&family, Some(juho), None);
    assert!(citation.contains("\n* Juho (b. 3 January 1756)"));
}

#[test]
fn test_date_formats() {
    assert_eq!(format_date("15.02.1730", None), "15 February 1730");
    assert_eq!(format_date("n 1730", None), "abt 1730");
    assert_eq!(format_date("78", Some(1740)), "1778");
}
