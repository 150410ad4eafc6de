use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use family_linker::{
    CancelFlag, Couple, Family, FallbackSearch, KeyVariant, LinkKind, NameEquivalenceIndex,
    Person, PersonKey, ResolverConfig, XrefError, render_main_family,
};

use crate::utils::{
    child, korpi_2, korpi_6, korvela_1, korvela_2, maki_3, register, resolver,
    resolver_with_names, source_with,
};

#[tokio::test]
async fn test_extract_resolves_every_reference() -> family_linker::Result<()> {
    let resolver = resolver(register());
    let network = resolver.extract("KORPI 6").await?;
    let main = network.main();

    let matti = &main.couples[0].husband;
    let liisa = &main.couples[0].wife;
    assert_eq!(network.as_child_family(matti).unwrap().id, "KORPI 2");
    assert_eq!(network.as_child_family(liisa).unwrap().id, "MÄKI 3");

    let anna = child(main, "Anna");
    let adult = network.as_parent_family(anna).unwrap();
    assert_eq!(adult.id, "KORVELA 2");

    let erkki = &adult.couples[0].husband;
    assert_eq!(
        network
            .spouse_as_child_family(erkki, &adult.id)
            .unwrap()
            .id,
        "KORVELA 1"
    );

    let stats = resolver.stats();
    assert_eq!(stats.resolved_by_id, 4);
    assert_eq!(stats.resolved_by_fallback, 0);
    assert_eq!(stats.unresolved, 1);
    assert_eq!(network.link_counts(), (2, 1, 1));
    Ok(())
}

#[tokio::test]
async fn test_every_key_variant_finds_the_same_family() -> family_linker::Result<()> {
    let network = resolver(register()).extract("KORPI 6").await?;
    let matti = network.main().couples[0].husband.clone();

    let variants = network.key_for(&matti).variants();
    assert_eq!(variants.len(), 4);

    let expected = network.as_child_family(&matti).unwrap();
    for variant in &variants {
        let found = network
            .lookup_variant(LinkKind::AsChild, variant)
            .unwrap_or_else(|| panic!("no family for {variant:?}"));
        assert!(Arc::ptr_eq(&found, &expected));
    }
    Ok(())
}

#[tokio::test]
async fn test_missing_reference_is_absent_not_an_error() -> family_linker::Result<()> {
    let network = resolver(register()).extract("KORPI 6").await?;
    let kaisa = child(network.main(), "Kaisa");
    assert!(network.as_parent_family(kaisa).is_none());
    Ok(())
}

#[tokio::test]
async fn test_top_level_failures_propagate() {
    let resolver = resolver(register().with_family("BROKEN 1", "{ not json"));

    let missing = resolver.extract("NIEMI 9").await.unwrap_err();
    assert!(matches!(missing, XrefError::LookupFailure(ref id) if id == "NIEMI 9"));

    let broken = resolver.extract("BROKEN 1").await.unwrap_err();
    assert!(matches!(broken, XrefError::ParseFailure { ref family_id, .. } if family_id == "BROKEN 1"));
}

#[tokio::test]
async fn test_malformed_referenced_family_is_unresolved() -> family_linker::Result<()> {
    let resolver = resolver(register().with_family("MÄKI 3", "{ not json"));
    let network = resolver.extract("KORPI 6").await?;

    let matti = &network.main().couples[0].husband;
    let liisa = &network.main().couples[0].wife;
    assert_eq!(network.as_child_family(matti).unwrap().id, "KORPI 2");
    assert!(network.as_child_family(liisa).is_none());

    let stats = resolver.stats();
    assert_eq!(stats.resolved_by_id, 3);
    assert_eq!(stats.unresolved, 2);
    assert_eq!(network.link_counts(), (1, 1, 1));
    Ok(())
}

#[tokio::test]
async fn test_reference_without_the_person_is_rejected() -> family_linker::Result<()> {
    let wrong_family = Family::new(
        "MÄKI 3",
        Couple::new(Person::new("Juho"), Person::new("Kreeta"))
            .with_child(Person::new("Heikki").with_birth_date("1737")),
    );
    let resolver = resolver(source_with(&[korpi_6(), korvela_2(), korpi_2(), wrong_family]));
    let network = resolver.extract("KORPI 6").await?;

    let liisa = &network.main().couples[0].wife;
    assert!(network.as_child_family(liisa).is_none());
    assert_eq!(resolver.stats().unresolved, 3);
    Ok(())
}

#[tokio::test]
async fn test_equivalent_names_validate_only_with_the_index() -> family_linker::Result<()> {
    let main = Family::new(
        "TALO 1",
        Couple::new(
            Person::new("Juho").with_birth_date("1757").with_birth_family("TALO 0"),
            Person::new("Maija"),
        ),
    );
    let birth = Family::new(
        "TALO 0",
        Couple::new(Person::new("Henrik"), Person::new("Karin"))
            .with_child(Person::new("Johan").with_birth_date("1758")),
    );

    let with_index = resolver(source_with(&[main.clone(), birth.clone()]))
        .extract("TALO 1")
        .await?;
    let juho = &with_index.main().couples[0].husband;
    assert_eq!(with_index.as_child_family(juho).unwrap().id, "TALO 0");

    let without_index = resolver_with_names(source_with(&[main, birth]), NameEquivalenceIndex::new())
        .extract("TALO 1")
        .await?;
    assert!(without_index.as_child_family(juho).is_none());
    Ok(())
}

#[tokio::test]
async fn test_same_name_different_birth_year_do_not_collide() -> family_linker::Result<()> {
    let main = Family::new(
        "MÄKI 5",
        Couple::new(Person::new("Antti"), Person::new("Brita"))
            .with_child(
                Person::new("Anna")
                    .with_birth_date("02.05.1760")
                    .with_spouse("Erkki")
                    .with_adult_family("KORVELA 2"),
            )
            .with_child(
                Person::new("Anna")
                    .with_birth_date("1788")
                    .with_spouse("Olli")
                    .with_adult_family("HAAPA 4"),
            ),
    );
    let haapa = Family::new(
        "HAAPA 4",
        Couple::new(Person::new("Olli"), Person::new("Anna").with_birth_date("1788")),
    );

    let network = resolver(source_with(&[main, korvela_2(), korvela_1(), haapa]))
        .extract("MÄKI 5")
        .await?;

    let elder = PersonKey::from_name("Anna").with_birth_year(1760);
    let younger = PersonKey::from_name("Anna").with_birth_year(1788);
    assert_eq!(network.as_parent_family_by_key(&elder).unwrap().id, "KORVELA 2");
    assert_eq!(network.as_parent_family_by_key(&younger).unwrap().id, "HAAPA 4");

    // The bare name is shared, so it answers nothing.
    assert!(
        network
            .lookup_variant(LinkKind::AsParent, &KeyVariant::Name("anna".to_string()))
            .is_none()
    );
    Ok(())
}

#[tokio::test]
async fn test_spouse_capture_can_be_disabled() -> family_linker::Result<()> {
    let network = resolver(register())
        .with_config(ResolverConfig::default().with_resolve_spouses(false))
        .extract("KORPI 6")
        .await?;
    assert_eq!(network.link_counts(), (2, 1, 0));
    Ok(())
}

#[tokio::test]
async fn test_results_do_not_depend_on_concurrency() -> family_linker::Result<()> {
    let sequential = resolver(register())
        .with_config(ResolverConfig::default().with_max_concurrent_lookups(1))
        .extract("KORPI 6")
        .await?;
    let parallel = resolver(register())
        .with_config(ResolverConfig::default().with_max_concurrent_lookups(8))
        .extract("KORPI 6")
        .await?;

    assert_eq!(sequential.link_counts(), parallel.link_counts());
    let anna = child(sequential.main(), "Anna");
    assert_eq!(
        render_main_family(sequential.main(), Some(anna), Some(&sequential)),
        render_main_family(parallel.main(), Some(anna), Some(&parallel))
    );
    Ok(())
}

#[tokio::test]
async fn test_cancelled_resolution_returns_nothing() {
    let cancel = CancelFlag::new();
    cancel.cancel();
    let err = resolver(register())
        .extract_with_cancel("KORPI 6", &cancel)
        .await
        .unwrap_err();
    assert!(matches!(err, XrefError::Cancelled));
}

/// Fallback that always offers the same family
struct FixedFallback(Family);

impl FallbackSearch for FixedFallback {
    fn search<'a>(
        &'a self,
        _person: &'a Person,
        _kind: LinkKind,
    ) -> Pin<Box<dyn Future<Output = Option<Family>> + Send + 'a>> {
        Box::pin(async move { Some(self.0.clone()) })
    }
}

#[tokio::test]
async fn test_fallback_is_used_after_failed_validation() -> family_linker::Result<()> {
    let wrong_family = Family::new(
        "MÄKI 3",
        Couple::new(Person::new("Juho"), Person::new("Kreeta"))
            .with_child(Person::new("Heikki").with_birth_date("1737")),
    );
    let resolver = resolver(source_with(&[korpi_6(), korpi_2(), wrong_family]))
        .with_config(ResolverConfig::default().with_resolve_spouses(false))
        .with_fallback(Arc::new(FixedFallback(maki_3())));

    let network = resolver.extract("KORPI 6").await?;
    let liisa = &network.main().couples[0].wife;
    assert_eq!(network.as_child_family(liisa).unwrap().id, "MÄKI 3");
    assert_eq!(resolver.stats().resolved_by_fallback, 1);
    Ok(())
}
