//! Publication query engine tests

mod common;

use common::fixtures::{mixed_publications, publication, scenario_publications};
use labsite_core::{
    query, FilterOptions, Publication, PublicationKind, QueryParams, SortKey, SortOrder,
    TypeFilter, YearFilter,
};
use proptest::prelude::*;
use rstest::rstest;

fn ids(publications: &[&Publication]) -> Vec<String> {
    publications.iter().map(|p| p.id.clone()).collect()
}

fn titles(publications: &[&Publication]) -> Vec<String> {
    publications.iter().map(|p| p.title.clone()).collect()
}

// === Scenarios ===

#[test]
fn test_search_matches_title_case_insensitively() {
    let publications = scenario_publications();
    let params = QueryParams::new()
        .with_search("scada")
        .with_sort(SortKey::Year, Some(SortOrder::Descending));

    let outcome = query(&publications, &params);
    assert_eq!(titles(&outcome.publications), vec!["Secure SCADA"]);
    assert_eq!(outcome.matched_query, "scada");
    assert_eq!(outcome.summary().to_string(), "Showing 1 of 2 publications");
}

#[test]
fn test_type_filter_with_title_sort() {
    let publications = scenario_publications();
    let params = QueryParams::new()
        .with_type(TypeFilter::Only(PublicationKind::Journal))
        .with_sort(SortKey::Title, Some(SortOrder::Ascending));

    let outcome = query(&publications, &params);
    assert_eq!(titles(&outcome.publications), vec!["IoT Trust Models"]);
    assert_eq!(outcome.matched_query, "");
}

// === Search fields ===

#[rstest]
#[case::title("trust models", "pub-2")]
#[case::abstract_text("INTRUSION", "pub-1")]
#[case::author("hopper", "pub-2")]
#[case::venue("ics security", "pub-1")]
#[case::keyword("iot", "pub-2")]
#[case::padded("   grace  ", "pub-2")]
fn test_search_fields(#[case] search: &str, #[case] expected: &str) {
    let publications = scenario_publications();
    let outcome = query(&publications, &QueryParams::new().with_search(search));
    assert_eq!(ids(&outcome.publications), vec![expected]);
    assert_eq!(outcome.matched_query, search.trim());
}

#[test]
fn test_search_without_match() {
    let publications = scenario_publications();
    let outcome = query(&publications, &QueryParams::new().with_search("quantum"));
    assert!(outcome.is_empty());
    assert_eq!(outcome.total, 2);
}

#[test]
fn test_empty_list() {
    let outcome = query(&[], &QueryParams::new().with_search("anything"));
    assert!(outcome.is_empty());
    assert_eq!(outcome.total, 0);
}

// === Filters ===

#[test]
fn test_year_filter() {
    let publications = mixed_publications();
    let outcome = query(&publications, &QueryParams::new().with_year(YearFilter::Year(2022)));
    assert_eq!(ids(&outcome.publications), vec!["a", "c", "e"]);
}

#[test]
fn test_unparseable_year_filter_is_no_filter() {
    let publications = mixed_publications();
    let params = QueryParams::new().with_year(YearFilter::parse("nineteen"));
    assert_eq!(query(&publications, &params).publications.len(), publications.len());
}

#[test]
fn test_filters_combine() {
    let publications = mixed_publications();
    let params = QueryParams::new()
        .with_search("zero")
        .with_type(TypeFilter::Only(PublicationKind::Journal))
        .with_year(YearFilter::Year(2022));
    assert_eq!(ids(&query(&publications, &params).publications), vec!["a"]);
}

// === Sorting ===

#[test]
fn test_default_sort_is_newest_first() {
    let publications = mixed_publications();
    let outcome = query(&publications, &QueryParams::new());
    // Equal years keep their input order
    assert_eq!(
        ids(&outcome.publications),
        vec!["g", "a", "c", "e", "b", "f", "d"]
    );
}

#[test]
fn test_year_ascending_keeps_ties_in_input_order() {
    let publications = mixed_publications();
    let params = QueryParams::new().with_sort(SortKey::Year, Some(SortOrder::Ascending));
    assert_eq!(
        ids(&query(&publications, &params).publications),
        vec!["d", "b", "f", "a", "c", "e", "g"]
    );
}

#[test]
fn test_title_sort_collation() {
    let publications = mixed_publications();
    let params = QueryParams::new().with_sort(SortKey::Title, None);
    assert_eq!(
        titles(&query(&publications, &params).publications),
        vec![
            "attestation at scale",
            "Attestation at Scale",
            "Blockchain Provenance",
            "edge anomalies",
            "Édge Anomalies",
            "Zero Trust Networks",
            "Zero Trust Networks",
        ]
    );
}

#[test]
fn test_title_descending_keeps_equal_titles_in_input_order() {
    let publications = mixed_publications();
    let params = QueryParams::new().with_sort(SortKey::Title, Some(SortOrder::Descending));
    let outcome = query(&publications, &params);
    assert_eq!(ids(&outcome.publications)[..2], ["a", "d"]);
}

#[test]
fn test_toggle_sort_drives_query() {
    let publications = scenario_publications();
    let mut params = QueryParams::new();
    params.toggle_sort(SortKey::Year);
    assert_eq!(
        titles(&query(&publications, &params).publications),
        vec!["IoT Trust Models", "Secure SCADA"]
    );
    params.toggle_sort(SortKey::Title);
    assert_eq!(
        titles(&query(&publications, &params).publications),
        vec!["IoT Trust Models", "Secure SCADA"]
    );
    params.toggle_sort(SortKey::Title);
    assert_eq!(
        titles(&query(&publications, &params).publications),
        vec!["Secure SCADA", "IoT Trust Models"]
    );
}

#[test]
fn test_filter_options_from_mixed_list() {
    let options = FilterOptions::from_publications(&mixed_publications());
    assert_eq!(options.years, vec![2023, 2022, 2021, 2020]);
    assert_eq!(
        options.kinds,
        vec![
            PublicationKind::Journal,
            PublicationKind::Conference,
            PublicationKind::Workshop,
            PublicationKind::Preprint
        ]
    );
}

// === Properties ===

fn arb_kind() -> impl Strategy<Value = PublicationKind> {
    prop::sample::select(PublicationKind::ALL.to_vec())
}

fn arb_publications() -> impl Strategy<Value = Vec<Publication>> {
    prop::collection::vec(
        ("[A-Za-z ]{1,12}", 2018i32..2024, arb_kind()),
        0..20,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, year, kind))| publication(&format!("p{}", i), &title, year, kind))
            .collect()
    })
}

fn arb_params() -> impl Strategy<Value = QueryParams> {
    (
        "[a-z ]{0,3}",
        prop::option::of(arb_kind()),
        prop::option::of(2018i32..2024),
        any::<bool>(),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(search, kind, year, by_title, ascending)| {
            let key = if by_title { SortKey::Title } else { SortKey::Year };
            let order = ascending.map(|asc| {
                if asc {
                    SortOrder::Ascending
                } else {
                    SortOrder::Descending
                }
            });
            QueryParams::new()
                .with_search(search)
                .with_type(kind.map(TypeFilter::Only).unwrap_or_default())
                .with_year(year.map(YearFilter::Year).unwrap_or_default())
                .with_sort(key, order)
        })
}

proptest! {
    #[test]
    fn test_query_is_idempotent(publications in arb_publications(), params in arb_params()) {
        let once: Vec<Publication> = query(&publications, &params)
            .publications
            .into_iter()
            .cloned()
            .collect();
        let twice = query(&once, &params);
        prop_assert_eq!(ids(&twice.publications), ids(&once.iter().collect::<Vec<_>>()));
    }

    #[test]
    fn test_no_filters_keep_every_publication(publications in arb_publications(), by_title in any::<bool>()) {
        let key = if by_title { SortKey::Title } else { SortKey::Year };
        let params = QueryParams::new().with_sort(key, None);
        let outcome = query(&publications, &params);
        prop_assert_eq!(outcome.publications.len(), publications.len());
    }

    #[test]
    fn test_results_are_a_subset(publications in arb_publications(), params in arb_params()) {
        let outcome = query(&publications, &params);
        prop_assert!(outcome.publications.len() <= publications.len());
        for p in &outcome.publications {
            prop_assert!(params.type_filter.matches(p.kind));
            prop_assert!(params.year_filter.matches(p.year));
        }
    }

    #[test]
    fn test_year_sort_is_stable_in_both_orders(publications in arb_publications(), ascending in any::<bool>()) {
        let order = if ascending { SortOrder::Ascending } else { SortOrder::Descending };
        let params = QueryParams::new().with_sort(SortKey::Year, Some(order));
        let outcome = query(&publications, &params);

        let position = |id: &str| publications.iter().position(|p| p.id == id).unwrap();
        for pair in outcome.publications.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if ascending {
                prop_assert!(a.year <= b.year);
            } else {
                prop_assert!(a.year >= b.year);
            }
            if a.year == b.year {
                prop_assert!(position(a.id.as_str()) < position(b.id.as_str()));
            }
        }
    }
}
