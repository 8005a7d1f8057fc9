use michelin_core::prelude::*;
use michelin_core::text::{normalize_text, split_location_field};
use std::path::PathBuf;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn sample_matcher() -> LocationMatcher {
    let rows = load_gazetteer(data_dir().join("gazetteer.sample.json")).unwrap();
    LocationMatcher::new(&rows)
}

#[test]
fn normalization_properties() {
    assert_eq!(normalize_text("Évian"), normalize_text("evian"));
    let s = "  Saint-Étienne-de-Tinée ";
    assert_eq!(normalize_text(&normalize_text(s)), normalize_text(s));
}

#[test]
fn split_properties() {
    assert_eq!(split_location_field("Lyon, 69001"), (Some("Lyon"), Some("69001")));
    assert_eq!(split_location_field("Lyon"), (Some("Lyon"), None));
    assert_eq!(split_location_field(""), (None, None));
}

#[test]
fn paris_is_a_department_capital() {
    let m = sample_matcher();
    let hit = m.find_region_department("paris").into_match().unwrap();
    assert_eq!(hit.matched_location, "Paris, 75001");
    assert_eq!(hit.region, "Île-de-France");
    assert_eq!(hit.department, "Paris");
    assert!(hit.is_capital);
}

#[test]
fn postal_code_is_ignored() {
    let m = sample_matcher();
    let with_code = m.find_region_department("Lyon, 69001");
    let without = m.find_region_department("Lyon");
    assert_eq!(with_code, without);
    // Postal code of a different arrondissement still lands on the first Paris row.
    let hit = m.find_region_department("Paris, 75008").into_match().unwrap();
    assert_eq!(hit.matched_location, "Paris, 75001");
}

#[test]
fn non_capital_in_same_department() {
    let m = sample_matcher();
    let menton = m.find_region_department("Menton").into_match().unwrap();
    let nice = m.find_region_department("Nice").into_match().unwrap();
    assert_eq!(menton.department, nice.department);
    assert!(!menton.is_capital);
    assert!(nice.is_capital);
    assert_eq!(menton.to_record().is_capital, "");
}

#[test]
fn minor_misspelling_and_word_order() {
    let m = sample_matcher();
    let hit = m.find_region_department("Bordeau").into_match().unwrap();
    assert_eq!(hit.department, "Gironde");
    let hit = m.find_region_department("tropez saint").into_match().unwrap();
    assert_eq!(hit.matched_location, "Saint-Tropez, 83990");
    let hit = m.find_region_department("EVIAN LES BAINS").into_match().unwrap();
    assert_eq!(hit.department, "Haute-Savoie");
}

#[test]
fn invalid_input_and_no_match_differ() {
    let m = sample_matcher();
    assert_eq!(m.find_region_department(""), MatchOutcome::InvalidInput);
    assert_eq!(m.find_region_department("Xyzzyqqq"), MatchOutcome::NoMatch);
    assert_eq!(m.find_region_department("Qqzxhjklw"), MatchOutcome::NoMatch);
}

#[test]
fn matcher_owns_its_copy() {
    let mut rows = vec![
        GazetteerEntry::new("Lyon, 69001", "Auvergne-Rhône-Alpes", "Rhône", "Lyon"),
        GazetteerEntry::new("Nice, 06000", "Provence-Alpes-Côte d'Azur", "Alpes-Maritimes", "Nice"),
    ];
    let m = LocationMatcher::new(&rows);
    let before = m.find_region_department("Lyon");

    rows[0].department = "Somewhere else".into();
    rows[0].location = Some("Marseille".into());
    rows.clear();

    assert_eq!(m.find_region_department("Lyon"), before);
    assert_eq!(m.len(), 2);
}

#[test]
fn stricter_threshold_rejects_misspellings() {
    let rows = load_gazetteer(data_dir().join("gazetteer.sample.json")).unwrap();
    let strict = LocationMatcher::with_threshold(&rows, 100).unwrap();
    assert_eq!(strict.find_region_department("Bordeau"), MatchOutcome::NoMatch);
    assert!(strict.find_region_department("Bordeaux").is_match());
}

#[test]
fn heavy_misspelling_needs_a_lower_threshold() {
    let rows = load_gazetteer(data_dir().join("gazetteer.sample.json")).unwrap();
    let default = LocationMatcher::new(&rows);
    assert_eq!(default.find_region_department("tulooz"), MatchOutcome::NoMatch);

    let lenient = LocationMatcher::with_threshold(&rows, 55).unwrap();
    let hit = lenient.find_region_department("tulooz").into_match().unwrap();
    assert_eq!(hit.matched_location, "Toulouse, 31000");
    assert_eq!(hit.department, "Haute-Garonne");
    assert_eq!(hit.score, 57);
}

#[test]
fn matcher_is_shareable_across_threads() {
    let m = std::sync::Arc::new(sample_matcher());
    let handles: Vec<_> = ["Lyon", "Nice", "Reims", "Cancale"]
        .into_iter()
        .map(|q| {
            let m = m.clone();
            std::thread::spawn(move || m.find_region_department(q).is_match())
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}

#[test]
fn stats_over_sample() {
    let stats = sample_matcher().stats();
    assert_eq!(stats.entries, 19);
    assert_eq!(stats.regions, 8);
}
