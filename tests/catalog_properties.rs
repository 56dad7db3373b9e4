//! Catalog Property Tests
//!
//! Checks the lookup and search contracts against every record of the
//! built-in catalog rather than hand-picked examples.

use herbal_garden::{catalog, Catalog, PlantRecord};

fn ids(plants: &[&PlantRecord]) -> Vec<String> {
    plants.iter().map(|p| p.id.clone()).collect()
}

/// All contiguous substrings of `s` (by char) up to `max_len` chars
fn substrings(s: &str, max_len: usize) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    for start in 0..chars.len() {
        for end in (start + 1)..=chars.len().min(start + max_len) {
            out.push(chars[start..end].iter().collect());
        }
    }
    out
}

#[test]
fn test_get_by_id_round_trips_every_record() {
    let catalog = catalog();
    for plant in catalog.all() {
        assert_eq!(catalog.get_by_id(&plant.id), Some(plant));
    }
}

#[test]
fn test_get_by_id_absent_for_unknown_ids() {
    let catalog = catalog();
    for id in ["", "unknown", "ASHWAGANDHA", "tulsi ", " neem", "holy-basil"] {
        assert!(catalog.get_by_id(id).is_none(), "unexpected hit for {:?}", id);
    }
}

#[test]
fn test_every_common_name_substring_finds_record() {
    let catalog = catalog();
    for plant in catalog.all() {
        for sub in substrings(&plant.common_name, 6) {
            if sub.trim().is_empty() {
                continue;
            }
            let hits = catalog.search_by_name(&sub);
            assert!(
                hits.iter().any(|p| p.id == plant.id),
                "'{}' did not find {}",
                sub,
                plant.id
            );
        }
    }
}

#[test]
fn test_empty_name_query_returns_catalog_in_order() {
    let catalog = catalog();
    let expected: Vec<String> = catalog.ids().map(String::from).collect();
    assert_eq!(ids(&catalog.search_by_name("")), expected);
}

#[test]
fn test_every_ailment_finds_its_record() {
    let catalog = catalog();
    for plant in catalog.all() {
        for ailment in &plant.ailments_treated {
            let hits = catalog.search_by_ailment(ailment);
            assert!(hits.iter().any(|p| p.id == plant.id), "{} missing {}", ailment, plant.id);
        }
    }
}

#[test]
fn test_ailment_search_never_returns_non_matching_records() {
    let catalog = catalog();
    for query in ["stress", "DIGESTIVE", " skin ", "diabetes", "fever", "o"] {
        let needle = query.trim().to_lowercase();
        for plant in catalog.search_by_ailment(query) {
            assert!(
                plant
                    .ailments_treated
                    .iter()
                    .any(|a| a.to_lowercase().contains(&needle)),
                "{} returned for '{}'",
                plant.id,
                query
            );
        }
    }
}

#[test]
fn test_search_is_case_insensitive() {
    let catalog = catalog();
    assert_eq!(
        ids(&catalog.search_by_name("ASHWAGANDHA")),
        ids(&catalog.search_by_name("ashwagandha"))
    );
    assert_eq!(
        ids(&catalog.search_by_ailment("Stress")),
        ids(&catalog.search_by_ailment("sTrEsS"))
    );
}

#[test]
fn test_search_is_whitespace_tolerant() {
    let catalog = catalog();
    assert_eq!(
        ids(&catalog.search_by_name("  tulsi  ")),
        ids(&catalog.search_by_name("tulsi"))
    );
}

#[test]
fn test_results_keep_catalog_order() {
    let catalog = catalog();
    let order: Vec<&str> = catalog.ids().collect();
    for query in ["a", "disorders", "in"] {
        let positions: Vec<usize> = catalog
            .search_by_ailment(query)
            .iter()
            .map(|p| order.iter().position(|id| *id == p.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_scenario_tulsi_xyz_stress() {
    let catalog = catalog();

    assert_eq!(ids(&catalog.search_by_name("tulsi")), vec!["tulsi"]);
    assert!(catalog.search_by_name("xyz").is_empty());

    // "Stress and anxiety", "Stress-related disorders", "Anxiety and stress"
    assert_eq!(
        ids(&catalog.search_by_ailment("stress")),
        vec!["ashwagandha", "tulsi", "brahmi"]
    );
}

#[test]
fn test_botanical_name_search() {
    let catalog = catalog();
    assert_eq!(ids(&catalog.search_by_name("curcuma")), vec!["turmeric"]);
    assert_eq!(ids(&catalog.search_by_name("indica")), vec!["neem"]);
}

#[test]
fn test_mid_word_matches_are_kept() {
    let catalog = catalog();
    // "ash" is a prefix of Ashwagandha and nowhere else
    assert_eq!(ids(&catalog.search_by_name("ash")), vec!["ashwagandha"]);
    // "ma" only occurs mid-word, in "Curcuma"
    assert_eq!(ids(&catalog.search_by_name("ma")), vec!["turmeric"]);
}

#[test]
fn test_custom_catalog_contract() {
    let catalog = Catalog::new(vec![PlantRecord {
        id: "giloy".to_string(),
        common_name: "Giloy".to_string(),
        botanical_name: "Tinospora cordifolia".to_string(),
        ailments_treated: vec!["Chronic fever".to_string()],
        ..Default::default()
    }])
    .unwrap();

    assert_eq!(ids(&catalog.search_by_ailment("FEVER")), vec!["giloy"]);
    assert!(catalog.search_by_ailment("stress").is_empty());
    assert!(catalog.get_by_id("tulsi").is_none());
}
