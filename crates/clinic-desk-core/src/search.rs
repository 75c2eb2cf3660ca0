//! Fuzzy directory lookup for patients and staff.
//!
//! Scoring:
//! - exact phone or phone-prefix match: 1.0
//! - otherwise Jaro-Winkler similarity on the name (whole name and each
//!   word, best of)
//! Results below the confidence cutoff are dropped; the rest are ranked
//! descending.

use strsim::jaro_winkler;

use crate::models::{Patient, Staff};

/// Minimum similarity to be considered a hit.
const MIN_CONFIDENCE: f64 = 0.60;

/// A scored directory hit.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredHit<T> {
    pub record: T,
    pub confidence: f64,
}

/// Search patients by name or phone, ranked by confidence.
pub fn search_patients(patients: &[Patient], query: &str, limit: usize) -> Vec<ScoredHit<Patient>> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let mut hits: Vec<ScoredHit<Patient>> = patients
        .iter()
        .filter_map(|p| {
            let confidence = score(query, &p.name, &p.phone);
            (confidence >= MIN_CONFIDENCE).then(|| ScoredHit {
                record: p.clone(),
                confidence,
            })
        })
        .collect();
    rank(&mut hits);
    hits.truncate(limit);
    hits
}

/// Search staff by name or phone, ranked by confidence.
pub fn search_staff(staff: &[Staff], query: &str, limit: usize) -> Vec<ScoredHit<Staff>> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let mut hits: Vec<ScoredHit<Staff>> = staff
        .iter()
        .filter_map(|s| {
            let confidence = score(query, &s.name, &s.phone);
            (confidence >= MIN_CONFIDENCE).then(|| ScoredHit {
                record: s.clone(),
                confidence,
            })
        })
        .collect();
    rank(&mut hits);
    hits.truncate(limit);
    hits
}

fn rank<T>(hits: &mut [ScoredHit<T>]) {
    hits.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Score one record against the query.
fn score(query: &str, name: &str, phone: &str) -> f64 {
    if !phone.is_empty() && (phone == query || phone.starts_with(query)) {
        return 1.0;
    }

    let query_lower = query.to_lowercase();
    let name_lower = name.to_lowercase();

    let whole = jaro_winkler(&query_lower, &name_lower);
    let best_word = name_lower
        .split_whitespace()
        .map(|word| jaro_winkler(&query_lower, word))
        .fold(0.0, f64::max);

    whole.max(best_word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(id: &str, name: &str, phone: &str) -> Patient {
        Patient::new(id.into(), name.into(), phone.into())
    }

    fn directory() -> Vec<Patient> {
        vec![
            patient("p-01", "Amira Khan", "0771-234567"),
            patient("p-02", "Amir Khalid", "0771-888888"),
            patient("p-03", "Ben Osei", "0552-111222"),
        ]
    }

    #[test]
    fn test_exact_name_ranks_first() {
        let hits = search_patients(&directory(), "Amira Khan", 10);
        assert!(!hits.is_empty());
        assert_eq!(hits[0].record.id, "p-01");
    }

    #[test]
    fn test_misspelled_name_still_found() {
        let hits = search_patients(&directory(), "amirra", 10);
        let ids: Vec<&str> = hits.iter().map(|h| h.record.id.as_str()).collect();
        assert!(ids.contains(&"p-01"));
    }

    #[test]
    fn test_phone_prefix_is_exact_hit() {
        let hits = search_patients(&directory(), "0552", 10);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record.id, "p-03");
        assert_eq!(hits[0].confidence, 1.0);
    }

    #[test]
    fn test_unrelated_query_returns_nothing() {
        let hits = search_patients(&directory(), "zzzzqqqq", 10);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        assert!(search_patients(&directory(), "  ", 10).is_empty());
    }

    #[test]
    fn test_limit_respected() {
        let hits = search_patients(&directory(), "Amir", 1);
        assert_eq!(hits.len(), 1);
    }
}
