use std::collections::BTreeMap;

use chrono::{Duration, TimeZone, Utc};
use lore_core::config::{DecayConfig, DecayCurve};
use lore_core::{KnowledgeEntry, Maturity};
use lore_decay::{DecayModel, DecayStatus};

fn exponential_model() -> DecayModel {
    let mut config = DecayConfig::default();
    for tier in Maturity::ALL {
        config.tiers.get_mut(tier).curve = DecayCurve::Exponential;
    }
    DecayModel::new(config)
}

fn days(n: f64) -> Duration {
    Duration::milliseconds((n * 86_400_000.0) as i64)
}

// ── Half-life ordering ───────────────────────────────────────────────────

#[test]
fn half_lives_strictly_increase_with_maturity() {
    let model = DecayModel::default();
    assert!(model.half_life(Maturity::Seedling) < model.half_life(Maturity::Growing));
    assert!(model.half_life(Maturity::Growing) < model.half_life(Maturity::Evergreen));
}

// ── Freshly validated entries ────────────────────────────────────────────

#[test]
fn just_validated_is_fresh_for_every_tier() {
    let model = DecayModel::default();
    let now = Utc::now();
    for tier in Maturity::ALL {
        let state = model.calculate_decay_at("kb-1", tier, now, now);
        assert!((state.decay_factor - 1.0).abs() < 1e-9, "{tier}: {}", state.decay_factor);
        assert_eq!(state.status, DecayStatus::Fresh);
        assert_eq!(state.days_since_validation, 0.0);
    }
}

// ── Exponential half-life boundaries ─────────────────────────────────────

#[test]
fn exponential_is_half_at_one_half_life_and_quarter_at_two() {
    let model = exponential_model();
    let now = Utc::now();
    for tier in Maturity::ALL {
        let hl = model.half_life(tier);
        let one = model.calculate_decay_at("kb", tier, now - days(hl), now);
        let two = model.calculate_decay_at("kb", tier, now - days(2.0 * hl), now);
        assert!((one.decay_factor - 0.5).abs() < 0.1, "{tier}: {}", one.decay_factor);
        assert!((two.decay_factor - 0.25).abs() < 0.1, "{tier}: {}", two.decay_factor);
        assert_eq!(one.status, DecayStatus::Stale);
        assert_eq!(two.status, DecayStatus::Critical);
    }
}

#[test]
fn linear_curve_is_configurable_per_tier() {
    let mut config = DecayConfig::default();
    config.tiers.growing.curve = DecayCurve::Linear;
    let model = DecayModel::new(config);
    let now = Utc::now();
    let state = model.calculate_decay_at("kb", Maturity::Growing, now - days(180.0), now);
    assert_eq!(state.decay_factor, 0.0);
    assert_eq!(state.status, DecayStatus::Archived);
}

// ── Clamping ─────────────────────────────────────────────────────────────

#[test]
fn future_validation_date_clamps_to_one() {
    let model = DecayModel::default();
    let now = Utc::now();
    let state = model.calculate_decay_at("kb", Maturity::Seedling, now + days(30.0), now);
    assert_eq!(state.decay_factor, 1.0);
    assert_eq!(state.days_since_validation, 0.0);
}

#[test]
fn ancient_validation_date_stays_in_range() {
    let model = DecayModel::default();
    let now = Utc::now();
    let ancient = Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap();
    for tier in Maturity::ALL {
        let state = model.calculate_decay_at("kb", tier, ancient, now);
        assert!((0.0..=1.0).contains(&state.decay_factor));
        assert!(state.days_since_validation > 40_000.0);
    }
}

// ── Status thresholds ────────────────────────────────────────────────────

#[test]
fn status_boundaries_are_inclusive_on_the_lower_edge() {
    let model = DecayModel::default();
    assert_eq!(model.status_for(0.7), DecayStatus::Fresh);
    assert_eq!(model.status_for(0.6999), DecayStatus::Stale);
    assert_eq!(model.status_for(0.3), DecayStatus::Stale);
    assert_eq!(model.status_for(0.2999), DecayStatus::Critical);
    assert_eq!(model.status_for(0.1), DecayStatus::Critical);
    assert_eq!(model.status_for(0.0999), DecayStatus::Archived);
}

// ── Validation record ────────────────────────────────────────────────────

#[test]
fn validate_entry_resets_decay_as_of_that_instant() {
    let mut model = DecayModel::default();
    let now = Utc::now();
    assert!(model.calculate_decay_for_at("kb-9", Maturity::Seedling, now).is_none());
    assert_eq!(model.validation_date_label("kb-9"), "unknown");

    model.validate_entry("kb-9", now - days(30.0));
    let stale = model.calculate_decay_for_at("kb-9", Maturity::Seedling, now).unwrap();
    assert!((stale.decay_factor - 0.5).abs() < 1e-6);

    model.validate_entry("kb-9", now);
    let fresh = model.calculate_decay_for_at("kb-9", Maturity::Seedling, now).unwrap();
    assert_eq!(fresh.decay_factor, 1.0);
    assert_eq!(model.get_validation_date("kb-9"), Some(now));
}

#[test]
fn get_stale_entries_filters_below_threshold() {
    let now = Utc::now();
    let mut old = KnowledgeEntry::new("old", Maturity::Seedling, now - days(200.0));
    old.last_validated = now - days(120.0);
    let recent = KnowledgeEntry::new("recent", Maturity::Seedling, now - days(1.0));
    let revalidated = KnowledgeEntry::new("revalidated", Maturity::Seedling, now - days(300.0));

    let mut model = DecayModel::default();
    model.validate_entry("revalidated", now - days(2.0));

    let stale = model.get_stale_entries_at(&[old, recent, revalidated], 0.5, now);
    let ids: Vec<&str> = stale.iter().map(|s| s.entry_id.as_str()).collect();
    assert_eq!(ids, vec!["old"]);
}

// ── Export / import ──────────────────────────────────────────────────────

#[test]
fn validations_roundtrip_through_export() {
    let mut model = DecayModel::default();
    let when = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
    model.validate_entry("a", when);
    model.validate_entry("b", when - days(10.0));

    let exported = model.export_validations();
    assert_eq!(exported["a"], "2025-03-14T09:26:53+00:00");

    let mut restored = DecayModel::default();
    let report = restored.import_validations(&exported);
    assert_eq!(report.imported, 2);
    assert_eq!(restored.export_validations(), exported);

    // Idempotent.
    restored.import_validations(&exported);
    assert_eq!(restored.tracked_count(), 2);
}

#[test]
fn import_skips_malformed_timestamps() {
    let mut records = BTreeMap::new();
    records.insert("good".to_string(), "2025-01-01T00:00:00Z".to_string());
    records.insert("bad".to_string(), "last tuesday".to_string());

    let mut model = DecayModel::default();
    let report = model.import_validations(&records);
    assert_eq!(report.imported, 1);
    assert_eq!(report.skipped, 1);
    assert!(model.get_validation_date("good").is_some());
    assert!(model.get_validation_date("bad").is_none());
}
