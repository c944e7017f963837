// Host-side tests for section config parsing and the detail dialog model.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod folio_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod color {
        include!("../src/core/color.rs");
    }
    pub mod experience {
        include!("../src/core/experience.rs");
    }
    pub mod detail {
        include!("../src/core/detail.rs");
    }
}

use folio_core::color::ColorMode;
use folio_core::detail::*;
use folio_core::experience::*;

fn item(title: &str) -> ExperienceItem {
    ExperienceItem {
        title: title.to_string(),
        period: "2020 - 2022".to_string(),
        ..Default::default()
    }
}

fn strings(xs: &[&str]) -> Option<Vec<String>> {
    Some(xs.iter().map(|s| s.to_string()).collect())
}

#[test]
fn description_only_item_has_single_block() {
    let mut it = item("Engineer");
    it.description = strings(&["Built things."]);
    let view = DetailView::build(&it, RenderMode::Standard, &[]);
    assert_eq!(view.title, "Engineer");
    assert_eq!(view.period, "2020 - 2022");
    assert_eq!(view.blocks.len(), 1);
    assert_eq!(view.blocks[0].heading(), "Description");
}

#[test]
fn item_without_optional_fields_has_no_blocks() {
    let view = DetailView::build(&item("Bare"), RenderMode::Standard, &[]);
    assert!(view.blocks.is_empty());
    assert_eq!(view.subtitle, None);
    assert_eq!(view.location, None);
}

#[test]
fn blocks_follow_fixed_order() {
    let mut it = item("Lead");
    it.achievements = strings(&["Shipped"]);
    it.highlights = strings(&["Fast"]);
    it.technologies = strings(&["Rust", "Wasm"]);
    it.description = strings(&["Led a team"]);
    let view = DetailView::build(&it, RenderMode::Standard, &[]);
    let headings: Vec<_> = view.blocks.iter().map(DetailBlock::heading).collect();
    assert_eq!(
        headings,
        ["Description", "Technologies", "Highlights", "Achievements"]
    );
    assert_eq!(
        view.blocks[1],
        DetailBlock::Technologies(vec!["Rust".into(), "Wasm".into()])
    );
}

#[test]
fn leadership_mode_replaces_achievements_with_timeline() {
    let mut selected = item("Leadership");
    selected.achievements = strings(&["ignored in timeline mode"]);

    let mut first = item("Team Lead");
    first.subtitle = Some("Acme".to_string());
    first.achievements = strings(&["Grew team to 6"]);
    let mut second = item("Staff Engineer");
    second.period = "2022 - now".to_string();

    let leadership = vec![first, second];
    let view = DetailView::build(&selected, RenderMode::LeadershipTimeline, &leadership);
    assert_eq!(view.blocks.len(), 1);
    assert_eq!(view.blocks[0].heading(), "Leadership Journey");
    let DetailBlock::Timeline(entries) = &view.blocks[0] else {
        panic!("expected timeline, got {:?}", view.blocks[0]);
    };
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].step, 1);
    assert_eq!(entries[0].title, "Team Lead");
    assert_eq!(entries[0].subtitle.as_deref(), Some("Acme"));
    assert_eq!(entries[0].achievements, vec!["Grew team to 6".to_string()]);
    assert_eq!(entries[1].step, 2);
    assert_eq!(entries[1].period, "2022 - now");
    assert!(entries[1].achievements.is_empty());
}

#[test]
fn leadership_mode_without_achievements_has_no_timeline() {
    let mut selected = item("Leadership");
    selected.description = strings(&["Overview"]);
    let view = DetailView::build(&selected, RenderMode::LeadershipTimeline, &[item("Lead")]);
    assert_eq!(view.blocks.len(), 1);
    assert_eq!(view.blocks[0].heading(), "Description");
}

#[test]
fn title_alone_does_not_switch_mode() {
    let mut selected = item("Leadership");
    selected.achievements = strings(&["Mentored"]);
    let view = DetailView::build(&selected, RenderMode::Standard, &[item("Lead")]);
    assert_eq!(
        view.blocks,
        vec![DetailBlock::Achievements(vec!["Mentored".to_string()])]
    );
}

#[test]
fn config_parses_with_defaults() {
    let json = r#"{
        "title": "Education",
        "items": [
            { "title": "BSc", "period": "2012 - 2016", "icon": "graduation-cap" },
            { "title": "Course", "period": "2018", "location": "Online" }
        ]
    }"#;
    let config = SectionConfig::from_json(json).expect("valid config");
    assert_eq!(config.title, "Education");
    assert_eq!(config.icon, Icon::Code);
    assert_eq!(config.mode, RenderMode::Standard);
    assert_eq!(config.layout, PickerLayout::Canvas);
    assert_eq!(config.colors, ColorMode::PerFrameRandom);
    assert!(config.leadership_items.is_empty());
    assert_eq!(config.items.len(), 2);
    assert_eq!(config.items[0].icon, Icon::GraduationCap);
    assert_eq!(config.items[1].location.as_deref(), Some("Online"));
    assert_eq!(config.item(1).map(|i| i.title.as_str()), Some("Course"));
    assert!(config.item(2).is_none());
}

#[test]
fn config_reads_kebab_and_camel_case_fields() {
    let json = r#"{
        "title": "Experience",
        "icon": "briefcase",
        "mode": "leadership-timeline",
        "layout": "grid",
        "colors": "per-bubble",
        "items": [{ "title": "Leadership", "period": "2019 - now", "achievements": ["a"] }],
        "leadershipItems": [{ "title": "Manager", "period": "2021", "icon": "users" }]
    }"#;
    let config = SectionConfig::from_json(json).expect("valid config");
    assert_eq!(config.icon, Icon::Briefcase);
    assert_eq!(config.mode, RenderMode::LeadershipTimeline);
    assert_eq!(config.layout, PickerLayout::Grid);
    assert_eq!(config.colors, ColorMode::PerBubble);
    assert_eq!(config.leadership_items.len(), 1);
    assert_eq!(config.leadership_items[0].icon, Icon::Users);
}

#[test]
fn invalid_config_is_an_error() {
    assert!(SectionConfig::from_json("not json").is_err());
    // items is required
    let err = SectionConfig::from_json(r#"{ "title": "x" }"#).unwrap_err();
    assert!(err.to_string().starts_with("invalid section config"));
    assert!(SectionConfig::from_json(r#"{ "title": "x", "items": [], "icon": "rocket" }"#).is_err());
}

#[test]
fn every_icon_has_a_glyph() {
    for icon in [
        Icon::Briefcase,
        Icon::GraduationCap,
        Icon::Code,
        Icon::Users,
        Icon::Award,
    ] {
        assert!(!icon.glyph().is_empty(), "{:?}", icon);
    }
}
