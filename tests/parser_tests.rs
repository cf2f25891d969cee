use tracker_profiles::{
    parse_namespace, MissingField, PageSchema, ProfileParser, ScrapeError, StatPair,
    TrackerScore, DEFAULT_UID_NAMESPACE,
};

const PROFILE_HTML: &str = include_str!("fixtures/profile.html");
const AVATAR_IMG: &str =
    r#"<img class="user-avatar__image" src="https://imgsvc.trackercdn.com/avatar/pain.png" alt="">"#;

fn parse(html: &str) -> Result<tracker_profiles::ProfileRecord, ScrapeError> {
    let parser = ProfileParser::new(&PageSchema::default()).expect("default schema compiles");
    let namespace = parse_namespace(DEFAULT_UID_NAMESPACE).unwrap();
    parser.parse(html, "PAIN#1VCT", &namespace)
}

#[test]
fn parses_full_profile() {
    let profile = parse(PROFILE_HTML).expect("fixture parses");

    assert_eq!(profile.uid.to_string(), "fe164811-2d0c-5355-bf4f-6d170c549a8d");
    assert_eq!(profile.username, "PAIN#1VCT");
    assert_eq!(profile.avatar_url, "https://imgsvc.trackercdn.com/avatar/pain.png");
    assert_eq!(profile.matches_played.as_deref(), Some("312 Matches"));
    assert_eq!(
        profile.tracker_score,
        Some(TrackerScore { score: 42, max: 100 })
    );

    let season = &profile.current_season;
    assert_eq!(season.rank, "Gold 2");
    assert_eq!(season.rating.as_deref(), Some("1,234RR"));
    assert_eq!(season.playtime.as_deref(), Some("120h Playtime"));

    assert_eq!(profile.peak_season.rank, "Immortal 3");
    assert_eq!(profile.peak_season.rating.as_deref(), Some("412RR"));
}

#[test]
fn top_agents_follow_dom_order_and_skip_empty_items() {
    let profile = parse(PROFILE_HTML).unwrap();
    let agents = &profile.current_season.top_agents;

    assert_eq!(agents.len(), 2);
    assert_eq!(agents[0].name, "Jett");
    assert_eq!(agents[0].win_percent.as_deref(), Some("52.1%"));
    assert_eq!(agents[0].average_combat_score.as_deref(), Some("250.7"));
    assert_eq!(agents[0].average_damage_delta.as_deref(), Some("+24"));
    assert_eq!(agents[1].name, "Sage");
    assert_eq!(agents[1].time_played.as_deref(), Some("12h"));
    assert_eq!(agents[1].kd_ratio, None);
}

#[test]
fn stats_from_both_regions_are_merged_with_duplicates() {
    let profile = parse(PROFILE_HTML).unwrap();
    let pair = |name: &str, value: &str| StatPair {
        name: name.to_string(),
        value: Some(value.to_string()),
    };

    assert_eq!(
        profile.current_season.stats,
        vec![
            pair("Headshot%", "24.5%"),
            pair("K/D Ratio", "1.21"),
            pair("Damage/Round", "150.3"),
            pair("K/D Ratio", "1.21"),
        ]
    );
}

#[test]
fn missing_avatar_is_incomplete() {
    let html = PROFILE_HTML.replace(AVATAR_IMG, "");
    match parse(&html) {
        Err(ScrapeError::IncompleteData { username, field }) => {
            assert_eq!(username, "PAIN#1VCT");
            assert_eq!(field, MissingField::Avatar);
        }
        other => panic!("expected missing avatar, got {:?}", other),
    }
}

#[test]
fn zero_rank_rows_is_incomplete() {
    let html = PROFILE_HTML.replace("rating-entry__rank-info", "rating-entry__unranked");
    assert!(matches!(
        parse(&html),
        Err(ScrapeError::IncompleteData {
            field: MissingField::CurrentRank,
            ..
        })
    ));
}

#[test]
fn single_rank_row_is_missing_peak() {
    let html = PROFILE_HTML.replacen("rating-entry__rank-info", "rating-entry__unranked", 1);
    assert!(matches!(
        parse(&html),
        Err(ScrapeError::IncompleteData {
            field: MissingField::PeakRank,
            ..
        })
    ));
}

#[test]
fn optional_fields_degrade_to_absent() {
    let html = PROFILE_HTML
        .replace("area-top-agents", "area-moved")
        .replace(" 42 / 100 ", "-- / --")
        .replace("segment-stats", "segment-gone");
    let profile = parse(&html).expect("optional fields do not fail the parse");

    assert!(profile.current_season.top_agents.is_empty());
    assert_eq!(profile.tracker_score, None);
    assert_eq!(profile.current_season.playtime, None);
    assert_eq!(profile.matches_played, None);
    assert_eq!(profile.current_season.rank, "Gold 2");
}

#[test]
fn schema_override_redirects_a_field() {
    let html = PROFILE_HTML.replace(
        AVATAR_IMG,
        r#"<img class="portrait" data-src="https://cdn.example/p.png">"#,
    );
    let schema =
        PageSchema::from_yaml_str("avatar: .user-avatar img.portrait\navatar_attr: data-src\n")
            .unwrap();
    let parser = ProfileParser::new(&schema).unwrap();
    let namespace = parse_namespace(DEFAULT_UID_NAMESPACE).unwrap();

    let profile = parser.parse(&html, "PAIN#1VCT", &namespace).unwrap();
    assert_eq!(profile.avatar_url, "https://cdn.example/p.png");
}

#[test]
fn invalid_selector_is_reported_with_its_field() {
    let schema = PageSchema {
        rank_rows: "div..broken".to_string(),
        ..PageSchema::default()
    };
    match ProfileParser::new(&schema) {
        Err(ScrapeError::InvalidSelector { field, selector, .. }) => {
            assert_eq!(field, "rank_rows");
            assert_eq!(selector, "div..broken");
        }
        other => panic!("expected invalid selector, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn named_stat_with_blank_value_is_kept_as_absent() {
    let html = PROFILE_HTML.replace(
        r#"<span class="value">24.5%</span>"#,
        r#"<span class="value">  </span>"#,
    );
    let stats = parse(&html).unwrap().current_season.stats;

    assert_eq!(stats.len(), 4);
    assert_eq!(stats[0].name, "Headshot%");
    assert_eq!(stats[0].value, None);
    assert_eq!(stats[1].value.as_deref(), Some("1.21"));
}

#[test]
fn nested_regions_yield_each_row_once_in_document_order() {
    let html = PROFILE_HTML.replace(
        r#"<div class="main">"#,
        r#"<div class="main"><div class="main">"#,
    )
    .replace(
        "</div>\n                  <div class=\"top-agents area-top-agents\">",
        "</div></div>\n                  <div class=\"top-agents area-top-agents\">",
    );
    let stats = parse(&html).unwrap().current_season.stats;
    let names: Vec<&str> = stats.iter().map(|s| s.name.as_str()).collect();

    assert_eq!(names, ["Headshot%", "K/D Ratio", "Damage/Round", "K/D Ratio"]);
}

#[test]
fn avatar_comes_from_first_matched_image_only() {
    let html = PROFILE_HTML.replace(
        AVATAR_IMG,
        r#"<img class="user-avatar__image" alt=""><img class="user-avatar__image" src="https://cdn.example/second.png">"#,
    );
    assert!(matches!(
        parse(&html),
        Err(ScrapeError::IncompleteData {
            field: MissingField::Avatar,
            ..
        })
    ));
}
