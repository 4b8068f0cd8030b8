//! End-to-end properties of the controller-group resolver.

use std::collections::HashMap;

use syndic::{ActorId, ActorProfile, ControllerGroup, Resolution, ResolutionInput};

const WALLET_A: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
const WALLET_A_UPPER: &str = "0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
const WALLET_B: &str = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
const WALLET_1: &str = "0x1111111111111111111111111111111111111111";
const WALLET_2: &str = "0x2222222222222222222222222222222222222222";
const FUNDER: &str = "0xffffffffffffffffffffffffffffffffffffffff";

fn funder_map(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(w, fs)| (w.to_string(), fs.iter().map(ToString::to_string).collect()))
        .collect()
}

fn member_strings(group: &ControllerGroup) -> Vec<String> {
    group.members.iter().map(ToString::to_string).collect()
}

/// Strips the run-local ids so two resolutions can be compared directly.
fn comparable(resolution: &Resolution) -> Vec<(Vec<String>, Vec<String>, f64)> {
    resolution
        .groups
        .iter()
        .map(|g| (member_strings(g), g.evidence.clone(), g.score))
        .collect()
}

#[test]
fn cross_platform_handle_example() {
    let input = ResolutionInput::new(vec![
        ActorProfile::new("x:alice"),
        ActorProfile::new("y:alice"),
    ]);
    let resolution = syndic::resolve(&input);

    assert_eq!(resolution.groups.len(), 1);
    let group = &resolution.groups[0];
    assert_eq!(member_strings(group), vec!["x:alice", "y:alice"]);
    assert_eq!(
        group.evidence,
        vec!["Same handle across platforms: alice".to_string()]
    );
    assert!((group.score - 0.25).abs() < f64::EPSILON);
}

#[test]
fn wallet_shaped_actor_matches_bio_address() {
    let input = ResolutionInput::new(vec![
        ActorProfile::new(WALLET_A_UPPER),
        ActorProfile::new("x:bob").with_bio(format!("send funds to {WALLET_A}")),
    ]);
    let resolution = syndic::resolve(&input);

    assert_eq!(resolution.groups.len(), 1);
    let group = &resolution.groups[0];
    assert!(group
        .evidence
        .iter()
        .any(|r| r.starts_with("Shared wallet:")));
    assert!(group.score >= 0.50);
}

#[test]
fn resolver_is_idempotent() {
    let profiles = vec![
        ActorProfile::new("x:alice")
            .with_links(["https://pay.example/join", "https://rare.example/1"])
            .with_bio(format!("tips {WALLET_A}")),
        ActorProfile::new("y:alice").with_links(["https://rare.example/2"]),
        ActorProfile::new("z:carol")
            .with_links(["https://pay.example/join", "https://rare.example/3"]),
        ActorProfile::new("w:dave").with_extra_wallets([WALLET_A]),
        ActorProfile::new("q:solo"),
    ];
    let input = ResolutionInput::new(profiles)
        .with_funders(funder_map(&[(WALLET_A, &[FUNDER]), (WALLET_B, &[FUNDER])]));

    let first = syndic::resolve(&input);
    let second = syndic::resolve(&input);
    assert_eq!(comparable(&first), comparable(&second));
    assert_eq!(first.group_of, second.group_of);
}

#[test]
fn grouping_is_symmetric_in_input_order() {
    let a = ActorProfile::new("x:a").with_links(["https://l.example/p"]);
    let b = ActorProfile::new("x:b").with_links(["https://l.example/p"]);

    let forward = syndic::resolve(&ResolutionInput::new(vec![a.clone(), b.clone()]));
    let backward = syndic::resolve(&ResolutionInput::new(vec![b, a]));

    assert_eq!(comparable(&forward), comparable(&backward));
}

#[test]
fn domain_threshold_is_three() {
    let with_domain = |id: &str, p: &str| {
        ActorProfile::new(id).with_links([format!("https://obscure.example/{p}")])
    };

    let two = syndic::resolve(&ResolutionInput::new(vec![
        with_domain("x:a", "1"),
        with_domain("x:b", "2"),
    ]));
    assert!(two.groups.is_empty());

    let three = syndic::resolve(&ResolutionInput::new(vec![
        with_domain("x:a", "1"),
        with_domain("x:b", "2"),
        with_domain("x:c", "3"),
    ]));
    assert_eq!(three.groups.len(), 1);
    assert_eq!(three.groups[0].members.len(), 3);
    assert_eq!(
        three.groups[0].evidence,
        vec!["Shared domain: obscure.example".to_string()]
    );
}

#[test]
fn stem_threshold_is_four() {
    let stemmed = |id: &str| ActorProfile::new(id).with_handle_stem("megapromo");

    let three = syndic::resolve(&ResolutionInput::new(vec![
        stemmed("x:p1"),
        stemmed("x:p2"),
        stemmed("x:p3"),
    ]));
    assert!(three.groups.is_empty());

    let four = syndic::resolve(&ResolutionInput::new(vec![
        stemmed("x:p1"),
        stemmed("x:p2"),
        stemmed("x:p3"),
        stemmed("x:p4"),
    ]));
    assert_eq!(four.groups.len(), 1);
    assert_eq!(four.groups[0].members.len(), 4);
}

#[test]
fn denylisted_domains_never_group() {
    let input = ResolutionInput::new(vec![
        ActorProfile::new("x:a").with_links(["https://github.com/a"]),
        ActorProfile::new("x:b").with_links(["https://github.com/b"]),
        ActorProfile::new("x:c").with_links(["https://www.youtube.com/@c"]),
        ActorProfile::new("x:d").with_links(["https://youtube.com/@d"]),
    ]);
    let resolution = syndic::resolve(&input);
    assert!(resolution.groups.is_empty());
    assert!(resolution.group_of.is_empty());
}

#[test]
fn singletons_are_filtered() {
    let input = ResolutionInput::new(vec![
        ActorProfile::new("x:loner").with_bio("nothing shared here"),
        ActorProfile::new("x:a").with_links(["https://l.example"]),
        ActorProfile::new("x:b").with_links(["https://l.example"]),
    ]);
    let resolution = syndic::resolve(&input);

    assert_eq!(resolution.groups.len(), 1);
    assert!(!resolution.group_of.contains_key(&ActorId::new("x:loner")));
    assert_eq!(resolution.group_of.len(), 2);
}

#[test]
fn adding_wallet_sharing_actor_is_monotone() {
    let base_profiles = vec![
        ActorProfile::new("x:a").with_links(["https://one.example/x"]),
        ActorProfile::new("x:b").with_links(["https://one.example/x"]),
        ActorProfile::new("y:c").with_links(["https://two.example/y"]),
        ActorProfile::new("y:d").with_links(["https://two.example/y"]),
    ];
    let before = syndic::resolve(&ResolutionInput::new(base_profiles.clone()));
    assert_eq!(before.groups.len(), 2);

    // New actor shares a wallet with x:a only.
    let mut profiles = base_profiles;
    profiles[0].bio = format!("gm {WALLET_A}");
    profiles.push(ActorProfile::new("z:e").with_extra_wallets([WALLET_A]));
    let after = syndic::resolve(&ResolutionInput::new(profiles));

    assert_eq!(after.groups.len(), 2);
    let merged = after
        .groups
        .iter()
        .find(|g| g.members.contains(&ActorId::new("z:e")))
        .expect("new actor must be grouped");
    assert!(merged.members.contains(&ActorId::new("x:a")));
    assert!(merged.members.contains(&ActorId::new("x:b")));
    assert_eq!(merged.members.len(), 3);

    // The untouched group is unchanged.
    let untouched = after
        .groups
        .iter()
        .find(|g| g.members.contains(&ActorId::new("y:c")))
        .expect("other group must survive");
    assert_eq!(member_strings(untouched), vec!["y:c", "y:d"]);
    let untouched_before = before
        .groups
        .iter()
        .find(|g| g.members.contains(&ActorId::new("y:c")))
        .expect("other group existed before");
    assert_eq!(untouched.evidence, untouched_before.evidence);
    assert!((untouched.score - untouched_before.score).abs() < f64::EPSILON);
}

#[test]
fn all_indicators_with_twelve_members_scores_one() {
    let link = "https://hub.example/join";
    let mut profiles = vec![
        // Two wallet-shaped actors whose funder evidence lands between members.
        ActorProfile::new(WALLET_1).with_links([link]),
        ActorProfile::new(WALLET_2).with_links([link]),
    ];
    for i in 1..=10 {
        let mut p = ActorProfile::new(format!("a:m{i:02}")).with_links([link.to_string()]);
        if i <= 3 {
            p.links.push(format!("https://rare.example/{i}"));
        }
        if i == 4 || i == 5 {
            p = p.with_bio(format!("wallet {WALLET_A}"));
        }
        profiles.push(p);
    }

    let input = ResolutionInput::new(profiles)
        .with_funders(funder_map(&[(WALLET_1, &[FUNDER]), (WALLET_2, &[FUNDER])]));
    let resolution = syndic::resolve(&input);

    assert_eq!(resolution.groups.len(), 1);
    let group = &resolution.groups[0];
    assert_eq!(group.members.len(), 12);
    for prefix in [
        "Shared wallet:",
        "Common funder:",
        "Shared link:",
        "Shared domain:",
    ] {
        assert!(
            group.evidence.iter().any(|r| r.starts_with(prefix)),
            "missing {prefix} evidence"
        );
    }
    assert!((group.score - 1.0).abs() < f64::EPSILON);
}

#[test]
fn scores_stay_in_unit_interval() {
    let mut profiles = Vec::new();
    for i in 0..30 {
        profiles.push(
            ActorProfile::new(format!("p{i}:spam"))
                .with_links(["https://blast.example/go"])
                .with_bio(format!("{WALLET_A} {WALLET_B}"))
                .with_handle_stem("spam"),
        );
    }
    let input = ResolutionInput::new(profiles)
        .with_funders(funder_map(&[(WALLET_A, &[FUNDER]), (WALLET_B, &[FUNDER])]));
    let resolution = syndic::resolve(&input);

    for group in &resolution.groups {
        assert!((0.0..=1.0).contains(&group.score));
        assert!(group.evidence.len() <= 8);
    }
}

#[test]
fn funder_unions_without_wallet_nodes_are_inert() {
    // Each wallet is held by exactly one actor: the shared-wallet pass
    // inserts no wallet node, so the common funder changes nothing.
    let input = ResolutionInput::new(vec![
        ActorProfile::new("x:a").with_bio(WALLET_A),
        ActorProfile::new("y:b").with_bio(WALLET_B),
    ])
    .with_funders(funder_map(&[(WALLET_A, &[FUNDER]), (WALLET_B, &[FUNDER])]));
    let resolution = syndic::resolve(&input);

    assert!(resolution.groups.is_empty());
}

#[test]
fn funder_bridges_two_shared_wallet_groups() {
    // Two wallet-bound pairs; their wallets share a funder. The funder
    // pass joins the wallet nodes the shared-wallet pass inserted,
    // merging all four actors.
    let input = ResolutionInput::new(vec![
        ActorProfile::new("x:a1").with_bio(WALLET_A),
        ActorProfile::new("x:a2").with_extra_wallets([WALLET_A]),
        ActorProfile::new("y:b1").with_bio(WALLET_B),
        ActorProfile::new("y:b2").with_extra_wallets([WALLET_B]),
    ])
    .with_funders(funder_map(&[(WALLET_A, &[FUNDER]), (WALLET_B, &[FUNDER])]));
    let resolution = syndic::resolve(&input);

    assert_eq!(resolution.groups.len(), 1);
    assert_eq!(resolution.groups[0].members.len(), 4);
    // Funder evidence sits between wallet nodes, which are not members;
    // only the shared-wallet reasons surface at group level.
    assert!(resolution.groups[0]
        .evidence
        .iter()
        .all(|r| r.starts_with("Shared wallet:")));
}

#[test]
fn funder_links_wallet_shaped_actors_directly() {
    // The actor identifiers are themselves the (lowercase) funded
    // wallets, so funder unions act on actor nodes with no bridging.
    let input = ResolutionInput::new(vec![
        ActorProfile::new(WALLET_1),
        ActorProfile::new(WALLET_2),
    ])
    .with_funders(funder_map(&[(WALLET_1, &[FUNDER]), (WALLET_2, &[FUNDER])]));
    let resolution = syndic::resolve(&input);

    assert_eq!(resolution.groups.len(), 1);
    assert_eq!(
        resolution.groups[0].evidence,
        vec![format!("Common funder: {FUNDER}")]
    );
    assert!((resolution.groups[0].score - 0.50).abs() < f64::EPSILON);
}

#[test]
fn resolution_round_trips_through_json() {
    let input = ResolutionInput::new(vec![
        ActorProfile::new("x:alice").with_links(["https://l.example"]),
        ActorProfile::new("y:bob").with_links(["https://l.example"]),
    ]);
    let resolution = syndic::resolve(&input);

    let json = serde_json::to_string(&resolution).unwrap();
    let back: Resolution = serde_json::from_str(&json).unwrap();
    assert_eq!(comparable(&resolution), comparable(&back));
    assert_eq!(resolution.group_of, back.group_of);
}
