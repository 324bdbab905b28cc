use jobguide_compiler::{
    Compiler, CompileError, EntityInput, EntityKind, LocaleSet, Locales, Manifest, RawAction,
    RawEntity,
};

fn locales() -> Locales {
    Locales::new(vec!["na".to_string(), "jp".to_string()]).unwrap()
}

fn action(name: &str, classification: &str, cast: &str, recast: &str, content: &[&str]) -> RawAction {
    RawAction {
        icon: format!("https://img.example.com/i/{}.png", name.to_lowercase().replace(' ', "_")),
        skillname: name.to_string(),
        classification: classification.to_string(),
        cast: cast.to_string(),
        recast: recast.to_string(),
        content: content.iter().map(|s| s.to_string()).collect(),
    }
}

fn page(slug: &str, name: &str, role: Option<&str>, actions: Vec<RawAction>) -> RawEntity {
    RawEntity {
        slug: slug.to_string(),
        name: name.to_string(),
        icon: format!("https://img.example.com/class/{slug}.png"),
        role: role.map(|r| r.to_string()),
        actions,
    }
}

/// A two-job fixture with a cross-entity forward combo reference:
/// the paladin's first action chains into a skill interned later.
fn fixture() -> Vec<EntityInput> {
    let paladin_na = page(
        "paladin",
        "Paladin",
        Some("Tank"),
        vec![
            action(
                "Fast Blade",
                "Weaponskill",
                "Instant",
                "2.5s",
                &["Delivers an attack with a potency of 200."],
            ),
            action(
                "Riot Blade",
                "Weaponskill",
                "Instant",
                "2.5s",
                &[
                    "Delivers an attack with a potency of 100.",
                    "Combo Action: Fast Blade or Rage of Halone",
                ],
            ),
        ],
    );
    let paladin_jp = page(
        "paladin",
        "ナイト",
        Some("タンク"),
        vec![
            action(
                "ファストブレード",
                "ウェポンスキル",
                "Instant",
                "2.5s",
                &["対象に物理攻撃。"],
            ),
            action(
                "ライオットソード",
                "ウェポンスキル",
                "Instant",
                "2.5s",
                &["対象に物理攻撃。", "コンボ条件"],
            ),
        ],
    );
    let warrior_na = page(
        "warrior",
        "Warrior",
        Some("Tank"),
        vec![
            action(
                "Rage of Halone",
                "Weaponskill",
                "Instant",
                "2.5s",
                &["Delivers an attack.", "Duration: 3m"],
            ),
            action(
                "Holmgang",
                "Ability",
                "-",
                "90s",
                &["Prevents most knockback effects.", "Duration: Infinite"],
            ),
        ],
    );
    let warrior_jp = page(
        "warrior",
        "戦士",
        Some("タンク"),
        vec![
            action(
                "レイジ・オブ・ハルオーネ",
                "ウェポンスキル",
                "Instant",
                "2.5s",
                &["対象に物理攻撃。", "効果時間"],
            ),
            action(
                "ホルムギャング",
                "アビリティ",
                "-",
                "90s",
                &["ノックバック無効。", "効果時間"],
            ),
        ],
    );

    vec![
        EntityInput {
            kind: EntityKind::Job,
            pages: LocaleSet::new(vec![paladin_na, paladin_jp]),
        },
        EntityInput {
            kind: EntityKind::Job,
            pages: LocaleSet::new(vec![warrior_na, warrior_jp]),
        },
    ]
}

#[test]
fn two_jobs_share_classification_and_role_ids() {
    let mut compiler = Compiler::new(locales());
    let groups = compiler.compile(&fixture()).unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name_id, 0);
    assert_eq!(groups[1].name_id, 1);
    assert_eq!(groups[0].role_id, Some(0));
    assert_eq!(groups[1].role_id, Some(0));

    // "Weaponskill" first seen on the paladin, reused by the warrior.
    assert_eq!(groups[0].actions[0].classification_id, 0);
    assert_eq!(groups[1].actions[0].classification_id, 0);
    assert_eq!(groups[1].actions[1].classification_id, 1);

    // Distinct skill names get dense first-seen ids.
    let name_ids: Vec<u32> = groups
        .iter()
        .flat_map(|g| g.actions.iter().map(|a| a.name_id))
        .collect();
    assert_eq!(name_ids, vec![0, 1, 2, 3]);
}

#[test]
fn forward_combo_reference_resolves() {
    let mut compiler = Compiler::new(locales());
    let groups = compiler.compile(&fixture()).unwrap();

    // "Rage of Halone" belongs to the second entity but is referenced from
    // the first; the two-pass design resolves it anyway, in source order.
    assert_eq!(groups[0].actions[1].combo_action_ids, vec![0, 2]);
    assert_eq!(groups[0].actions[0].combo_action_ids, Vec::<u32>::new());
}

#[test]
fn timing_fields_are_normalized() {
    let mut compiler = Compiler::new(locales());
    let groups = compiler.compile(&fixture()).unwrap();

    let fast_blade = &groups[0].actions[0];
    assert_eq!(fast_blade.cast_seconds, 0.0);
    assert_eq!(fast_blade.recast_seconds, 2.5);
    assert_eq!(fast_blade.duration_seconds, 0.0);

    let rage = &groups[1].actions[0];
    assert_eq!(rage.duration_seconds, 180.0);

    let holmgang = &groups[1].actions[1];
    assert_eq!(holmgang.cast_seconds, 0.0);
    assert_eq!(holmgang.recast_seconds, 90.0);
    assert_eq!(holmgang.duration_seconds, -1.0);
}

#[test]
fn icon_filenames_come_from_canonical_urls() {
    let mut compiler = Compiler::new(locales());
    let groups = compiler.compile(&fixture()).unwrap();
    assert_eq!(groups[0].icon, "paladin.png");
    assert_eq!(groups[0].actions[0].icon, "fast_blade.png");
}

#[test]
fn language_packs_stay_index_aligned() {
    let mut compiler = Compiler::new(locales());
    compiler.compile(&fixture()).unwrap();

    let na = compiler.tables().language_pack(0);
    let jp = compiler.tables().language_pack(1);
    assert_eq!(na.job.len(), jp.job.len());
    assert_eq!(na.role.len(), jp.role.len());
    assert_eq!(na.action.len(), jp.action.len());
    assert_eq!(na.classification.len(), jp.classification.len());
    assert_eq!(na.content.len(), jp.content.len());

    assert_eq!(na.job, vec!["Paladin", "Warrior"]);
    assert_eq!(jp.job, vec!["ナイト", "戦士"]);
    assert_eq!(na.role, vec!["Tank"]);
    assert_eq!(jp.role, vec!["タンク"]);
    assert_eq!(na.action[2], "Rage of Halone");
    assert_eq!(jp.action[2], "レイジ・オブ・ハルオーネ");
}

#[test]
fn compilation_is_deterministic() {
    let mut first = Compiler::new(locales());
    let mut second = Compiler::new(locales());
    let groups_a = first.compile(&fixture()).unwrap();
    let groups_b = second.compile(&fixture()).unwrap();

    assert_eq!(groups_a, groups_b);
    for i in 0..2 {
        assert_eq!(
            first.tables().language_pack(i),
            second.tables().language_pack(i)
        );
    }
}

#[test]
fn shared_content_blocks_dedup_across_entities() {
    let shared = ["Reduces damage taken by 20%.", "Duration: 10s"];
    let make = |slug: &str, name: &str, skill: &str| {
        LocaleSet::new(vec![
            page(slug, name, Some("Tank"), vec![action(skill, "Ability", "Instant", "60s", &shared)]),
            page(slug, name, Some("タンク"), vec![action(skill, "アビリティ", "Instant", "60s", &shared)]),
        ])
    };
    let entities = vec![
        EntityInput {
            kind: EntityKind::Job,
            pages: make("paladin", "Paladin", "Rampart"),
        },
        EntityInput {
            kind: EntityKind::Job,
            pages: make("warrior", "Warrior", "Rampart II"),
        },
    ];

    let mut compiler = Compiler::new(locales());
    let groups = compiler.compile(&entities).unwrap();
    assert_eq!(
        groups[0].actions[0].content_id,
        groups[1].actions[0].content_id
    );
    assert_ne!(groups[0].actions[0].name_id, groups[1].actions[0].name_id);
}

#[test]
fn role_pages_intern_into_the_role_table() {
    let entities = vec![EntityInput {
        kind: EntityKind::Role,
        pages: LocaleSet::new(vec![
            page(
                "tank",
                "Tank",
                None,
                vec![action("Rampart", "Ability", "Instant", "90s", &["Duration: 20s"])],
            ),
            page(
                "tank",
                "タンク",
                None,
                vec![action("ランパート", "アビリティ", "Instant", "90s", &["効果時間"])],
            ),
        ]),
    }];

    let mut compiler = Compiler::new(locales());
    let groups = compiler.compile(&entities).unwrap();
    assert_eq!(groups[0].kind, EntityKind::Role);
    assert_eq!(groups[0].name_id, 0);
    assert_eq!(groups[0].role_id, None);
    assert_eq!(compiler.tables().roles.len(), 1);
    assert_eq!(compiler.tables().jobs.len(), 0);
}

#[test]
fn missing_locale_page_is_fatal() {
    let entities = vec![EntityInput {
        kind: EntityKind::Role,
        pages: LocaleSet::new(vec![page("tank", "Tank", None, vec![])]),
    }];
    let mut compiler = Compiler::new(locales());
    assert!(matches!(
        compiler.compile(&entities),
        Err(CompileError::LocaleMismatch {
            expected: 2,
            got: 1
        })
    ));
}

#[test]
fn uneven_action_counts_are_fatal() {
    let entities = vec![EntityInput {
        kind: EntityKind::Role,
        pages: LocaleSet::new(vec![
            page(
                "tank",
                "Tank",
                None,
                vec![action("Rampart", "Ability", "Instant", "90s", &[])],
            ),
            page("tank", "タンク", None, vec![]),
        ]),
    }];
    let mut compiler = Compiler::new(locales());
    assert!(matches!(
        compiler.compile(&entities),
        Err(CompileError::LocaleMismatch { expected: 1, got: 0 })
    ));
}

#[test]
fn job_page_without_role_is_fatal() {
    let entities = vec![EntityInput {
        kind: EntityKind::Job,
        pages: LocaleSet::new(vec![
            page("paladin", "Paladin", None, vec![]),
            page("paladin", "ナイト", None, vec![]),
        ]),
    }];
    let mut compiler = Compiler::new(locales());
    assert!(matches!(
        compiler.compile(&entities),
        Err(CompileError::MissingRole { slug }) if slug == "paladin"
    ));
}

#[test]
fn malformed_cast_aborts_the_pass() {
    let entities = vec![EntityInput {
        kind: EntityKind::Role,
        pages: LocaleSet::new(vec![
            page(
                "tank",
                "Tank",
                None,
                vec![action("Rampart", "Ability", "???", "90s", &[])],
            ),
            page(
                "tank",
                "タンク",
                None,
                vec![action("ランパート", "アビリティ", "???", "90s", &[])],
            ),
        ]),
    }];
    let mut compiler = Compiler::new(locales());
    assert!(matches!(
        compiler.compile(&entities),
        Err(CompileError::MalformedTiming(raw)) if raw == "???"
    ));
}

#[test]
fn manifest_deserializes_from_scrape_json() {
    let json = r#"{
        "locales": ["na", "jp"],
        "entities": [
            {
                "kind": "job",
                "pages": [
                    {
                        "slug": "paladin",
                        "name": "Paladin",
                        "icon": "https://img.example.com/class/paladin.png",
                        "role": "Tank",
                        "actions": [
                            {
                                "icon": "https://img.example.com/i/fast_blade.png",
                                "skillname": "Fast Blade",
                                "classification": "Weaponskill",
                                "cast": "Instant",
                                "recast": "2.5s",
                                "content": ["Delivers an attack."]
                            }
                        ]
                    },
                    {
                        "slug": "paladin",
                        "name": "ナイト",
                        "icon": "https://img.example.com/class/paladin.png",
                        "role": "タンク",
                        "actions": [
                            {
                                "icon": "https://img.example.com/i/fast_blade.png",
                                "skillname": "ファストブレード",
                                "classification": "ウェポンスキル",
                                "cast": "Instant",
                                "recast": "2.5s",
                                "content": ["対象に物理攻撃。"]
                            }
                        ]
                    }
                ]
            }
        ]
    }"#;

    let manifest: Manifest = serde_json::from_str(json).unwrap();
    assert_eq!(manifest.locales, vec!["na", "jp"]);

    let mut compiler = Compiler::new(Locales::new(manifest.locales.clone()).unwrap());
    let groups = compiler.compile(&manifest.entities).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].actions[0].recast_seconds, 2.5);
}
