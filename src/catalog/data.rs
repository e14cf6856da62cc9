//! The builtin activity ruleset.
//!
//! Transcribes the institution's published MAP regulations: five activity
//! categories, six participation levels, 26 sub-activities (one custom
//! "other" entry per category), and the per-program point requirements.
//! Edits here are policy changes and must bump the dataset version.

use std::collections::HashMap;

use super::schema::{Catalog, Category, ParticipationLevel, ProgramRequirement, SubActivity};

fn points_table(entries: &[(&str, u32)]) -> HashMap<String, u32> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn sub_activity(
    id: &str,
    name: &str,
    category_id: &str,
    evidence: &[&str],
    by_level: &[(&str, u32)],
) -> SubActivity {
    SubActivity {
        id: id.to_string(),
        name: name.to_string(),
        category_id: category_id.to_string(),
        evidence_required: evidence.iter().map(|e| e.to_string()).collect(),
        points_by_level: points_table(by_level),
        is_duration_based: false,
        duration_points: HashMap::new(),
        is_custom: false,
    }
}

fn custom_sub_activity(
    id: &str,
    name: &str,
    category_id: &str,
    evidence: &[&str],
    by_level: &[(&str, u32)],
) -> SubActivity {
    SubActivity {
        is_custom: true,
        ..sub_activity(id, name, category_id, evidence, by_level)
    }
}

pub(crate) fn builtin() -> Catalog {
    let categories = vec![
        Category {
            id: "A".to_string(),
            name: "Technical Skills".to_string(),
            description: "Programming, workshops, certifications, and technical competitions"
                .to_string(),
        },
        Category {
            id: "B".to_string(),
            name: "Sports & Cultural".to_string(),
            description: "Sports competitions, cultural events, and artistic activities"
                .to_string(),
        },
        Category {
            id: "C".to_string(),
            name: "Community Outreach".to_string(),
            description: "Social service, community development, and outreach programs"
                .to_string(),
        },
        Category {
            id: "D".to_string(),
            name: "Innovation/IPR/Entrepreneurship".to_string(),
            description: "Patents, startups, research publications, and innovation projects"
                .to_string(),
        },
        Category {
            id: "E".to_string(),
            name: "Leadership/Management".to_string(),
            description: "Leadership roles, management positions, and organizational activities"
                .to_string(),
        },
    ];

    let levels = vec![
        level("college", "College", 3),
        level("inter_college", "Different College", 5),
        level("district", "District", 7),
        level("state", "State", 10),
        level("national", "National", 12),
        level("international", "International", 15),
    ];

    // Per-activity tables predate the fixed level-credit table and are kept
    // as the scoring fallback; none of them defines inter_college.
    let sub_activities = vec![
        // Technical Skills (A)
        sub_activity(
            "A1",
            "Programming Competition",
            "A",
            &["Certificate", "Report"],
            &[
                ("college", 3),
                ("district", 5),
                ("state", 7),
                ("national", 9),
                ("international", 12),
            ],
        ),
        sub_activity(
            "A2",
            "Technical Workshop Attendance",
            "A",
            &["Certificate"],
            &[
                ("college", 2),
                ("district", 3),
                ("state", 4),
                ("national", 5),
                ("international", 6),
            ],
        ),
        sub_activity(
            "A3",
            "Technical Workshop Conducting",
            "A",
            &["Certificate", "Report", "Photos"],
            &[
                ("college", 4),
                ("district", 6),
                ("state", 8),
                ("national", 10),
                ("international", 12),
            ],
        ),
        sub_activity(
            "A4",
            "Technical Certification",
            "A",
            &["Certificate"],
            &[
                ("college", 3),
                ("district", 5),
                ("state", 7),
                ("national", 9),
                ("international", 11),
            ],
        ),
        sub_activity(
            "A5",
            "Hackathon",
            "A",
            &["Certificate", "Report"],
            &[
                ("college", 4),
                ("district", 6),
                ("state", 8),
                ("national", 10),
                ("international", 12),
            ],
        ),
        // Sports & Cultural (B)
        sub_activity(
            "B1",
            "Sports Competition",
            "B",
            &["Certificate", "Photos"],
            &[
                ("college", 3),
                ("district", 5),
                ("state", 7),
                ("national", 9),
                ("international", 12),
            ],
        ),
        sub_activity(
            "B2",
            "Cultural Event Performance",
            "B",
            &["Certificate", "Photos", "Report"],
            &[
                ("college", 2),
                ("district", 4),
                ("state", 6),
                ("national", 8),
                ("international", 10),
            ],
        ),
        sub_activity(
            "B3",
            "Cultural Event Organization",
            "B",
            &["Certificate", "Report", "Photos"],
            &[
                ("college", 3),
                ("district", 5),
                ("state", 7),
                ("national", 9),
                ("international", 11),
            ],
        ),
        sub_activity(
            "B4",
            "Art Exhibition",
            "B",
            &["Certificate", "Photos"],
            &[
                ("college", 2),
                ("district", 4),
                ("state", 6),
                ("national", 8),
                ("international", 10),
            ],
        ),
        // Community Outreach (C)
        SubActivity {
            id: "C1".to_string(),
            name: "Community Service".to_string(),
            category_id: "C".to_string(),
            evidence_required: vec![
                "Certificate".to_string(),
                "Report".to_string(),
                "Photos".to_string(),
            ],
            points_by_level: points_table(&[
                ("college", 3),
                ("district", 5),
                ("state", 7),
                ("national", 9),
                ("international", 11),
            ]),
            is_duration_based: true,
            duration_points: points_table(&[
                ("two_days", 3),
                ("one_week", 6),
                ("one_month", 9),
                ("one_semester", 12),
            ]),
            is_custom: false,
        },
        sub_activity(
            "C2",
            "Blood Donation Camp",
            "C",
            &["Certificate", "Photos"],
            &[
                ("college", 3),
                ("district", 4),
                ("state", 5),
                ("national", 6),
                ("international", 7),
            ],
        ),
        sub_activity(
            "C3",
            "Environmental Initiative",
            "C",
            &["Certificate", "Report", "Photos"],
            &[
                ("college", 3),
                ("district", 5),
                ("state", 7),
                ("national", 9),
                ("international", 11),
            ],
        ),
        sub_activity(
            "C4",
            "Disaster Relief Work",
            "C",
            &["Certificate", "Report", "Photos"],
            &[
                ("college", 4),
                ("district", 6),
                ("state", 8),
                ("national", 10),
                ("international", 12),
            ],
        ),
        // Innovation/IPR/Entrepreneurship (D)
        sub_activity(
            "D1",
            "Patent Filing",
            "D",
            &["Patent Document", "Certificate"],
            &[
                ("college", 8),
                ("district", 10),
                ("state", 12),
                ("national", 15),
                ("international", 18),
            ],
        ),
        sub_activity(
            "D2",
            "Research Publication",
            "D",
            &["Publication Certificate", "Research Paper"],
            &[
                ("college", 6),
                ("district", 8),
                ("state", 10),
                ("national", 12),
                ("international", 15),
            ],
        ),
        sub_activity(
            "D3",
            "Startup Initiative",
            "D",
            &["Certificate", "Business Plan", "Report"],
            &[
                ("college", 6),
                ("district", 8),
                ("state", 10),
                ("national", 12),
                ("international", 14),
            ],
        ),
        sub_activity(
            "D4",
            "Innovation Competition",
            "D",
            &["Certificate", "Report", "Photos"],
            &[
                ("college", 4),
                ("district", 6),
                ("state", 8),
                ("national", 10),
                ("international", 12),
            ],
        ),
        // Leadership/Management (E)
        sub_activity(
            "E1",
            "Student Council Position",
            "E",
            &["Appointment Letter", "Performance Report"],
            &[
                ("college", 5),
                ("district", 7),
                ("state", 9),
                ("national", 11),
                ("international", 13),
            ],
        ),
        sub_activity(
            "E2",
            "Event Organization",
            "E",
            &["Certificate", "Report", "Photos"],
            &[
                ("college", 3),
                ("district", 5),
                ("state", 7),
                ("national", 9),
                ("international", 11),
            ],
        ),
        sub_activity(
            "E3",
            "Team Leadership Role",
            "E",
            &["Certificate", "Report"],
            &[
                ("college", 3),
                ("district", 5),
                ("state", 7),
                ("national", 9),
                ("international", 11),
            ],
        ),
        sub_activity(
            "E4",
            "Mentoring Program",
            "E",
            &["Certificate", "Report"],
            &[
                ("college", 4),
                ("district", 6),
                ("state", 8),
                ("national", 10),
                ("international", 12),
            ],
        ),
        // Free-text escape hatch per category
        custom_sub_activity(
            "A_OTHER",
            "Other Technical Activity",
            "A",
            &["Certificate", "Report"],
            &[
                ("college", 3),
                ("district", 5),
                ("state", 7),
                ("national", 9),
                ("international", 12),
            ],
        ),
        custom_sub_activity(
            "B_OTHER",
            "Other Sports & Cultural Activity",
            "B",
            &["Certificate", "Photos"],
            &[
                ("college", 3),
                ("district", 5),
                ("state", 7),
                ("national", 9),
                ("international", 12),
            ],
        ),
        custom_sub_activity(
            "C_OTHER",
            "Other Community Outreach Activity",
            "C",
            &["Certificate", "Report", "Photos"],
            &[
                ("college", 3),
                ("district", 5),
                ("state", 7),
                ("national", 9),
                ("international", 11),
            ],
        ),
        custom_sub_activity(
            "D_OTHER",
            "Other Innovation/IPR/Entrepreneurship Activity",
            "D",
            &["Certificate", "Report"],
            &[
                ("college", 5),
                ("district", 7),
                ("state", 9),
                ("national", 12),
                ("international", 15),
            ],
        ),
        custom_sub_activity(
            "E_OTHER",
            "Other Leadership/Management Activity",
            "E",
            &["Certificate", "Report"],
            &[
                ("college", 3),
                ("district", 5),
                ("state", 7),
                ("national", 9),
                ("international", 11),
            ],
        ),
    ];

    let programs = vec![
        program("B.Tech", 60, &[("A", 15), ("B", 10), ("C", 10), ("D", 10), ("E", 10)]),
        program("BCA", 50, &[("A", 12), ("B", 8), ("C", 10), ("D", 8), ("E", 8)]),
        program("MBA", 70, &[("A", 15), ("B", 10), ("C", 15), ("D", 15), ("E", 15)]),
        program("M.Tech", 65, &[("A", 20), ("B", 8), ("C", 10), ("D", 15), ("E", 12)]),
    ];

    Catalog {
        version: 1,
        categories,
        levels,
        sub_activities,
        programs,
    }
}

fn level(id: &str, name: &str, base_points: u32) -> ParticipationLevel {
    ParticipationLevel {
        id: id.to_string(),
        name: name.to_string(),
        base_points,
        winner_bonus: 0,
    }
}

fn program(name: &str, total_required: u32, minimums: &[(&str, u32)]) -> ProgramRequirement {
    ProgramRequirement {
        program: name.to_string(),
        total_required,
        category_minimums: points_table(minimums),
    }
}
