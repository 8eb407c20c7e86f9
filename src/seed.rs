//! Demo board loaded at startup when `SEED_DEMO_DATA` is on.

use crate::domain::{Board, Card, Column};

struct SeedSite {
    id: &'static str,
    address: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    date: &'static str,
    comments: u32,
    documents: u32,
}

struct SeedStage {
    id: &'static str,
    name: &'static str,
    color: &'static str,
    border_color: &'static str,
    sites: &'static [SeedSite],
}

const SECONDARY_LABEL: &str = "{Sites Address}";

const STAGES: &[SeedStage] = &[
    SeedStage {
        id: "nielsen",
        name: "Nielsen",
        color: "blue.50",
        border_color: "blue.200",
        sites: &[
            SeedSite {
                id: "1",
                address: "123 Tenth Avenue, Manhattan, NY",
                description: "Corner lot with street frontage on two sides, currently leased to a single tenant.",
                tags: &[
                    "Tag Name 897",
                    "Commercial",
                    "Premium",
                    "High Priority",
                    "Urgent",
                    "Available",
                    "Hot Lead",
                ],
                date: "23.02.24",
                comments: 5,
                documents: 12,
            },
            SeedSite {
                id: "2",
                address: "456 Park Avenue, Manhattan, NY",
                description: "Mid-block residential building with ground floor retail.",
                tags: &["Tag Name 898", "Residential"],
                date: "24.02.24",
                comments: 3,
                documents: 8,
            },
        ],
    },
    SeedStage {
        id: "westinghouse",
        name: "Westinghouse Electric Company",
        color: "orange.50",
        border_color: "orange.200",
        sites: &[SeedSite {
            id: "3",
            address: "789 Broadway, Manhattan, NY",
            description: "Former light-industrial floor plates, suitable for conversion.",
            tags: &["Industrial", "Large Scale"],
            date: "25.02.24",
            comments: 7,
            documents: 15,
        }],
    },
    SeedStage {
        id: "prospects",
        name: "Prospects",
        color: "purple.50",
        border_color: "purple.200",
        sites: &[SeedSite {
            id: "4",
            address: "321 Fifth Avenue, Manhattan, NY",
            description: "Owner open to discussions, follow-up call scheduled.",
            tags: &["Potential", "Follow Up"],
            date: "26.02.24",
            comments: 2,
            documents: 4,
        }],
    },
    SeedStage {
        id: "closed",
        name: "Closed Deals",
        color: "green.50",
        border_color: "green.200",
        sites: &[SeedSite {
            id: "5",
            address: "654 Madison Avenue, Manhattan, NY",
            description: "Acquisition completed, handed over to asset management.",
            tags: &["Completed", "Success"],
            date: "27.02.24",
            comments: 1,
            documents: 20,
        }],
    },
];

pub fn demo_board() -> Board {
    Board::new(STAGES.iter().map(stage_to_column).collect())
}

fn stage_to_column(stage: &SeedStage) -> Column {
    Column {
        id: stage.id.into(),
        name: stage.name.into(),
        color: stage.color.into(),
        border_color: stage.border_color.into(),
        cards: stage.sites.iter().map(site_to_card).collect(),
        selected: false,
    }
}

fn site_to_card(site: &SeedSite) -> Card {
    Card {
        id: site.id.into(),
        primary_label: site.address.into(),
        secondary_label: SECONDARY_LABEL.into(),
        description: site.description.into(),
        tags: site.tags.iter().map(|t| t.to_string()).collect(),
        created_date: site.date.into(),
        comment_count: site.comments,
        attachment_count: site.documents,
        expanded: false,
        selected: false,
    }
}
