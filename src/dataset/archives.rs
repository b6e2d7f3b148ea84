//! Digital-archive collection: 8 preserved items.

use crate::record::{ArchiveDetail, ArchiveRecord};
use crate::types::RecordId;

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

/// The archive collection, in declaration order.
pub fn archive_items() -> Vec<ArchiveRecord> {
    vec![
        ArchiveRecord {
            id: RecordId::from(1u32),
            title: "Lotus Sutra Manuscript".to_string(),
            century: "15th Century".to_string(),
            monastery: "Rumtek Monastery".to_string(),
            description: "Ancient handwritten Buddhist text on palm leaves with gold illuminations"
                .to_string(),
            resolution: "4K Ultra HD".to_string(),
            condition: "Excellent".to_string(),
            featured: true,
            tags: tags(&["Buddhist Text", "Palm Leaf", "Gold Illumination"]),
            detail: ArchiveDetail::Manuscript {
                pages: 108,
                language: "Sanskrit".to_string(),
            },
        },
        ArchiveRecord {
            id: RecordId::from(2u32),
            title: "Tara Deity Mural".to_string(),
            century: "17th Century".to_string(),
            monastery: "Pemayangtse Monastery".to_string(),
            description:
                "Exquisite wall painting depicting the Green Tara goddess in traditional Tibetan style"
                    .to_string(),
            resolution: "8K Ultra HD".to_string(),
            condition: "Good".to_string(),
            featured: true,
            tags: tags(&["Deity", "Wall Art", "Tibetan Style"]),
            detail: ArchiveDetail::Mural {
                dimensions: "3m x 2m".to_string(),
                medium: "Natural Pigments".to_string(),
            },
        },
        ArchiveRecord {
            id: RecordId::from(3u32),
            title: "Prayer Wheel Collection".to_string(),
            century: "18th Century".to_string(),
            monastery: "Enchey Monastery".to_string(),
            description:
                "Set of ornate copper prayer wheels with intricate engravings and mantras"
                    .to_string(),
            resolution: "4K Ultra HD".to_string(),
            condition: "Very Good".to_string(),
            featured: false,
            tags: tags(&["Prayer Wheel", "Copper", "Mantras"]),
            detail: ArchiveDetail::Artifact {
                material: "Copper & Silver".to_string(),
                quantity: 12,
            },
        },
        ArchiveRecord {
            id: RecordId::from(4u32),
            title: "Monastery Blueprint".to_string(),
            century: "19th Century".to_string(),
            monastery: "Tashiding Monastery".to_string(),
            description:
                "Original architectural drawings showing the monastery's construction plans"
                    .to_string(),
            resolution: "High Resolution".to_string(),
            condition: "Fair".to_string(),
            featured: false,
            tags: tags(&["Architecture", "Blueprint", "Construction"]),
            detail: ArchiveDetail::Document {
                material: "Paper & Ink".to_string(),
                sheets: 24,
            },
        },
        ArchiveRecord {
            id: RecordId::from(5u32),
            title: "Thangka Painting".to_string(),
            century: "16th Century".to_string(),
            monastery: "Dubdi Monastery".to_string(),
            description:
                "Traditional Tibetan Buddhist painting on cotton depicting Buddha's life"
                    .to_string(),
            resolution: "6K Ultra HD".to_string(),
            condition: "Excellent".to_string(),
            featured: true,
            tags: tags(&["Thangka", "Buddha", "Cotton Canvas"]),
            detail: ArchiveDetail::Artwork {
                dimensions: Some("1.5m x 1m".to_string()),
                medium: "Natural Dyes on Cotton".to_string(),
            },
        },
        ArchiveRecord {
            id: RecordId::from(6u32),
            title: "Ritual Instruments".to_string(),
            century: "17th Century".to_string(),
            monastery: "Phensang Monastery".to_string(),
            description:
                "Collection of traditional Buddhist ceremonial instruments including bells and dorjes"
                    .to_string(),
            resolution: "4K Ultra HD".to_string(),
            condition: "Good".to_string(),
            featured: false,
            tags: tags(&["Ritual", "Bronze", "Ceremonial"]),
            detail: ArchiveDetail::Artifact {
                material: "Bronze & Brass".to_string(),
                quantity: 8,
            },
        },
        ArchiveRecord {
            id: RecordId::from(7u32),
            title: "Medicinal Text".to_string(),
            century: "18th Century".to_string(),
            monastery: "Rumtek Monastery".to_string(),
            description:
                "Traditional Tibetan medicine manuscript with herbal remedies and treatments"
                    .to_string(),
            resolution: "High Resolution".to_string(),
            condition: "Good".to_string(),
            featured: false,
            tags: tags(&["Medicine", "Herbal", "Tibetan Text"]),
            detail: ArchiveDetail::Manuscript {
                pages: 156,
                language: "Tibetan".to_string(),
            },
        },
        ArchiveRecord {
            id: RecordId::from(8u32),
            title: "Mandala Sand Art".to_string(),
            century: "Modern Recreation".to_string(),
            monastery: "Multiple Locations".to_string(),
            description:
                "Digital preservation of intricate sand mandala created during ceremonies"
                    .to_string(),
            resolution: "8K Ultra HD".to_string(),
            condition: "Digital Archive".to_string(),
            featured: true,
            tags: tags(&["Mandala", "Sand Art", "Ceremony"]),
            detail: ArchiveDetail::Artwork {
                dimensions: None,
                medium: "Colored Sand".to_string(),
            },
        },
    ]
}
