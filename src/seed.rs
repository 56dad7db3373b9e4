//! Built-in Plant Catalog
//!
//! Seven AYUSH medicinal plants embedded as static data. Converted to owned
//! [`PlantRecord`]s once, when the process-wide catalog is first touched.

use crate::plant::PlantRecord;

/// Static form of a plant record (borrowed strings, no allocation)
#[derive(Debug, Clone, Copy)]
pub struct PlantSeed {
    pub id: &'static str,
    pub common_name: &'static str,
    pub botanical_name: &'static str,
    pub family_name: &'static str,
    pub image_url: &'static str,
    pub description: &'static str,
    pub medicinal_uses: &'static [&'static str],
    pub parts_used: &'static [&'static str],
    pub ailments_treated: &'static [&'static str],
    pub identification_tips: &'static [&'static str],
}

impl PlantSeed {
    pub fn to_record(&self) -> PlantRecord {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        PlantRecord {
            id: self.id.to_string(),
            common_name: self.common_name.to_string(),
            botanical_name: self.botanical_name.to_string(),
            family_name: self.family_name.to_string(),
            image_url: self.image_url.to_string(),
            description: self.description.to_string(),
            medicinal_uses: owned(self.medicinal_uses),
            parts_used: owned(self.parts_used),
            ailments_treated: owned(self.ailments_treated),
            identification_tips: owned(self.identification_tips),
        }
    }
}

/// All built-in records, owned
pub fn seed_records() -> Vec<PlantRecord> {
    PLANTS.iter().map(PlantSeed::to_record).collect()
}

// ============================================================================
// EMBEDDED CATALOG DATA
// Order matters: the first three are the featured herbs on the home page.
// ============================================================================

pub static PLANTS: &[PlantSeed] = &[
    PlantSeed {
        id: "ashwagandha",
        common_name: "Ashwagandha",
        botanical_name: "Withania somnifera",
        family_name: "Solanaceae",
        image_url: "/ashwagandha.jpg",
        description: "Ashwagandha, also known as Indian Ginseng or Winter Cherry, is one of the most important herbs in Ayurvedic medicine. The name Ashwagandha means 'smell of horse,' which refers to both the unique smell of the herb and the traditional belief that consuming it provides the strength and virility of a horse.",
        medicinal_uses: &[
            "Adaptogen for stress reduction",
            "Enhances physical and mental stamina",
            "Improves cognitive function",
            "Supports immune system function",
            "Promotes healthy sleep patterns",
        ],
        parts_used: &["Root", "Leaves", "Berries (occasionally)"],
        ailments_treated: &[
            "Stress and anxiety",
            "Fatigue and weakness",
            "Insomnia",
            "Neurodegenerative conditions",
            "Inflammatory conditions",
        ],
        identification_tips: &[
            "Shrub growing 2-3 feet tall",
            "Dull green ovate leaves",
            "Small green-yellow flowers",
            "Red berry-like fruits enclosed in papery husks",
            "Thick, brownish-yellow roots",
        ],
    },
    PlantSeed {
        id: "tulsi",
        common_name: "Tulsi (Holy Basil)",
        botanical_name: "Ocimum sanctum",
        family_name: "Lamiaceae",
        image_url: "/tulsi.jpg",
        description: "Tulsi, or Holy Basil, is considered the most sacred herb in Ayurvedic medicine. Often planted around Hindu shrines, it is known as 'The Incomparable One' and 'Mother Medicine of Nature.' It has been used for thousands of years for its diverse healing properties.",
        medicinal_uses: &[
            "Adaptogen for stress management",
            "Respiratory system support",
            "Digestive health",
            "Blood purifier",
            "Antimicrobial properties",
        ],
        parts_used: &["Leaves", "Seeds", "Flowers", "Stems"],
        ailments_treated: &[
            "Common cold and flu",
            "Digestive disorders",
            "Respiratory conditions",
            "Stress-related disorders",
            "Skin infections",
        ],
        identification_tips: &[
            "Aromatic shrub growing 1-2 feet tall",
            "Purple or green stems",
            "Oval-shaped serrated leaves with strong aroma",
            "Purple or white flowers on terminal spikes",
            "Three varieties: Rama, Krishna, and Vana Tulsi",
        ],
    },
    PlantSeed {
        id: "amla",
        common_name: "Amla (Indian Gooseberry)",
        botanical_name: "Phyllanthus emblica",
        family_name: "Phyllanthaceae",
        image_url: "/amla.jpg",
        description: "Amla, or Indian Gooseberry, is one of the most important medicinal plants in Ayurveda. Known as the 'fruit of immortality,' it's prized for its extremely high vitamin C content, which remains stable even through processing. It's mentioned in ancient Ayurvedic texts dating back thousands of years.",
        medicinal_uses: &[
            "Potent antioxidant",
            "Digestive system support",
            "Immune system enhancement",
            "Liver detoxification",
            "Promotes longevity",
        ],
        parts_used: &["Fruit", "Seeds", "Leaves", "Bark", "Root"],
        ailments_treated: &[
            "Vitamin C deficiency",
            "Digestive disorders",
            "Liver conditions",
            "Diabetes",
            "Skin and hair problems",
        ],
        identification_tips: &[
            "Deciduous tree growing up to 60 feet tall",
            "Feathery pinnate leaves with small leaflets",
            "Light green-yellow flowers",
            "Round, light green fruits with six vertical stripes",
            "Sour, astringent taste of fruits",
        ],
    },
    PlantSeed {
        id: "turmeric",
        common_name: "Turmeric",
        botanical_name: "Curcuma longa",
        family_name: "Zingiberaceae",
        image_url: "/turmeric.jpg",
        description: "Turmeric has been used in India for thousands of years as both a spice and medicinal herb. Known as the 'Golden Spice,' it contains curcumin, a compound with powerful anti-inflammatory and antioxidant properties. It holds a central place in Ayurvedic medicine and traditional Indian culture.",
        medicinal_uses: &[
            "Anti-inflammatory",
            "Antioxidant",
            "Digestive aid",
            "Blood purifier",
            "Joint health support",
        ],
        parts_used: &["Rhizome (root)", "Leaves (occasionally)"],
        ailments_treated: &[
            "Inflammatory conditions",
            "Arthritis",
            "Digestive disorders",
            "Skin conditions",
            "Metabolic syndrome",
        ],
        identification_tips: &[
            "Perennial herb growing up to 3 feet tall",
            "Large oblong leaves with prominent veins",
            "Pink-white flowers in cone-shaped spikes",
            "Orange-yellow rhizomes when cut",
            "Distinct earthy, bitter aroma",
        ],
    },
    PlantSeed {
        id: "brahmi",
        common_name: "Brahmi",
        botanical_name: "Bacopa monnieri",
        family_name: "Plantaginaceae",
        image_url: "/brahmi.jpg",
        description: "Brahmi is one of the most powerful herbs in Ayurvedic medicine, especially renowned for its effects on the brain and nervous system. Named after Lord Brahma, the creator of the universe in Hindu mythology, it has been used for centuries to enhance memory, learning, and concentration.",
        medicinal_uses: &[
            "Cognitive enhancement",
            "Memory improvement",
            "Adaptogen for stress relief",
            "Nervous system support",
            "Anti-anxiety properties",
        ],
        parts_used: &["Whole plant", "Leaves"],
        ailments_treated: &[
            "Cognitive decline",
            "Anxiety and stress",
            "ADHD symptoms",
            "Epilepsy",
            "Memory disorders",
        ],
        identification_tips: &[
            "Creeping herb with succulent leaves",
            "Small white or light purple flowers",
            "Grows in wet, marshy areas",
            "Fleshy, oblong leaves with smooth edges",
            "Spreads horizontally along ground",
        ],
    },
    PlantSeed {
        id: "neem",
        common_name: "Neem",
        botanical_name: "Azadirachta indica",
        family_name: "Meliaceae",
        image_url: "/neem.jpg",
        description: "Neem is known as the 'village pharmacy' in India due to its remarkable range of medicinal properties. Virtually every part of the tree has been used in traditional Ayurvedic medicine for thousands of years. It's especially known for its antibacterial, antifungal, and blood-purifying properties.",
        medicinal_uses: &[
            "Antimicrobial",
            "Blood purifier",
            "Skin treatment",
            "Dental care",
            "Pest repellent",
        ],
        parts_used: &["Leaves", "Bark", "Seeds", "Oil", "Flowers"],
        ailments_treated: &[
            "Skin disorders",
            "Infections",
            "Dental problems",
            "Diabetes",
            "Parasitic infections",
        ],
        identification_tips: &[
            "Evergreen tree growing up to 100 feet tall",
            "Compound leaves with serrated leaflets",
            "Small white fragrant flowers",
            "Olive-like fruits changing from green to yellow when ripe",
            "Bitter taste in all parts",
        ],
    },
    PlantSeed {
        id: "shatavari",
        common_name: "Shatavari",
        botanical_name: "Asparagus racemosus",
        family_name: "Asparagaceae",
        image_url: "/shatavari.jpg",
        description: "Shatavari, which means 'she who possesses a hundred husbands,' is one of the most important herbs in Ayurvedic medicine for women's health. It has been used for centuries as a female reproductive tonic and is considered to be the main rejuvenative tonic for the female reproductive system.",
        medicinal_uses: &[
            "Female reproductive tonic",
            "Galactagogue (promotes lactation)",
            "Adaptogen for stress management",
            "Digestive support",
            "Immune system enhancement",
        ],
        parts_used: &["Roots", "Rhizomes"],
        ailments_treated: &[
            "Female reproductive disorders",
            "Menopausal symptoms",
            "Lactation issues",
            "Digestive disorders",
            "General debility",
        ],
        identification_tips: &[
            "Climbing plant with thorny stems",
            "Small white flowers",
            "Needle-like cladodes (modified stems)",
            "Red berries when ripe",
            "Distinctive tuberous roots with finger-like projections",
        ],
    },
];
