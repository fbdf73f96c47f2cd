use serde::Serialize;

/// Pedagogical angle of a chapter KPI chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KpiKind {
    Ecology,
    Energy,
    Conservation,
}

/// Key indicator shown on a chapter card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Kpi {
    pub label: &'static str,
    pub value: &'static str,
    pub kind: KpiKind,
}

/// One chapter of the presentation, anchored to a map hotspot.
///
/// `x`/`y` are percentage coordinates on the map (0–100, y grows
/// downward as on screen).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Chapter {
    pub id: u32,
    pub title: &'static str,
    pub x: f64,
    pub y: f64,
    pub color_rgb: (u8, u8, u8),
    pub excerpt: &'static str,
    pub summary: &'static str,
    pub concepts: &'static [&'static str],
    pub activity: &'static [&'static str],
    pub kpis: &'static [Kpi],
}

/// Reference ecosystem named on the map footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EcosystemRef {
    pub name: &'static str,
    pub description: &'static str,
}

pub static ECOSYSTEM: EcosystemRef = EcosystemRef {
    name: "Tropical Rainforest",
    description: "Explore the complex layers of biodiversity, energy flow, and ecological \
                  relationships in Earth's most vibrant ecosystem.",
};

/// Finds a chapter by id. Unknown ids are not an error; callers render
/// the not-found view instead.
#[must_use]
pub fn chapter_by_id(id: u32) -> Option<&'static Chapter> {
    CHAPTERS.iter().find(|c| c.id == id)
}

#[must_use]
pub fn previous_chapter(id: u32) -> Option<&'static Chapter> {
    id.checked_sub(1).and_then(chapter_by_id)
}

#[must_use]
pub fn next_chapter(id: u32) -> Option<&'static Chapter> {
    chapter_by_id(id + 1)
}

pub static CHAPTERS: [Chapter; 7] = [
    Chapter {
        id: 0,
        title: "0 · Ecosistemas",
        x: 15.0,
        y: 75.0,
        color_rgb: (107, 68, 35),
        excerpt: "Understanding the soil systems and root networks that support the rainforest's \
                  incredible biodiversity.",
        summary: "The rainforest foundation lies in its complex soil ecosystem and extensive root \
                  networks. Despite nutrient-poor soils, intricate mycorrhizal relationships and \
                  rapid nutrient cycling create the base for Earth's most biodiverse terrestrial \
                  ecosystem.",
        concepts: &[
            "Mycorrhizal fungi form symbiotic networks with tree roots",
            "Rapid nutrient cycling prevents soil nutrient accumulation",
            "Root systems extend horizontally rather than deeply",
            "Decomposer organisms quickly break down organic matter",
            "Soil pH varies significantly across different forest areas",
        ],
        activity: &[
            "Collect soil samples from different forest areas",
            "Examine root structures under magnification",
            "Map the distribution of fungi networks",
            "Test soil pH and nutrient levels",
            "Document decomposer species found in leaf litter",
        ],
        kpis: &[
            Kpi {
                label: "Soil Biodiversity",
                value: "High",
                kind: KpiKind::Ecology,
            },
            Kpi {
                label: "Nutrient Cycling",
                value: "Rapid",
                kind: KpiKind::Energy,
            },
            Kpi {
                label: "Root Protection",
                value: "Critical",
                kind: KpiKind::Conservation,
            },
        ],
    },
    Chapter {
        id: 1,
        title: "1 · Organismos fotosintéticos",
        x: 35.0,
        y: 85.0,
        color_rgb: (47, 109, 59),
        excerpt: "Discovering the hidden world of shade-adapted plants and the intricate web of \
                  life in the forest's lower levels.",
        summary: "The understory represents a twilight world where plants have evolved remarkable \
                  adaptations to thrive in low-light conditions. This layer hosts specialized \
                  communities of insects, amphibians, and small mammals in a complex ecological \
                  network.",
        concepts: &[
            "Shade-tolerant plants maximize light capture efficiency",
            "Epiphytes create aerial gardens on tree trunks",
            "Many species exhibit specialized pollination strategies",
            "Sound travels differently in dense understory vegetation",
            "Temperature and humidity remain remarkably stable",
        ],
        activity: &[
            "Measure light levels at different understory depths",
            "Identify epiphytic plant species on tree trunks",
            "Record understory bird and insect sounds",
            "Map temperature and humidity gradients",
            "Photograph understory plant adaptations",
        ],
        kpis: &[
            Kpi {
                label: "Plant Diversity",
                value: "Very High",
                kind: KpiKind::Ecology,
            },
            Kpi {
                label: "Light Efficiency",
                value: "Optimized",
                kind: KpiKind::Energy,
            },
            Kpi {
                label: "Habitat Stability",
                value: "Vulnerable",
                kind: KpiKind::Conservation,
            },
        ],
    },
    Chapter {
        id: 2,
        title: "2 · Fotosintesis y Cambio Climatico",
        x: 60.0,
        y: 45.0,
        color_rgb: (76, 175, 80),
        excerpt: "Exploring the aerial pathways and vertical ecosystems that connect the \
                  rainforest's upper reaches.",
        summary: "The rainforest canopy forms a complex three-dimensional habitat with its own \
                  climate, food webs, and specialized species. This aerial world supports more \
                  biodiversity per square meter than almost any other ecosystem on Earth.",
        concepts: &[
            "Canopy layers create distinct microhabitats",
            "Lianas and climbing plants form living bridges",
            "Many animals spend entire lives without touching ground",
            "Canopy gaps drive forest regeneration cycles",
            "Wind patterns create unique dispersal corridors",
        ],
        activity: &[
            "Map canopy connectivity using observation points",
            "Identify different types of climbing strategies",
            "Document animals using canopy highways",
            "Measure wind patterns at different heights",
            "Track seed dispersal routes through canopy gaps",
        ],
        kpis: &[
            Kpi {
                label: "Connectivity",
                value: "Extensive",
                kind: KpiKind::Ecology,
            },
            Kpi {
                label: "Solar Access",
                value: "Maximum",
                kind: KpiKind::Energy,
            },
            Kpi {
                label: "Fragmentation Risk",
                value: "High",
                kind: KpiKind::Conservation,
            },
        ],
    },
    Chapter {
        id: 3,
        title: "3 · Fotosintesis y Respiracion Celular",
        x: 25.0,
        y: 30.0,
        color_rgb: (76, 175, 80),
        excerpt: "Following water's journey from cloud to canopy to soil, driving the forest's \
                  circulatory system.",
        summary: "Water shapes every aspect of rainforest ecology, from the microscopic to the \
                  landscape scale. The forest both depends on and creates its own rainfall through \
                  complex evapotranspiration processes that regulate regional climate patterns.",
        concepts: &[
            "Evapotranspiration creates local rainfall patterns",
            "Trees act as biological water pumps and filters",
            "Stream networks drain excess water efficiently",
            "Fog capture supplements rainfall in some areas",
            "Water availability influences plant distribution",
        ],
        activity: &[
            "Measure rainfall at different canopy levels",
            "Track water movement through tree transpiration",
            "Map stream networks and watershed boundaries",
            "Study fog formation and collection processes",
            "Monitor soil moisture content variations",
        ],
        kpis: &[
            Kpi {
                label: "Water Recycling",
                value: "65%",
                kind: KpiKind::Ecology,
            },
            Kpi {
                label: "Hydrologic Flow",
                value: "Balanced",
                kind: KpiKind::Energy,
            },
            Kpi {
                label: "Watershed Health",
                value: "Stable",
                kind: KpiKind::Conservation,
            },
        ],
    },
    Chapter {
        id: 4,
        title: "4 · Proximamente",
        x: 70.0,
        y: 70.0,
        color_rgb: (212, 160, 23),
        excerpt: "Mapping the complex food webs and predator-prey relationships that maintain \
                  ecological balance.",
        summary: "Rainforest predator networks demonstrate nature's most complex food webs, where \
                  energy flows through multiple trophic levels. From tiny invertebrate predators \
                  to apex species, each plays a crucial role in maintaining ecosystem stability.",
        concepts: &[
            "Trophic cascades regulate herbivore populations",
            "Many species occupy multiple trophic levels",
            "Predator specialization reduces competition",
            "Temporal hunting patterns minimize conflicts",
            "Keystone predators disproportionately impact ecosystems",
        ],
        activity: &[
            "Map predator territories using tracking data",
            "Document hunting strategies and timing",
            "Analyze prey species abundance patterns",
            "Study predator-prey behavioral adaptations",
            "Monitor population dynamics over time",
        ],
        kpis: &[
            Kpi {
                label: "Trophic Levels",
                value: "6+",
                kind: KpiKind::Ecology,
            },
            Kpi {
                label: "Energy Transfer",
                value: "Efficient",
                kind: KpiKind::Energy,
            },
            Kpi {
                label: "Population Status",
                value: "Declining",
                kind: KpiKind::Conservation,
            },
        ],
    },
    Chapter {
        id: 5,
        title: "5 · Proximamente",
        x: 85.0,
        y: 25.0,
        color_rgb: (107, 68, 35),
        excerpt: "Examining how human activities reshape forest ecosystems and the urgent need for \
                  conservation action.",
        summary: "Human activities have dramatically altered rainforest ecosystems through \
                  deforestation, fragmentation, and climate change. Understanding these impacts is \
                  crucial for developing effective conservation strategies and sustainable \
                  management practices.",
        concepts: &[
            "Edge effects alter forest interior conditions",
            "Fragmentation isolates animal populations",
            "Agricultural expansion drives habitat loss",
            "Climate change shifts species distributions",
            "Indigenous management practices show sustainable alternatives",
        ],
        activity: &[
            "Compare satellite images showing deforestation over time",
            "Measure edge effects on forest microclimate",
            "Document species changes in fragmented areas",
            "Map current threats to forest integrity",
            "Research indigenous conservation success stories",
        ],
        kpis: &[
            Kpi {
                label: "Forest Cover",
                value: "-2% annually",
                kind: KpiKind::Ecology,
            },
            Kpi {
                label: "Carbon Release",
                value: "Increasing",
                kind: KpiKind::Energy,
            },
            Kpi {
                label: "Protection Status",
                value: "Expanding",
                kind: KpiKind::Conservation,
            },
        ],
    },
    Chapter {
        id: 6,
        title: "6 · Proximamente",
        x: 50.0,
        y: 15.0,
        color_rgb: (212, 160, 23),
        excerpt: "Envisioning sustainable solutions and restoration strategies for rainforest \
                  conservation and recovery.",
        summary: "The future of rainforests depends on innovative conservation approaches, \
                  restoration technologies, and global cooperation. From rewilding projects to \
                  sustainable development models, multiple pathways exist for forest recovery and \
                  protection.",
        concepts: &[
            "Ecological restoration can recreate forest ecosystems",
            "Payment for ecosystem services incentivizes conservation",
            "Technology enables better monitoring and protection",
            "Community-based conservation shows promising results",
            "International cooperation is essential for success",
        ],
        activity: &[
            "Design a restoration plan for degraded forest area",
            "Calculate ecosystem service values",
            "Research innovative conservation technologies",
            "Study successful community conservation programs",
            "Develop a personal action plan for forest protection",
        ],
        kpis: &[
            Kpi {
                label: "Restoration Potential",
                value: "High",
                kind: KpiKind::Ecology,
            },
            Kpi {
                label: "Investment Flow",
                value: "Growing",
                kind: KpiKind::Energy,
            },
            Kpi {
                label: "Global Commitment",
                value: "Strengthening",
                kind: KpiKind::Conservation,
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_ids_are_sequential() {
        for (i, chapter) in CHAPTERS.iter().enumerate() {
            assert_eq!(chapter.id, i as u32);
        }
    }

    #[test]
    fn test_chapter_lookup() {
        assert_eq!(chapter_by_id(3).map(|c| c.id), Some(3));
        assert!(chapter_by_id(99).is_none());
    }

    #[test]
    fn test_prev_next_respect_bounds() {
        assert!(previous_chapter(0).is_none());
        assert_eq!(next_chapter(0).map(|c| c.id), Some(1));
        assert_eq!(previous_chapter(6).map(|c| c.id), Some(5));
        assert!(next_chapter(6).is_none());
    }

    #[test]
    fn test_hotspot_coordinates_are_percentages() {
        for chapter in &CHAPTERS {
            assert!((0.0..=100.0).contains(&chapter.x), "{}", chapter.title);
            assert!((0.0..=100.0).contains(&chapter.y), "{}", chapter.title);
        }
    }

    #[test]
    fn test_every_chapter_carries_three_kpis() {
        for chapter in &CHAPTERS {
            assert_eq!(chapter.kpis.len(), 3, "{}", chapter.title);
            assert!(!chapter.concepts.is_empty());
            assert!(!chapter.activity.is_empty());
        }
    }
}
