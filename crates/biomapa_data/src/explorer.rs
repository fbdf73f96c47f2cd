use serde::{Deserialize, Serialize};

/// Broad habitat category for the ecosystem explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Environment {
    /// Dry-land ecosystems.
    Terrestrial,
    /// Open ocean and coastal waters.
    Marine,
    /// Rivers, lakes and freshwater wetlands.
    Freshwater,
    /// Caves and aquifer systems.
    Subterranean,
    /// Human-built environments.
    Urban,
}

impl Environment {
    pub const ALL: [Environment; 5] = [
        Environment::Terrestrial,
        Environment::Marine,
        Environment::Freshwater,
        Environment::Subterranean,
        Environment::Urban,
    ];

    /// Display label as shown in the curriculum material.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Environment::Terrestrial => "Terrestre",
            Environment::Marine => "Marino",
            Environment::Freshwater => "Dulciacuícola",
            Environment::Subterranean => "Subterráneo",
            Environment::Urban => "Urbano",
        }
    }

    /// Parses an ASCII command-line key (no diacritics).
    #[must_use]
    pub fn parse(key: &str) -> Option<Environment> {
        match key.to_ascii_lowercase().as_str() {
            "terrestre" | "terrestrial" => Some(Environment::Terrestrial),
            "marino" | "marine" => Some(Environment::Marine),
            "dulciacuicola" | "freshwater" => Some(Environment::Freshwater),
            "subterraneo" | "subterranean" => Some(Environment::Subterranean),
            "urbano" | "urban" => Some(Environment::Urban),
            _ => None,
        }
    }
}

/// Whether the ecosystem formed with or without human intervention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    Natural,
    Anthropogenic,
}

impl Origin {
    pub const ALL: [Origin; 2] = [Origin::Natural, Origin::Anthropogenic];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Origin::Natural => "Natural",
            Origin::Anthropogenic => "Antrópico",
        }
    }

    #[must_use]
    pub fn parse(key: &str) -> Option<Origin> {
        match key.to_ascii_lowercase().as_str() {
            "natural" => Some(Origin::Natural),
            "antropico" | "anthropogenic" => Some(Origin::Anthropogenic),
            _ => None,
        }
    }
}

/// Coarse climate regime used by the decision tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Climate {
    Cold,
    Temperate,
    Dry,
    HumidTropical,
}

impl Climate {
    pub const ALL: [Climate; 4] = [
        Climate::Cold,
        Climate::Temperate,
        Climate::Dry,
        Climate::HumidTropical,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Climate::Cold => "Frío",
            Climate::Temperate => "Templado",
            Climate::Dry => "Seco",
            Climate::HumidTropical => "Húmedo/Tropical",
        }
    }

    #[must_use]
    pub fn parse(key: &str) -> Option<Climate> {
        match key.to_ascii_lowercase().as_str() {
            "frio" | "cold" => Some(Climate::Cold),
            "templado" | "temperate" => Some(Climate::Temperate),
            "seco" | "dry" => Some(Climate::Dry),
            "humedo" | "tropical" | "humedo/tropical" => Some(Climate::HumidTropical),
            _ => None,
        }
    }
}

/// IUCN top-level grouping. Only biases result ordering, never filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IucnCategory {
    Terrestrial,
    Marine,
    Freshwater,
    Subterranean,
}

impl IucnCategory {
    pub const ALL: [IucnCategory; 4] = [
        IucnCategory::Terrestrial,
        IucnCategory::Marine,
        IucnCategory::Freshwater,
        IucnCategory::Subterranean,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            IucnCategory::Terrestrial => "Terrestres",
            IucnCategory::Marine => "Marinos",
            IucnCategory::Freshwater => "Dulciacuícolas",
            IucnCategory::Subterranean => "Subterráneos",
        }
    }

    /// Subtype families used for the ordering bias in the explorer.
    #[must_use]
    pub fn subtypes(&self) -> &'static [&'static str] {
        match self {
            IucnCategory::Terrestrial => &["Bosques", "Pastizales", "Desiertos"],
            IucnCategory::Marine => &["Océanos", "Arrecifes de coral", "Zonas costeras"],
            IucnCategory::Freshwater => &["Ríos", "Lagos", "Humedales de agua dulce"],
            IucnCategory::Subterranean => &["Cuevas", "Acuíferos", "Sistemas de cavernas"],
        }
    }

    #[must_use]
    pub fn parse(key: &str) -> Option<IucnCategory> {
        match key.to_ascii_lowercase().as_str() {
            "terrestres" | "terrestrial" => Some(IucnCategory::Terrestrial),
            "marinos" | "marine" => Some(IucnCategory::Marine),
            "dulciacuicolas" | "freshwater" => Some(IucnCategory::Freshwater),
            "subterraneos" | "subterranean" => Some(IucnCategory::Subterranean),
            _ => None,
        }
    }
}

/// Living components of an ecosystem, shown in the biotic panel.
pub const BIOTIC_FACTORS: &[&str] = &["Plantas", "Animales", "Hongos", "Bacterias"];

/// Physical/chemical components, shown in the abiotic panel.
pub const ABIOTIC_FACTORS: &[&str] = &["Luz solar", "Agua", "Temperatura", "Suelo", "Aire"];

/// Regional example string for a classified ecosystem label, Mexican
/// context. Labels without an entry render as a placeholder.
#[must_use]
pub fn regional_example(label: &str) -> Option<&'static str> {
    REGIONAL_EXAMPLES
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, example)| *example)
}

pub const REGIONAL_EXAMPLES: &[(&str, &str)] = &[
    ("Desierto", "Sonora/Chihuahua (matorrales xerófilos)."),
    ("Matorral", "Baja California, Coahuila."),
    ("Selva seca", "Costa del Pacífico (Jalisco–Oaxaca)."),
    ("Pastizal seco", "Altiplano mexicano."),
    (
        "Tundra de altura",
        "Zonas de alta montaña (Iztaccíhuatl, Pico de Orizaba).",
    ),
    (
        "Bosque frío (coníferas)",
        "Sierra Tarahumara; bosques de pino-encino.",
    ),
    (
        "Taiga (en latitudes altas)",
        "Referencia global (no en México continental).",
    ),
    ("Bosque templado", "Michocán, Estado de México (pino/oyamel)."),
    ("Pastizal templado", "Valle de México, Bajío (históricamente)."),
    ("Matorral templado", "Norte y altiplanos semisecos."),
    ("Selva húmeda (tropical)", "Selva Lacandona (Chiapas)."),
    ("Bosque subtropical", "Transiciones tropical-templado."),
    ("Bosque nublado", "Sierra Madre Oriental y del Sur."),
    (
        "Agrosistemas en zonas áridas",
        "Agricultura tecnificada en desiertos/mares de plástico.",
    ),
    (
        "Sistemas silvopastoriles secos",
        "Ganadería con árboles dispersos.",
    ),
    ("Campos agrícolas templado-fríos", "Altiplanos templados."),
    ("Plantaciones forestales frías", "Coníferas plantadas."),
    ("Campos agrícolas templados", "Altiplanos y valles."),
    (
        "Plantaciones forestales",
        "Eucalipto/Confieras en varios estados.",
    ),
    ("Paisajes agropecuarios", "Mosaico agrícola-ganadero."),
    ("Campos agrícolas tropicales", "Golfo y Pacífico sur."),
    (
        "Agroforestería húmeda",
        "Café/cacao bajo sombra (Veracruz, Chiapas).",
    ),
    ("Océano (mar abierto / pelágico)", "Pacífico y Golfo de México."),
    (
        "Zonas costeras (playas, costas rocosas)",
        "Baja California, Nayarit, Quintana Roo.",
    ),
    ("Manglares", "Sian Ka’an, Marismas Nacionales."),
    ("Praderas de pastos marinos", "Caribe mexicano."),
    ("Arrecifes de coral", "Sistema Arrecifal Mesoamericano."),
    ("Ríos", "Grijalva–Usumacinta, Papaloapan."),
    ("Lagos", "Pátzcuaro, Chapala (cuencas)."),
    ("Humedales de agua dulce", "Pantanos de Centla."),
    ("Cuevas", "Sierra Gorda, Grutas de Cacahuamilpa."),
    ("Acuíferos", "Sistemas subterráneos kársticos."),
    ("Sistemas de cavernas", "Yucatán (cenotes, cavernas)."),
    ("Ambientes urbanos", "CDMX, Monterrey, Guadalajara."),
    ("Parques urbanos", "Bosque de Chapultepec."),
    (
        "Zonas verdes periurbanas",
        "Suelos de conservación al sur de CDMX.",
    ),
];

/// Named regional ecosystem card with a one-line note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionalCard {
    pub name: &'static str,
    pub note: &'static str,
}

pub const MX_TERRESTRIAL: &[RegionalCard] = &[
    RegionalCard {
        name: "Bosques Nublados",
        note: "Húmedos y frescos; altísima biodiversidad.",
    },
    RegionalCard {
        name: "Bosques Templados",
        note: "Hojas caducas o coníferas; estaciones marcadas.",
    },
    RegionalCard {
        name: "Selvas Húmedas",
        note: "Cálidas y lluviosas; gran variedad de especies.",
    },
    RegionalCard {
        name: "Selvas Secas",
        note: "Períodos de sequía; vegetación caducifolia.",
    },
    RegionalCard {
        name: "Matorrales",
        note: "Áridos y semiáridos; vegetación arbustiva resistente.",
    },
    RegionalCard {
        name: "Pastizales",
        note: "Gramíneas dominantes; fauna diversa.",
    },
];

pub const MX_MARINE_COASTAL: &[RegionalCard] = &[
    RegionalCard {
        name: "Playas de Arena/Rocosas",
        note: "Vida adaptada a olas y mareas.",
    },
    RegionalCard {
        name: "Islas y Dunas Costeras",
        note: "Flora y fauna endémica.",
    },
    RegionalCard {
        name: "Manglares",
        note: "Bosques costeros clave para protección y biodiversidad.",
    },
    RegionalCard {
        name: "Praderas de Pastos Marinos",
        note: "Viveros submarinos para vida marina.",
    },
    RegionalCard {
        name: "Arrecifes de Coral",
        note: "Biodiversidad excepcional.",
    },
    RegionalCard {
        name: "Bosques de Microalgas",
        note: "Productores primarios esenciales.",
    },
    RegionalCard {
        name: "Ambientes Pelágicos",
        note: "Columnas de agua abiertas; grandes migradores.",
    },
];

pub const MX_SUBTERRANEAN: &[RegionalCard] = &[
    RegionalCard {
        name: "Cuevas",
        note: "Formaciones subterráneas con condiciones únicas.",
    },
    RegionalCard {
        name: "Acuíferos",
        note: "Reservas de agua subterránea.",
    },
    RegionalCard {
        name: "Sistemas de cavernas",
        note: "Complejas redes subterráneas.",
    },
];

pub const MX_URBAN: &[RegionalCard] = &[RegionalCard {
    name: "Ambientes Urbanos",
    note: "Ecosistemas creados por humanos; flora/fauna adaptada a ciudades.",
}];

/// Keywords that select the freshwater-relevant subset of the
/// marine-coastal card list.
pub const FRESHWATER_CARD_KEYWORDS: &[&str] =
    &["Ríos", "Lagos", "Arrecifes", "Praderas", "Pelágicos"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_spanish() {
        assert_eq!(Environment::Freshwater.label(), "Dulciacuícola");
        assert_eq!(Origin::Anthropogenic.label(), "Antrópico");
        assert_eq!(Climate::HumidTropical.label(), "Húmedo/Tropical");
        assert_eq!(IucnCategory::Subterranean.label(), "Subterráneos");
    }

    #[test]
    fn test_parse_roundtrip_ascii_keys() {
        for env in Environment::ALL {
            let key = match env {
                Environment::Terrestrial => "terrestre",
                Environment::Marine => "marino",
                Environment::Freshwater => "dulciacuicola",
                Environment::Subterranean => "subterraneo",
                Environment::Urban => "urbano",
            };
            assert_eq!(Environment::parse(key), Some(env));
        }
        assert_eq!(Environment::parse("lunar"), None);
        assert_eq!(Origin::parse("ANTROPICO"), Some(Origin::Anthropogenic));
        assert_eq!(Climate::parse("humedo"), Some(Climate::HumidTropical));
    }

    #[test]
    fn test_every_iucn_category_has_three_subtypes() {
        for cat in IucnCategory::ALL {
            assert_eq!(cat.subtypes().len(), 3, "{:?}", cat);
        }
    }

    #[test]
    fn test_regional_example_lookup() {
        assert_eq!(
            regional_example("Manglares"),
            Some("Sian Ka’an, Marismas Nacionales.")
        );
        assert_eq!(regional_example("Volcanes"), None);
    }

    #[test]
    fn test_regional_examples_have_no_duplicate_labels() {
        for (i, (label, _)) in REGIONAL_EXAMPLES.iter().enumerate() {
            assert!(
                !REGIONAL_EXAMPLES[i + 1..].iter().any(|(l, _)| l == label),
                "duplicate entry for {label}"
            );
        }
    }
}
