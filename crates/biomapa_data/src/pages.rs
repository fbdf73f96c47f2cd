//! Static informational pages of the presentation.
//!
//! Each page is a declarative tree of sections and blocks that the view
//! layer walks to lay out text. Content is curriculum material and is
//! compiled in; nothing here is computed at runtime.

/// One informational page.
#[derive(Debug, Clone, Copy)]
pub struct InfoPage {
    /// Path segment the page is reachable under.
    pub slug: &'static str,
    /// Accent badge shown before the title ("3", "18–24", ...).
    pub badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub sections: &'static [Section],
    pub footer: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct Section {
    /// Small uppercase lead-in line above the title.
    pub kicker: Option<&'static str>,
    pub title: &'static str,
    pub blocks: &'static [Block],
}

#[derive(Debug, Clone, Copy)]
pub enum Block {
    Paragraph(&'static str),
    Bullets(&'static [&'static str]),
    Cards(&'static [InfoCard]),
    Equation(&'static str),
    Table {
        headers: &'static [&'static str],
        rows: &'static [&'static [&'static str]],
    },
}

#[derive(Debug, Clone, Copy)]
pub struct InfoCard {
    pub title: &'static str,
    pub body: &'static str,
}

/// Photosynthesis phase panel for the calculator view toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhasePanel {
    pub name: &'static str,
    pub location: &'static str,
    pub lines: &'static [&'static str],
}

pub static LIGHT_PHASE: PhasePanel = PhasePanel {
    name: "Lumínica",
    location: "tilacoides",
    lines: &[
        "Luz excita clorofilas (P680/FII y P700/FI) → transporte de e⁻ → gradiente de H⁺.",
        "ATP sintasa forma ATP; se reduce NADP⁺ → NADPH; se libera O₂ por fotólisis del agua.",
        "H₂O + luz → 2H⁺ + 2e⁻ + ½ O₂",
    ],
};

pub static DARK_PHASE: PhasePanel = PhasePanel {
    name: "Oscura",
    location: "estroma",
    lines: &[
        "Ciclo de Calvin: carboxilación (CO₂ + RuBP → 3-PGA) → reducción (G3P) → regeneración (RuBP).",
        "Balance global: 6CO₂ + 6H₂O + luz → C₆H₁₂O₆ + 6O₂. ~6 vueltas → 1 glucosa.",
    ],
};

/// Review bullets shown under the calculator, pages 18–24 of the unit.
pub const CALCULATOR_SUMMARY: &[&str] = &[
    "Contexto México: Ley General de Cambio Climático; bosques/selvas son clave para capturar CO₂.",
    "Importancia: la vegetación absorbe CO₂ vía fotosíntesis (libera O₂ y fabrica azúcares).",
    "Evolución: anoxigénica → oxigénica (cianobacterias) → cloroplastos por endosimbiosis.",
    "Cloroplasto: tilacoides (fase lumínica), estroma (Ciclo de Calvin).",
    "Ecuaciones: H₂O + CO₂ + luz → CH₂O + O₂; global: 6CO₂ + 6H₂O + luz → C₆H₁₂O₆ + 6O₂.",
    "Productos: glucosa (energía/estructura) y O₂ (respiración de la biosfera).",
];

/// Review bullets shown under the ecosystem explorer.
pub const EXPLORER_SUMMARY: &[&str] = &[
    "¿Qué es un ecosistema? Comunidad de seres vivos + entorno físico que interactúan como unidad.",
    "Biótico: plantas, animales, hongos, bacterias. Abiótico: luz, agua, temperatura, suelo, aire.",
    "Por ambiente: Terrestres, Acuáticos (marinos y dulceacuícolas), Subterráneos, Urbanos.",
    "Por origen: Naturales (pocos cambios humanos) vs. Antrópicos (ciudades, cultivos, presas).",
    "UICN: Clasificación jerárquica que integra estructura y función \
     (Terrestres/Marinos/Dulciacuícolas/Subterráneos).",
    "México: País megadiverso con bosques nublados y templados, selvas húmedas y secas, \
     matorrales, pastizales; costas, manglares, praderas marinas, arrecifes.",
    "Clave: Entender = conservar. La diversidad sostiene el equilibrio natural.",
];

pub static PHOTOSYNTHESIS_RESPIRATION: InfoPage = InfoPage {
    slug: "fotosintesis",
    badge: "3",
    title: "Fotosíntesis y Respiración Celular",
    subtitle: "Un diálogo de la vida — Dra. Karina Morales Ueno",
    footer: Some("Autora del contenido: Dra. Karina Morales Ueno"),
    sections: &[
        Section {
            kicker: None,
            title: "Un viaje por el ciclo de la energía",
            blocks: &[Block::Paragraph(
                "La vida en la Tierra depende de un ciclo energético sostenido por dos procesos \
                 complementarios: fotosíntesis y respiración celular. Aunque parecen opuestos, \
                 forman un diálogo bioquímico que mantiene el equilibrio de los ecosistemas y \
                 permite que la energía fluya desde el Sol hacia todos los seres vivos.",
            )],
        },
        Section {
            kicker: Some("Cloroplastos • Plantas, algas y algunas bacterias"),
            title: "Fotosíntesis: fabricar energía almacenada",
            blocks: &[
                Block::Cards(&[
                    InfoCard {
                        title: "Absorción de luz",
                        body: "Los pigmentos de clorofila capturan la energía luminosa en los \
                               tilacoides de los cloroplastos.",
                    },
                    InfoCard {
                        title: "Captación de materiales",
                        body: "La planta incorpora agua (H₂O) por raíces y CO₂ a través de los \
                               estomas.",
                    },
                    InfoCard {
                        title: "Transformación química",
                        body: "Reacciones luminosas y del Ciclo de Calvin convierten insumos en \
                               glucosa; se libera O₂ como subproducto.",
                    },
                ]),
                Block::Equation("6CO₂ + 6H₂O + luz → C₆H₁₂O₆ + 6O₂"),
                Block::Paragraph(
                    "La glucosa producida es una reserva de energía química y base de la cadena \
                     alimenticia: sostiene el crecimiento vegetal, forma celulosa, se almacena \
                     como almidón y nutre a herbívoros y carnívoros.",
                ),
                Block::Bullets(&[
                    "Fase lumínica (tilacoides): fotólisis del agua, gradiente de H⁺, formación \
                     de ATP y NADPH, liberación de O₂.",
                    "Ciclo de Calvin (estroma): fija CO₂ en G3P y regenera RuBP; ~6 vueltas → \
                     1 glucosa.",
                ]),
            ],
        },
        Section {
            kicker: None,
            title: "La glucosa: base de la vida",
            blocks: &[Block::Bullets(&[
                "Permite el crecimiento y desarrollo vegetal.",
                "Se convierte en celulosa (estructura) o se almacena como almidón.",
                "Energía para herbívoros y, en cascada, para carnívoros.",
                "Soporta la diversificación de la vida en la biosfera.",
            ])],
        },
        Section {
            kicker: Some("Mitocondrias • Casi todos los organismos"),
            title: "Respiración celular: aprovechar la energía",
            blocks: &[
                Block::Cards(&[
                    InfoCard {
                        title: "Glucólisis",
                        body: "En el citoplasma, la glucosa se fragmenta liberando una porción de \
                               energía utilizable.",
                    },
                    InfoCard {
                        title: "Ciclo de Krebs",
                        body: "En la matriz mitocondrial, los productos de la glucólisis se \
                               convierten en moléculas de alta energía intermedia.",
                    },
                    InfoCard {
                        title: "Cadena de transporte de electrones",
                        body: "En las crestas mitocondriales se sintetiza ATP, la moneda \
                               energética de la célula.",
                    },
                ]),
                Block::Equation("C₆H₁₂O₆ + 6O₂ → 6CO₂ + 6H₂O + ATP"),
                Block::Bullets(&[
                    "Consume O₂ y utiliza glucosa.",
                    "Produce CO₂, H₂O y ATP de uso inmediato.",
                    "Ocurre de forma continua en prácticamente todas las células.",
                ]),
            ],
        },
        Section {
            kicker: None,
            title: "Una relación circular",
            blocks: &[
                Block::Paragraph(
                    "Energía solar → Fotosíntesis (glucosa + O₂) → Respiración (ATP) → CO₂ + H₂O \
                     al ambiente → el ciclo se renueva.",
                ),
                Block::Paragraph(
                    "Los productos de la fotosíntesis son reactivos de la respiración celular y \
                     viceversa: un equilibrio que sostiene la biosfera.",
                ),
            ],
        },
        Section {
            kicker: None,
            title: "Diferencias clave",
            blocks: &[Block::Table {
                headers: &["Aspecto", "Fotosíntesis", "Respiración celular"],
                rows: &[
                    &["Lugar", "Cloroplastos", "Mitocondrias"],
                    &["Energía", "Captura energía solar", "Libera energía almacenada"],
                    &["Materia prima", "H₂O, CO₂ y luz", "Glucosa y O₂"],
                    &["Productos", "Glucosa y O₂", "CO₂, H₂O y ATP"],
                    &[
                        "Función",
                        "Almacenar energía en glucosa",
                        "Obtener ATP para trabajo celular",
                    ],
                ],
            }],
        },
        Section {
            kicker: None,
            title: "Equilibrio perfecto",
            blocks: &[Block::Paragraph(
                "Sin este intercambio constante de materia y energía —glucosa, oxígeno, dióxido \
                 de carbono y agua— la vida tal como la conocemos no existiría. Fotosíntesis y \
                 respiración celular son dos caras de una misma moneda evolutiva que sostiene la \
                 estabilidad ecológica del planeta.",
            )],
        },
    ],
};

pub static PHOTOSYNTHESIS_ORGANISMS: InfoPage = InfoPage {
    slug: "fotosintesis-4",
    badge: "1",
    title: "La Fotosíntesis: La Magia Verde de la Vida",
    subtitle: "Organismos fotosintéticos y su función",
    footer: None,
    sections: &[
        Section {
            kicker: None,
            title: "¿Qué es la fotosíntesis?",
            blocks: &[Block::Paragraph(
                "La fotosíntesis es el proceso mediante el cual plantas, algas y algunas \
                 bacterias transforman la luz solar en energía química. Es como una \"fábrica de \
                 alimentos\" que produce glucosa y oxígeno, sosteniendo casi toda la vida en la \
                 Tierra.",
            )],
        },
        Section {
            kicker: Some("Ejemplos y funciones"),
            title: "Organismos fotosintéticos: los protagonistas",
            blocks: &[Block::Cards(&[
                InfoCard {
                    title: "Plantas verdes",
                    body: "Ejemplo: árboles, pasto, flores. Función: producen oxígeno y glucosa, \
                           sirven de base para las cadenas alimenticias terrestres.",
                },
                InfoCard {
                    title: "Algas",
                    body: "Ejemplo: algas verdes, rojas, pardas. Función: responsables de gran \
                           parte del oxígeno en océanos, sostienen ecosistemas marinos.",
                },
                InfoCard {
                    title: "Bacterias fotosintéticas",
                    body: "Ejemplo: cianobacterias. Función: pioneras en la fotosíntesis hace \
                           miles de millones de años, enriquecieron la atmósfera con oxígeno.",
                },
            ])],
        },
        Section {
            kicker: None,
            title: "Clorofila: el pigmento mágico",
            blocks: &[Block::Bullets(&[
                "Clorofila A: pigmento principal, convierte luz en energía química.",
                "Clorofila B: pigmento accesorio que amplía el rango de luz absorbida.",
            ])],
        },
        Section {
            kicker: None,
            title: "La fábrica celular: cloroplastos",
            blocks: &[Block::Paragraph(
                "Los cloroplastos son organelos donde ocurre la fotosíntesis. Contienen \
                 tilacoides con clorofila y grana que maximizan la captación de luz. En el \
                 estroma sucede el Ciclo de Calvin, donde se sintetiza glucosa.",
            )],
        },
        Section {
            kicker: None,
            title: "Etapas de la fotosíntesis",
            blocks: &[
                Block::Cards(&[
                    InfoCard {
                        title: "Fase luminosa",
                        body: "Ocurre en los tilacoides. Se absorbe luz solar y se divide el \
                               agua. Se libera oxígeno (O₂). Se producen ATP y NADPH.",
                    },
                    InfoCard {
                        title: "Fase oscura (Ciclo de Calvin)",
                        body: "Ocurre en el estroma. Usa ATP y NADPH para fijar CO₂. Forma G3P, \
                               precursor de la glucosa. Regenera RuBP para continuar el ciclo.",
                    },
                ]),
                Block::Bullets(&[
                    "ATP: batería celular que impulsa procesos.",
                    "NADPH: transportador de electrones, clave para reducir CO₂ en la fase \
                     oscura.",
                ]),
            ],
        },
        Section {
            kicker: None,
            title: "El citocromo: puente vital",
            blocks: &[Block::Paragraph(
                "Son proteínas que transportan electrones en la fase luminosa. Ayudan a bombear \
                 protones dentro de los tilacoides, creando el gradiente que permite formar ATP.",
            )],
        },
        Section {
            kicker: None,
            title: "La fotosíntesis: motor de la vida",
            blocks: &[Block::Paragraph(
                "La fotosíntesis no solo produce alimento y oxígeno, también mantiene el \
                 equilibrio ecológico. Sin ella, la vida en la Tierra no existiría tal como la \
                 conocemos.",
            )],
        },
    ],
};

pub static PHOTOSYNTHETIC_PRODUCTION: InfoPage = InfoPage {
    slug: "produccion-fotosintetica",
    badge: "4",
    title: "Producción Fotosintética",
    subtitle: "Factores determinantes — Material educativo",
    footer: Some("Autor del contenido: Dra. Karina Morales Ueno"),
    sections: &[
        Section {
            kicker: None,
            title: "Producción Fotosintética",
            blocks: &[
                Block::Paragraph(
                    "La fotosíntesis es un proceso bioquímico extraordinario que constituye el \
                     pilar fundamental de la vida en nuestro planeta, ya que tiene la capacidad \
                     de transformar la energía solar en energía química. Este mecanismo esencial \
                     permite que las plantas, algas y algunas bacterias utilicen la luz del sol \
                     como combustible para sintetizar su propio alimento, lo cual, a su vez, \
                     sustenta la existencia de prácticamente todos los demás seres vivos. La \
                     eficiencia de este proceso no es constante, sino que está influenciada y \
                     modulada por una serie de factores ambientales y fisiológicos.",
                ),
                Block::Equation("6CO₂ + 6H₂O + luz → C₆H₁₂O₆ + 6O₂"),
                Block::Paragraph(
                    "Esto significa que, a partir de dióxido de carbono, agua y energía lumínica, \
                     las plantas producen glucosa —una molécula de azúcar que actúa como fuente \
                     de energía— y oxígeno como subproducto, un gas indispensable para la \
                     respiración de la mayoría de los organismos aerobios.",
                ),
            ],
        },
        Section {
            kicker: None,
            title: "Factores que afectan la producción fotosintética",
            blocks: &[Block::Cards(&[
                InfoCard {
                    title: "Disponibilidad de luz",
                    body: "La luz es un factor limitante crucial: importan la intensidad \
                           lumínica, la duración de la exposición y la calidad espectral. Las \
                           longitudes de onda de la luz roja y azul son las más efectivas, \
                           mientras que la luz verde es mayormente reflejada, lo que explica por \
                           qué la mayoría de las hojas son de este color.",
                },
                InfoCard {
                    title: "Concentración de CO₂",
                    body: "El dióxido de carbono es materia prima esencial para construir \
                           carbohidratos. Un aumento en su concentración puede impulsar una tasa \
                           fotosintética más elevada si luz y agua no son limitantes; por eso en \
                           invernaderos se enriquece artificialmente el CO₂.",
                },
                InfoCard {
                    title: "Temperatura",
                    body: "La temperatura modula la actividad enzimática: a temperaturas bajas \
                           el proceso se ralentiza y las altas pueden desnaturalizar las enzimas. \
                           Las plantas templadas rinden entre 20 y 30 °C; las tropicales toleran \
                           rangos más altos.",
                },
                InfoCard {
                    title: "Agua y nutrientes",
                    body: "El agua es un reactivo directo; una sequía reduce drásticamente la \
                           capacidad fotosintética. El nitrógeno es crucial para la clorofila, el \
                           fósforo para el ATP y el magnesio es el átomo central de la molécula \
                           de clorofila.",
                },
            ])],
        },
        Section {
            kicker: None,
            title: "Importancia de la producción fotosintética",
            blocks: &[
                Block::Paragraph(
                    "La fotosíntesis no solo es vital para la supervivencia de las plantas, sino \
                     que es el cimiento de todas las cadenas alimenticias terrestres. Los \
                     carbohidratos producidos por las plantas alimentan a los herbívoros, quienes \
                     a su vez son consumidos por los carnívoros. Además, desempeña un papel \
                     crucial en la estabilidad climática al liberar oxígeno a la atmósfera y \
                     fijar el dióxido de carbono.",
                ),
                Block::Paragraph(
                    "Sin la producción fotosintética, la biosfera tal como la conocemos \
                     colapsaría. Los niveles de oxígeno atmosférico caerían drásticamente y la \
                     mayoría de los organismos, incluidos los humanos, no tendrían una fuente de \
                     energía sostenible. La fotosíntesis es el motor biológico que mantiene \
                     activo y en equilibrio al planeta Tierra.",
                ),
            ],
        },
    ],
};

pub static SOLAR_ENERGY: InfoPage = InfoPage {
    slug: "energia-solar",
    badge: "5",
    title: "Energía Solar",
    subtitle: "De la energía solar a las cadenas alimenticias",
    footer: Some("Autor del contenido: Dra. Karina Morales Ueno"),
    sections: &[
        Section {
            kicker: None,
            title: "La Energía Solar como Base de la Vida",
            blocks: &[Block::Paragraph(
                "La energía solar es el origen de casi toda la vida en la Tierra. Sin la \
                 radiación proveniente del Sol, los ecosistemas no tendrían la capacidad de \
                 generar materia orgánica que alimente a los organismos vivos. Es, en esencia, \
                 la \"moneda energética\" que sostiene todos los procesos biológicos.",
            )],
        },
        Section {
            kicker: Some("Del Sol a la Cadena Alimenticia"),
            title: "Productores y el inicio de la cadena",
            blocks: &[Block::Cards(&[
                InfoCard {
                    title: "Los Productores y la Fotosíntesis",
                    body: "Los organismos productores, como plantas, algas y algunas bacterias, \
                           captan la energía solar mediante pigmentos como la clorofila. Gracias \
                           a la fotosíntesis, convierten la luz en energía química almacenada en \
                           carbohidratos, base del alimento para los niveles tróficos superiores.",
                },
                InfoCard {
                    title: "La Dinámica del Flujo Energético",
                    body: "Este flujo no es lineal sino una red compleja de interacciones. La \
                           energía se dispersa a medida que los organismos se mueven, se \
                           reproducen o respiran: nunca toda la energía de un nivel trófico pasa \
                           íntegramente al siguiente.",
                },
            ])],
        },
        Section {
            kicker: None,
            title: "La Pirámide de Energía",
            blocks: &[Block::Paragraph(
                "En cada transferencia, aproximadamente el 90% de la energía se pierde en forma \
                 de calor metabólico. Solo un 10% se conserva y se transfiere. Por ello, las \
                 pirámides de energía muestran bases muy amplias en los productores y cúspides \
                 estrechas en los depredadores tope. Esta estructura limita el número de \
                 organismos que pueden sobrevivir en los niveles superiores.",
            )],
        },
        Section {
            kicker: Some("Ejemplo en los Bosques de Kelp"),
            title: "Implicaciones en los Ecosistemas",
            blocks: &[Block::Cards(&[
                InfoCard {
                    title: "Implicaciones Generales",
                    body: "La pérdida energética determina la organización y estabilidad de los \
                           ecosistemas. Explica por qué existen más herbívoros que carnívoros y \
                           por qué los depredadores tope suelen ser escasos.",
                },
                InfoCard {
                    title: "Ejemplo en los Bosques de Kelp",
                    body: "En Ensenada, Baja California, los bosques de kelp realizan \
                           fotosíntesis en aguas costeras frías, produciendo biomasa que sostiene \
                           a peces, erizos y moluscos, y a los mamíferos marinos que se alimentan \
                           de ellos.",
                },
            ])],
        },
        Section {
            kicker: None,
            title: "Conclusión: El Motor de la Vida",
            blocks: &[Block::Paragraph(
                "La energía solar no solo ilumina y calienta el planeta: también es el motor \
                 invisible que impulsa las cadenas alimenticias. Desde un bosque terrestre hasta \
                 un ecosistema marino, la historia siempre es la misma: la luz se convierte en \
                 vida, y esa vida alimenta a otras, en un ciclo interminable que sostiene la \
                 biodiversidad.",
            )],
        },
    ],
};

pub static BIOMES: InfoPage = InfoPage {
    slug: "biomas",
    badge: "6",
    title: "Biomas",
    subtitle: "Diversidad ecológica y características principales",
    footer: Some(
        "Lifeder. (5 de enero de 2021). Los 10 Biomas de México y sus Características. \
         lifeder.com/biomas-mexico/",
    ),
    sections: &[
        Section {
            kicker: None,
            title: "¿Qué es un Bioma?",
            blocks: &[
                Block::Paragraph(
                    "Un bioma es una gran unidad ecológica que agrupa ecosistemas con clima, \
                     suelo, flora y fauna semejantes. Estas unidades representan las principales \
                     comunidades terrestres del planeta.",
                ),
                Block::Paragraph(
                    "Los biomas se caracterizan por tener patrones climáticos distintivos que \
                     determinan los tipos de organismos que pueden vivir en ellos.",
                ),
            ],
        },
        Section {
            kicker: None,
            title: "Características Clave",
            blocks: &[Block::Bullets(&[
                "Clima similar",
                "Suelos comparables",
                "Flora adaptada",
                "Fauna especializada",
            ])],
        },
        Section {
            kicker: None,
            title: "Principales Biomas del Planeta",
            blocks: &[Block::Cards(&[
                InfoCard {
                    title: "Selva Tropical",
                    body: "Alta biodiversidad, lluvias constantes, temperaturas cálidas todo el \
                           año.",
                },
                InfoCard {
                    title: "Desierto",
                    body: "Baja precipitación, adaptaciones a la sequía, temperaturas extremas.",
                },
                InfoCard {
                    title: "Pradera o Sabana",
                    body: "Dominio de pastos, herbívoros abundantes, precipitación moderada.",
                },
                InfoCard {
                    title: "Bosque Templado",
                    body: "Estaciones marcadas, diversidad moderada, árboles caducifolios.",
                },
                InfoCard {
                    title: "Tundra",
                    body: "Bajas temperaturas, suelos congelados, vegetación baja.",
                },
            ])],
        },
        Section {
            kicker: None,
            title: "Actividad Práctica en Clase",
            blocks: &[Block::Cards(&[
                InfoCard {
                    title: "Observar",
                    body: "Analicen las características climáticas y vegetación de cada imagen.",
                },
                InfoCard {
                    title: "Clasificar",
                    body: "Identifiquen el bioma correspondiente basándose en los patrones \
                           observados.",
                },
                InfoCard {
                    title: "Ejemplificar",
                    body: "Mencionen una especie representativa de cada bioma.",
                },
            ])],
        },
        Section {
            kicker: None,
            title: "Pradera o Sabana: Ecosistema de Pastizales",
            blocks: &[
                Block::Paragraph(
                    "Vastas extensiones de pastizales, con árboles dispersos en sabanas. \
                     Cruciales para herbívoros y depredadores, con papel en el ciclo global del \
                     carbono.",
                ),
                Block::Bullets(&[
                    "Clima Estacional: Alternancia de temporadas secas y lluviosas.",
                    "Vegetación: Pastizales adaptados al fuego y herbívoros.",
                    "Fauna: Cebras, ñus, bisontes, leones y lobos.",
                ]),
            ],
        },
        Section {
            kicker: None,
            title: "Bosque Templado: Ecosistema de Cuatro Estaciones",
            blocks: &[
                Block::Paragraph(
                    "Biomas con estaciones bien definidas, dominados por árboles caducifolios en \
                     latitudes medias.",
                ),
                Block::Bullets(&[
                    "Clima: Cuatro estaciones, lluvias moderadas.",
                    "Árboles: Robles, arces, hayas.",
                    "Fauna: Ciervos, osos, zorros, aves e insectos.",
                ]),
            ],
        },
        Section {
            kicker: None,
            title: "Desierto: Ecosistema de Extremos Áridos",
            blocks: &[
                Block::Paragraph(
                    "Reciben muy pocas precipitaciones, con gran variación térmica entre día y \
                     noche.",
                ),
                Block::Bullets(&[
                    "Baja Precipitación: Menos de 250 mm anuales.",
                    "Temperaturas: Días calurosos y noches frías.",
                    "Adaptaciones: Flora y fauna especializadas en conservar agua.",
                ]),
            ],
        },
        Section {
            kicker: None,
            title: "Selva Tropical: Ecosistema de Vida Exuberante",
            blocks: &[
                Block::Paragraph(
                    "Clima cálido y húmedo constante, con lluvias abundantes durante todo el año. \
                     Es el bioma más biodiverso del planeta.",
                ),
                Block::Bullets(&[
                    "Estructura Vertical: Diversos estratos de vegetación.",
                    "Ciclo del Agua: Alta evaporación y transpiración.",
                    "Consideradas los \"pulmones del planeta\".",
                ]),
            ],
        },
        Section {
            kicker: None,
            title: "Tundra: El Ecosistema de Frío Extremo",
            blocks: &[
                Block::Paragraph(
                    "Presente en regiones árticas y montañosas, caracterizada por suelos \
                     congelados y vegetación baja.",
                ),
                Block::Bullets(&[
                    "Permafrost: Suelo permanentemente congelado.",
                    "Clima: Inviernos largos, veranos cortos y frescos.",
                    "Flora: Musgos, líquenes y arbustos enanos.",
                ]),
            ],
        },
    ],
};

/// All informational pages, in the order they are listed on the map.
pub static ALL_PAGES: [&InfoPage; 5] = [
    &PHOTOSYNTHESIS_RESPIRATION,
    &PHOTOSYNTHESIS_ORGANISMS,
    &PHOTOSYNTHETIC_PRODUCTION,
    &SOLAR_ENERGY,
    &BIOMES,
];

/// Finds a page by its path slug.
#[must_use]
pub fn page_by_slug(slug: &str) -> Option<&'static InfoPage> {
    ALL_PAGES.iter().find(|p| p.slug == slug).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_slugs_are_unique() {
        for (i, page) in ALL_PAGES.iter().enumerate() {
            assert!(
                !ALL_PAGES[i + 1..].iter().any(|p| p.slug == page.slug),
                "duplicate slug {}",
                page.slug
            );
        }
    }

    #[test]
    fn test_page_lookup_by_slug() {
        assert_eq!(page_by_slug("biomas").map(|p| p.title), Some("Biomas"));
        assert!(page_by_slug("quimica").is_none());
    }

    #[test]
    fn test_pages_are_nonempty() {
        for page in ALL_PAGES {
            assert!(!page.sections.is_empty(), "{} has no sections", page.slug);
            for section in page.sections {
                assert!(
                    !section.blocks.is_empty(),
                    "{}: empty section {}",
                    page.slug,
                    section.title
                );
            }
        }
    }

    #[test]
    fn test_phase_panels() {
        assert_eq!(LIGHT_PHASE.location, "tilacoides");
        assert_eq!(DARK_PHASE.location, "estroma");
        assert!(!LIGHT_PHASE.lines.is_empty());
        assert!(!DARK_PHASE.lines.is_empty());
    }
}
