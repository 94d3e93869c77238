//! Landmark catalog.
//!
//! Static reference content shown in the Explore grid and the travel
//! screens. No referential integrity is enforced between travel history
//! records and this table; history keeps its own denormalized names.

/// One landmark entry
pub struct Landmark {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub category: &'static str,
    pub era: &'static str,
    pub image_url: &'static str,
    pub description: &'static str,
    pub rating: f32,
    pub historical_facts: &'static [&'static str],
    pub future_predictions: &'static [&'static str],
}

/// Category filter chips shown on the Explore tab.
pub static CATEGORIES: &[&str] = &["All", "Ancient", "Modern", "Natural", "Religious", "Urban"];

pub static LANDMARKS: &[Landmark] = &[
    Landmark {
        id: "1",
        name: "Kaaba",
        location: "Makkah, Saudi Arabia",
        category: "Religious",
        era: "Ancient",
        image_url: "https://images.unsplash.com/photo-1591604129939-f1efa4d9f7fa?w=800",
        description: "The most sacred site in Islam, the Kaaba is a cuboid building at the \
                      center of Islam's most important mosque, the Masjid al-Haram.",
        rating: 5.0,
        historical_facts: &[
            "Built by Prophet Ibrahim (Abraham) and his son Ismail around 2000 BCE",
            "Has been rebuilt several times throughout history",
            "The Black Stone dates back to the time of Adam and Eve",
        ],
        future_predictions: &[
            "Advanced crowd management with AI-powered systems",
            "Holographic guidance for pilgrims",
            "Climate-controlled expanded prayer areas",
        ],
    },
    Landmark {
        id: "2",
        name: "Pyramids of Giza",
        location: "Cairo, Egypt",
        category: "Ancient",
        era: "Ancient",
        image_url: "https://images.unsplash.com/photo-1539650116574-8efeb43e2750?w=800",
        description: "The last surviving wonder of the ancient world, built as tombs for \
                      pharaohs over 4,500 years ago.",
        rating: 4.9,
        historical_facts: &[
            "Built around 2560 BCE during the Fourth Dynasty",
            "Originally covered in smooth white limestone",
            "Aligned precisely with cardinal directions",
        ],
        future_predictions: &[
            "Underground chambers revealed by quantum scanning",
            "Protective energy shields against erosion",
            "Virtual time-travel experiences inside pyramids",
        ],
    },
    Landmark {
        id: "3",
        name: "Colosseum",
        location: "Rome, Italy",
        category: "Ancient",
        era: "Classical",
        image_url: "https://images.unsplash.com/photo-1552832230-c0197dd311b5?w=800",
        description: "The largest amphitheatre ever built, a symbol of Imperial Rome's power \
                      and engineering prowess.",
        rating: 4.8,
        historical_facts: &[
            "Completed in 80 AD under Emperor Titus",
            "Could hold 50,000 to 80,000 spectators",
            "Featured elaborate underground passages and elevators",
        ],
        future_predictions: &[
            "Fully restored with self-healing materials",
            "Holographic gladiator shows",
            "Anti-gravity viewing platforms",
        ],
    },
    Landmark {
        id: "4",
        name: "Eiffel Tower",
        location: "Paris, France",
        category: "Modern",
        era: "Industrial",
        image_url: "https://images.unsplash.com/photo-1511739001486-6bfe10ce785f?w=800",
        description: "Iron lattice tower built in 1889, became a global cultural icon of \
                      France.",
        rating: 4.7,
        historical_facts: &[
            "Built for the 1889 World's Fair",
            "Was the world's tallest structure until 1930",
            "Originally intended to be temporary",
        ],
        future_predictions: &[
            "Solar panel coating generating city power",
            "Vertical gardens and air purification systems",
            "Teleportation hub at the top",
        ],
    },
    Landmark {
        id: "5",
        name: "Statue of Liberty",
        location: "New York, USA",
        category: "Modern",
        era: "Industrial",
        image_url: "https://images.unsplash.com/photo-1503572327579-b5c6afe5c5c5?w=800",
        description: "A symbol of freedom and democracy, gifted by France to the United \
                      States in 1886.",
        rating: 4.6,
        historical_facts: &[
            "Designed by Frédéric Auguste Bartholdi",
            "Internal structure by Gustave Eiffel",
            "Copper statue turned green due to oxidation",
        ],
        future_predictions: &[
            "Rising sea walls protecting from climate change",
            "Interactive holographic museum inside",
            "Energy-generating torch powering Manhattan",
        ],
    },
    Landmark {
        id: "6",
        name: "Taj Mahal",
        location: "Agra, India",
        category: "Religious",
        era: "Medieval",
        image_url: "https://images.unsplash.com/photo-1564507592333-c60657eea523?w=800",
        description: "A white marble mausoleum built by Mughal emperor Shah Jahan in memory \
                      of his wife Mumtaz Mahal.",
        rating: 4.9,
        historical_facts: &[
            "Built between 1632 and 1653",
            "Combines Islamic, Persian, and Indian architecture",
            "Changes color throughout the day",
        ],
        future_predictions: &[
            "Self-cleaning nano-coating preserving marble",
            "Augmented reality showing original gardens",
            "Atmospheric dome protecting from pollution",
        ],
    },
    Landmark {
        id: "7",
        name: "Great Wall of China",
        location: "Beijing, China",
        category: "Ancient",
        era: "Ancient",
        image_url: "https://images.unsplash.com/photo-1508804185872-d7badad00f7d?w=800",
        description: "A series of fortifications built across the historical northern \
                      borders of ancient Chinese states.",
        rating: 4.8,
        historical_facts: &[
            "Construction began in 7th century BC",
            "Total length over 21,000 kilometers",
            "Visible from space is a myth",
        ],
        future_predictions: &[
            "Solar panel integration along entire length",
            "Maglev transportation system on top",
            "Living wall with vertical forests",
        ],
    },
    Landmark {
        id: "8",
        name: "Burj Khalifa",
        location: "Dubai, UAE",
        category: "Modern",
        era: "Contemporary",
        image_url: "https://images.unsplash.com/photo-1582672060674-bc2bd808a8b5?w=800",
        description: "The world's tallest building, a symbol of Dubai's rapid development \
                      and ambition.",
        rating: 4.7,
        historical_facts: &[
            "Completed in 2010",
            "Stands at 828 meters (2,717 feet)",
            "Has the world's highest observation deck",
        ],
        future_predictions: &[
            "Extended to reach low Earth orbit",
            "Self-sustaining vertical city",
            "Weather control systems at the top",
        ],
    },
];
