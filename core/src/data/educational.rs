//! Time Academy content tables.

/// One lesson entry
pub struct Lesson {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub difficulty: &'static str,
}

/// One quiz entry. Locked quizzes name the points needed to unlock them.
pub struct Quiz {
    pub id: &'static str,
    pub title: &'static str,
    pub questions: u32,
    pub points: u32,
    pub locked: bool,
    pub required_points: Option<u32>,
}

pub static LESSONS: &[Lesson] = &[
    Lesson {
        id: "1",
        title: "Rise and Fall of Ancient Civilizations",
        description: "Explore how great empires emerged and eventually declined throughout \
                      history",
        duration: "15 min",
        difficulty: "Beginner",
    },
    Lesson {
        id: "2",
        title: "Climate Change Through the Ages",
        description: "Understanding Earth's climate patterns from ice ages to global warming",
        duration: "20 min",
        difficulty: "Intermediate",
    },
    Lesson {
        id: "3",
        title: "Architecture Evolution",
        description: "From ancient pyramids to futuristic skyscrapers - the story of human \
                      construction",
        duration: "18 min",
        difficulty: "Beginner",
    },
    Lesson {
        id: "4",
        title: "Technology Timeline",
        description: "Major technological breakthroughs that shaped human civilization",
        duration: "25 min",
        difficulty: "Advanced",
    },
    Lesson {
        id: "5",
        title: "Future Cities Prediction",
        description: "How AI and climate science predict our urban future",
        duration: "22 min",
        difficulty: "Intermediate",
    },
];

pub static QUIZZES: &[Quiz] = &[
    Quiz {
        id: "1",
        title: "Ancient World Basics",
        questions: 10,
        points: 50,
        locked: false,
        required_points: None,
    },
    Quiz {
        id: "2",
        title: "Medieval Times Challenge",
        questions: 15,
        points: 75,
        locked: false,
        required_points: None,
    },
    Quiz {
        id: "3",
        title: "Industrial Revolution",
        questions: 12,
        points: 60,
        locked: false,
        required_points: None,
    },
    Quiz {
        id: "4",
        title: "Future Predictions Expert",
        questions: 20,
        points: 100,
        locked: true,
        required_points: Some(500),
    },
    Quiz {
        id: "5",
        title: "Time Travel Master",
        questions: 25,
        points: 150,
        locked: true,
        required_points: Some(1000),
    },
];
