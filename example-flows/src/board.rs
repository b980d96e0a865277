use prelaunch_types::Feature;

/// The five features the board is seeded with at launch.
pub fn seeded_features() -> Vec<Feature> {
    vec![
        Feature::new(
            "1",
            "Habit Streaks & Milestones",
            "Visual tracking of daily habits with streak counters and milestone celebrations",
            "Tracking",
            42,
        ),
        Feature::new(
            "2",
            "Community Challenges",
            "Group challenges where teams compete in friendly wellness competitions",
            "Community",
            38,
        ),
        Feature::new(
            "3",
            "Personal Wellness Coach Chat",
            "Direct messaging with certified wellness coaches for personalized guidance",
            "Coaching",
            35,
        ),
        Feature::new(
            "4",
            "Progress Photo Timeline",
            "Private photo timeline to track physical transformation over time",
            "Tracking",
            31,
        ),
        Feature::new(
            "5",
            "Mindfulness & Meditation",
            "Guided meditation sessions and mindfulness exercises integrated with progress",
            "Wellness",
            29,
        ),
    ]
}
