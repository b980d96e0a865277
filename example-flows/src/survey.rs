use prelaunch_types::{Choice, Question, Section};

fn interest() -> Section {
    Section::new("Interest & Usage", 1, 4)
}

fn features() -> Section {
    Section::new("Feature Requests", 2, 4)
}

fn fit() -> Section {
    Section::new("Problem-Solution Fit", 3, 4)
}

fn about_you() -> Section {
    Section::new("About You", 4, 4)
}

/// The full ThriveSpace pre-launch survey: 11 questions across 4 sections,
/// with one exact-count multi-select ("pick exactly 2 features").
pub fn thrivespace_survey() -> Vec<Question> {
    vec![
        Question::single(
            "social_frustration",
            "How frustrated are you with toxic and negative contents on Instagram and Facebook?",
            interest(),
            vec![
                Choice::new("extremely", "Extremely frustrated")
                    .with_description("I actively avoid them")
                    .with_icon("😤"),
                Choice::new("very", "Very frustrated")
                    .with_description("It affects my motivation")
                    .with_icon("😔"),
                Choice::new("somewhat", "Somewhat frustrated")
                    .with_description("I notice the negativity")
                    .with_icon("😐"),
                Choice::new("not_really", "Not really frustrated")
                    .with_description("I can filter it out")
                    .with_icon("🤷"),
                Choice::new("not_at_all", "Not frustrated at all")
                    .with_description("I don't see this as an issue")
                    .with_icon("😊"),
            ],
        ),
        Question::single(
            "platform_interest",
            "Would you join a wellness platform that prioritizes community over likes?",
            interest(),
            vec![
                Choice::new("definitely_yes", "Definitely yes!")
                    .with_description("I've been looking for this")
                    .with_icon("🌟"),
                Choice::new("probably_yes", "Probably yes")
                    .with_description("Sounds appealing")
                    .with_icon("👍"),
                Choice::new("maybe", "Maybe")
                    .with_description("Depends on execution")
                    .with_icon("🤔"),
                Choice::new("probably_not", "Probably not")
                    .with_description("Happy with current platforms")
                    .with_icon("👎"),
            ],
        ),
        Question::single(
            "app_likelihood",
            "How likely would you use an app combining social + wellness tracking + trainer access?",
            interest(),
            vec![
                Choice::new("extremely", "Extremely likely")
                    .with_description("Would use daily")
                    .with_icon("📱"),
                Choice::new("very", "Very likely")
                    .with_description("Would use regularly")
                    .with_icon("💪"),
                Choice::new("somewhat", "Somewhat likely")
                    .with_description("Would try it out")
                    .with_icon("🔍"),
                Choice::new("not_very", "Not very likely")
                    .with_description("Might check occasionally")
                    .with_icon("👀"),
            ],
        ),
        Question::single(
            "learning_engagement",
            "If ThriveSpace offered structured learning programs (yoga, nutrition, mental wellness), how often would you engage?",
            interest(),
            vec![
                Choice::new("daily", "Daily")
                    .with_description("Actively learning new skills")
                    .with_icon("📚"),
                Choice::new("several_times_week", "Several times per week")
                    .with_description("Enjoy structured learning")
                    .with_icon("🎯"),
                Choice::new("weekly", "Weekly")
                    .with_description("When I have time to focus")
                    .with_icon("⏰"),
                Choice::new("monthly", "Monthly")
                    .with_description("Occasionally interested")
                    .with_icon("🌙"),
                Choice::new("rarely", "Rarely")
                    .with_description("Prefer to learn elsewhere")
                    .with_icon("🤷"),
            ],
        ),
        Question::multi_exact(
            "valuable_features",
            "Which 2 features would be most valuable to you? (Select exactly 2)",
            2,
            features(),
            vec![
                Choice::new("ai_recommendations", "AI-powered recommendations")
                    .with_description("Personalized workout and nutrition")
                    .with_icon("🤖"),
                Choice::new("live_classes", "Live group fitness classes")
                    .with_description("Workshops with certified trainers")
                    .with_icon("🎥"),
                Choice::new("challenges", "Wellness challenges")
                    .with_description("Competitions with real rewards")
                    .with_icon("🏆"),
                Choice::new("mental_health", "Mental health support")
                    .with_description("Anonymous groups and counseling")
                    .with_icon("🧠"),
            ],
        ),
        Question::single(
            "engaging_content",
            "What content would engage you most in a wellness community?",
            features(),
            vec![
                Choice::new("transformation_stories", "Transformation stories")
                    .with_description("Real user progress celebrations")
                    .with_icon("⭐"),
                Choice::new("expert_content", "Expert-led education")
                    .with_description("Nutrition tips, exercise techniques")
                    .with_icon("👨‍⚕️"),
                Choice::new("community_challenges", "Community challenges")
                    .with_description("Group accountability programs")
                    .with_icon("👥"),
                Choice::new("mindfulness", "Mindfulness resources")
                    .with_description("Meditation, stress management")
                    .with_icon("🧘"),
            ],
        ),
        Question::single(
            "biggest_frustration",
            "What's your biggest frustration with existing fitness apps/platforms?",
            fit(),
            vec![
                Choice::new("appearance_focused", "Too focused on appearance")
                    .with_description("Rather than overall health")
                    .with_icon("👁️"),
                Choice::new("lack_community", "Lack of genuine community")
                    .with_description("No meaningful connections")
                    .with_icon("💔"),
                Choice::new("toxic_culture", "Toxic comparison culture")
                    .with_description("Unrealistic body standards")
                    .with_icon("☠️"),
                Choice::new("motivation_issues", "Staying motivated")
                    .with_description("Difficulty with accountability")
                    .with_icon("😞"),
            ],
        ),
        Question::single(
            "solution_fit",
            "How well would ThriveSpace solve your wellness & social media challenges?",
            fit(),
            vec![
                Choice::new("perfectly", "Perfectly")
                    .with_description("Addresses all my concerns")
                    .with_icon("🎯"),
                Choice::new("very_well", "Very well")
                    .with_description("Would solve most problems")
                    .with_icon("✅"),
                Choice::new("somewhat_well", "Somewhat well")
                    .with_description("Would help with some issues")
                    .with_icon("👍"),
                Choice::new("unsure", "Unsure")
                    .with_description("Need to see it in action first")
                    .with_icon("🤷"),
            ],
        ),
        Question::single(
            "age_range",
            "What's your age range?",
            about_you(),
            vec![
                Choice::new("18-24", "18-24"),
                Choice::new("25-34", "25-34"),
                Choice::new("35-44", "35-44"),
                Choice::new("45-54", "45-54"),
                Choice::new("55+", "55+"),
            ],
        ),
        Question::single(
            "info_source",
            "How do you currently find fitness and wellness information?",
            about_you(),
            vec![
                Choice::new("social_media", "Social media")
                    .with_description("Instagram, TikTok, YouTube")
                    .with_icon("📱"),
                Choice::new("apps_websites", "Apps and websites")
                    .with_description("Fitness apps, wellness sites")
                    .with_icon("💻"),
                Choice::new("professionals", "Fitness professionals")
                    .with_description("Personal trainers, coaches")
                    .with_icon("🏋️"),
                Choice::new("friends_family", "Friends and family")
                    .with_description("Personal recommendations")
                    .with_icon("👥"),
                Choice::new("traditional_media", "Traditional media")
                    .with_description("Books, magazines, TV")
                    .with_icon("📚"),
                Choice::new("medical_professionals", "Medical professionals")
                    .with_description("Healthcare providers")
                    .with_icon("🏥"),
            ],
        ),
        Question::single(
            "wellness_goal",
            "What's your primary wellness goal for the next 12 months?",
            about_you(),
            vec![
                Choice::new("weight_loss", "Weight loss")
                    .with_description("Body composition improvement")
                    .with_icon("⚖️"),
                Choice::new("strength_building", "Building strength")
                    .with_description("Muscle mass development")
                    .with_icon("💪"),
                Choice::new("mental_health", "Mental health")
                    .with_description("Stress management improvement")
                    .with_icon("🧠"),
                Choice::new("maintaining_health", "Maintaining health")
                    .with_description("Preventing illness")
                    .with_icon("🏥"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn survey_has_eleven_questions_in_four_sections() {
        let survey = thrivespace_survey();
        assert_eq!(survey.len(), 11);
        assert_eq!(survey.last().unwrap().section().total(), 4);
    }

    #[test]
    fn question_ids_are_unique() {
        let survey = thrivespace_survey();
        let mut ids: Vec<&str> = survey.iter().map(Question::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), survey.len());
    }

    #[test]
    fn the_feature_question_requires_exactly_two() {
        let survey = thrivespace_survey();
        let question = survey
            .iter()
            .find(|q| q.id() == "valuable_features")
            .unwrap();
        assert_eq!(question.kind().max_selections(), Some(2));
    }
}
