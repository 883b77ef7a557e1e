//! Built-in micro-skill catalog, seeded into the database at first open.

use crate::category::Category;
use crate::skills::Skill;

fn skill(id: &str, category: Category, text: &str) -> Skill {
    Skill {
        id: id.to_string(),
        category,
        text: text.to_string(),
    }
}

/// The twenty starter skills.
pub fn builtin_catalog() -> Vec<Skill> {
    use Category::{Builder, Connector, Creator, Thinker};
    vec![
        skill("skill_001", Thinker, "Spend 15 minutes analyzing a complex problem in your life or work."),
        skill("skill_002", Builder, "Build a small prototype of a new idea you have."),
        skill("skill_003", Thinker, "Read an article about a topic you know nothing about."),
        skill("skill_004", Builder, "Write a small script to automate a repetitive task."),
        skill("skill_005", Builder, "Organize a section of your workspace for better efficiency."),
        skill("skill_006", Creator, "Sketch or design a logo for a fictional company."),
        skill("skill_007", Creator, "Write a short story or a poem."),
        skill("skill_008", Creator, "Brainstorm 10 unconventional uses for a common object."),
        skill("skill_009", Creator, "Create a playlist of music that inspires you."),
        skill("skill_010", Thinker, "Watch a documentary on a historical event."),
        skill("skill_011", Thinker, "Learn 5 new words in a foreign language."),
        skill("skill_012", Thinker, "Do a puzzle or play a strategy game."),
        skill("skill_013", Thinker, "Meditate for 10 minutes to clear your mind."),
        skill("skill_014", Thinker, "Plan your week ahead, setting clear goals."),
        skill("skill_015", Thinker, "Fact-check a news story you recently read."),
        skill("skill_016", Connector, "Reach out to a friend you haven't spoken to in a while."),
        skill("skill_017", Connector, "Post a helpful comment on a blog or social media post."),
        skill("skill_018", Connector, "Introduce two people you know who could benefit from meeting each other."),
        skill("skill_019", Connector, "Practice active listening in your next conversation."),
        skill("skill_020", Connector, "Share an interesting article or video with a friend."),
    ]
}
