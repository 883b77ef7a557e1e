//! Reminder message pool.
//!
//! The nagging texts shown when a user has not completed today's skill.
//! Scheduling and delivery belong to the platform shell; this module only
//! owns the catalog and the pick.

use rand::seq::SliceRandom;

/// The reminder message pool.
pub const MESSAGES: &[&str] = &[
    "Looks like you forgot your daily skill again. You know what happens now...",
    "Don't make me come over there. Your skill is waiting.",
    "Your streak is hanging by a thread. Don't disappoint me.",
    "Psst! That little flame icon is looking awfully sad right now.",
    "I see you. I know you haven't done your skill yet. The clock is ticking.",
    "Are you really going to let a little thing like 'being busy' break your streak?",
    "Your potential is slipping away... along with your streak. Get to it.",
    "I'm not mad, just disappointed. And a little mad.",
    "That skill isn't going to complete itself. Or will it? Let's not find out.",
    "Remember that goal you had? It remembers you.",
    "Your streak is calling for help. Are you going to answer?",
    "Another day, another chance to not let me down.",
    "Is this ghosting? It feels like ghosting.",
    "Don't make me send a search party. Do your skill.",
    "Procrastination is a skill. But not the one you're supposed to be practicing today.",
    "Your streak misses you. And so do I. But mostly the streak.",
    "Do it. Or the happy little flame icon gets it.",
    "The path to success is paved with completed daily skills. Your move.",
    "I believe in you. But my patience is finite.",
    "This is the easiest part of your day. Don't mess it up.",
    "You wouldn't skip leg day, would you? Don't skip skill day.",
    "We had a deal. A skill a day. Remember?",
    "Don't let that streak number go back to zero. Think of the shame.",
    "The future you is begging you to do this.",
    "Your brain is hungry. Feed it a new skill.",
    "Tick-tock. The streak clock is unforgiving.",
    "The only thing standing between you and your goal is opening this app.",
];

/// Pick one reminder uniformly at random.
pub fn random_reminder() -> &'static str {
    MESSAGES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(MESSAGES[0])
}
