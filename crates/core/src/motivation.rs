//! The 30-day motivation program.
//!
//! Each calendar day maps onto one program day, cycling through the
//! program from January 1st.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::CoreError;

/// Number of days in the program.
pub const PROGRAM_LENGTH_DAYS: u8 = 30;

/// Content for one program day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MotivationDay {
    pub day: u8,
    pub affirmation: &'static str,
    pub impulse: &'static str,
    pub task: &'static str,
}

const fn entry(
    day: u8,
    affirmation: &'static str,
    impulse: &'static str,
    task: &'static str,
) -> MotivationDay {
    MotivationDay {
        day,
        affirmation,
        impulse,
        task,
    }
}

static PROGRAM: [MotivationDay; PROGRAM_LENGTH_DAYS as usize] = [
    entry(1, "Today is a fresh start. I choose myself and my health.", "Begin your journey deliberately. Small steps count.", "Write down why you want to lose weight."),
    entry(2, "I trust that every small step forward counts.", "Focus on consistency, not perfection.", "Drink 2 litres of water today, spread across the day."),
    entry(3, "I am stronger than any temptation.", "Self-discipline is self-love in action.", "Plan your meals for today in advance."),
    entry(4, "My body changes because I treat it with care.", "Mindfulness begins with appreciation.", "Eat one meal today slowly and with full attention."),
    entry(5, "I grow with every challenge.", "Hard days are training for your strength.", "Walk 10 minutes longer than usual today."),
    entry(6, "I am proud of every step I take.", "Success lies in sticking with it, not in speed.", "Write down three things you are proud of this week."),
    entry(7, "I am grateful for my body and its strength.", "Gratitude changes how you see yourself.", "Write down three things you like about your body."),
    entry(8, "I deserve to feel good.", "Self-care is not a reward. It is a necessity.", "Plan a healthy meal today that you really enjoy."),
    entry(9, "I control what I do today, and that is enough.", "Stay in the present. Past and future can rest.", "Do 5 minutes of breathing exercises or meditation."),
    entry(10, "I am changing from the inside out.", "Your mindset is the key to lasting change.", "Write a positive sentence about yourself on the mirror."),
    entry(11, "I let go of old habits that do not serve me.", "Change begins with awareness.", "Replace one unhealthy habit with a better one today."),
    entry(12, "I choose movement that brings me joy.", "Exercise is not an obligation but a gift to yourself.", "Try a new form of exercise today."),
    entry(13, "I am on my own journey, with no comparison to others.", "Your pace is exactly right.", "Spend time offline today, just you and your body."),
    entry(14, "I am patient. Change takes time.", "Allow yourself to grow slowly.", "Do not compare today; celebrate yourself instead."),
    entry(15, "I love myself enough to keep going.", "Self-love shows in actions, not only in words.", "Reward yourself today with something that has nothing to do with food."),
    entry(16, "I am proud of my consistency.", "You are much further along than you think.", "Reflect on your progress: what has improved?"),
    entry(17, "I listen to my body and its needs.", "It sends you signals. Learn to understand them.", "Pay close attention to hunger and fullness today."),
    entry(18, "I am in balance, in body and mind.", "True balance also means allowing yourself breaks.", "Set aside 30 minutes just for yourself today."),
    entry(19, "I am ready to bring out the best in me.", "Your energy follows your attitude.", "Listen to music today that motivates you and lifts your mood."),
    entry(20, "I keep going, even when it gets hard.", "Success is the result of perseverance.", "Remember a moment when you managed something difficult."),
    entry(21, "I celebrate every small win.", "Joy strengthens motivation.", "Write down three successes from last week, however small."),
    entry(22, "I am enough, just as I am.", "Self-acceptance is the foundation of every change.", "Write yourself a kind sentence today."),
    entry(23, "I am focused on my goals.", "Clarity gives you strength.", "Write down your target weight and three reasons why you want it."),
    entry(24, "I enjoy the journey, not only the destination.", "The journey shapes you, not the result alone.", "Do something today that makes you smile."),
    entry(25, "I let go of setbacks and carry on.", "Perfection is not required; consistency is the key.", "Reflect briefly: what can I learn from my last setback?"),
    entry(26, "I nourish my body with love and awareness.", "Food is energy. Treat it mindfully.", "Cook a healthy meal yourself today."),
    entry(27, "I feel my body changing and getting stronger.", "Every movement shapes not only the body but also the mind.", "Do a stretching or yoga session today."),
    entry(28, "I am proud of my journey and my endurance.", "Look back and see how far you have come.", "Compare an old photo or feeling with today and notice your progress."),
    entry(29, "I am becoming the best version of myself.", "You are not on a diet. You are changing your life.", "Write down what you have learned about yourself."),
    entry(30, "I have shown endurance, courage and self-love.", "Celebrate yourself: you have completed 30 days of deliberate change.", "Plan how you will keep your new routine in the long run."),
];

/// The full program, day 1 first.
pub fn program() -> &'static [MotivationDay] {
    &PROGRAM
}

/// Content for program day `day` (1-based).
pub fn day(day: u8) -> Result<&'static MotivationDay, CoreError> {
    if !(1..=PROGRAM_LENGTH_DAYS).contains(&day) {
        return Err(CoreError::Validation(format!(
            "Program day must be between 1 and {PROGRAM_LENGTH_DAYS}, got {day}"
        )));
    }
    Ok(&PROGRAM[usize::from(day - 1)])
}

/// Program day for a calendar date: `((day_of_year - 1) % 30) + 1`.
pub fn day_for_date(date: NaiveDate) -> u8 {
    let offset = (date.ordinal0() % u32::from(PROGRAM_LENGTH_DAYS)) as u8;
    offset + 1
}

/// The day after `day`, wrapping from the last day back to day 1.
pub fn next_day(day: u8) -> u8 {
    if day < PROGRAM_LENGTH_DAYS {
        day + 1
    } else {
        1
    }
}

/// The day before `day`, wrapping from day 1 to the last day.
pub fn previous_day(day: u8) -> u8 {
    if day > 1 {
        day - 1
    } else {
        PROGRAM_LENGTH_DAYS
    }
}
